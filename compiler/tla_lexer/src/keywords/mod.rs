//! Reserved-word lookup.
//!
//! Length-bucketed: every TLA+ reserved word is 2 to 11 upper-case ASCII
//! letters, so anything else is rejected before string comparison.

use crate::Keyword;

#[inline]
pub(crate) fn lookup(text: &str) -> Option<Keyword> {
    let len = text.len();
    if !(2..=11).contains(&len) || !text.as_bytes()[0].is_ascii_uppercase() {
        return None;
    }

    match len {
        2 => match text {
            "IN" => Some(Keyword::In),
            "IF" => Some(Keyword::If),
            "BY" => Some(Keyword::Proof),
            _ => None,
        },
        3 => match text {
            "LET" => Some(Keyword::Let),
            "DEF" | "NEW" | "QED" | "USE" => Some(Keyword::Proof),
            _ => None,
        },
        4 => match text {
            "WITH" => Some(Keyword::With),
            "THEN" => Some(Keyword::Then),
            "ELSE" => Some(Keyword::Else),
            "CASE" => Some(Keyword::Case),
            "TRUE" => Some(Keyword::Builtin),
            "DEFS" | "HAVE" | "HIDE" | "PICK" | "ONLY" | "TAKE" => Some(Keyword::Proof),
            _ => None,
        },
        5 => match text {
            "LOCAL" => Some(Keyword::Local),
            "LEMMA" => Some(Keyword::Theorem),
            "AXIOM" => Some(Keyword::Assume),
            "OTHER" => Some(Keyword::Other),
            "UNION" => Some(Keyword::Union),
            "FALSE" => Some(Keyword::Builtin),
            "PROOF" | "PROVE" | "STATE" => Some(Keyword::Proof),
            _ => None,
        },
        6 => match text {
            "MODULE" => Some(Keyword::Module),
            "LAMBDA" => Some(Keyword::Lambda),
            "CHOOSE" => Some(Keyword::Choose),
            "ASSUME" => Some(Keyword::Assume),
            "EXCEPT" => Some(Keyword::Except),
            "DOMAIN" => Some(Keyword::Domain),
            "SUBSET" => Some(Keyword::Subset),
            "STRING" => Some(Keyword::Builtin),
            "ACTION" | "DEFINE" => Some(Keyword::Proof),
            _ => None,
        },
        7 => match text {
            "EXTENDS" => Some(Keyword::Extends),
            "THEOREM" => Some(Keyword::Theorem),
            "ENABLED" => Some(Keyword::Enabled),
            "BOOLEAN" => Some(Keyword::Builtin),
            "OBVIOUS" | "OMITTED" | "WITNESS" => Some(Keyword::Proof),
            _ => None,
        },
        8 => match text {
            "VARIABLE" => Some(Keyword::Variable),
            "CONSTANT" => Some(Keyword::Constant),
            "INSTANCE" => Some(Keyword::Instance),
            "SUFFICES" | "TEMPORAL" => Some(Keyword::Proof),
            _ => None,
        },
        9 => match text {
            "VARIABLES" => Some(Keyword::Variable),
            "CONSTANTS" => Some(Keyword::Constant),
            "RECURSIVE" => Some(Keyword::Recursive),
            "UNCHANGED" => Some(Keyword::Unchanged),
            "COROLLARY" => Some(Keyword::Theorem),
            _ => None,
        },
        10 => match text {
            "ASSUMPTION" => Some(Keyword::Assume),
            _ => None,
        },
        11 => match text {
            "PROPOSITION" => Some(Keyword::Theorem),
            _ => None,
        },
        _ => None,
    }
}

/// Split a `WF_vars` / `SF_vars` identifier into prefix and subscript.
#[inline]
pub(crate) fn fairness_prefix(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("WF_").or_else(|| text.strip_prefix("SF_"))?;
    (!rest.is_empty()).then_some(rest)
}

#[cfg(test)]
mod tests;
