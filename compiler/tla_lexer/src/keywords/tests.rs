use super::*;

#[test]
fn test_module_structure_keywords() {
    assert_eq!(lookup("MODULE"), Some(Keyword::Module));
    assert_eq!(lookup("EXTENDS"), Some(Keyword::Extends));
    assert_eq!(lookup("INSTANCE"), Some(Keyword::Instance));
    assert_eq!(lookup("LOCAL"), Some(Keyword::Local));
    assert_eq!(lookup("RECURSIVE"), Some(Keyword::Recursive));
}

#[test]
fn test_synonyms_share_variant() {
    assert_eq!(lookup("VARIABLE"), lookup("VARIABLES"));
    assert_eq!(lookup("CONSTANT"), lookup("CONSTANTS"));
    for word in ["THEOREM", "LEMMA", "COROLLARY", "PROPOSITION"] {
        assert_eq!(lookup(word), Some(Keyword::Theorem), "{word}");
    }
    for word in ["ASSUME", "ASSUMPTION", "AXIOM"] {
        assert_eq!(lookup(word), Some(Keyword::Assume), "{word}");
    }
}

#[test]
fn test_identifiers_are_not_keywords() {
    assert_eq!(lookup("Module"), None);
    assert_eq!(lookup("let"), None);
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("INSTANCES"), None);
    assert_eq!(lookup("Init"), None);
}

#[test]
fn test_fairness_prefix() {
    assert_eq!(fairness_prefix("WF_vars"), Some("vars"));
    assert_eq!(fairness_prefix("SF_<<x>>"), Some("<<x>>"));
    assert_eq!(fairness_prefix("WF_"), None);
    assert_eq!(fairness_prefix("WFx"), None);
}
