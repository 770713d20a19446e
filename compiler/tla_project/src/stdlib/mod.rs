//! Embedded sources of the standard modules.
//!
//! Bodies are placeholders in the style of the model checker's own
//! standard library: only the names and their module structure matter for
//! resolution.

/// `(module name, source)` for every standard module, in search-path order.
pub const SOURCES: [(&str, &str); 12] = [
    ("Bags", include_str!("Bags.tla")),
    ("FiniteSets", include_str!("FiniteSets.tla")),
    ("Integers", include_str!("Integers.tla")),
    ("Json", include_str!("Json.tla")),
    ("Naturals", include_str!("Naturals.tla")),
    ("Randomization", include_str!("Randomization.tla")),
    ("Reals", include_str!("Reals.tla")),
    ("RealTime", include_str!("RealTime.tla")),
    ("Sequences", include_str!("Sequences.tla")),
    ("TLC", include_str!("TLC.tla")),
    ("TLCExt", include_str!("TLCExt.tla")),
    ("Toolbox", include_str!("Toolbox.tla")),
];

/// Embedded source of the standard module `name`.
pub fn source(name: &str) -> Option<&'static str> {
    SOURCES
        .iter()
        .find(|(module, _)| *module == name)
        .map(|&(_, text)| text)
}

#[cfg(test)]
mod tests;
