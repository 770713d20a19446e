use super::{source, SOURCES};
use pretty_assertions::assert_eq;
use tla_ir::StringInterner;
use tla_resolve::STANDARD_MODULES;

#[test]
fn test_every_standard_module_is_embedded() {
    let names: Vec<&str> = SOURCES.iter().map(|&(name, _)| name).collect();
    assert_eq!(names, STANDARD_MODULES.to_vec());
}

#[test]
fn test_embedded_modules_parse_cleanly() {
    let interner = StringInterner::new();
    for (name, text) in SOURCES {
        let output = tla_parse::parse(text, &interner);
        assert!(output.errors.is_empty(), "{name}: {:?}", output.errors);
        let header = output.tree.module_name().map(|n| interner.lookup(n));
        assert_eq!(header, Some(name));
    }
}

#[test]
fn test_source_lookup() {
    assert!(source("Naturals").is_some_and(|text| text.contains("Nat ==")));
    assert_eq!(source("Nope"), None);
}
