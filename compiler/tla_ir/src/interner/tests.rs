use super::*;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let foo = interner.intern("Foo");
    let bar = interner.intern("Bar");
    let foo2 = interner.intern("Foo");

    assert_eq!(foo, foo2);
    assert_ne!(foo, bar);
    assert_eq!(interner.lookup(foo), "Foo");
    assert_eq!(interner.lookup(bar), "Bar");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_standard_modules_pre_interned() {
    let interner = StringInterner::new();
    assert!(interner.get("Naturals").is_some());
    assert!(interner.get("TLCExt").is_some());
    assert!(!interner.is_empty());
}

#[test]
fn test_get_does_not_intern() {
    let interner = StringInterner::new();
    let before = interner.len();
    assert_eq!(interner.get("NeverSeenBefore"), None);
    assert_eq!(interner.len(), before);
}

#[test]
fn test_case_sensitive() {
    let interner = StringInterner::new();
    assert_ne!(interner.intern("TLC"), interner.intern("tlc"));
}

#[test]
fn test_shared_interner_across_threads() {
    let interner = SharedInterner::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let interner = interner.clone();
            std::thread::spawn(move || interner.intern("Shared"))
        })
        .collect();

    let names: Vec<Name> = handles
        .into_iter()
        .map(|h| h.join().unwrap_or(Name::EMPTY))
        .collect();
    assert!(names.iter().all(|&n| n == names[0]));
    assert_eq!(interner.lookup(names[0]), "Shared");
}
