#![allow(clippy::expect_used)]

#[macro_use]
mod common;

use common::Fixture;
use pretty_assertions::assert_eq;
use tla_resolve::{DeclKind, Outcome, Region, SearchPath};

#[test]
fn test_module_level_definition_spans_project() {
    let fx = fixture!("Extends_A.tla", "Extends_B.tla");
    let def = fx.resolve_at_caret().definition().expect("resolves");
    assert_eq!(fx.resolver().rename_scope(&def), Region::WholeProject);
}

#[test]
fn test_let_definition_is_confined_to_its_let() {
    let fx = Fixture::new(&[(
        "Main.tla",
        "---- MODULE Main ----\nOp == LET tmp == 1 IN t{caret}mp + tmp\nOther == 2\n====\n",
    )]);
    let (module, _) = fx.caret();
    let resolver = fx.resolver();
    let def = fx.resolve_at_caret().definition().expect("resolves");
    assert_eq!(def.kind, DeclKind::Operator);

    let region = resolver.rename_scope(&def);
    let Region::Subtree { module: owner, span, .. } = region else {
        panic!("expected a subtree, got {region:?}");
    };
    assert_eq!(owner, module);

    let tree = fx.set.tree(module);
    let other = tree
        .descendants(tree.root())
        .find(|&n| fx.text(tree.name(n)) == "Other")
        .expect("Other");
    assert!(!region.contains(module, tree.span(other)));
    assert!(region.contains(module, def.declared_at));
    assert!(span.contains_span(def.declared_at));

    let refs = resolver.find_references(&def).expect("not cancelled");
    assert_eq!(refs.len(), 2);
    assert!(refs.iter().all(|r| region.contains(r.module, r.span(tree))));
}

#[test]
fn test_bound_name_region_is_the_binder() {
    let fx = Fixture::new(&[(
        "Main.tla",
        "---- MODULE Main ----\nOp == \\A x \\in {} : x{caret} = x\n====\n",
    )]);
    let (module, offset) = fx.caret();
    let resolver = fx.resolver();
    let Outcome::Resolved(def) = resolver.definition_at(module, offset) else {
        panic!("bound name should resolve");
    };
    assert_eq!(def.kind, DeclKind::BoundName);
    let tree = fx.set.tree(module);
    let Region::Subtree { node, .. } = resolver.rename_scope(&def) else {
        panic!("expected a subtree");
    };
    assert_eq!(tree.kind(node), tla_ir::NodeKind::Quantifier);
}

#[test]
fn test_local_definition_is_confined_to_module() {
    let fx = Fixture::new(&[(
        "Main.tla",
        "---- MODULE Main ----\nLOCAL Helper == 1\nUse == Hel{caret}per\n====\n",
    )]);
    let def = fx.resolve_at_caret().definition().expect("resolves");
    let (module, _) = fx.caret();
    let tree = fx.set.tree(module);
    assert_eq!(
        fx.resolver().rename_scope(&def),
        Region::Subtree {
            module,
            node: tree.root(),
            span: tree.span(tree.root()),
        }
    );
}

#[test]
fn test_references_follow_extends_and_instances() {
    let fx = Fixture::new(&[
        ("Base.tla", "---- MODULE Base ----\nVal == 1\nSelf == Val\n====\n"),
        ("Ext.tla", "---- MODULE Ext ----\nEXTENDS Base\nA == Val\n====\n"),
        (
            "Inst.tla",
            "---- MODULE Inst ----\nB == INSTANCE Base\nC == B!Val\nINSTANCE Base\nD == Val\n====\n",
        ),
        ("Other.tla", "---- MODULE Other ----\nVal == 2\nE == Val\n====\n"),
    ]);
    let resolver = fx.resolver();
    let base = fx.modules[0];
    let tree = fx.set.tree(base);
    let decl = tree
        .descendants(tree.root())
        .find(|&n| tree.decl_kind(n).is_some() && fx.text(tree.name(n)) == "Val")
        .expect("Val");
    let def = tla_resolve::Definition::from_decl(tree, base, decl).expect("declaration");

    let mut modules: Vec<&str> = resolver
        .find_references(&def)
        .expect("not cancelled")
        .iter()
        .map(|r| fx.text(fx.set.module_name(r.module)))
        .collect();
    modules.sort_unstable();
    assert_eq!(modules, vec!["Base", "Ext", "Inst", "Inst"]);
}
