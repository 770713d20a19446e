use super::{module, parse_ok};
use pretty_assertions::assert_eq;
use tla_ir::{DeclKind, NodeFlags, NodeKind};

#[test]
fn test_header_and_declarations() {
    let p = parse_ok(&module(
        "EXTENDS Naturals, Sequences\nVARIABLES x, y\nCONSTANT N, Op(_, _)",
    ));
    let tree = p.tree();

    assert_eq!(tree.module_name(), p.interner.get("M"));
    let extends = p.of_kind(NodeKind::Extends);
    assert_eq!(extends.len(), 1);
    let refs: Vec<&str> = tree
        .children(extends[0])
        .iter()
        .map(|&c| p.interner.lookup(tree.name(c)))
        .collect();
    assert_eq!(refs, vec!["Naturals", "Sequences"]);

    p.find(NodeKind::Decl(DeclKind::Variable), "x");
    p.find(NodeKind::Decl(DeclKind::Variable), "y");
    p.find(NodeKind::Decl(DeclKind::Constant), "N");
    p.find(NodeKind::Decl(DeclKind::Constant), "Op");
}

#[test]
fn test_let_tree_shape() {
    let p = parse_ok("---- MODULE M ----\nFoo == LET x == 1 IN x\n====");
    assert_eq!(
        p.dump(),
        "\
Module `M` @0..46
  OperatorDef @19..41
    Decl(Operator) `Foo` @19..22
    Expr @26..41
      Let @26..41
        OperatorDef @30..36
          Decl(Operator) `x` @30..31
          Expr @35..36
        Expr @40..41
          Ident `x` @40..41
"
    );
}

#[test]
fn test_operator_with_params_and_local() {
    let p = parse_ok(&module("LOCAL Op(a, F(_)) == F(a)"));
    let tree = p.tree();
    let decl = p.find(NodeKind::Decl(DeclKind::Operator), "Op");
    let def = tree.parent(decl).unwrap_or_else(|| panic!("decl without parent"));

    assert_eq!(tree.kind(def), NodeKind::OperatorDef);
    assert!(tree.is_local(def));
    let params = p.of_kind(NodeKind::Params);
    assert_eq!(tree.children(params[0]).len(), 2);
    p.find(NodeKind::Decl(DeclKind::Parameter), "F");
    assert!(tree.is_within(p.find(NodeKind::Ident, "a"), def));
}

#[test]
fn test_function_definition() {
    let p = parse_ok(&module(
        "fact[n \\in Nat] == IF n = 0 THEN 1 ELSE n * fact[n - 1]",
    ));
    let tree = p.tree();
    let decl = p.find(NodeKind::Decl(DeclKind::Function), "fact");
    let def = tree.parent(decl).unwrap_or_else(|| panic!("decl without parent"));

    assert_eq!(tree.kind(def), NodeKind::FunctionDef);
    let bound = tree.child_of_kind(def, NodeKind::Bound);
    assert!(bound.is_some());
    let n = p.find(NodeKind::Decl(DeclKind::BoundName), "n");
    assert_eq!(tree.parent(n), bound);
    assert_eq!(p.find_all(NodeKind::Ident, "fact").len(), 1);
    assert!(p.find_all(NodeKind::Ident, "n").len() >= 3);
}

#[test]
fn test_named_instance() {
    let p = parse_ok(&module("P(c) == INSTANCE Inner WITH x <- c, y <- 2"));
    let tree = p.tree();
    let decl = p.find(NodeKind::Decl(DeclKind::ModuleInstance), "P");
    let def = tree.parent(decl).unwrap_or_else(|| panic!("decl without parent"));

    assert_eq!(tree.kind(def), NodeKind::ModuleDef);
    let instance = tree
        .child_of_kind(def, NodeKind::Instance)
        .unwrap_or_else(|| panic!("no instance"));
    let target = tree
        .child_of_kind(instance, NodeKind::ModuleRef)
        .unwrap_or_else(|| panic!("no target"));
    assert_eq!(p.interner.lookup(tree.name(target)), "Inner");
    assert_eq!(p.of_kind(NodeKind::Substitution).len(), 2);
    assert!(tree.is_within(p.find(NodeKind::Ident, "c"), instance));
}

#[test]
fn test_unnamed_instances() {
    let p = parse_ok(&module("INSTANCE A\nLOCAL INSTANCE B"));
    let tree = p.tree();
    let instances = p.of_kind(NodeKind::Instance);

    assert_eq!(instances.len(), 2);
    assert!(!tree.is_local(instances[0]));
    assert!(tree.flags(instances[1]).contains(NodeFlags::LOCAL));
    assert_eq!(tree.parent(instances[1]), Some(tree.root()));
}

#[test]
fn test_consecutive_definitions_split() {
    let p = parse_ok(&module("Init == x = 0\nNext == x' = x + 1\nSpec == Init /\\ [][Next]_x"));
    let tree = p.tree();
    let defs = p.of_kind(NodeKind::OperatorDef);

    assert_eq!(defs.len(), 3);
    let init = tree.span(defs[0]);
    assert_eq!(init.end, init.start + 13);
    p.find(NodeKind::Ident, "Next");
    assert_eq!(p.find_all(NodeKind::Ident, "x").len(), 4);
}

#[test]
fn test_infix_and_prefix_definitions() {
    let p = parse_ok(&module("a ++ b == a\n-. c == c"));
    let tree = p.tree();
    let plus = p.find(NodeKind::Decl(DeclKind::Operator), "++");
    let def = tree.parent(plus).unwrap_or_else(|| panic!("decl without parent"));

    let params = tree
        .child_of_kind(def, NodeKind::Params)
        .unwrap_or_else(|| panic!("no params"));
    assert_eq!(tree.children(params).len(), 2);
    p.find(NodeKind::Decl(DeclKind::Operator), "-.");
    p.find(NodeKind::Decl(DeclKind::Parameter), "c");
}

#[test]
fn test_recursive_declaration() {
    let p = parse_ok(&module(
        "RECURSIVE Sum(_)\nSum(s) == IF s = {} THEN 0 ELSE Sum(s)",
    ));
    let tree = p.tree();
    let recursive = p.of_kind(NodeKind::Recursive);

    assert_eq!(recursive.len(), 1);
    let announced = tree.children(recursive[0]);
    assert_eq!(announced.len(), 1);
    assert_eq!(tree.kind(announced[0]), NodeKind::Ident);
    assert_eq!(p.find_all(NodeKind::Ident, "Sum").len(), 2);
}

#[test]
fn test_named_theorem_and_assumption() {
    let p = parse_ok(&module("ASSUME NPos == N > 0\nTHEOREM Safe == Spec => []Inv"));
    p.find(NodeKind::Decl(DeclKind::Operator), "NPos");
    p.find(NodeKind::Decl(DeclKind::Operator), "Safe");
    assert_eq!(p.of_kind(NodeKind::Assume).len(), 1);
    assert_eq!(p.of_kind(NodeKind::Theorem).len(), 1);
    p.find(NodeKind::Ident, "Inv");
}

#[test]
fn test_text_outside_module_is_ignored() {
    let source = "Some prose (* here *)\n---- MODULE M ----\nFoo == 1\n====\ntrailing words";
    let p = parse_ok(source);
    assert_eq!(p.of_kind(NodeKind::OperatorDef).len(), 1);
    assert!(p.find_all(NodeKind::Ident, "trailing").is_empty());
    let root = p.tree().root();
    assert_eq!(p.tree().span(root).end as usize, source.len());
}
