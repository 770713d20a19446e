use super::{is_declared_recursive, is_forward_reference, is_visible_at};
use crate::testing::Parsed;
use tla_ir::{DeclKind, NodeKind};

#[test]
fn test_earlier_definition_is_not_forward() {
    let p = Parsed::new("Foo == 1\nBar == Foo");
    let foo = p.decl(DeclKind::Operator, "Foo", 0);
    let use_site = p.offset(p.ident("Foo", 0));
    assert!(!is_forward_reference(&p.tree, use_site, foo));
}

#[test]
fn test_later_definition_is_forward() {
    let p = Parsed::new("Bar == Foo\nFoo == 1");
    let foo = p.decl(DeclKind::Operator, "Foo", 0);
    let use_site = p.offset(p.ident("Foo", 0));
    assert!(is_forward_reference(&p.tree, use_site, foo));
}

#[test]
fn test_operator_body_cannot_see_itself() {
    let p = Parsed::new("Foo == Foo + 1");
    let foo = p.decl(DeclKind::Operator, "Foo", 0);
    let use_site = p.offset(p.ident("Foo", 0));
    assert!(is_forward_reference(&p.tree, use_site, foo));
}

#[test]
fn test_function_body_sees_itself() {
    let p = Parsed::new("fact[n \\in Nat] == IF n = 0 THEN 1 ELSE n * fact[n - 1]");
    let fact = p.decl(DeclKind::Function, "fact", 0);
    let use_site = p.offset(p.ident("fact", 0));
    assert!(!is_forward_reference(&p.tree, use_site, fact));
}

#[test]
fn test_function_used_before_definition_is_forward() {
    let p = Parsed::new("Use == f[1]\nf[x \\in Nat] == x");
    let f = p.decl(DeclKind::Function, "f", 0);
    let use_site = p.offset(p.ident("f", 0));
    assert!(is_forward_reference(&p.tree, use_site, f));
}

#[test]
fn test_recursive_declaration_exempts() {
    let p = Parsed::new("RECURSIVE Sum(_)\nSum(s) == IF s = {} THEN 0 ELSE Sum(s)");
    let root = p.tree.root();
    let sum = p.decl(DeclKind::Operator, "Sum", 0);
    let name = p.tree.name(sum);
    assert!(is_declared_recursive(&p.tree, root, name));

    let recursive_use = p.offset(p.ident("Sum", 1));
    assert!(is_forward_reference(&p.tree, recursive_use, sum));
    assert!(is_visible_at(&p.tree, root, sum, recursive_use));
}

#[test]
fn test_recursive_is_scoped_to_its_let() {
    let p = Parsed::new("Op == LET RECURSIVE F(_)\n          F(n) == F(n)\n      IN F(1)\nG == 1");
    let root = p.tree.root();
    let let_node = p.first(NodeKind::Let);
    let f = p.decl(DeclKind::Operator, "F", 0);
    let name = p.tree.name(f);
    assert!(is_declared_recursive(&p.tree, let_node, name));
    assert!(!is_declared_recursive(&p.tree, root, name));
}

#[test]
fn test_variables_follow_declaration_order() {
    let p = Parsed::new("Init == x = 0\nVARIABLE x\nNext == x' = x");
    let x = p.decl(DeclKind::Variable, "x", 0);
    assert!(is_forward_reference(&p.tree, p.offset(p.ident("x", 0)), x));
    assert!(!is_forward_reference(&p.tree, p.offset(p.ident("x", 1)), x));
}
