#![allow(clippy::expect_used)]

use super::{rename_scope, Region};
use crate::search_path::ModuleId;
use crate::testing::Parsed;
use crate::Definition;
use pretty_assertions::assert_eq;
use tla_ir::{DeclKind, NodeKind, Span};

const MODULE: ModuleId = ModuleId::new(0);

fn region(p: &Parsed, kind: DeclKind, name: &str) -> Region {
    let decl = p.decl(kind, name, 0);
    let def = Definition::from_decl(&p.tree, MODULE, decl).expect("declaring identifier");
    rename_scope(&p.tree, &def)
}

fn subtree(p: &Parsed, node: tla_ir::NodeId) -> Region {
    Region::Subtree {
        module: MODULE,
        node,
        span: p.tree.span(node),
    }
}

#[test]
fn test_top_level_definitions_span_project() {
    let p = Parsed::new("VARIABLE x\nCONSTANT N\nFoo == 1\nf[i \\in Nat] == i\nTHEOREM T == TRUE");
    assert_eq!(region(&p, DeclKind::Operator, "Foo"), Region::WholeProject);
    assert_eq!(region(&p, DeclKind::Function, "f"), Region::WholeProject);
    assert_eq!(region(&p, DeclKind::Variable, "x"), Region::WholeProject);
    assert_eq!(region(&p, DeclKind::Constant, "N"), Region::WholeProject);
    assert_eq!(region(&p, DeclKind::Operator, "T"), Region::WholeProject);
}

#[test]
fn test_local_definition_confined_to_module() {
    let p = Parsed::new("LOCAL Foo == 1\nBar == Foo");
    assert_eq!(
        region(&p, DeclKind::Operator, "Foo"),
        subtree(&p, p.tree.root())
    );
}

#[test]
fn test_let_definition_confined_to_let() {
    let p = Parsed::new("Op == LET a == 1 IN a");
    let let_node = p.first(NodeKind::Let);
    assert_eq!(region(&p, DeclKind::Operator, "a"), subtree(&p, let_node));
}

#[test]
fn test_bound_name_confined_to_binder() {
    let p = Parsed::new("Op == \\A x \\in S : x");
    let quantifier = p.first(NodeKind::Quantifier);
    assert_eq!(region(&p, DeclKind::BoundName, "x"), subtree(&p, quantifier));
}

#[test]
fn test_parameter_confined_to_operator() {
    let p = Parsed::new("Op(a) == a");
    let op = p.first(NodeKind::OperatorDef);
    assert_eq!(region(&p, DeclKind::Parameter, "a"), subtree(&p, op));
}

#[test]
fn test_contains() {
    let module = ModuleId::new(1);
    let region = Region::Subtree {
        module,
        node: tla_ir::NodeId::new(3),
        span: Span::new(10, 20),
    };
    assert!(region.contains(module, Span::new(12, 14)));
    assert!(!region.contains(module, Span::new(18, 22)));
    assert!(!region.contains(ModuleId::new(2), Span::new(12, 14)));
    assert!(Region::WholeProject.contains(module, Span::new(0, 100)));
}
