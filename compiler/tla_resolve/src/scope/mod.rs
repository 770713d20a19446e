//! Lexical scopes.
//!
//! Scopes are not stored: a node produces one for a descendant depending
//! on which child the descendant sits under. Walking parent links from a
//! use site therefore yields its scope chain, innermost first, ending just
//! below the module root (module-level names belong to
//! [`ModuleContext`](crate::module_ctx::ModuleContext)).
//!
//! | Node | Declares | Visible from |
//! |------|----------|--------------|
//! | `Let` | its definitions | every child, subject to declaration order |
//! | binders, `FunctionDef` | names in `Bound` children | the body only |
//! | `OperatorDef`, `ModuleDef`, `Lambda` | names in `Params` | the body only |

use crate::position;
use tla_ir::{Name, NodeId, NodeKind, SyntaxTree};

/// A node acting as a scope for some descendant.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScopeNode {
    /// `LET defs IN body`
    Let(NodeId),
    /// Quantifier, CHOOSE, comprehension, function constructor or function
    /// definition.
    Binder(NodeId),
    /// Operator, module-instance or LAMBDA parameters.
    Parameters(NodeId),
}

impl ScopeNode {
    /// The scope `node` produces for a descendant under its child `via`.
    pub fn for_child(tree: &SyntaxTree, node: NodeId, via: NodeId) -> Option<ScopeNode> {
        let via_kind = tree.kind(via);
        match tree.kind(node) {
            NodeKind::Let => Some(ScopeNode::Let(node)),
            kind if kind.is_binder() => (via_kind != NodeKind::Bound
                && tree.child_of_kind(node, NodeKind::Bound).is_some())
            .then_some(ScopeNode::Binder(node)),
            NodeKind::OperatorDef | NodeKind::ModuleDef | NodeKind::Lambda => {
                (!matches!(via_kind, NodeKind::Params | NodeKind::Decl(_))
                    && tree.child_of_kind(node, NodeKind::Params).is_some())
                .then_some(ScopeNode::Parameters(node))
            }
            _ => None,
        }
    }

    pub fn node(self) -> NodeId {
        match self {
            ScopeNode::Let(node) | ScopeNode::Binder(node) | ScopeNode::Parameters(node) => node,
        }
    }

    /// Declaring identifiers visible from a use at `use_offset`, in scope
    /// order.
    ///
    /// LET scopes list operator definitions, then function definitions,
    /// then module instances, leaving out those not yet complete at the use.
    pub fn definitions<'t>(
        self,
        tree: &'t SyntaxTree,
        use_offset: u32,
    ) -> impl Iterator<Item = NodeId> + 't {
        const LET_GROUPS: &[NodeKind] = &[
            NodeKind::OperatorDef,
            NodeKind::FunctionDef,
            NodeKind::ModuleDef,
        ];
        let (node, groups): (NodeId, &'static [NodeKind]) = match self {
            ScopeNode::Let(node) => (node, LET_GROUPS),
            ScopeNode::Binder(node) => (node, &[NodeKind::Bound]),
            ScopeNode::Parameters(node) => (node, &[NodeKind::Params]),
        };
        let ordered = matches!(self, ScopeNode::Let(_));
        groups
            .iter()
            .flat_map(move |&group| {
                tree.children(node)
                    .iter()
                    .copied()
                    .filter(move |&c| tree.kind(c) == group)
            })
            .flat_map(move |holder| declared_in(tree, holder))
            .filter(move |&decl| !ordered || position::is_visible_at(tree, node, decl, use_offset))
    }

    /// The declaration of `name` in this scope, if visible at `use_offset`.
    pub fn find(self, tree: &SyntaxTree, name: Name, use_offset: u32) -> Option<NodeId> {
        self.definitions(tree, use_offset)
            .find(|&decl| tree.name(decl) == name)
    }
}

/// Declaring identifiers directly under `holder`.
fn declared_in(tree: &SyntaxTree, holder: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    tree.children(holder)
        .iter()
        .copied()
        .filter(|&c| matches!(tree.kind(c), NodeKind::Decl(_)))
}

/// Scopes enclosing `node`, innermost first.
pub fn scope_chain(tree: &SyntaxTree, node: NodeId) -> impl Iterator<Item = ScopeNode> + '_ {
    let mut via = node;
    tree.ancestors(node).filter_map(move |ancestor| {
        let scope = ScopeNode::for_child(tree, ancestor, via);
        via = ancestor;
        scope
    })
}

/// Visible definitions of the LET at `let_node` for a use at `use_offset`.
pub fn local_definitions(
    tree: &SyntaxTree,
    let_node: NodeId,
    use_offset: u32,
) -> impl Iterator<Item = NodeId> + '_ {
    ScopeNode::Let(let_node).definitions(tree, use_offset)
}

/// The innermost name bound by a binder or parameter list around
/// `reference` that matches it.
///
/// LET definitions are not considered; see [`local_definitions`].
pub fn find_local_definition(tree: &SyntaxTree, reference: NodeId) -> Option<NodeId> {
    let name = tree.name(reference);
    let use_offset = tree.span(reference).start;
    scope_chain(tree, reference)
        .filter(|scope| !matches!(scope, ScopeNode::Let(_)))
        .find_map(|scope| scope.find(tree, name, use_offset))
}
