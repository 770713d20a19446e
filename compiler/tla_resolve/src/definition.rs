//! Resolution endpoints: declarations and the references that name them.

use crate::search_path::ModuleId;
use smallvec::SmallVec;
use tla_ir::{DeclKind, Name, NodeId, NodeKind, Span, SyntaxTree};

/// A declared name: the target of a resolved reference.
///
/// Identified by its declaring identifier node; the remaining fields are
/// copied out of the tree for convenience.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Definition {
    pub module: ModuleId,
    /// The `Decl` node.
    pub node: NodeId,
    pub name: Name,
    pub kind: DeclKind,
    /// Span of the declaring identifier.
    pub declared_at: Span,
}

impl Definition {
    /// Build from a declaring identifier; `None` if `node` is not one.
    pub fn from_decl(tree: &SyntaxTree, module: ModuleId, node: NodeId) -> Option<Self> {
        let kind = tree.decl_kind(node)?;
        Some(Definition {
            module,
            node,
            name: tree.name(node),
            kind,
            declared_at: tree.span(node),
        })
    }

    /// The node owning the declaration: the definition, binder list,
    /// parameter list or declaration unit.
    pub fn owner(&self, tree: &SyntaxTree) -> Option<NodeId> {
        tree.parent(self.node)
    }
}

/// An identifier use: an `Ident` node, or one `Qualifier` segment of a
/// qualified name.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Reference {
    pub module: ModuleId,
    pub node: NodeId,
}

impl Reference {
    /// `Some` if `node` is a referencing occurrence.
    pub fn new(tree: &SyntaxTree, module: ModuleId, node: NodeId) -> Option<Self> {
        matches!(tree.kind(node), NodeKind::Ident | NodeKind::Qualifier)
            .then_some(Reference { module, node })
    }

    pub fn name(&self, tree: &SyntaxTree) -> Name {
        tree.name(self.node)
    }

    pub fn span(&self, tree: &SyntaxTree) -> Span {
        tree.span(self.node)
    }

    /// Qualifier segments that precede this reference.
    ///
    /// For `P!Q!Op` these are `[P, Q]` at `Op`, `[P]` at `Q` and `[]` at `P`.
    pub fn qualifiers(&self, tree: &SyntaxTree) -> SmallVec<[Name; 2]> {
        let (ident, stop) = match tree.kind(self.node) {
            NodeKind::Qualifier => match tree.parent(self.node) {
                Some(parent) => (parent, Some(self.node)),
                None => return SmallVec::new(),
            },
            _ => (self.node, None),
        };
        tree.children(ident)
            .iter()
            .copied()
            .filter(|&c| tree.kind(c) == NodeKind::Qualifier)
            .take_while(|&c| Some(c) != stop)
            .map(|c| tree.name(c))
            .collect()
    }

    /// The `Ident` node the reference belongs to; scope lookups start here.
    pub fn site(&self, tree: &SyntaxTree) -> NodeId {
        match tree.kind(self.node) {
            NodeKind::Qualifier => tree.parent(self.node).unwrap_or(self.node),
            _ => self.node,
        }
    }
}
