//! Immutable syntax tree with parent links.

use super::{DeclKind, NodeFlags, NodeId, NodeKind};
use crate::{Name, Span, StringLookup};
use std::fmt::Write as _;

/// Immutable arena of syntax nodes.
///
/// Struct-of-arrays layout: `kinds`, `spans`, `names`, `flags` and
/// `parents` are parallel columns indexed by [`NodeId`]. Children of a node
/// are a contiguous slice of `child_list`. The root is always `NodeId(0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxTree {
    kinds: Vec<NodeKind>,
    spans: Vec<Span>,
    names: Vec<Name>,
    flags: Vec<NodeFlags>,
    parents: Vec<NodeId>,
    child_ranges: Vec<(u32, u32)>,
    child_list: Vec<NodeId>,
}

impl SyntaxTree {
    pub(super) fn from_parts(
        kinds: Vec<NodeKind>,
        spans: Vec<Span>,
        names: Vec<Name>,
        flags: Vec<NodeFlags>,
        parents: Vec<NodeId>,
        child_ranges: Vec<(u32, u32)>,
        child_list: Vec<NodeId>,
    ) -> Self {
        SyntaxTree {
            kinds,
            spans,
            names,
            flags,
            parents,
            child_ranges,
            child_list,
        }
    }

    /// A module with a header and nothing else.
    ///
    /// Stands in for modules that are known by name (standard modules)
    /// before their source has been loaded.
    pub fn stub_module(name: Name) -> Self {
        let mut builder = super::TreeBuilder::new();
        let root = builder.start(NodeKind::Module, 0);
        builder.set_name(root, name);
        builder.add_flags(root, NodeFlags::SYNTHETIC);
        builder.finish(root, 0);
        builder.build()
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.kinds[id.index()]
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.spans[id.index()]
    }

    /// Identifier text of the node, [`Name::EMPTY`] if it has none.
    #[inline]
    pub fn name(&self, id: NodeId) -> Name {
        self.names[id.index()]
    }

    #[inline]
    pub fn flags(&self, id: NodeId) -> NodeFlags {
        self.flags[id.index()]
    }

    #[inline]
    pub fn is_local(&self, id: NodeId) -> bool {
        self.flags(id).contains(NodeFlags::LOCAL)
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parents[id.index()];
        parent.is_some().then_some(parent)
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        let (start, len) = self.child_ranges[id.index()];
        &self.child_list[start as usize..(start + len) as usize]
    }

    /// First child of the given kind.
    pub fn child_of_kind(&self, id: NodeId, kind: NodeKind) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&c| self.kind(c) == kind)
    }

    /// The declaring identifier of a definition-like node.
    pub fn decl_of(&self, id: NodeId) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&c| matches!(self.kind(c), NodeKind::Decl(_)))
    }

    /// Declaration kind, if `id` is a declaring identifier.
    pub fn decl_kind(&self, id: NodeId) -> Option<DeclKind> {
        match self.kind(id) {
            NodeKind::Decl(kind) => Some(kind),
            _ => None,
        }
    }

    /// Name from the module header; `None` if the header is missing.
    pub fn module_name(&self) -> Option<Name> {
        let name = self.name(self.root());
        (!name.is_empty()).then_some(name)
    }

    /// Proper ancestors of `id`, innermost first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// `id` and all nodes below it, in source (pre-)order.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![id],
        }
    }

    /// Check whether `node` is `ancestor` or lies below it.
    pub fn is_within(&self, node: NodeId, ancestor: NodeId) -> bool {
        node == ancestor || self.ancestors(node).any(|a| a == ancestor)
    }

    /// Innermost node whose span touches `offset`.
    ///
    /// When two siblings touch the offset (a caret between `a` and `+`),
    /// the first one wins. Falls back to the root.
    pub fn node_at(&self, offset: u32) -> NodeId {
        let mut current = self.root();
        'descend: loop {
            for &child in self.children(current) {
                if self.span(child).touches(offset) {
                    current = child;
                    continue 'descend;
                }
            }
            return current;
        }
    }

    /// Render the tree as an indented outline (for debugging and tests).
    pub fn dump(&self, interner: &impl StringLookup) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let _ = write!(out, "{:indent$}{:?}", "", self.kind(id), indent = depth * 2);
            let name = self.name(id);
            if !name.is_empty() {
                let _ = write!(out, " `{}`", interner.lookup(name));
            }
            let flags = self.flags(id);
            if flags.contains(NodeFlags::LOCAL) {
                out.push_str(" LOCAL");
            }
            let _ = writeln!(out, " @{}", self.span(id));
            for &child in self.children(id).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }
}

/// Iterator over proper ancestors, innermost first.
pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(current).iter().rev().copied());
        Some(current)
    }
}
