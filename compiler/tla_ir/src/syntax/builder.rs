//! Incremental construction of a [`SyntaxTree`].
//!
//! The parser opens a node, emits its children, then closes it with the
//! final span. Parent links are recorded when a node is opened, so the
//! tree is complete the moment the last node is closed.

use super::{NodeFlags, NodeId, NodeKind, SyntaxTree};
use crate::{Name, Span};

/// Builder for [`SyntaxTree`].
#[derive(Default)]
pub struct TreeBuilder {
    kinds: Vec<NodeKind>,
    spans: Vec<Span>,
    names: Vec<Name>,
    flags: Vec<NodeFlags>,
    parents: Vec<NodeId>,
    children: Vec<Vec<NodeId>>,
    /// Nodes opened but not yet finished, innermost last.
    open: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate based on source length (~1 node per 8 bytes).
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 8;
        TreeBuilder {
            kinds: Vec::with_capacity(estimated),
            spans: Vec::with_capacity(estimated),
            names: Vec::with_capacity(estimated),
            flags: Vec::with_capacity(estimated),
            parents: Vec::with_capacity(estimated),
            children: Vec::with_capacity(estimated),
            open: Vec::new(),
        }
    }

    /// Open a node as a child of the innermost open node.
    pub fn start(&mut self, kind: NodeKind, start: u32) -> NodeId {
        let id = NodeId::new(to_u32(self.kinds.len()));
        let parent = self.open.last().copied().unwrap_or(NodeId::NONE);
        if parent.is_some() {
            self.children[parent.index()].push(id);
        }
        self.kinds.push(kind);
        self.spans.push(Span::point(start));
        self.names.push(Name::EMPTY);
        self.flags.push(NodeFlags::empty());
        self.parents.push(parent);
        self.children.push(Vec::new());
        self.open.push(id);
        id
    }

    /// Close the innermost open node, which must be `id`.
    ///
    /// The span is widened to cover every child.
    pub fn finish(&mut self, id: NodeId, end: u32) {
        debug_assert_eq!(self.open.last().copied(), Some(id), "unbalanced finish");
        self.open.pop();
        let children_end = self.children[id.index()]
            .iter()
            .map(|c| self.spans[c.index()].end)
            .max()
            .unwrap_or(0);
        let span = &mut self.spans[id.index()];
        span.end = end.max(span.start).max(children_end);
    }

    /// Add a childless node under the innermost open node.
    pub fn leaf(&mut self, kind: NodeKind, name: Name, span: Span) -> NodeId {
        let id = self.start(kind, span.start);
        self.names[id.index()] = name;
        self.finish(id, span.end);
        id
    }

    pub fn set_name(&mut self, id: NodeId, name: Name) {
        self.names[id.index()] = name;
    }

    pub fn set_kind(&mut self, id: NodeId, kind: NodeKind) {
        self.kinds[id.index()] = kind;
    }

    pub fn add_flags(&mut self, id: NodeId, flags: NodeFlags) {
        self.flags[id.index()] |= flags;
    }

    /// Kind of a node that has already been opened.
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.kinds[id.index()]
    }

    /// Number of nodes opened so far.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Depth of the open-node stack.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Freeze the builder into a tree.
    ///
    /// Nodes left open (the parser gave up mid-construct) are closed at the
    /// furthest end of their children. An empty builder yields a bare
    /// `Module` root without a name.
    pub fn build(mut self) -> SyntaxTree {
        if self.kinds.is_empty() {
            let root = self.start(NodeKind::Module, 0);
            self.finish(root, 0);
        }

        while let Some(id) = self.open.pop() {
            let end = self.children[id.index()]
                .iter()
                .map(|c| self.spans[c.index()].end)
                .max()
                .unwrap_or(self.spans[id.index()].start);
            let span = &mut self.spans[id.index()];
            span.end = span.end.max(end);
        }

        let mut child_list = Vec::with_capacity(self.kinds.len());
        let mut child_ranges = Vec::with_capacity(self.kinds.len());
        for kids in &self.children {
            let start = to_u32(child_list.len());
            child_list.extend_from_slice(kids);
            child_ranges.push((start, to_u32(kids.len())));
        }

        SyntaxTree::from_parts(
            self.kinds,
            self.spans,
            self.names,
            self.flags,
            self.parents,
            child_ranges,
            child_list,
        )
    }
}

#[inline]
fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic!("syntax tree exceeds u32::MAX nodes"))
}
