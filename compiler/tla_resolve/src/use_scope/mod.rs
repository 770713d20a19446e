//! Rename regions.
//!
//! A module-level, non-LOCAL definition can be referenced from any module
//! that imports it. Every other declaration is confined to the construct
//! two levels above its declaring identifier: the identifier's parent is
//! the definition, binder list or parameter list, and that node's parent
//! is the LET, binder, operator or module containing every use.

use crate::definition::Definition;
use crate::search_path::ModuleId;
use std::fmt;
use tla_ir::{NodeId, NodeKind, Span, SyntaxTree};

/// Where uses of a declaration can occur.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Region {
    WholeProject,
    Subtree {
        module: ModuleId,
        node: NodeId,
        span: Span,
    },
}

impl Region {
    /// Whether text at `span` in `module` lies inside the region.
    pub fn contains(&self, module: ModuleId, span: Span) -> bool {
        match *self {
            Region::WholeProject => true,
            Region::Subtree {
                module: owner,
                span: extent,
                ..
            } => owner == module && extent.contains_span(span),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::WholeProject => f.write_str("whole project"),
            Region::Subtree { module, span, .. } => write!(f, "{module:?} @{span}"),
        }
    }
}

/// The region within which `def` may be renamed.
///
/// `tree` is the syntax tree of `def.module`.
#[tracing::instrument(level = "debug", skip_all, fields(node = ?def.node))]
pub fn rename_scope(tree: &SyntaxTree, def: &Definition) -> Region {
    let Some(owner) = tree.parent(def.node) else {
        return Region::WholeProject;
    };
    let Some(container) = tree.parent(owner) else {
        return Region::WholeProject;
    };
    if tree.kind(container) == NodeKind::Module && !tree.is_local(owner) {
        return Region::WholeProject;
    }
    Region::Subtree {
        module: def.module,
        node: container,
        span: tree.span(container),
    }
}

#[cfg(test)]
mod tests;
