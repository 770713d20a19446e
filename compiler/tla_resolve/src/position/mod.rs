//! Declaration order.
//!
//! A definition can only be used after it is complete: a use that sits
//! before the end of the defining unit is a forward reference. Offsets are
//! compared within one module only.
//!
//! Two exemptions:
//! - a function definition `f[x \in S] == ...` may use `f` in its own body
//! - a name announced by `RECURSIVE` in the same scope may be used anywhere
//!   in that scope

use tla_ir::{DeclKind, Name, NodeId, NodeKind, SyntaxTree};

/// Whether a use at `use_offset` comes before `decl` is complete.
///
/// `decl` is a declaring identifier from the same tree as the use.
pub fn is_forward_reference(tree: &SyntaxTree, use_offset: u32, decl: NodeId) -> bool {
    let owner = tree.parent(decl).unwrap_or(decl);
    let extent = tree.span(owner);
    if use_offset >= extent.end {
        return false;
    }
    // f[x \in S] == ... f[x - 1] ...
    let self_recursive = tree.decl_kind(decl) == Some(DeclKind::Function)
        && tree.kind(owner) == NodeKind::FunctionDef
        && extent.contains(use_offset);
    !self_recursive
}

/// Whether `name` appears in a `RECURSIVE` declaration directly inside
/// `scope` (the module root or a LET).
pub fn is_declared_recursive(tree: &SyntaxTree, scope: NodeId, name: Name) -> bool {
    tree.children(scope)
        .iter()
        .filter(|&&c| tree.kind(c) == NodeKind::Recursive)
        .flat_map(|&c| tree.children(c))
        .any(|&ident| tree.name(ident) == name)
}

/// Whether `decl`, declared directly in `scope`, is visible at `use_offset`.
pub fn is_visible_at(tree: &SyntaxTree, scope: NodeId, decl: NodeId, use_offset: u32) -> bool {
    !is_forward_reference(tree, use_offset, decl)
        || is_declared_recursive(tree, scope, tree.name(decl))
}

#[cfg(test)]
mod tests;
