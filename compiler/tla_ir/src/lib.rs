//! TLA IR - shared data structures for the TLA+ reference engine.
//!
//! - Spans for source locations
//! - Names for interned identifiers
//! - The arena syntax tree produced by `tla_parse` and walked by
//!   `tla_resolve`
//! - Line/column conversion for editor positions
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`, compared in O(1)
//! - **Flatten Everything**: nodes are `NodeId(u32)` handles into one arena
//!   per module, with parent back-references instead of pointers
//! - **Immutable Snapshots**: a built [`SyntaxTree`] never changes; a
//!   re-parse produces a new one

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod line_index;
mod name;
mod span;
pub mod syntax;

pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use line_index::LineIndex;
pub use name::Name;
pub use span::{Span, SpanError};
pub use syntax::{DeclKind, NodeFlags, NodeId, NodeKind, SyntaxTree, TreeBuilder};
