//! Scope and symbol resolution for TLA+ modules.
//!
//! Given syntax trees from `tla_parse` and a [`SearchPath`] that maps
//! module names to modules, the [`Resolver`] answers:
//!
//! - which declaration an identifier use binds to ([`Resolver::resolve`])
//! - which names are visible at a position
//!   ([`Resolver::completion_candidates`])
//! - where a declaration may be renamed ([`Resolver::rename_scope`],
//!   [`Resolver::find_references`])
//!
//! Queries are read-only over an immutable snapshot and can run
//! concurrently. Import graphs may be cyclic; every transitive traversal
//! keeps a visited set. Long queries poll a [`CancellationToken`].
//!
//! # Modules
//!
//! - `position`: declaration-order rule for forward references
//! - `scope`: LET, binder and parameter scopes
//! - `module_ctx`: top-level definitions, EXTENDS and INSTANCE edges
//! - `walk`: transitive export traversal
//! - `resolver`: lookup stages and completion
//! - `use_scope`: rename regions

mod cancel;
mod definition;
pub mod module_ctx;
pub mod position;
mod resolver;
pub mod scope;
mod search_path;
mod use_scope;
mod walk;

#[cfg(test)]
mod testing;

pub use cancel::{CancellationToken, Cancelled};
pub use definition::{Definition, Reference};
pub use module_ctx::{Instance, ModuleContext};
pub use resolver::{Candidate, CandidateKind, Outcome, Resolver};
pub use scope::ScopeNode;
pub use search_path::{DirId, ModuleId, ModuleSet, SearchPath, STANDARD_MODULES};
pub use tla_ir::DeclKind;
pub use use_scope::{rename_scope, Region};
pub use walk::ModuleWalk;
