//! Loading TLA+ projects.
//!
//! A project is a set of source directories plus the twelve standard
//! modules. Each directory is a search-path root: its modules see one
//! another and the standard modules, never the modules of another root.
//!
//! ```text
//! ProjectConfig ──▶ ProjectBuilder::load_dir ──▶ rayon parse ──▶ Project
//!                                                                  │
//!                               Project::replace_source ◀──────────┤
//!                                                                  ▼
//!                                                   Resolver<'_, ModuleSet>
//! ```

mod config;
mod error;
mod project;
mod source;
pub mod stdlib;

pub use config::{ProjectConfig, PATH_VAR};
pub use error::LoadError;
pub use project::{Project, ProjectBuilder};
pub use source::SourceFile;
