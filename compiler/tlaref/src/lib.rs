//! `tlaref`: query TLA+ name resolution from the command line.
//!
//! Commands load the directory of the given file (plus `--dir` and
//! `TLAREF_PATH` directories) into a project snapshot and answer one query
//! against it.

pub mod args;
pub mod commands;
mod logging;

pub use logging::init_tracing;
