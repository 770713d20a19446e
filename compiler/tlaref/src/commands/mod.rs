//! Query commands.
//!
//! Each command loads a project around the given file, answers one query
//! and returns the text to print.

mod complete;
mod parse;
mod references;
mod resolve;

pub use complete::complete;
pub use parse::parse;
pub use references::{references, rename_scope};
pub use resolve::resolve;

use crate::args::{Position, QueryOptions};
use std::fmt;
use std::path::{Path, PathBuf};
use tla_ir::Span;
use tla_project::{LoadError, Project, ProjectConfig};
use tla_resolve::{Cancelled, Definition, ModuleId, Outcome, Reference, SearchPath};

#[derive(Debug)]
pub enum CommandError {
    Load(LoadError),
    MissingPosition,
    /// The file was not picked up by the loader (wrong extension, say).
    NotLoaded(PathBuf),
    /// The position lies outside the file.
    OutOfRange(Position),
    /// No identifier at the position.
    NoSymbol(Position),
    /// The identifier at the position binds to nothing.
    Unresolved(String),
    Cancelled,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Load(err) => write!(f, "{err}"),
            CommandError::MissingPosition => write!(f, "missing position <line>:<column>"),
            CommandError::NotLoaded(path) => {
                write!(f, "'{}' is not a module file", path.display())
            }
            CommandError::OutOfRange(pos) => write!(f, "position {pos} is outside the file"),
            CommandError::NoSymbol(pos) => write!(f, "no identifier at {pos}"),
            CommandError::Unresolved(name) => write!(f, "'{name}' is unresolved"),
            CommandError::Cancelled => write!(f, "query cancelled"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Load(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LoadError> for CommandError {
    fn from(err: LoadError) -> Self {
        CommandError::Load(err)
    }
}

impl From<Cancelled> for CommandError {
    fn from(_: Cancelled) -> Self {
        CommandError::Cancelled
    }
}

/// Load the project around `options.file` and find its module.
fn open(options: &QueryOptions) -> Result<(Project, ModuleId), CommandError> {
    let mut config = ProjectConfig::new().with_dir(parent_dir(&options.file));
    for dir in &options.dirs {
        config = config.with_dir(dir);
    }
    config = config.with_env();
    if options.no_stdlib {
        config = config.without_stdlib();
    }
    let project = Project::load(&config)?;
    let module = project
        .module_at_path(&options.file)
        .ok_or_else(|| CommandError::NotLoaded(options.file.clone()))?;
    Ok((project, module))
}

fn parent_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Byte offset of the query position inside `module`.
fn offset(
    project: &Project,
    module: ModuleId,
    options: &QueryOptions,
) -> Result<(u32, Position), CommandError> {
    let pos = options.position.ok_or(CommandError::MissingPosition)?;
    project
        .source(module)
        .and_then(|source| source.line_index().offset(pos.line, pos.column))
        .map(|offset| (offset, pos))
        .ok_or(CommandError::OutOfRange(pos))
}

/// The definition at the query position: the declaration under it, or
/// the target of the reference under it.
fn definition_at(
    project: &Project,
    module: ModuleId,
    options: &QueryOptions,
) -> Result<Definition, CommandError> {
    let (offset, pos) = offset(project, module, options)?;
    let tree = project.modules().tree(module);
    let node = tree.node_at(offset);
    if tree.decl_kind(node).is_none() && Reference::new(tree, module, node).is_none() {
        return Err(CommandError::NoSymbol(pos));
    }
    match project.resolver().definition_at(module, offset) {
        Outcome::Resolved(def) => Ok(def),
        Outcome::Unresolved => Err(CommandError::Unresolved(
            project.interner().lookup(tree.name(node)).to_string(),
        )),
        Outcome::Cancelled => Err(CommandError::Cancelled),
    }
}

/// `file:line:column` of an offset in `module`; the bare module name for a
/// module without source text.
fn location(project: &Project, module: ModuleId, span: Span) -> String {
    let Some(source) = project.source(module) else {
        return project.module_name(module).to_string();
    };
    let (line, column) = source.line_index().line_col(span.start);
    match source.path() {
        Some(path) => format!("{}:{line}:{column}", path.display()),
        None => format!("{}:{line}:{column}", project.module_name(module)),
    }
}
