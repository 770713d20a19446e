use super::{location, open, CommandError};
use crate::args::QueryOptions;
use std::fmt::Write;
use tla_resolve::SearchPath;

/// Syntax tree and parse errors of the file.
pub fn parse(options: &QueryOptions) -> Result<String, CommandError> {
    let (project, module) = open(options)?;
    let tree = project.modules().tree(module);
    let errors = project.source(module).map(|s| s.errors()).unwrap_or_default();

    let mut out = String::new();
    let _ = writeln!(out, "Parse result for '{}':", options.file.display());
    let _ = writeln!(out, "  Nodes: {}", tree.len());
    let _ = writeln!(out, "  Errors: {}", errors.len());
    let _ = writeln!(out);
    out.push_str(&tree.dump(project.interner()));
    if !errors.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Errors:");
        for error in errors {
            let _ = writeln!(
                out,
                "  {}: {}",
                location(&project, module, error.span),
                error.kind
            );
        }
    }
    Ok(out)
}
