use super::{definition_at, location, open, CommandError};
use crate::args::QueryOptions;
use std::fmt::Write;
use tla_resolve::{Region, SearchPath};

/// Region within which the symbol at the position may be renamed.
pub fn rename_scope(options: &QueryOptions) -> Result<String, CommandError> {
    let (project, module) = open(options)?;
    let def = definition_at(&project, module, options)?;
    Ok(match project.resolver().rename_scope(&def) {
        Region::WholeProject => "whole project".to_string(),
        Region::Subtree { module, span, .. } => {
            let end = project
                .source(module)
                .map(|source| source.line_index().line_col(span.end));
            match end {
                Some((line, column)) => {
                    format!("{}-{line}:{column}", location(&project, module, span))
                }
                None => location(&project, module, span),
            }
        }
    })
}

/// Every reference to the symbol at the position, one location per line.
pub fn references(options: &QueryOptions) -> Result<String, CommandError> {
    let (project, module) = open(options)?;
    let def = definition_at(&project, module, options)?;
    let refs = project.resolver().find_references(&def)?;
    let mut out = String::new();
    for reference in refs {
        let span = reference.span(project.modules().tree(reference.module));
        let _ = writeln!(out, "{}", location(&project, reference.module, span));
    }
    Ok(out)
}
