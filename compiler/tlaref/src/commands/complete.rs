use super::{offset, open, CommandError};
use crate::args::QueryOptions;
use std::fmt::Write;
use tla_resolve::CandidateKind;

/// Names that may be written at the position, one per line:
/// `name<TAB>kind<TAB>origin module`.
pub fn complete(options: &QueryOptions) -> Result<String, CommandError> {
    let (project, module) = open(options)?;
    let (offset, _) = offset(&project, module, options)?;
    let candidates = project.resolver().completion_candidates(module, offset)?;
    let mut out = String::new();
    for candidate in candidates {
        let kind = match candidate.kind {
            CandidateKind::Definition(kind) => kind.label(),
            CandidateKind::Module => "module",
        };
        let _ = writeln!(
            out,
            "{}\t{kind}\t{}",
            project.interner().lookup(candidate.name),
            project.module_name(candidate.origin)
        );
    }
    Ok(out)
}
