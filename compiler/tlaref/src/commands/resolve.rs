use super::{definition_at, location, open, CommandError};
use crate::args::QueryOptions;

/// The definition the identifier at the position binds to.
pub fn resolve(options: &QueryOptions) -> Result<String, CommandError> {
    let (project, module) = open(options)?;
    let def = definition_at(&project, module, options)?;
    Ok(format!(
        "{} ({}) at {}",
        project.interner().lookup(def.name),
        def.kind.label(),
        location(&project, def.module, def.declared_at)
    ))
}
