//! Transitive import traversal.
//!
//! A module exports its public definitions plus everything exported by
//! the modules it extends and by its non-LOCAL unnamed instances. Import
//! graphs may be cyclic; each module is visited at most once per walk.

use crate::cancel::{CancellationToken, Cancelled};
use crate::definition::Definition;
use crate::module_ctx::ModuleContext;
use crate::search_path::{ModuleId, SearchPath};
use rustc_hash::FxHashSet;

/// Depth-first walk over the modules whose exports are reachable from a
/// set of roots, in clause order.
///
/// Yields `Err(Cancelled)` once and then stops if the token fires.
pub struct ModuleWalk<'a, P: SearchPath> {
    paths: &'a P,
    cancel: &'a CancellationToken,
    visited: FxHashSet<ModuleId>,
    stack: Vec<ModuleId>,
}

impl<'a, P: SearchPath> ModuleWalk<'a, P> {
    pub fn new(
        paths: &'a P,
        cancel: &'a CancellationToken,
        roots: impl IntoIterator<Item = ModuleId>,
    ) -> Self {
        let mut stack: Vec<ModuleId> = roots.into_iter().collect();
        stack.reverse();
        ModuleWalk {
            paths,
            cancel,
            visited: FxHashSet::default(),
            stack,
        }
    }

    /// Treat `module` as already visited.
    #[must_use]
    pub fn skipping(mut self, module: ModuleId) -> Self {
        self.visited.insert(module);
        self
    }

    /// Exported definitions of every module reached, module by module.
    pub fn definitions(self) -> impl Iterator<Item = Result<Definition, Cancelled>> + 'a {
        let paths = self.paths;
        self.flat_map(move |step| {
            let (module, error) = match step {
                Ok(module) => (Some(module), None),
                Err(cancelled) => (None, Some(Err(cancelled))),
            };
            module
                .into_iter()
                .flat_map(move |m| ModuleContext::new(paths, m).public_definitions())
                .map(Ok)
                .chain(error)
        })
    }
}

impl<P: SearchPath> Iterator for ModuleWalk<'_, P> {
    type Item = Result<ModuleId, Cancelled>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let module = self.stack.pop()?;
            if !self.visited.insert(module) {
                tracing::trace!(?module, "already visited");
                continue;
            }
            if let Err(cancelled) = self.cancel.check() {
                tracing::debug!(?module, "walk cancelled");
                self.stack.clear();
                return Some(Err(cancelled));
            }
            let ctx = ModuleContext::new(self.paths, module);
            let next: Vec<ModuleId> = ctx
                .modules_from_extends()
                .chain(ctx.modules_from_instantiation(|inst| inst.prefix.is_none() && !inst.local))
                .collect();
            self.stack.extend(next.into_iter().rev());
            return Some(Ok(module));
        }
    }
}
