//! Reference resolution and completion.
//!
//! An unqualified name is looked up in stages, stopping at the first hit:
//!
//! 1. enclosing scopes, innermost first (LET, binders, parameters)
//! 2. the containing module's top-level definitions, LOCAL included,
//!    subject to declaration order
//! 3. definitions exported by extended modules and by the module's own
//!    unnamed instances, depth-first in clause order
//!
//! A qualified name `P!Q!Op` first finds the module instance `P` by the
//! same stages, then looks up `Q` and finally `Op` among the exports of
//! each instantiated module in turn. It never falls back to the
//! unqualified stages.

use crate::cancel::{CancellationToken, Cancelled};
use crate::definition::{Definition, Reference};
use crate::module_ctx::ModuleContext;
use crate::scope::scope_chain;
use crate::search_path::{ModuleId, SearchPath};
use crate::use_scope::{rename_scope, Region};
use crate::walk::ModuleWalk;
use rustc_hash::FxHashSet;
use tla_ir::{DeclKind, Name, NodeFlags, NodeId, NodeKind, SyntaxTree};

/// Result of resolving one reference.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Resolved(Definition),
    Unresolved,
    /// The query's cancellation token fired.
    Cancelled,
}

impl Outcome {
    pub fn definition(self) -> Option<Definition> {
        match self {
            Outcome::Resolved(def) => Some(def),
            Outcome::Unresolved | Outcome::Cancelled => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Outcome::Resolved(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}

impl From<Result<Option<Definition>, Cancelled>> for Outcome {
    fn from(result: Result<Option<Definition>, Cancelled>) -> Self {
        match result {
            Ok(Some(def)) => Outcome::Resolved(def),
            Ok(None) => Outcome::Unresolved,
            Err(Cancelled) => Outcome::Cancelled,
        }
    }
}

/// What a completion candidate denotes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CandidateKind {
    Definition(DeclKind),
    Module,
}

/// One completion candidate.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub name: Name,
    pub kind: CandidateKind,
    /// Module declaring the name (the module itself for module names).
    pub origin: ModuleId,
}

/// Where a lookup starts.
#[derive(Copy, Clone, Debug)]
struct Site {
    module: ModuleId,
    node: NodeId,
    offset: u32,
}

/// Resolver over one project snapshot.
///
/// Holds no state between queries; share one across threads or create
/// one per query.
pub struct Resolver<'a, P: SearchPath> {
    paths: &'a P,
    cancel: CancellationToken,
}

impl<'a, P: SearchPath> Resolver<'a, P> {
    pub fn new(paths: &'a P) -> Self {
        Resolver {
            paths,
            cancel: CancellationToken::new(),
        }
    }

    /// Poll `token` at every module boundary a query crosses.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// The declaration `reference` binds to.
    #[tracing::instrument(level = "debug", skip_all, fields(module = ?reference.module, node = ?reference.node))]
    pub fn resolve(&self, reference: Reference) -> Outcome {
        let tree = self.paths.tree(reference.module);
        let name = reference.name(tree);
        if tree.module_name().is_none() || name.is_empty() {
            tracing::debug!("malformed module or reference");
            return Outcome::Unresolved;
        }
        let site = self.site(tree, reference);
        let qualifiers = reference.qualifiers(tree);
        let result = if qualifiers.is_empty() {
            self.lookup(site, name, None)
        } else {
            self.qualified_target(site, &qualifiers)
                .and_then(|target| match target {
                    Some(module) => self.find_export(module, name, None),
                    None => Ok(None),
                })
        };
        let outcome = Outcome::from(result);
        tracing::debug!(?outcome, "resolved");
        outcome
    }

    /// The reference under the caret, if any.
    pub fn reference_at(&self, module: ModuleId, offset: u32) -> Option<Reference> {
        let tree = self.paths.tree(module);
        Reference::new(tree, module, tree.node_at(offset))
    }

    /// The declaration under the caret, or the one the reference under
    /// the caret binds to.
    pub fn definition_at(&self, module: ModuleId, offset: u32) -> Outcome {
        let tree = self.paths.tree(module);
        let node = tree.node_at(offset);
        if let Some(def) = Definition::from_decl(tree, module, node) {
            return Outcome::Resolved(def);
        }
        match Reference::new(tree, module, node) {
            Some(reference) => self.resolve(reference),
            None => Outcome::Unresolved,
        }
    }

    /// The region within which `def` may be renamed.
    pub fn rename_scope(&self, def: &Definition) -> Region {
        rename_scope(self.paths.tree(def.module), def)
    }

    /// Every reference that binds to `def`, in module then source order.
    #[tracing::instrument(level = "debug", skip_all, fields(module = ?def.module, node = ?def.node))]
    pub fn find_references(&self, def: &Definition) -> Result<Vec<Reference>, Cancelled> {
        let region = self.rename_scope(def);
        let modules: Vec<ModuleId> = match region {
            Region::WholeProject => self.paths.modules().collect(),
            Region::Subtree { module, .. } => vec![module],
        };
        let mut found = Vec::new();
        for module in modules {
            self.cancel.check()?;
            let tree = self.paths.tree(module);
            let root = match region {
                Region::Subtree { node, .. } => node,
                Region::WholeProject => tree.root(),
            };
            for node in tree.descendants(root) {
                if tree.name(node) != def.name {
                    continue;
                }
                let Some(reference) = Reference::new(tree, module, node) else {
                    continue;
                };
                match self.resolve(reference) {
                    Outcome::Resolved(target) if target == *def => found.push(reference),
                    Outcome::Cancelled => return Err(Cancelled),
                    Outcome::Resolved(_) | Outcome::Unresolved => {}
                }
            }
        }
        tracing::debug!(count = found.len(), "found references");
        Ok(found)
    }

    /// Names that may be written at `offset`, innermost first, without
    /// duplicates.
    ///
    /// In a file without a module header, or where a module name is
    /// expected (EXTENDS, INSTANCE), the candidates are the modules on the
    /// search path.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn completion_candidates(
        &self,
        module: ModuleId,
        offset: u32,
    ) -> Result<Vec<Candidate>, Cancelled> {
        let tree = self.paths.tree(module);
        if tree.module_name().is_none() || in_module_name_slot(tree, offset) {
            return Ok(self.module_candidates(module));
        }

        let node = tree.node_at(offset);
        let mut out = Candidates::default();

        // A partly typed name is filtered as a use at its start.
        let mut site = Site {
            module,
            node,
            offset,
        };
        if let Some(reference) = Reference::new(tree, module, node) {
            site = self.site(tree, reference);
            let qualifiers = reference.qualifiers(tree);
            if !qualifiers.is_empty() {
                if let Some(target) = self.qualified_target(site, &qualifiers)? {
                    for def in ModuleWalk::new(self.paths, &self.cancel, [target]).definitions() {
                        out.push_definition(def?);
                    }
                }
                return Ok(out.finish());
            }
        }

        for scope in scope_chain(tree, site.node) {
            for decl in scope.definitions(tree, site.offset) {
                if let Some(def) = Definition::from_decl(tree, module, decl) {
                    out.push_definition(def);
                }
            }
        }
        self.cancel.check()?;
        let ctx = ModuleContext::new(self.paths, module);
        for def in ctx.visible_definitions(site.offset) {
            out.push_definition(def);
        }
        for def in self.imports(&ctx) {
            out.push_definition(def?);
        }
        Ok(out.finish())
    }

    fn module_candidates(&self, module: ModuleId) -> Vec<Candidate> {
        let mut out = Candidates::default();
        for available in self.paths.available_modules(module) {
            out.push(Candidate {
                name: self.paths.module_name(available),
                kind: CandidateKind::Module,
                origin: available,
            });
        }
        out.finish()
    }

    fn site(&self, tree: &SyntaxTree, reference: Reference) -> Site {
        let node = reference.site(tree);
        Site {
            module: reference.module,
            node,
            offset: tree.span(node).start,
        }
    }

    /// Unqualified lookup, stages 1 to 3.
    fn lookup(
        &self,
        site: Site,
        name: Name,
        want: Option<DeclKind>,
    ) -> Result<Option<Definition>, Cancelled> {
        let accepts =
            |def: &Definition| def.name == name && (want.is_none() || want == Some(def.kind));
        let tree = self.paths.tree(site.module);

        for scope in scope_chain(tree, site.node) {
            let hit = scope
                .definitions(tree, site.offset)
                .filter_map(|decl| Definition::from_decl(tree, site.module, decl))
                .find(accepts);
            if hit.is_some() {
                tracing::trace!(scope = ?scope, "found in enclosing scope");
                return Ok(hit);
            }
        }

        self.cancel.check()?;
        let ctx = ModuleContext::new(self.paths, site.module);
        if let Some(def) = ctx.visible_definitions(site.offset).find(accepts) {
            tracing::trace!("found in containing module");
            return Ok(Some(def));
        }

        for def in self.imports(&ctx) {
            let def = def?;
            if accepts(&def) {
                tracing::trace!(origin = ?def.module, "found in imported module");
                return Ok(Some(def));
            }
        }
        Ok(None)
    }

    /// Exports of extended modules and of the module's unnamed instances.
    fn imports(
        &self,
        ctx: &ModuleContext<'a, P>,
    ) -> impl Iterator<Item = Result<Definition, Cancelled>> + '_ {
        let roots: Vec<ModuleId> = ctx
            .modules_from_extends()
            .chain(ctx.modules_from_instantiation(|inst| inst.prefix.is_none()))
            .collect();
        ModuleWalk::new(self.paths, &self.cancel, roots)
            .skipping(ctx.module())
            .definitions()
    }

    /// The module a qualifier chain `P!Q!...` denotes at `site`.
    fn qualified_target(
        &self,
        site: Site,
        qualifiers: &[Name],
    ) -> Result<Option<ModuleId>, Cancelled> {
        let Some((&first, rest)) = qualifiers.split_first() else {
            return Ok(None);
        };
        let Some(instance) = self.lookup(site, first, Some(DeclKind::ModuleInstance))? else {
            tracing::trace!("qualifier does not name an instance");
            return Ok(None);
        };
        let mut target = self.instance_target(&instance);
        for &segment in rest {
            let Some(module) = target else {
                return Ok(None);
            };
            let Some(instance) = self.find_export(module, segment, Some(DeclKind::ModuleInstance))?
            else {
                return Ok(None);
            };
            target = self.instance_target(&instance);
        }
        Ok(target)
    }

    /// The module instantiated by a module-instance definition.
    fn instance_target(&self, instance: &Definition) -> Option<ModuleId> {
        let tree = self.paths.tree(instance.module);
        let owner = instance.owner(tree)?;
        let node = tree.child_of_kind(owner, NodeKind::Instance)?;
        let module_ref = tree.child_of_kind(node, NodeKind::ModuleRef)?;
        let target = self.paths.resolve_module(instance.module, tree.name(module_ref));
        if target.is_none() {
            tracing::debug!(module = ?instance.module, "instantiated module not found");
        }
        target
    }

    /// `name` among the exports of `module`.
    fn find_export(
        &self,
        module: ModuleId,
        name: Name,
        want: Option<DeclKind>,
    ) -> Result<Option<Definition>, Cancelled> {
        for def in ModuleWalk::new(self.paths, &self.cancel, [module]).definitions() {
            let def = def?;
            if def.name == name && (want.is_none() || want == Some(def.kind)) {
                return Ok(Some(def));
            }
        }
        Ok(None)
    }
}

/// Candidate list deduplicated by name; the first entry wins.
#[derive(Default)]
struct Candidates {
    seen: FxHashSet<Name>,
    list: Vec<Candidate>,
}

impl Candidates {
    fn push(&mut self, candidate: Candidate) {
        if self.seen.insert(candidate.name) {
            self.list.push(candidate);
        }
    }

    fn push_definition(&mut self, def: Definition) {
        self.push(Candidate {
            name: def.name,
            kind: CandidateKind::Definition(def.kind),
            origin: def.module,
        });
    }

    fn finish(self) -> Vec<Candidate> {
        self.list
    }
}

/// Whether a module name is expected at `offset`.
fn in_module_name_slot(tree: &SyntaxTree, offset: u32) -> bool {
    let node = tree.node_at(offset);
    match tree.kind(node) {
        NodeKind::ModuleRef | NodeKind::Extends => true,
        NodeKind::Instance | NodeKind::ModuleDef => lacks_module_name(tree, node),
        _ => tree
            .children(node)
            .iter()
            .copied()
            .take_while(|&c| tree.span(c).end <= offset)
            .last()
            .is_some_and(|unit| lacks_module_name(tree, unit)),
    }
}

/// An EXTENDS or INSTANCE still waiting for a module name.
fn lacks_module_name(tree: &SyntaxTree, unit: NodeId) -> bool {
    match tree.kind(unit) {
        NodeKind::Extends => {
            tree.children(unit).is_empty()
                || tree.flags(unit).contains(NodeFlags::TRAILING_COMMA)
        }
        NodeKind::Instance => tree.child_of_kind(unit, NodeKind::ModuleRef).is_none(),
        NodeKind::ModuleDef => tree
            .child_of_kind(unit, NodeKind::Instance)
            .is_some_and(|inst| tree.child_of_kind(inst, NodeKind::ModuleRef).is_none()),
        _ => false,
    }
}
