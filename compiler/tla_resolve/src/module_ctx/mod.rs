//! Per-module view: top-level definitions and the module graph edges.

use crate::definition::Definition;
use crate::position;
use crate::search_path::{ModuleId, SearchPath};
use tla_ir::{Name, NodeId, NodeKind, SyntaxTree};

/// An `INSTANCE` declaration at module level.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Instance {
    /// The `Instance` node.
    pub node: NodeId,
    /// `P` in `P == INSTANCE M`; `None` for an unnamed instance.
    pub prefix: Option<Name>,
    /// `M`, or `None` if the source omits it.
    pub target: Option<Name>,
    pub local: bool,
}

impl Instance {
    /// Names substituted by `WITH`, in source order.
    pub fn substitutions<'t>(&self, tree: &'t SyntaxTree) -> impl Iterator<Item = Name> + 't {
        tree.children(self.node)
            .iter()
            .filter(|&&c| tree.kind(c) == NodeKind::Substitution)
            .map(|&c| tree.name(c))
    }
}

/// Definitions and imports of one module.
pub struct ModuleContext<'a, P: SearchPath> {
    paths: &'a P,
    module: ModuleId,
    tree: &'a SyntaxTree,
}

impl<'a, P: SearchPath> ModuleContext<'a, P> {
    pub fn new(paths: &'a P, module: ModuleId) -> Self {
        ModuleContext {
            paths,
            module,
            tree: paths.tree(module),
        }
    }

    pub fn module(&self) -> ModuleId {
        self.module
    }

    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    /// Every top-level declaration, LOCAL ones included, in source order.
    ///
    /// Covers operator, function and module-instance definitions, named
    /// ASSUME/THEOREM, and VARIABLE/CONSTANT declarations.
    pub fn all_definitions(&self) -> impl Iterator<Item = Definition> + 'a {
        let tree = self.tree;
        let module = self.module;
        tree.children(tree.root())
            .iter()
            .copied()
            .filter(move |&unit| declares_names(tree.kind(unit)))
            .flat_map(move |unit| {
                tree.children(unit)
                    .iter()
                    .copied()
                    .filter_map(move |c| Definition::from_decl(tree, module, c))
            })
    }

    /// Top-level declarations other modules can see: all but LOCAL ones.
    pub fn public_definitions(&self) -> impl Iterator<Item = Definition> + 'a {
        let tree = self.tree;
        self.all_definitions().filter(move |def| {
            def.owner(tree)
                .is_some_and(|owner| !tree.is_local(owner))
        })
    }

    /// Top-level declarations usable at `use_offset` inside this module.
    pub fn visible_definitions(&self, use_offset: u32) -> impl Iterator<Item = Definition> + 'a {
        let tree = self.tree;
        let root = tree.root();
        self.all_definitions()
            .filter(move |def| position::is_visible_at(tree, root, def.node, use_offset))
    }

    /// Modules on this module's search path.
    pub fn available_modules(&self) -> impl Iterator<Item = ModuleId> + 'a {
        self.paths.available_modules(self.module)
    }

    /// Targets of `EXTENDS`, in clause order. Unknown names are dropped.
    pub fn modules_from_extends(&self) -> impl Iterator<Item = ModuleId> + 'a {
        let tree = self.tree;
        let paths = self.paths;
        let module = self.module;
        tree.children(tree.root())
            .iter()
            .copied()
            .filter(move |&unit| tree.kind(unit) == NodeKind::Extends)
            .flat_map(move |unit| tree.children(unit).iter().copied())
            .filter_map(move |module_ref| paths.resolve_module(module, tree.name(module_ref)))
    }

    /// Module-level `INSTANCE` declarations, named and unnamed.
    pub fn instances(&self) -> impl Iterator<Item = Instance> + 'a {
        let tree = self.tree;
        tree.children(tree.root())
            .iter()
            .copied()
            .filter_map(move |unit| match tree.kind(unit) {
                NodeKind::Instance => Some(instance(tree, unit, None, tree.is_local(unit))),
                NodeKind::ModuleDef => {
                    let node = tree.child_of_kind(unit, NodeKind::Instance)?;
                    let prefix = tree.decl_of(unit).map(|d| tree.name(d));
                    Some(instance(tree, node, prefix, tree.is_local(unit)))
                }
                _ => None,
            })
    }

    /// Targets of the instances accepted by `requirement`. Unknown names
    /// are dropped.
    pub fn modules_from_instantiation<F>(
        &self,
        requirement: F,
    ) -> impl Iterator<Item = ModuleId> + 'a
    where
        F: Fn(&Instance) -> bool + 'a,
    {
        let paths = self.paths;
        let module = self.module;
        self.instances()
            .filter(move |inst| requirement(inst))
            .filter_map(move |inst| paths.resolve_module(module, inst.target?))
    }
}

fn declares_names(kind: NodeKind) -> bool {
    kind.is_definition()
        || matches!(
            kind,
            NodeKind::Variables | NodeKind::Constants | NodeKind::Assume | NodeKind::Theorem
        )
}

fn instance(tree: &SyntaxTree, node: NodeId, prefix: Option<Name>, local: bool) -> Instance {
    let target = tree
        .child_of_kind(node, NodeKind::ModuleRef)
        .map(|r| tree.name(r));
    Instance {
        node,
        prefix,
        target,
        local,
    }
}
