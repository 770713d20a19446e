//! Helpers for unit tests: parse a single module and locate nodes by name.

use tla_ir::{DeclKind, NodeId, NodeKind, StringInterner, SyntaxTree};

pub(crate) struct Parsed {
    pub(crate) tree: SyntaxTree,
    pub(crate) interner: StringInterner,
}

impl Parsed {
    pub(crate) fn new(body: &str) -> Self {
        let interner = StringInterner::new();
        let source = format!("---- MODULE M ----\n{body}\n====\n");
        let output = tla_parse::parse(&source, &interner);
        assert!(
            output.errors.is_empty(),
            "unexpected errors: {:?}",
            output.errors
        );
        Parsed {
            tree: output.tree,
            interner,
        }
    }

    fn nodes(&self, kind: NodeKind, name: &str) -> Vec<NodeId> {
        let tree = &self.tree;
        tree.descendants(tree.root())
            .filter(|&id| tree.kind(id) == kind && self.interner.lookup(tree.name(id)) == name)
            .collect()
    }

    /// The `nth` declaration of `name` with kind `kind`.
    pub(crate) fn decl(&self, kind: DeclKind, name: &str, nth: usize) -> NodeId {
        match self.nodes(NodeKind::Decl(kind), name).get(nth) {
            Some(&id) => id,
            None => panic!(
                "no {kind:?} `{name}` #{nth} in\n{}",
                self.tree.dump(&self.interner)
            ),
        }
    }

    /// The `nth` reference to `name`.
    pub(crate) fn ident(&self, name: &str, nth: usize) -> NodeId {
        match self.nodes(NodeKind::Ident, name).get(nth) {
            Some(&id) => id,
            None => panic!(
                "no reference `{name}` #{nth} in\n{}",
                self.tree.dump(&self.interner)
            ),
        }
    }

    pub(crate) fn first(&self, kind: NodeKind) -> NodeId {
        let tree = &self.tree;
        match tree.descendants(tree.root()).find(|&id| tree.kind(id) == kind) {
            Some(id) => id,
            None => panic!("no {kind:?} in\n{}", tree.dump(&self.interner)),
        }
    }

    pub(crate) fn name(&self, id: NodeId) -> &str {
        self.interner.lookup(self.tree.name(id))
    }

    pub(crate) fn offset(&self, id: NodeId) -> u32 {
        self.tree.span(id).start
    }
}

/// Several modules in one directory, plus standard-module stubs.
pub(crate) struct Workspace {
    pub(crate) set: crate::ModuleSet,
    pub(crate) interner: StringInterner,
    pub(crate) ids: Vec<crate::ModuleId>,
}

impl Workspace {
    /// `modules` are `(name, source)` pairs; sources are used verbatim.
    pub(crate) fn new(modules: &[(&str, &str)]) -> Self {
        let interner = StringInterner::new();
        let mut set = crate::ModuleSet::with_standard_stubs(&interner);
        let dir = set.add_dir();
        let ids = modules
            .iter()
            .map(|&(name, source)| {
                let output = tla_parse::parse(source, &interner);
                assert!(
                    output.errors.is_empty(),
                    "errors in {name}: {:?}",
                    output.errors
                );
                set.insert(Some(dir), interner.intern(name), output.tree)
            })
            .collect();
        Workspace { set, interner, ids }
    }

    pub(crate) fn name_of(&self, module: crate::ModuleId) -> &str {
        use crate::SearchPath;
        self.interner.lookup(self.set.module_name(module))
    }
}
