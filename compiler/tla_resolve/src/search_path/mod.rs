//! Module search path.
//!
//! A module sees the other modules of its own directory plus the standard
//! modules. A same-directory module shadows a standard module of the same
//! name. The search path never looks at EXTENDS or INSTANCE edges; it only
//! answers "which module does this name denote from here".

use std::fmt;
use std::sync::Arc;
use tla_ir::{Name, StringInterner, SyntaxTree};

/// Names of the standard modules, always on the search path.
pub const STANDARD_MODULES: [&str; 12] = [
    "Bags",
    "FiniteSets",
    "Integers",
    "Json",
    "Naturals",
    "Randomization",
    "Reals",
    "RealTime",
    "Sequences",
    "TLC",
    "TLCExt",
    "Toolbox",
];

/// Handle to a module in a [`ModuleSet`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ModuleId(u32);

impl ModuleId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ModuleId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.0)
    }
}

/// Handle to a source directory in a [`ModuleSet`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DirId(u32);

/// Provider of modules and the names they can see.
///
/// Implementations must be pure lookups: the resolver calls these from
/// many threads over one snapshot.
pub trait SearchPath {
    /// Syntax tree of `module`.
    ///
    /// # Panics
    ///
    /// May panic if `module` was not handed out by this provider.
    fn tree(&self, module: ModuleId) -> &SyntaxTree;

    /// Name under which `module` is found on the search path.
    fn module_name(&self, module: ModuleId) -> Name;

    /// Every module of the project, standard modules included.
    fn modules(&self) -> impl Iterator<Item = ModuleId> + '_;

    /// Modules visible from `from`, excluding `from` itself.
    fn available_modules(&self, from: ModuleId) -> impl Iterator<Item = ModuleId> + '_;

    /// The module `name` denotes when written inside `from`.
    fn resolve_module(&self, from: ModuleId, name: Name) -> Option<ModuleId> {
        self.available_modules(from)
            .find(|&m| self.module_name(m) == name)
    }
}

#[derive(Clone, Debug)]
struct Entry {
    name: Name,
    /// `None` for standard modules.
    dir: Option<DirId>,
    tree: Arc<SyntaxTree>,
}

/// The modules of one project snapshot.
///
/// Trees are reference counted, so cloning a set to replace one module is
/// cheap and leaves the old snapshot intact.
#[derive(Clone, Debug, Default)]
pub struct ModuleSet {
    entries: Vec<Entry>,
    dirs: u32,
}

impl ModuleSet {
    pub fn new() -> Self {
        ModuleSet::default()
    }

    /// A set holding a header-only stub for every standard module.
    ///
    /// Stubs keep the standard names available before (or without) their
    /// sources being loaded; [`ModuleSet::insert`] replaces them.
    pub fn with_standard_stubs(interner: &StringInterner) -> Self {
        let mut set = ModuleSet::new();
        for text in STANDARD_MODULES {
            let name = interner.intern(text);
            set.insert(None, name, SyntaxTree::stub_module(name));
        }
        set
    }

    /// Register a new source directory.
    pub fn add_dir(&mut self) -> DirId {
        let id = DirId(self.dirs);
        self.dirs += 1;
        id
    }

    /// Add a module, replacing any module of the same name in `dir`.
    ///
    /// `dir` is `None` for standard modules.
    pub fn insert(&mut self, dir: Option<DirId>, name: Name, tree: SyntaxTree) -> ModuleId {
        let tree = Arc::new(tree);
        if let Some(id) = self.find(dir, name) {
            self.entries[id.index()].tree = tree;
            return id;
        }
        let index = u32::try_from(self.entries.len()).unwrap_or(u32::MAX);
        self.entries.push(Entry { name, dir, tree });
        ModuleId(index)
    }

    /// Swap the tree of an existing module.
    pub fn replace_tree(&mut self, module: ModuleId, tree: SyntaxTree) {
        self.entries[module.index()].tree = Arc::new(tree);
    }

    /// The module registered as `name` in `dir`.
    pub fn find(&self, dir: Option<DirId>, name: Name) -> Option<ModuleId> {
        self.ids()
            .find(|&id| self.entries[id.index()].dir == dir && self.entries[id.index()].name == name)
    }

    pub fn dir(&self, module: ModuleId) -> Option<DirId> {
        self.entries[module.index()].dir
    }

    pub fn is_standard(&self, module: ModuleId) -> bool {
        self.dir(module).is_none()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ids(&self) -> impl Iterator<Item = ModuleId> {
        (0..self.entries.len()).map(|i| ModuleId(u32::try_from(i).unwrap_or(u32::MAX)))
    }
}

impl SearchPath for ModuleSet {
    fn tree(&self, module: ModuleId) -> &SyntaxTree {
        &self.entries[module.index()].tree
    }

    fn module_name(&self, module: ModuleId) -> Name {
        self.entries[module.index()].name
    }

    fn modules(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.ids()
    }

    fn available_modules(&self, from: ModuleId) -> impl Iterator<Item = ModuleId> + '_ {
        let dir = self.dir(from);
        let same_dir = self
            .ids()
            .filter(move |&id| id != from && dir.is_some() && self.dir(id) == dir);
        let standard = self.ids().filter(move |&id| {
            let entry = &self.entries[id.index()];
            id != from
                && entry.dir.is_none()
                && !dir.is_some_and(|d| self.find(Some(d), entry.name).is_some())
        });
        same_dir.chain(standard)
    }
}
