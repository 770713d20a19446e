//! Fixture loading for resolution tests.
//!
//! Fixtures are `.tla` files under `tests/fixtures`. The first file of a
//! fixture set may contain a `{caret}` marker; it is removed before parsing
//! and its offset becomes the query position.

#![allow(dead_code, unused_macros, clippy::expect_used)]

use tla_ir::{Name, StringInterner};
use tla_resolve::{Definition, ModuleId, ModuleSet, Outcome, Resolver, SearchPath};

const CARET: &str = "{caret}";

pub struct Fixture {
    pub set: ModuleSet,
    pub interner: StringInterner,
    pub modules: Vec<ModuleId>,
    pub caret: Option<(ModuleId, u32)>,
}

impl Fixture {
    /// Load `(file name, contents)` pairs into one directory.
    ///
    /// Panics if any file has parse errors.
    pub fn new(files: &[(&str, &str)]) -> Self {
        Self::load(files, true)
    }

    /// Like [`Fixture::new`], but accepts files with parse errors.
    pub fn lenient(files: &[(&str, &str)]) -> Self {
        Self::load(files, false)
    }

    fn load(files: &[(&str, &str)], strict: bool) -> Self {
        let interner = StringInterner::new();
        let mut set = ModuleSet::with_standard_stubs(&interner);
        let dir = set.add_dir();
        let mut caret = None;
        let mut modules = Vec::new();
        for &(file, contents) in files {
            let name = file.trim_end_matches(".tla");
            let source = match contents.find(CARET) {
                Some(at) => {
                    let offset = u32::try_from(at).expect("fixture offset");
                    caret = Some((modules.len(), offset));
                    contents.replacen(CARET, "", 1)
                }
                None => contents.to_owned(),
            };
            let output = tla_parse::parse(&source, &interner);
            assert!(
                !strict || output.errors.is_empty(),
                "{file}: unexpected parse errors {:?}",
                output.errors
            );
            modules.push(set.insert(Some(dir), interner.intern(name), output.tree));
        }
        let caret = caret.map(|(index, offset)| (modules[index], offset));
        Fixture {
            set,
            interner,
            modules,
            caret,
        }
    }

    pub fn resolver(&self) -> Resolver<'_, ModuleSet> {
        Resolver::new(&self.set)
    }

    pub fn caret(&self) -> (ModuleId, u32) {
        self.caret.expect("fixture has no {caret} marker")
    }

    /// Resolve the reference under the caret.
    pub fn resolve_at_caret(&self) -> Outcome {
        let (module, offset) = self.caret();
        let resolver = self.resolver();
        let reference = resolver
            .reference_at(module, offset)
            .expect("no reference under the caret");
        resolver.resolve(reference)
    }

    /// Completion candidate names at the caret, in order.
    pub fn complete_at_caret(&self) -> Vec<String> {
        let (module, offset) = self.caret();
        self.resolver()
            .completion_candidates(module, offset)
            .expect("completion cancelled")
            .iter()
            .map(|c| self.text(c.name).to_owned())
            .collect()
    }

    pub fn text(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// Name of the module declaring `def`.
    pub fn module_of(&self, def: &Definition) -> &str {
        self.text(self.set.module_name(def.module))
    }
}

/// Load fixture files by name from `tests/fixtures`.
macro_rules! fixture {
    ($($file:literal),+ $(,)?) => {
        crate::common::Fixture::new(&[
            $((
                $file,
                include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/", $file)),
            )),+
        ])
    };
}
