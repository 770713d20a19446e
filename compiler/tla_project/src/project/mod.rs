//! Project snapshots.
//!
//! A [`Project`] is an immutable, reference-counted snapshot of every
//! loaded module: the shared interner, the [`ModuleSet`] of syntax trees and
//! the source text behind each tree. Queries run against a snapshot from
//! any number of threads; an edit produces a new snapshot through
//! [`Project::replace_source`] and leaves the old one untouched.

use crate::config::ProjectConfig;
use crate::error::LoadError;
use crate::source::SourceFile;
use crate::stdlib;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tla_ir::{SharedInterner, StringInterner};
use tla_parse::ParseOutput;
use tla_resolve::{DirId, ModuleId, ModuleSet, Resolver, SearchPath};

/// Immutable snapshot of a loaded project. Cloning shares the snapshot.
#[derive(Clone, Debug)]
pub struct Project(Arc<Snapshot>);

#[derive(Clone, Debug)]
struct Snapshot {
    interner: SharedInterner,
    modules: ModuleSet,
    /// Indexed by `ModuleId`; `None` for standard-module stubs.
    sources: Vec<Option<Arc<SourceFile>>>,
    dirs: Vec<(DirId, Option<PathBuf>)>,
}

impl Project {
    /// Load every directory named by `config`.
    pub fn load(config: &ProjectConfig) -> Result<Self, LoadError> {
        let mut builder = ProjectBuilder::new(config.bundle_stdlib);
        for dir in &config.dirs {
            builder.load_dir(dir, config)?;
        }
        Ok(builder.finish())
    }

    /// A project of one in-memory directory, with the standard modules.
    ///
    /// `files` are `(module name, source)` pairs.
    pub fn from_sources(files: &[(&str, &str)]) -> Self {
        let mut builder = ProjectBuilder::new(true);
        builder.add_sources(files);
        builder.finish()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.0.interner
    }

    /// Handle to the interner, for sharing with other threads.
    pub fn shared_interner(&self) -> SharedInterner {
        self.0.interner.clone()
    }

    pub fn modules(&self) -> &ModuleSet {
        &self.0.modules
    }

    /// A resolver over this snapshot.
    pub fn resolver(&self) -> Resolver<'_, ModuleSet> {
        Resolver::new(&self.0.modules)
    }

    /// Source behind `module`; `None` for a standard-module stub.
    pub fn source(&self, module: ModuleId) -> Option<&SourceFile> {
        self.0.sources.get(module.index())?.as_deref()
    }

    pub fn module_name(&self, module: ModuleId) -> &str {
        self.interner().lookup(self.0.modules.module_name(module))
    }

    /// Directory a module was loaded from; `None` for standard and
    /// in-memory modules.
    pub fn dir_path(&self, module: ModuleId) -> Option<&Path> {
        let dir = self.0.modules.dir(module)?;
        self.0
            .dirs
            .iter()
            .find(|(id, _)| *id == dir)
            .and_then(|(_, path)| path.as_deref())
    }

    /// The module named `name`, preferring project modules over standard
    /// ones.
    pub fn find_module(&self, name: &str) -> Option<ModuleId> {
        let name = self.interner().get(name)?;
        let modules = &self.0.modules;
        let mut matching = modules.modules().filter(|&m| modules.module_name(m) == name);
        let first = matching.next()?;
        if !modules.is_standard(first) {
            return Some(first);
        }
        matching.find(|&m| !modules.is_standard(m)).or(Some(first))
    }

    /// The module loaded from `path`.
    pub fn module_at_path(&self, path: &Path) -> Option<ModuleId> {
        let wanted = canonical(path);
        self.0.modules.modules().find(|&m| {
            self.source(m)
                .and_then(SourceFile::path)
                .is_some_and(|p| canonical(p) == wanted)
        })
    }

    /// Parse errors of every module, in module order.
    pub fn parse_errors(&self) -> impl Iterator<Item = (ModuleId, &tla_parse::ParseError)> + '_ {
        self.0.modules.modules().flat_map(move |m| {
            self.source(m)
                .map(SourceFile::errors)
                .unwrap_or_default()
                .iter()
                .map(move |e| (m, e))
        })
    }

    /// A new snapshot with `module` re-parsed from `text`.
    #[tracing::instrument(level = "debug", skip_all, fields(module = ?module))]
    pub fn replace_source(&self, module: ModuleId, text: impl Into<String>) -> Project {
        let text = text.into();
        let mut snapshot = Snapshot::clone(&self.0);
        let output = tla_parse::parse(&text, &snapshot.interner);
        let path = self.source(module).and_then(|s| s.path().map(Path::to_path_buf));
        snapshot.modules.replace_tree(module, output.tree);
        snapshot.set_source(module, SourceFile::new(path, text, output.errors));
        Project(Arc::new(snapshot))
    }
}

impl Snapshot {
    fn set_source(&mut self, module: ModuleId, source: SourceFile) {
        let index = module.index();
        if self.sources.len() <= index {
            self.sources.resize(index + 1, None);
        }
        self.sources[index] = Some(Arc::new(source));
    }
}

/// A file read but not yet parsed.
struct Pending {
    name: String,
    path: Option<PathBuf>,
    text: String,
}

/// Incremental construction of a [`Project`].
pub struct ProjectBuilder {
    snapshot: Snapshot,
}

impl ProjectBuilder {
    /// An empty project. The standard names are always on the search path;
    /// with `bundle_stdlib` their embedded sources are parsed, otherwise
    /// they are header-only stubs.
    pub fn new(bundle_stdlib: bool) -> Self {
        let interner = SharedInterner::new();
        let modules = ModuleSet::with_standard_stubs(&interner);
        let mut builder = ProjectBuilder {
            snapshot: Snapshot {
                interner,
                modules,
                sources: Vec::new(),
                dirs: Vec::new(),
            },
        };
        if bundle_stdlib {
            let pending = stdlib::SOURCES
                .iter()
                .map(|&(name, text)| Pending {
                    name: name.to_string(),
                    path: None,
                    text: text.to_string(),
                })
                .collect();
            builder.insert_parsed(None, pending);
        }
        builder
    }

    /// Read every module file directly inside `dir` into a new search-path
    /// root. Subdirectories are not searched.
    #[tracing::instrument(level = "debug", skip_all, fields(dir = %dir.display()))]
    pub fn load_dir(&mut self, dir: &Path, config: &ProjectConfig) -> Result<DirId, LoadError> {
        let metadata = fs::metadata(dir).map_err(|e| LoadError::io(dir, e))?;
        if !metadata.is_dir() {
            return Err(LoadError::NotADirectory(dir.to_path_buf()));
        }
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| LoadError::io(dir, e))? {
            let path = entry.map_err(|e| LoadError::io(dir, e))?.path();
            if path.is_file() && config.is_module_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut pending = Vec::with_capacity(paths.len());
        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::debug!(path = %path.display(), "skipping non UTF-8 file name");
                continue;
            };
            let name = name.to_string();
            let text = fs::read_to_string(&path).map_err(|e| LoadError::io(&path, e))?;
            pending.push(Pending {
                name,
                path: Some(path),
                text,
            });
        }
        tracing::debug!(files = pending.len(), "read module files");

        let id = self.snapshot.modules.add_dir();
        self.snapshot.dirs.push((id, Some(dir.to_path_buf())));
        self.insert_parsed(Some(id), pending);
        Ok(id)
    }

    /// Add `(module name, source)` pairs as a new in-memory directory.
    pub fn add_sources(&mut self, files: &[(&str, &str)]) -> DirId {
        let id = self.snapshot.modules.add_dir();
        self.snapshot.dirs.push((id, None));
        let pending = files
            .iter()
            .map(|&(name, text)| Pending {
                name: name.to_string(),
                path: None,
                text: text.to_string(),
            })
            .collect();
        self.insert_parsed(Some(id), pending);
        id
    }

    pub fn finish(self) -> Project {
        Project(Arc::new(self.snapshot))
    }

    fn insert_parsed(&mut self, dir: Option<DirId>, files: Vec<Pending>) {
        let outputs = parse_all(&self.snapshot.interner, &files);
        for (file, output) in files.into_iter().zip(outputs) {
            let name = self.snapshot.interner.intern(&file.name);
            if let Some(header) = output.tree.module_name() {
                if header != name {
                    tracing::warn!(
                        file = %file.name,
                        header = %self.snapshot.interner.lookup(header),
                        "module header does not match file name"
                    );
                }
            }
            let id = self.snapshot.modules.insert(dir, name, output.tree);
            let source = SourceFile::new(file.path, file.text, output.errors);
            self.snapshot.set_source(id, source);
        }
    }
}

/// Parse `files` on a scoped thread pool, in input order.
///
/// Falls back to parsing on the current thread if the pool cannot be
/// built.
fn parse_all(interner: &SharedInterner, files: &[Pending]) -> Vec<ParseOutput> {
    let parse = |file: &Pending| tla_parse::parse(&file.text, interner);
    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| files.par_iter().map(parse).collect::<Vec<_>>())
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), parsing sequentially");
            files.iter().map(parse).collect()
        })
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
