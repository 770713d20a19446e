//! Project configuration.

use std::ffi::OsStr;
use std::path::PathBuf;

/// Environment variable listing extra source directories, separated like
/// `PATH` (`:` on Unix).
pub const PATH_VAR: &str = "TLAREF_PATH";

/// Which directories make up a project and how they are read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Source directories. Each is its own search-path root: a module sees
    /// the modules of its own directory plus the standard modules.
    pub dirs: Vec<PathBuf>,
    /// Load the embedded standard modules. When off, the standard names
    /// stay available as header-only stubs.
    pub bundle_stdlib: bool,
    /// Extension of module files, without the dot.
    pub extension: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            dirs: Vec::new(),
            bundle_stdlib: true,
            extension: "tla".to_string(),
        }
    }
}

impl ProjectConfig {
    pub fn new() -> Self {
        ProjectConfig::default()
    }

    /// Add a source directory unless it is already listed.
    #[must_use]
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if !self.dirs.contains(&dir) {
            self.dirs.push(dir);
        }
        self
    }

    #[must_use]
    pub fn without_stdlib(mut self) -> Self {
        self.bundle_stdlib = false;
        self
    }

    /// Append the directories named by [`PATH_VAR`].
    #[must_use]
    pub fn with_env(self) -> Self {
        match std::env::var_os(PATH_VAR) {
            Some(value) => self.with_search_path(&value),
            None => self,
        }
    }

    /// Append the directories of a `PATH`-style list; empty entries are
    /// skipped.
    #[must_use]
    pub fn with_search_path(self, value: &OsStr) -> Self {
        std::env::split_paths(value)
            .filter(|dir| !dir.as_os_str().is_empty())
            .fold(self, ProjectConfig::with_dir)
    }

    /// Whether `path` names a module file.
    pub fn is_module_file(&self, path: &std::path::Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}
