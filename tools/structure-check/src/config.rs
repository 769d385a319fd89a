use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CheckError;

pub const DEFAULT_TITLE: &str = "Local Orchestrator Tray - Simple Tests";

/// Top-level files every checkout of the tray project ships with.
pub const DEFAULT_REQUIRED_FILES: &[&str] = &[
    "local_orchestrator_tray.py",
    "setup.py",
    "pyproject.toml",
    "requirements.txt",
    "README.md",
    "LICENSE",
];

pub const DEFAULT_CONTENT_TARGET: &str = "local_orchestrator_tray.py";

/// Markers the tray module must contain: app class, entry point, both menu
/// labels, and the config directory fragment.
pub const DEFAULT_REQUIRED_SUBSTRINGS: &[&str] = &[
    "class LocalOrchestratorTray",
    "def main()",
    "Open configuration",
    "Quit",
    ".config",
];

/// What to do when the content target cannot be read at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFaultPolicy {
    /// Abort the run with [`CheckError::Read`].
    #[default]
    Fatal,
    /// Record a single failed entry and keep going.
    Failure,
}

/// Everything one run checks. Built once, never mutated by the checks.
#[derive(Debug, Clone)]
pub struct CheckSpec {
    pub title: String,
    pub root_dir: PathBuf,
    pub required_files: Vec<String>,
    pub content_target: String,
    pub required_substrings: Vec<String>,
    pub read_fault_policy: ReadFaultPolicy,
}

/// Optional JSON overrides for the default check lists.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub title: Option<String>,
    pub required_files: Option<Vec<String>>,
    pub content_target: Option<String>,
    pub required_substrings: Option<Vec<String>>,
}

impl CheckSpec {
    pub fn from_root(root: &Path) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            root_dir: root.to_path_buf(),
            required_files: DEFAULT_REQUIRED_FILES.iter().map(|s| s.to_string()).collect(),
            content_target: DEFAULT_CONTENT_TARGET.to_string(),
            required_substrings: DEFAULT_REQUIRED_SUBSTRINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            read_fault_policy: ReadFaultPolicy::default(),
        }
    }

    /// Project root for a run without `--root-dir`: the nearest ancestor of
    /// cwd holding a `.git` entry, else cwd itself.
    pub fn discover() -> Result<PathBuf, CheckError> {
        let cwd = std::env::current_dir().map_err(CheckError::WorkingDir)?;
        Ok(find_repo_root(&cwd).unwrap_or(cwd))
    }

    pub fn content_path(&self) -> PathBuf {
        self.root_dir.join(&self.content_target)
    }

    pub fn apply_manifest(mut self, manifest: Manifest) -> Self {
        if let Some(title) = manifest.title {
            self.title = title;
        }
        if let Some(files) = manifest.required_files {
            self.required_files = files;
        }
        if let Some(target) = manifest.content_target {
            self.content_target = target;
        }
        if let Some(substrings) = manifest.required_substrings {
            self.required_substrings = substrings;
        }
        self
    }

    /// Labels double as lookup keys, so none of them may be empty.
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.required_files.iter().any(String::is_empty) {
            return Err(CheckError::EmptyLabel { field: "required_files" });
        }
        if self.content_target.is_empty() {
            return Err(CheckError::EmptyLabel { field: "content_target" });
        }
        if self.required_substrings.iter().any(String::is_empty) {
            return Err(CheckError::EmptyLabel { field: "required_substrings" });
        }
        Ok(())
    }
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(".git").exists() {
            return Some(dir);
        }
        if !dir.pop() {
            return None;
        }
    }
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, CheckError> {
        let text = fs::read_to_string(path).map_err(|source| CheckError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CheckError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
