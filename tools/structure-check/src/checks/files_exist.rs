use crate::checks::{CategoryResult, CheckKind, CheckResult};
use crate::config::CheckSpec;
use std::path::Path;

pub const NAME: &str = "file structure";

pub fn check(spec: &CheckSpec) -> CategoryResult {
    verify_files_exist(&spec.root_dir, &spec.required_files)
}

/// Check every path under `root`, files and directories alike.
///
/// Absence is a failed entry, not an error, and every path is checked even
/// after one is missing so the report is complete.
pub fn verify_files_exist<S: AsRef<str>>(root: &Path, relative_paths: &[S]) -> CategoryResult {
    let results = relative_paths
        .iter()
        .map(|rel| {
            let rel = rel.as_ref();
            CheckResult::new(rel, root.join(rel).exists())
        })
        .collect();

    CategoryResult::new(NAME, CheckKind::FileExists, results)
}
