use crate::checks::{CategoryResult, CheckKind, CheckResult};
use crate::config::{CheckSpec, ReadFaultPolicy};
use crate::error::CheckError;
use std::fs;
use std::path::Path;

pub const NAME: &str = "main module content";

pub fn check(spec: &CheckSpec) -> Result<CategoryResult, CheckError> {
    let path = spec.content_path();
    match verify_content_contains(&path, &spec.required_substrings) {
        Err(CheckError::Read { source, .. })
            if spec.read_fault_policy == ReadFaultPolicy::Failure =>
        {
            let mut entry = CheckResult::new(spec.content_target.as_str(), false);
            entry.detail = Some(source.to_string());
            Ok(CategoryResult::new(NAME, CheckKind::ContentContains, vec![entry]))
        }
        other => other,
    }
}

/// Read `file_path` whole and check each substring as a literal,
/// case-sensitive infix.
pub fn verify_content_contains<S: AsRef<str>>(
    file_path: &Path,
    required_substrings: &[S],
) -> Result<CategoryResult, CheckError> {
    let content = fs::read_to_string(file_path).map_err(|source| CheckError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;

    Ok(CategoryResult::new(
        NAME,
        CheckKind::ContentContains,
        content_results(&content, required_substrings),
    ))
}

fn content_results<S: AsRef<str>>(content: &str, required: &[S]) -> Vec<CheckResult> {
    required
        .iter()
        .map(|item| {
            let item = item.as_ref();
            CheckResult::new(item, content.contains(item))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_sensitive() {
        let results = content_results("def main():\n    quit()\n", &["def main()", "Quit"]);
        assert!(results[0].passed);
        assert!(!results[1].passed);
    }

    #[test]
    fn pattern_characters_are_literal() {
        let results = content_results("path = home / 'xconfig'", &[".config"]);
        assert!(!results[0].passed);

        let results = content_results("path = home / '.config'", &[".config", "def main()"]);
        assert!(results[0].passed);
        assert!(!results[1].passed);
    }

    #[test]
    fn unreadable_file_is_a_read_fault() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("local_orchestrator_tray.py");
        let err = verify_content_contains(&missing, &["Quit"]).unwrap_err();
        match err {
            CheckError::Read { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lenient_policy_turns_fault_into_failed_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut spec = CheckSpec::from_root(dir.path());
        spec.read_fault_policy = ReadFaultPolicy::Failure;

        let result = check(&spec).unwrap();
        assert!(!result.passed());
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].label, "local_orchestrator_tray.py");
        assert!(result.results[0].detail.is_some());
    }
}
