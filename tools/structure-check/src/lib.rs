pub mod checks;
pub mod config;
pub mod error;
pub mod reporter;

use std::io::Write;
use std::time::Instant;

use serde::Serialize;

use checks::CategoryResult;
use config::CheckSpec;
use error::CheckError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub format: OutputFormat,
    /// Set when the writer is the process stdout.
    pub color: bool,
    /// Per-category elapsed time on stderr.
    pub debug_timing: bool,
}

/// Everything a run found, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub title: String,
    pub passed: bool,
    pub categories: Vec<CategoryResult>,
}

/// Run the file check then the content check, streaming text output as each
/// category completes.
///
/// A read fault on the content target returns early with `Err`, so the
/// summary banner is never written for that run.
pub fn run_all<W: Write>(
    out: &mut W,
    spec: &CheckSpec,
    options: RunOptions,
) -> Result<RunReport, CheckError> {
    spec.validate()?;
    let text = options.format == OutputFormat::Text;

    if text {
        reporter::print_header(out, &spec.title, options.color)?;
    }

    let start = Instant::now();
    let files = checks::files_exist::check(spec);
    if options.debug_timing {
        eprintln!("  [{:>6.0?}] {}", start.elapsed(), files.name);
    }
    if text {
        reporter::print_category(out, &files, options.color)?;
    }

    let start = Instant::now();
    let content = checks::content_contains::check(spec)?;
    if options.debug_timing {
        eprintln!("  [{:>6.0?}] {}", start.elapsed(), content.name);
    }
    if text {
        reporter::print_category(out, &content, options.color)?;
    }

    let categories = vec![files, content];
    let passed = if text {
        reporter::print_summary(out, &categories, options.color)?
    } else {
        categories.iter().all(CategoryResult::passed)
    };

    let report = RunReport {
        title: spec.title.clone(),
        passed,
        categories,
    };
    if !text {
        reporter::print_json(out, &report)?;
    }
    out.flush()?;

    Ok(report)
}

/// 0 when every check passed, 1 on any failure or fault.
pub fn exit_code(outcome: &Result<RunReport, CheckError>) -> i32 {
    match outcome {
        Ok(report) if report.passed => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn json_format_writes_only_the_report() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("local_orchestrator_tray.py"), "Quit").unwrap();
        let spec = CheckSpec::from_root(root.path());

        let mut buf = Vec::new();
        let options = RunOptions { format: OutputFormat::Json, ..RunOptions::default() };
        let outcome = run_all(&mut buf, &spec, options);
        assert_eq!(exit_code(&outcome), 1);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["passed"], false);
        assert_eq!(value["categories"][0]["kind"], "file_exists");
        assert_eq!(value["categories"][0]["passed"], false);
        assert_eq!(value["categories"][1]["passed"], false);
        assert_eq!(value["categories"][1]["results"][3]["label"], "Quit");
        assert_eq!(value["categories"][1]["results"][3]["passed"], true);
    }

    #[test]
    fn invalid_spec_is_rejected_before_any_output() {
        let root = tempfile::tempdir().unwrap();
        let mut spec = CheckSpec::from_root(root.path());
        spec.required_files.push(String::new());

        let mut buf = Vec::new();
        let outcome = run_all(&mut buf, &spec, RunOptions::default());
        assert!(matches!(outcome, Err(CheckError::EmptyLabel { .. })));
        assert!(buf.is_empty());
    }
}
