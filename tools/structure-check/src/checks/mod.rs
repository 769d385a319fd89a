pub mod content_contains;
pub mod files_exist;

use serde::Serialize;

/// Outcome of one labelled assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub label: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    FileExists,
    ContentContains,
}

/// All entries of one check category, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResult {
    pub name: String,
    pub kind: CheckKind,
    passed: bool,
    pub results: Vec<CheckResult>,
}

impl CheckResult {
    pub fn new(label: impl Into<String>, passed: bool) -> Self {
        Self { label: label.into(), passed, detail: None }
    }
}

impl CategoryResult {
    pub fn new(name: impl Into<String>, kind: CheckKind, results: Vec<CheckResult>) -> Self {
        let passed = results.iter().all(|r| r.passed);
        Self { name: name.into(), kind, passed, results }
    }

    /// Logical AND over every entry; an empty category passes.
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}
