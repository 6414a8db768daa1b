use indexmap::IndexSet;
use serde::Serialize;
use std::path::Path;

/// Declared variable names in first-occurrence order.
pub type VarSet = IndexSet<String>;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    TemplateMissing,
    ActualFileMissing,
    MissingVariables,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanityReport {
    pub status: CheckStatus,
    pub template: String,
    pub actual: String,
    /// `None` when the template was never parsed.
    pub template_count: Option<usize>,
    /// `None` when the actual file was never parsed.
    pub actual_count: Option<usize>,
    pub missing: Vec<String>,
}

impl SanityReport {
    pub fn new(status: CheckStatus, template: &Path, actual: &Path) -> Self {
        Self {
            status,
            template: template.display().to_string(),
            actual: actual.display().to_string(),
            template_count: None,
            actual_count: None,
            missing: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }
}
