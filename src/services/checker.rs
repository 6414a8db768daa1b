use crate::domain::constants::{DEFAULT_ENV_FILE, DEFAULT_TEMPLATE};
use crate::domain::models::{CheckStatus, SanityReport, VarSet};
use crate::services::output::render_text;
use crate::services::parser::read_var_file;
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum SanityError {
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write report")]
    Output(#[source] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct EnvSanityChecker {
    template: PathBuf,
    actual: PathBuf,
}

impl Default for EnvSanityChecker {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE, DEFAULT_ENV_FILE)
    }
}

impl EnvSanityChecker {
    pub fn new(template: impl Into<PathBuf>, actual: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            actual: actual.into(),
        }
    }

    /// Checker for the default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_TEMPLATE), dir.join(DEFAULT_ENV_FILE))
    }

    pub fn template(&self) -> &Path {
        &self.template
    }

    pub fn actual(&self) -> &Path {
        &self.actual
    }

    /// Runs the check without printing anything.
    ///
    /// The template is always checked and parsed before the actual file is
    /// looked at; a missing template means the actual file is never touched.
    pub fn inspect(&self) -> Result<SanityReport, SanityError> {
        debug!("template path: {}", self.template.display());
        if !self.template.exists() {
            return Ok(SanityReport::new(
                CheckStatus::TemplateMissing,
                &self.template,
                &self.actual,
            ));
        }
        let template_vars = read_var_file(&self.template)?;
        debug!("template declares {} variables", template_vars.len());

        debug!("actual path: {}", self.actual.display());
        if !self.actual.exists() {
            let mut report =
                SanityReport::new(CheckStatus::ActualFileMissing, &self.template, &self.actual);
            report.template_count = Some(template_vars.len());
            return Ok(report);
        }
        let actual_vars = read_var_file(&self.actual)?;
        debug!("actual file declares {} variables", actual_vars.len());

        let missing = missing_vars(&template_vars, &actual_vars);
        let status = if missing.is_empty() {
            CheckStatus::Passed
        } else {
            CheckStatus::MissingVariables
        };
        info!("sanity check finished: {:?} ({} missing)", status, missing.len());

        let mut report = SanityReport::new(status, &self.template, &self.actual);
        report.template_count = Some(template_vars.len());
        report.actual_count = Some(actual_vars.len());
        report.missing = missing;
        Ok(report)
    }

    /// Runs the check and writes the human-readable report to `out`.
    pub fn check(&self, out: &mut impl Write) -> Result<bool, SanityError> {
        let report = self.inspect()?;
        render_text(&report, out).map_err(SanityError::Output)?;
        Ok(report.passed())
    }
}

/// Template names absent from `actual`, in template order.
pub fn missing_vars(template: &VarSet, actual: &VarSet) -> Vec<String> {
    template
        .iter()
        .filter(|name| !actual.contains(name.as_str()))
        .cloned()
        .collect()
}

/// Checks `.env` against `.env.example` in the current directory, printing to
/// stdout. Returns `true` when every template variable is declared.
pub fn check_sanity() -> bool {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report_sanity(&EnvSanityChecker::default(), &mut out)
}

/// Like [`EnvSanityChecker::check`], but read failures are written to `out`
/// and turn into `false`.
pub fn report_sanity(checker: &EnvSanityChecker, out: &mut impl Write) -> bool {
    match checker.check(&mut *out) {
        Ok(ok) => ok,
        Err(err) => {
            log::error!("{}", err);
            let _ = match std::error::Error::source(&err) {
                Some(cause) => writeln!(out, "error: {}: {}", err, cause),
                None => writeln!(out, "error: {}", err),
            };
            false
        }
    }
}
