use crate::domain::models::{CheckStatus, JsonOut, SanityReport};
use std::io::{self, Write};

pub fn render_text(report: &SanityReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "running env sanity check...")?;

    if report.status == CheckStatus::TemplateMissing {
        writeln!(out, "error: {} not found", report.template)?;
        return Ok(());
    }
    if let Some(count) = report.template_count {
        writeln!(out, "template expects {} variables", count)?;
    }

    if report.status == CheckStatus::ActualFileMissing {
        writeln!(
            out,
            "error: {} not found, did you forget to copy the template?",
            report.actual
        )?;
        writeln!(out, "hint: cp {} {}", report.template, report.actual)?;
        return Ok(());
    }
    if let Some(count) = report.actual_count {
        writeln!(out, "{} has {} variables", report.actual, count)?;
    }

    if report.missing.is_empty() {
        writeln!(out, "all variables present")?;
    } else {
        writeln!(out, "missing {} variable(s):", report.missing.len())?;
        for name in &report.missing {
            writeln!(out, "  - {}", name)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "hint: fill in every variable listed in {}",
            report.template
        )?;
    }
    Ok(())
}

pub fn render_json(report: &SanityReport, out: &mut impl Write) -> io::Result<()> {
    let envelope = JsonOut {
        ok: report.passed(),
        data: report,
    };
    serde_json::to_writer_pretty(&mut *out, &envelope)?;
    writeln!(out)
}
