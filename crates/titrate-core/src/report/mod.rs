//! Report artifact rendering: deterministic SVG charts, a self-contained
//! HTML report and a JSON summary, written with normalized line endings so
//! repeated runs produce byte-identical files.

mod chart;
mod html;

pub use chart::{render_derivative_chart, render_titration_chart};
pub use html::render_html_report;

use crate::domain::{AnalysisOutcome, StandardComparison, TitrationSeries};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DERIVATIVE_CHART_FILE: &str = "derivative_curve.svg";
pub const TITRATION_CHART_FILE: &str = "titration_curve.svg";
pub const HTML_REPORT_FILE: &str = "report.html";
pub const JSON_REPORT_FILE: &str = "report.json";

/// Free-form metadata echoed into the report header.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetails {
    pub sample_name: Option<String>,
    pub analyst: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub series: &'a TitrationSeries,
    pub outcome: &'a AnalysisOutcome,
    pub comparison: Option<&'a StandardComparison>,
    pub details: &'a ReportDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub relative_path: PathBuf,
}

impl ReportArtifact {
    pub fn new(relative_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to create report directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write report artifact '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize JSON report: {source}")]
    Serialize { source: serde_json::Error },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    details: &'a ReportDetails,
    series: &'a TitrationSeries,
    analysis: &'a AnalysisOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<&'a StandardComparison>,
}

pub fn render_json_report(inputs: &ReportInputs<'_>) -> Result<String, ReportError> {
    let report = JsonReport {
        details: inputs.details,
        series: inputs.series,
        analysis: inputs.outcome,
        comparison: inputs.comparison,
    };
    serde_json::to_string_pretty(&report).map_err(|source| ReportError::Serialize { source })
}

/// Writes the four report artifacts into `output_dir` and returns them in
/// a stable order: derivative chart, titration chart, HTML, JSON.
pub fn write_report_artifacts(
    output_dir: &Path,
    inputs: &ReportInputs<'_>,
) -> Result<Vec<ReportArtifact>, ReportError> {
    fs::create_dir_all(output_dir).map_err(|source| ReportError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let derivative_svg = render_derivative_chart(inputs.outcome);
    let titration_svg = render_titration_chart(inputs.series, inputs.outcome);
    let html = render_html_report(inputs, &derivative_svg, &titration_svg);
    let json = render_json_report(inputs)?;

    write_text_artifact(&output_dir.join(DERIVATIVE_CHART_FILE), &derivative_svg)?;
    write_text_artifact(&output_dir.join(TITRATION_CHART_FILE), &titration_svg)?;
    write_text_artifact(&output_dir.join(HTML_REPORT_FILE), &html)?;
    write_text_artifact(&output_dir.join(JSON_REPORT_FILE), &json)?;

    Ok(vec![
        ReportArtifact::new(DERIVATIVE_CHART_FILE),
        ReportArtifact::new(TITRATION_CHART_FILE),
        ReportArtifact::new(HTML_REPORT_FILE),
        ReportArtifact::new(JSON_REPORT_FILE),
    ])
}

pub fn format_fixed_f64(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

fn write_text_artifact(path: &Path, content: &str) -> Result<(), ReportError> {
    fs::write(path, normalize_text_artifact(content)).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{format_fixed_f64, normalize_text_artifact};

    #[test]
    fn fixed_float_formatting_is_deterministic() {
        assert_eq!(format_fixed_f64(1.2345, 2), "1.23");
        assert_eq!(format_fixed_f64(-6.3, 2), "-6.30");
        assert_eq!(format_fixed_f64(4.0, 2), format_fixed_f64(4.0, 2));
    }

    #[test]
    fn normalize_text_artifact_uses_canonical_line_endings() {
        let normalized = normalize_text_artifact("alpha\r\nbeta\rgamma");
        assert_eq!(normalized, "alpha\nbeta\ngamma\n");
    }
}
