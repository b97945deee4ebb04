use super::CliError;
use anyhow::Context;
use std::fs;
use std::path::Path;
use titrate_core::analysis::standards::{lookup_standard, standard_references, StandardReference};
use titrate_core::domain::{AnalysisOutcome, StandardComparison};
use titrate_core::report::format_fixed_f64;

pub(super) fn read_input_source(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read titration data file '{}'", path.display()))
        .map_err(CliError::from)
}

pub(super) fn resolve_standard(name: &str) -> Result<StandardReference, CliError> {
    lookup_standard(name).ok_or_else(|| {
        let known: Vec<String> = standard_references()
            .into_iter()
            .map(|standard| standard.name)
            .collect();
        CliError::Usage(format!(
            "unknown standard '{}'; known standards: {}",
            name,
            known.join(", ")
        ))
    })
}

/// Parses `name:pKa`, e.g. `Formic Acid:3.75`. The last colon splits the
/// fields so names containing colons keep working.
pub(super) fn parse_custom_standard(spec: &str) -> Result<StandardReference, CliError> {
    let Some((name, pka_field)) = spec.rsplit_once(':') else {
        return Err(CliError::Usage(format!(
            "invalid custom standard '{spec}'; expected 'name:pKa'"
        )));
    };
    let name = name.trim();
    let pka: f64 = pka_field.trim().parse().map_err(|_| {
        CliError::Usage(format!(
            "invalid custom standard pKa '{}' in '{spec}'",
            pka_field.trim()
        ))
    })?;
    if name.is_empty() || !pka.is_finite() {
        return Err(CliError::Usage(format!(
            "invalid custom standard '{spec}'; expected 'name:pKa'"
        )));
    }
    Ok(StandardReference::custom(name, pka))
}

pub(super) fn render_human_summary(
    outcome: &AnalysisOutcome,
    comparison: Option<&StandardComparison>,
) -> String {
    let result = &outcome.result;
    let mut summary = format!(
        "Equivalence point volume: {} mL\nHalf-equivalence volume: {} mL\npKa: {}",
        format_fixed_f64(result.equivalence_volume, 2),
        format_fixed_f64(result.half_equivalence_volume, 2),
        format_fixed_f64(result.pka, 2),
    );

    if let Some(comparison) = comparison {
        summary.push_str(&format!(
            "\nStandard: {} (pKa {})\nDifference: {}\nAccuracy: {}%",
            comparison.standard_name,
            format_fixed_f64(comparison.standard_pka, 2),
            format_fixed_f64(comparison.difference, 2),
            format_fixed_f64(comparison.accuracy_percent, 2),
        ));
    }

    summary
}
