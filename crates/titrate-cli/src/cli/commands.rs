use super::helpers::{
    parse_custom_standard, read_input_source, render_human_summary, resolve_standard,
};
use super::CliError;
use std::path::PathBuf;
use titrate_core::analysis::standards::compare_to_standard;
use titrate_core::analysis::{
    analyze, parse_series_source_with_count, standard_references, AnalyzerConfig,
    DEFAULT_PROMINENCE_FRACTION,
};
use titrate_core::report::{write_report_artifacts, ReportDetails, ReportInputs};
use tracing::{debug, info};

#[derive(clap::Args)]
pub(super) struct AnalyzeArgs {
    /// Titration data file, one `volume pH` pair per line
    input: PathBuf,

    /// Declared number of data points; must match the file contents
    #[arg(long)]
    points: Option<usize>,

    /// Output directory for report artifacts
    #[arg(long, default_value = "artifacts/titration")]
    output: PathBuf,

    /// Minimum peak prominence as a fraction of the largest derivative value
    #[arg(long, default_value_t = DEFAULT_PROMINENCE_FRACTION)]
    prominence: f64,

    /// Standard from the built-in reference table to compare against
    #[arg(long)]
    standard: Option<String>,

    /// Custom comparison standard as `name:pKa`
    #[arg(long, conflicts_with = "standard", value_name = "NAME:PKA")]
    custom_standard: Option<String>,

    /// Sample name recorded in the report
    #[arg(long)]
    sample: Option<String>,

    /// Analyst name recorded in the report
    #[arg(long)]
    analyst: Option<String>,
}

pub(super) fn run_analyze_command(args: AnalyzeArgs) -> Result<i32, CliError> {
    let source = read_input_source(&args.input)?;
    let series = parse_series_source_with_count(&source, args.points)
        .map_err(CliError::Analysis)?;
    debug!(points = series.len(), input = %args.input.display(), "parsed titration series");

    let config = AnalyzerConfig {
        prominence_fraction: args.prominence,
    };
    let outcome = analyze(&series, &config).map_err(CliError::Analysis)?;
    info!(
        equivalence_volume = outcome.result.equivalence_volume,
        pka = outcome.result.pka,
        "analysis complete"
    );

    let reference = match (&args.standard, &args.custom_standard) {
        (Some(name), _) => Some(resolve_standard(name)?),
        (None, Some(spec)) => Some(parse_custom_standard(spec)?),
        (None, None) => None,
    };
    let comparison = reference
        .as_ref()
        .map(|reference| compare_to_standard(outcome.result.pka, reference));

    let details = ReportDetails {
        sample_name: args.sample,
        analyst: args.analyst,
    };
    let artifacts = write_report_artifacts(
        &args.output,
        &ReportInputs {
            series: &series,
            outcome: &outcome,
            comparison: comparison.as_ref(),
            details: &details,
        },
    )
    .map_err(CliError::Report)?;

    println!("{}", render_human_summary(&outcome, comparison.as_ref()));
    println!(
        "Wrote {} report artifacts to '{}'.",
        artifacts.len(),
        args.output.display()
    );
    Ok(0)
}

pub(super) fn run_standards_command() -> Result<i32, CliError> {
    println!("Standard reference pKa values:");
    for standard in standard_references() {
        println!("  {:<24} {:>7.2}", standard.name, standard.pka);
    }
    Ok(0)
}
