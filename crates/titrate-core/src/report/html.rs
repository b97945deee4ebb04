use super::{format_fixed_f64, ReportInputs};
use std::fmt::Write as _;

/// Self-contained HTML report: details, input table, numeric results, the
/// two inline SVG charts and the optional standard comparison.
pub fn render_html_report(
    inputs: &ReportInputs<'_>,
    derivative_svg: &str,
    titration_svg: &str,
) -> String {
    let result = &inputs.outcome.result;

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>Titration Analysis Report</title>\n");
    html.push_str(
        "<style>\nbody { font-family: sans-serif; color: #222222; max-width: 860px; margin: auto; }\n\
         h1 { text-align: center; }\n\
         table { border-collapse: collapse; }\n\
         th, td { border: 1px solid #bbbbbb; padding: 6px 14px; text-align: center; }\n\
         th { background-color: #ececec; }\n</style>\n",
    );
    html.push_str("</head>\n<body>\n<h1>Titration Analysis Report</h1>\n");

    render_details(&mut html, inputs);
    render_input_table(&mut html, inputs);

    html.push_str("<h2>Results</h2>\n<ul>\n");
    let _ = writeln!(
        html,
        "<li>Equivalence point volume: {} mL</li>",
        format_fixed_f64(result.equivalence_volume, 2)
    );
    let _ = writeln!(
        html,
        "<li>Half-equivalence volume: {} mL</li>",
        format_fixed_f64(result.half_equivalence_volume, 2)
    );
    let _ = writeln!(html, "<li>pKa: {}</li>", format_fixed_f64(result.pka, 2));
    html.push_str("</ul>\n");

    html.push_str("<h2>Graphs</h2>\n<h3>Derivative Curve</h3>\n");
    html.push_str(derivative_svg);
    html.push_str("<h3>Titration Curve</h3>\n");
    html.push_str(titration_svg);

    render_comparison(&mut html, inputs);

    html.push_str("</body>\n</html>\n");
    html
}

fn render_details(html: &mut String, inputs: &ReportInputs<'_>) {
    let details = inputs.details;
    if details.sample_name.is_none() && details.analyst.is_none() {
        return;
    }

    html.push_str("<h2>Details</h2>\n<ul>\n");
    if let Some(sample_name) = &details.sample_name {
        let _ = writeln!(html, "<li>Sample: {}</li>", escape_text(sample_name));
    }
    if let Some(analyst) = &details.analyst {
        let _ = writeln!(html, "<li>Analyst: {}</li>", escape_text(analyst));
    }
    html.push_str("</ul>\n");
}

fn render_input_table(html: &mut String, inputs: &ReportInputs<'_>) {
    html.push_str("<h2>Input Data</h2>\n<table>\n");
    html.push_str("<tr><th>Volume (mL)</th><th>pH</th></tr>\n");
    for (volume, ph) in inputs.series.points() {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td></tr>",
            format_fixed_f64(volume, 2),
            format_fixed_f64(ph, 2)
        );
    }
    html.push_str("</table>\n");
}

fn render_comparison(html: &mut String, inputs: &ReportInputs<'_>) {
    let Some(comparison) = inputs.comparison else {
        return;
    };

    html.push_str("<h2>Comparison with Standard</h2>\n<ul>\n");
    let _ = writeln!(
        html,
        "<li>Standard: {}</li>",
        escape_text(&comparison.standard_name)
    );
    let _ = writeln!(
        html,
        "<li>Standard pKa: {}</li>",
        format_fixed_f64(comparison.standard_pka, 2)
    );
    let _ = writeln!(
        html,
        "<li>Calculated pKa: {}</li>",
        format_fixed_f64(comparison.measured_pka, 2)
    );
    let _ = writeln!(
        html,
        "<li>Difference: {}</li>",
        format_fixed_f64(comparison.difference, 2)
    );
    let _ = writeln!(
        html,
        "<li>Accuracy: {}%</li>",
        format_fixed_f64(comparison.accuracy_percent, 2)
    );
    html.push_str("</ul>\n");
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
