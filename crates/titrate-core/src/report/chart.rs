use super::format_fixed_f64;
use crate::domain::{AnalysisOutcome, TitrationSeries};
use std::fmt::Write as _;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 44.0;
const MARGIN_BOTTOM: f64 = 52.0;

const CURVE_COLOR: &str = "#283593";
const EQUIVALENCE_COLOR: &str = "#c2185b";
const HALF_EQUIVALENCE_COLOR: &str = "#2e7d32";

/// pH vs volume with the equivalence and half-equivalence points marked.
pub fn render_titration_chart(series: &TitrationSeries, outcome: &AnalysisOutcome) -> String {
    let result = &outcome.result;
    let equivalence_ph = series.phs()[result.equivalence_index];

    render_line_chart(&LineChart {
        title: "Titration Curve",
        x_label: "Volume (mL)",
        y_label: "pH",
        xs: series.volumes(),
        ys: series.phs(),
        markers: &[
            Marker {
                x: result.equivalence_volume,
                y: equivalence_ph,
                color: EQUIVALENCE_COLOR,
                label: "Equivalence point",
            },
            Marker {
                x: result.half_equivalence_volume,
                y: result.pka,
                color: HALF_EQUIVALENCE_COLOR,
                label: "Half-equivalence (pKa)",
            },
        ],
    })
}

/// dpH/dV vs volume with the equivalence point marked.
pub fn render_derivative_chart(outcome: &AnalysisOutcome) -> String {
    let curve = &outcome.derivative;
    let result = &outcome.result;

    render_line_chart(&LineChart {
        title: "Derivative Curve",
        x_label: "Volume (mL)",
        y_label: "dpH/dV",
        xs: &curve.volumes,
        ys: &curve.slopes,
        markers: &[Marker {
            x: result.equivalence_volume,
            y: curve.slopes[result.equivalence_index],
            color: EQUIVALENCE_COLOR,
            label: "Equivalence point",
        }],
    })
}

struct Marker {
    x: f64,
    y: f64,
    color: &'static str,
    label: &'static str,
}

struct LineChart<'a> {
    title: &'static str,
    x_label: &'static str,
    y_label: &'static str,
    xs: &'a [f64],
    ys: &'a [f64],
    markers: &'a [Marker],
}

struct Frame {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Frame {
    fn for_data(xs: &[f64], ys: &[f64]) -> Self {
        let (x_min, x_max) = padded_range(xs);
        let (y_min, y_max) = padded_range(ys);
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    fn px(&self, x: f64) -> f64 {
        MARGIN_LEFT
            + (x - self.x_min) / (self.x_max - self.x_min)
                * (CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT)
    }

    fn py(&self, y: f64) -> f64 {
        CHART_HEIGHT
            - MARGIN_BOTTOM
            - (y - self.y_min) / (self.y_max - self.y_min)
                * (CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM)
    }
}

fn padded_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    // A flat curve still needs a non-degenerate viewport.
    let pad = if span > 0.0 { span * 0.05 } else { 0.5 };
    (min - pad, max + pad)
}

fn render_line_chart(chart: &LineChart<'_>) -> String {
    let frame = Frame::for_data(chart.xs, chart.ys);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CHART_WIDTH}" height="{CHART_HEIGHT}" viewBox="0 0 {CHART_WIDTH} {CHART_HEIGHT}">"#
    );
    let _ = writeln!(
        svg,
        r##"  <rect width="{CHART_WIDTH}" height="{CHART_HEIGHT}" fill="#ffffff"/>"##
    );
    let _ = writeln!(
        svg,
        r##"  <text x="{}" y="24" text-anchor="middle" font-family="sans-serif" font-size="16" fill="#333333">{}</text>"##,
        CHART_WIDTH / 2.0,
        chart.title
    );

    // Axes.
    let x_axis_y = CHART_HEIGHT - MARGIN_BOTTOM;
    let _ = writeln!(
        svg,
        r##"  <line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{x_axis_y}" stroke="#888888"/>"##
    );
    let _ = writeln!(
        svg,
        r##"  <line x1="{MARGIN_LEFT}" y1="{x_axis_y}" x2="{}" y2="{x_axis_y}" stroke="#888888"/>"##,
        CHART_WIDTH - MARGIN_RIGHT
    );
    let _ = writeln!(
        svg,
        r##"  <text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="12" fill="#333333">{}</text>"##,
        (MARGIN_LEFT + CHART_WIDTH - MARGIN_RIGHT) / 2.0,
        CHART_HEIGHT - 12.0,
        chart.x_label
    );
    let _ = writeln!(
        svg,
        r##"  <text x="16" y="{}" text-anchor="middle" font-family="sans-serif" font-size="12" fill="#333333" transform="rotate(-90 16 {})">{}</text>"##,
        (MARGIN_TOP + x_axis_y) / 2.0,
        (MARGIN_TOP + x_axis_y) / 2.0,
        chart.y_label
    );

    // Range labels on both axes.
    let _ = writeln!(
        svg,
        r##"  <text x="{MARGIN_LEFT}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="11" fill="#555555">{}</text>"##,
        x_axis_y + 18.0,
        format_fixed_f64(frame.x_min, 2)
    );
    let _ = writeln!(
        svg,
        r##"  <text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="11" fill="#555555">{}</text>"##,
        CHART_WIDTH - MARGIN_RIGHT,
        x_axis_y + 18.0,
        format_fixed_f64(frame.x_max, 2)
    );
    let _ = writeln!(
        svg,
        r##"  <text x="{}" y="{x_axis_y}" text-anchor="end" font-family="sans-serif" font-size="11" fill="#555555">{}</text>"##,
        MARGIN_LEFT - 6.0,
        format_fixed_f64(frame.y_min, 2)
    );
    let _ = writeln!(
        svg,
        r##"  <text x="{}" y="{}" text-anchor="end" font-family="sans-serif" font-size="11" fill="#555555">{}</text>"##,
        MARGIN_LEFT - 6.0,
        MARGIN_TOP + 4.0,
        format_fixed_f64(frame.y_max, 2)
    );

    // Data polyline.
    let points: Vec<String> = chart
        .xs
        .iter()
        .copied()
        .zip(chart.ys.iter().copied())
        .map(|(x, y)| {
            format!(
                "{},{}",
                format_fixed_f64(frame.px(x), 2),
                format_fixed_f64(frame.py(y), 2)
            )
        })
        .collect();
    let _ = writeln!(
        svg,
        r#"  <polyline points="{}" fill="none" stroke="{CURVE_COLOR}" stroke-width="2"/>"#,
        points.join(" ")
    );

    for (marker_index, marker) in chart.markers.iter().enumerate() {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="5" fill="{}"/>"#,
            format_fixed_f64(frame.px(marker.x), 2),
            format_fixed_f64(frame.py(marker.y), 2),
            marker.color
        );
        let legend_y = MARGIN_TOP + 14.0 * marker_index as f64;
        let _ = writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="4" fill="{}"/>"#,
            CHART_WIDTH - MARGIN_RIGHT - 180.0,
            legend_y,
            marker.color
        );
        let _ = writeln!(
            svg,
            r##"  <text x="{}" y="{}" font-family="sans-serif" font-size="11" fill="#333333">{} ({}, {})</text>"##,
            CHART_WIDTH - MARGIN_RIGHT - 170.0,
            legend_y + 4.0,
            marker.label,
            format_fixed_f64(marker.x, 2),
            format_fixed_f64(marker.y, 2)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::{render_derivative_chart, render_titration_chart};
    use crate::analysis::{analyze, AnalyzerConfig};
    use crate::domain::TitrationSeries;

    fn fixture() -> (TitrationSeries, crate::domain::AnalysisOutcome) {
        let series = TitrationSeries::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
            vec![2.0, 2.1, 2.3, 2.8, 7.0, 11.0, 11.3, 11.5, 11.6],
        )
        .expect("valid series");
        let outcome = analyze(&series, &AnalyzerConfig::default()).expect("analysis");
        (series, outcome)
    }

    #[test]
    fn titration_chart_marks_both_analysis_points() {
        let (series, outcome) = fixture();
        let svg = render_titration_chart(&series, &outcome);

        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Titration Curve"));
        assert!(svg.contains("Equivalence point (4.00, 7.00)"));
        assert!(svg.contains("Half-equivalence (pKa) (2.00, 2.30)"));
    }

    #[test]
    fn derivative_chart_marks_the_equivalence_point() {
        let (_, outcome) = fixture();
        let svg = render_derivative_chart(&outcome);

        assert!(svg.contains("Derivative Curve"));
        assert!(svg.contains("dpH/dV"));
        assert!(svg.contains("Equivalence point (4.00, 4.10)"));
    }

    #[test]
    fn chart_rendering_is_deterministic() {
        let (series, outcome) = fixture();
        assert_eq!(
            render_titration_chart(&series, &outcome),
            render_titration_chart(&series, &outcome)
        );
    }
}
