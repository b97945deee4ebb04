use crate::domain::{
    AnalysisOutcome, AnalysisResult, DerivativeCurve, TitrationError, TitrationResult,
    TitrationSeries,
};
use crate::numerics::{
    find_prominent_peaks, gradient_curve, interpolate_linear, GradientInput,
    LinearInterpolationInput,
};

/// Minimum peak prominence as a fraction of the largest derivative value.
pub const DEFAULT_PROMINENCE_FRACTION: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerConfig {
    pub prominence_fraction: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            prominence_fraction: DEFAULT_PROMINENCE_FRACTION,
        }
    }
}

impl AnalyzerConfig {
    fn validate(&self) -> TitrationResult<()> {
        if !self.prominence_fraction.is_finite()
            || self.prominence_fraction <= 0.0
            || self.prominence_fraction > 1.0
        {
            return Err(TitrationError::InvalidProminenceFraction {
                value: self.prominence_fraction,
            });
        }
        Ok(())
    }
}

/// Runs the full titration analysis: derivative curve, equivalence point,
/// half-equivalence volume and interpolated pKa.
///
/// Pure function of its inputs; identical series and config always produce
/// an identical outcome. The equivalence point is the first (lowest-index)
/// derivative peak whose prominence reaches `prominence_fraction` of the
/// curve's maximum.
pub fn analyze(
    series: &TitrationSeries,
    config: &AnalyzerConfig,
) -> TitrationResult<AnalysisOutcome> {
    config.validate()?;

    // Series construction already guarantees the gradient preconditions,
    // so a numerics failure here is an unexpected computation error.
    let slopes = gradient_curve(GradientInput::new(series.volumes(), series.phs()))
        .map_err(|error| TitrationError::Computation(error.to_string()))?;
    let derivative = DerivativeCurve {
        volumes: series.volumes().to_vec(),
        slopes,
    };

    let min_prominence = config.prominence_fraction * derivative.max_slope();
    let peaks = find_prominent_peaks(&derivative.slopes, min_prominence);
    let Some(peak) = peaks.first() else {
        return Err(TitrationError::NoEquivalencePointFound { min_prominence });
    };

    let equivalence_volume = series.volumes()[peak.index];
    let half_equivalence_volume = equivalence_volume / 2.0;
    let pka = interpolate_linear(LinearInterpolationInput::new(
        half_equivalence_volume,
        series.volumes(),
        series.phs(),
    ))
    .map_err(|error| TitrationError::Computation(error.to_string()))?;

    Ok(AnalysisOutcome {
        result: AnalysisResult {
            equivalence_volume,
            equivalence_index: peak.index,
            half_equivalence_volume,
            pka,
        },
        derivative,
    })
}

#[cfg(test)]
mod tests {
    use super::{analyze, AnalyzerConfig};
    use crate::domain::{TitrationError, TitrationSeries};

    fn weak_acid_series() -> TitrationSeries {
        TitrationSeries::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
            vec![2.0, 2.1, 2.3, 2.8, 7.0, 11.0, 11.3, 11.5, 11.6],
        )
        .expect("valid series")
    }

    #[test]
    fn sharp_inflection_is_the_equivalence_point() {
        let outcome =
            analyze(&weak_acid_series(), &AnalyzerConfig::default()).expect("analysis");

        assert_eq!(outcome.result.equivalence_index, 4);
        assert_eq!(outcome.result.equivalence_volume, 4.0);
        assert_eq!(outcome.result.half_equivalence_volume, 2.0);
        assert_eq!(outcome.result.pka, 2.3);
        assert_eq!(outcome.derivative.slopes.len(), 9);
    }

    #[test]
    fn half_equivalence_volume_is_always_half_the_equivalence_volume() {
        let outcome =
            analyze(&weak_acid_series(), &AnalyzerConfig::default()).expect("analysis");
        assert_eq!(
            outcome.result.half_equivalence_volume,
            outcome.result.equivalence_volume / 2.0
        );
    }

    #[test]
    fn flat_series_yields_no_equivalence_point() {
        let series = TitrationSeries::new(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![7.0, 7.0, 7.0, 7.0],
        )
        .expect("valid series");

        let error = analyze(&series, &AnalyzerConfig::default())
            .expect_err("flat series should have no equivalence point");
        assert!(matches!(
            error,
            TitrationError::NoEquivalencePointFound { .. }
        ));
    }

    #[test]
    fn analysis_is_deterministic() {
        let series = weak_acid_series();
        let config = AnalyzerConfig::default();
        let first = analyze(&series, &config).expect("first run");
        let second = analyze(&series, &config).expect("second run");
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_out_of_range_prominence_fraction() {
        let config = AnalyzerConfig {
            prominence_fraction: 0.0,
        };
        let error = analyze(&weak_acid_series(), &config)
            .expect_err("zero prominence fraction should fail");
        assert_eq!(
            error,
            TitrationError::InvalidProminenceFraction { value: 0.0 }
        );
    }
}
