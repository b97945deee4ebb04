pub mod errors;

pub use errors::{TitrationError, TitrationErrorCategory, TitrationResult};

use serde::Serialize;

/// Ordered parallel sequences of titrant volume (mL) and measured pH.
///
/// Construction validates the series: both vectors must have equal length,
/// at least 2 entries, all values finite and the volumes strictly increasing.
/// Duplicate volumes would make the derivative singular, so they are rejected
/// up front rather than propagated as NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitrationSeries {
    volumes: Vec<f64>,
    phs: Vec<f64>,
}

impl TitrationSeries {
    pub fn new(volumes: Vec<f64>, phs: Vec<f64>) -> TitrationResult<Self> {
        if volumes.len() != phs.len() {
            return Err(TitrationError::SeriesLengthMismatch {
                volumes: volumes.len(),
                phs: phs.len(),
            });
        }
        if volumes.len() < 2 {
            return Err(TitrationError::InsufficientPoints {
                actual: volumes.len(),
            });
        }
        validate_finite("volumes", &volumes)?;
        validate_finite("phs", &phs)?;
        for index in 1..volumes.len() {
            let previous = volumes[index - 1];
            let current = volumes[index];
            if current <= previous {
                return Err(TitrationError::NonIncreasingVolume {
                    index,
                    previous,
                    current,
                });
            }
        }

        Ok(Self { volumes, phs })
    }

    /// Builds a series from data plus the caller-declared point count.
    /// A disagreement between the declared count and the data is the
    /// `InputLengthMismatch` failure and analysis is not attempted.
    pub fn with_declared_count(
        declared: usize,
        volumes: Vec<f64>,
        phs: Vec<f64>,
    ) -> TitrationResult<Self> {
        if volumes.len() != declared || phs.len() != declared {
            return Err(TitrationError::InputLengthMismatch {
                declared,
                volumes: volumes.len(),
                phs: phs.len(),
            });
        }
        Self::new(volumes, phs)
    }

    pub fn volumes(&self) -> &[f64] {
        &self.volumes
    }

    pub fn phs(&self) -> &[f64] {
        &self.phs
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.volumes
            .iter()
            .copied()
            .zip(self.phs.iter().copied())
    }
}

fn validate_finite(field: &'static str, values: &[f64]) -> TitrationResult<()> {
    for (index, value) in values.iter().copied().enumerate() {
        if !value.is_finite() {
            return Err(TitrationError::NonFiniteValue {
                field,
                index,
                value,
            });
        }
    }
    Ok(())
}

/// dpH/dV sampled at the original volumes (centered-gradient variant,
/// one slope per input point).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivativeCurve {
    pub volumes: Vec<f64>,
    pub slopes: Vec<f64>,
}

impl DerivativeCurve {
    pub fn max_slope(&self) -> f64 {
        self.slopes
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub equivalence_volume: f64,
    pub equivalence_index: usize,
    pub half_equivalence_volume: f64,
    pub pka: f64,
}

/// An analysis result together with the derivative curve it was derived
/// from. The curve feeds the chart artifacts; the result stands alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    pub derivative: DerivativeCurve,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardComparison {
    pub standard_name: String,
    pub standard_pka: f64,
    pub measured_pka: f64,
    pub difference: f64,
    pub accuracy_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::{TitrationError, TitrationSeries};

    #[test]
    fn series_accepts_strictly_increasing_volumes() {
        let series = TitrationSeries::new(vec![0.0, 1.0, 2.5], vec![2.0, 2.5, 7.0])
            .expect("valid series");
        assert_eq!(series.len(), 3);
        assert_eq!(series.volumes(), &[0.0, 1.0, 2.5]);
        assert_eq!(series.phs(), &[2.0, 2.5, 7.0]);
    }

    #[test]
    fn series_rejects_length_mismatch() {
        let error = TitrationSeries::new(vec![0.0, 1.0], vec![2.0])
            .expect_err("mismatched lengths should fail");
        assert_eq!(
            error,
            TitrationError::SeriesLengthMismatch { volumes: 2, phs: 1 }
        );
    }

    #[test]
    fn series_rejects_single_point() {
        let error =
            TitrationSeries::new(vec![0.0], vec![2.0]).expect_err("one point should fail");
        assert_eq!(error, TitrationError::InsufficientPoints { actual: 1 });
    }

    #[test]
    fn series_rejects_duplicate_volumes() {
        let error = TitrationSeries::new(vec![0.0, 1.0, 1.0], vec![2.0, 2.5, 3.0])
            .expect_err("duplicate volume should fail");
        assert_eq!(
            error,
            TitrationError::NonIncreasingVolume {
                index: 2,
                previous: 1.0,
                current: 1.0,
            }
        );
    }

    #[test]
    fn series_rejects_non_finite_ph() {
        let error = TitrationSeries::new(vec![0.0, 1.0], vec![2.0, f64::NAN])
            .expect_err("NaN pH should fail");
        assert!(matches!(
            error,
            TitrationError::NonFiniteValue {
                field: "phs",
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn declared_count_mismatch_is_rejected_before_validation() {
        let error = TitrationSeries::with_declared_count(4, vec![0.0, 1.0], vec![2.0, 2.5])
            .expect_err("declared count mismatch should fail");
        assert_eq!(
            error,
            TitrationError::InputLengthMismatch {
                declared: 4,
                volumes: 2,
                phs: 2,
            }
        );
    }
}
