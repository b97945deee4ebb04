#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientInput<'a> {
    pub volumes: &'a [f64],
    pub phs: &'a [f64],
}

impl<'a> GradientInput<'a> {
    pub fn new(volumes: &'a [f64], phs: &'a [f64]) -> Self {
        Self { volumes, phs }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GradientError {
    #[error("gradient requires at least 2 samples, got {actual}")]
    InsufficientPoints { actual: usize },
    #[error("gradient input length mismatch: volumes={volumes}, phs={phs}")]
    LengthMismatch { volumes: usize, phs: usize },
    #[error("volume entries must be finite at index {index}, got {value}")]
    NonFiniteVolume { index: usize, value: f64 },
    #[error("pH entries must be finite at index {index}, got {value}")]
    NonFinitePh { index: usize, value: f64 },
    #[error(
        "volumes must be strictly increasing, index {index} has {current} after {previous}"
    )]
    NonIncreasingVolume {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("gradient produced a non-finite slope at index {index}")]
    NonFiniteResult { index: usize },
}

/// Centered-gradient estimate of dpH/dV on a possibly non-uniform volume
/// grid, one slope per input point: first-order one-sided differences at
/// the boundaries, second-order weighted central differences in the
/// interior (the `numpy.gradient` formulation).
pub fn gradient_curve(input: GradientInput<'_>) -> Result<Vec<f64>, GradientError> {
    validate_input(input)?;

    let volumes = input.volumes;
    let phs = input.phs;
    let n = volumes.len();
    let last = n - 1;

    let mut slopes = Vec::with_capacity(n);
    slopes.push((phs[1] - phs[0]) / (volumes[1] - volumes[0]));
    for index in 1..last {
        let left_step = volumes[index] - volumes[index - 1];
        let right_step = volumes[index + 1] - volumes[index];
        let span = left_step + right_step;
        let slope = -right_step / (left_step * span) * phs[index - 1]
            + (right_step - left_step) / (left_step * right_step) * phs[index]
            + left_step / (right_step * span) * phs[index + 1];
        slopes.push(slope);
    }
    slopes.push((phs[last] - phs[last - 1]) / (volumes[last] - volumes[last - 1]));

    for (index, slope) in slopes.iter().copied().enumerate() {
        if !slope.is_finite() {
            return Err(GradientError::NonFiniteResult { index });
        }
    }

    Ok(slopes)
}

fn validate_input(input: GradientInput<'_>) -> Result<(), GradientError> {
    let volume_len = input.volumes.len();
    if volume_len < 2 {
        return Err(GradientError::InsufficientPoints { actual: volume_len });
    }
    if input.phs.len() != volume_len {
        return Err(GradientError::LengthMismatch {
            volumes: volume_len,
            phs: input.phs.len(),
        });
    }

    for (index, volume) in input.volumes.iter().copied().enumerate() {
        if !volume.is_finite() {
            return Err(GradientError::NonFiniteVolume {
                index,
                value: volume,
            });
        }
        if index > 0 {
            let previous = input.volumes[index - 1];
            if volume <= previous {
                return Err(GradientError::NonIncreasingVolume {
                    index,
                    previous,
                    current: volume,
                });
            }
        }
    }

    for (index, ph) in input.phs.iter().copied().enumerate() {
        if !ph.is_finite() {
            return Err(GradientError::NonFinitePh { index, value: ph });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{gradient_curve, GradientError, GradientInput};

    #[test]
    fn uniform_grid_uses_central_differences_in_the_interior() {
        let volumes = [0.0, 1.0, 2.0, 3.0];
        let phs = [2.0, 2.5, 4.5, 5.0];

        let slopes = gradient_curve(GradientInput::new(&volumes, &phs)).expect("gradient");

        assert_eq!(slopes.len(), 4);
        assert_close(slopes[0], 0.5);
        assert_close(slopes[1], (4.5 - 2.0) / 2.0);
        assert_close(slopes[2], (5.0 - 2.5) / 2.0);
        assert_close(slopes[3], 0.5);
    }

    #[test]
    fn non_uniform_interior_slopes_are_exact_for_quadratics() {
        // The weighted central formula reproduces the derivative of a
        // quadratic exactly regardless of spacing.
        let volumes = [0.0, 0.5, 1.7, 2.0, 3.3];
        let phs: Vec<f64> = volumes.iter().map(|v| v * v).collect();

        let slopes = gradient_curve(GradientInput::new(&volumes, &phs)).expect("gradient");

        for index in 1..volumes.len() - 1 {
            assert_close(slopes[index], 2.0 * volumes[index]);
        }
    }

    #[test]
    fn flat_series_has_zero_slope_everywhere() {
        let volumes = [0.0, 1.0, 2.0, 3.0];
        let phs = [7.0, 7.0, 7.0, 7.0];

        let slopes = gradient_curve(GradientInput::new(&volumes, &phs)).expect("gradient");
        assert!(slopes.iter().all(|slope| *slope == 0.0));
    }

    #[test]
    fn rejects_duplicate_volumes() {
        let volumes = [0.0, 1.0, 1.0];
        let phs = [2.0, 3.0, 4.0];

        let error = gradient_curve(GradientInput::new(&volumes, &phs))
            .expect_err("duplicate volume should fail");
        assert_eq!(
            error,
            GradientError::NonIncreasingVolume {
                index: 2,
                previous: 1.0,
                current: 1.0,
            }
        );
    }

    #[test]
    fn rejects_single_sample() {
        let error = gradient_curve(GradientInput::new(&[1.0], &[2.0]))
            .expect_err("single sample should fail");
        assert_eq!(error, GradientError::InsufficientPoints { actual: 1 });
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1.0e-12,
            "expected {expected}, got {actual}"
        );
    }
}
