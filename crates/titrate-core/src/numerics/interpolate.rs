#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearInterpolationInput<'a> {
    pub target: f64,
    pub abscissas: &'a [f64],
    pub ordinates: &'a [f64],
}

impl<'a> LinearInterpolationInput<'a> {
    pub fn new(target: f64, abscissas: &'a [f64], ordinates: &'a [f64]) -> Self {
        Self {
            target,
            abscissas,
            ordinates,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterpolationError {
    #[error("interpolation requires at least 2 samples, got {actual}")]
    InsufficientPoints { actual: usize },
    #[error("interpolation input length mismatch: abscissas={abscissas}, ordinates={ordinates}")]
    LengthMismatch { abscissas: usize, ordinates: usize },
    #[error("abscissa entries must be finite at index {index}, got {value}")]
    NonFiniteAbscissa { index: usize, value: f64 },
    #[error(
        "abscissas must be strictly increasing, index {index} has {current} after {previous}"
    )]
    NonIncreasingAbscissa {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("ordinate entries must be finite at index {index}, got {value}")]
    NonFiniteOrdinate { index: usize, value: f64 },
    #[error("interpolation query must be finite, got {value}")]
    NonFiniteQuery { value: f64 },
}

/// Piecewise-linear interpolation with boundary clamping: queries outside
/// the sampled range return the first/last ordinate instead of
/// extrapolating.
pub fn interpolate_linear(input: LinearInterpolationInput<'_>) -> Result<f64, InterpolationError> {
    validate_input(input)?;

    let abscissas = input.abscissas;
    let ordinates = input.ordinates;
    let last = abscissas.len() - 1;

    if input.target <= abscissas[0] {
        return Ok(ordinates[0]);
    }
    if input.target >= abscissas[last] {
        return Ok(ordinates[last]);
    }

    match abscissas.binary_search_by(|probe| probe.total_cmp(&input.target)) {
        Ok(index) => Ok(ordinates[index]),
        Err(upper) => {
            let lower = upper - 1;
            let x0 = abscissas[lower];
            let x1 = abscissas[upper];
            let y0 = ordinates[lower];
            let y1 = ordinates[upper];
            let fraction = (input.target - x0) / (x1 - x0);
            Ok(y0 + (y1 - y0) * fraction)
        }
    }
}

fn validate_input(input: LinearInterpolationInput<'_>) -> Result<(), InterpolationError> {
    let abscissa_len = input.abscissas.len();
    if abscissa_len < 2 {
        return Err(InterpolationError::InsufficientPoints {
            actual: abscissa_len,
        });
    }
    if input.ordinates.len() != abscissa_len {
        return Err(InterpolationError::LengthMismatch {
            abscissas: abscissa_len,
            ordinates: input.ordinates.len(),
        });
    }
    if !input.target.is_finite() {
        return Err(InterpolationError::NonFiniteQuery {
            value: input.target,
        });
    }

    for (index, abscissa) in input.abscissas.iter().copied().enumerate() {
        if !abscissa.is_finite() {
            return Err(InterpolationError::NonFiniteAbscissa {
                index,
                value: abscissa,
            });
        }
        if index > 0 {
            let previous = input.abscissas[index - 1];
            if abscissa <= previous {
                return Err(InterpolationError::NonIncreasingAbscissa {
                    index,
                    previous,
                    current: abscissa,
                });
            }
        }
    }

    for (index, ordinate) in input.ordinates.iter().copied().enumerate() {
        if !ordinate.is_finite() {
            return Err(InterpolationError::NonFiniteOrdinate {
                index,
                value: ordinate,
            });
        }
    }

    Ok(())
}
