pub type TitrationResult<T> = Result<T, TitrationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitrationErrorCategory {
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl TitrationErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TitrationError {
    #[error(
        "declared point count {declared} disagrees with provided data: volumes={volumes}, phs={phs}"
    )]
    InputLengthMismatch {
        declared: usize,
        volumes: usize,
        phs: usize,
    },
    #[error("series length mismatch: volumes={volumes}, phs={phs}")]
    SeriesLengthMismatch { volumes: usize, phs: usize },
    #[error("titration series requires at least 2 data points, got {actual}")]
    InsufficientPoints { actual: usize },
    #[error("series vector '{field}' must contain finite values, index {index} got {value}")]
    NonFiniteValue {
        field: &'static str,
        index: usize,
        value: f64,
    },
    #[error(
        "titrant volumes must be strictly increasing, index {index} has {current} after {previous}"
    )]
    NonIncreasingVolume {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("malformed series data at line {line}: {reason}")]
    MalformedSeriesLine { line: usize, reason: String },
    #[error(
        "prominence fraction must be finite and within (0, 1], got {value}"
    )]
    InvalidProminenceFraction { value: f64 },
    #[error(
        "no clear equivalence point found: no derivative peak reached prominence {min_prominence}"
    )]
    NoEquivalencePointFound { min_prominence: f64 },
    #[error("titration analysis failed: {0}")]
    Computation(String),
}

impl TitrationError {
    pub const fn category(&self) -> TitrationErrorCategory {
        match self {
            Self::InputLengthMismatch { .. }
            | Self::SeriesLengthMismatch { .. }
            | Self::InsufficientPoints { .. }
            | Self::NonFiniteValue { .. }
            | Self::NonIncreasingVolume { .. }
            | Self::MalformedSeriesLine { .. }
            | Self::InvalidProminenceFraction { .. } => {
                TitrationErrorCategory::InputValidationError
            }
            Self::NoEquivalencePointFound { .. } | Self::Computation(_) => {
                TitrationErrorCategory::ComputationError
            }
        }
    }

    pub const fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::{TitrationError, TitrationErrorCategory};

    #[test]
    fn exit_codes_follow_category_mapping() {
        let mismatch = TitrationError::InputLengthMismatch {
            declared: 5,
            volumes: 4,
            phs: 4,
        };
        assert_eq!(
            mismatch.category(),
            TitrationErrorCategory::InputValidationError
        );
        assert_eq!(mismatch.exit_code(), 2);

        let not_found = TitrationError::NoEquivalencePointFound {
            min_prominence: 0.41,
        };
        assert_eq!(
            not_found.category(),
            TitrationErrorCategory::ComputationError
        );
        assert_eq!(not_found.exit_code(), 4);
    }

    #[test]
    fn diagnostic_line_carries_error_message() {
        let error = TitrationError::MalformedSeriesLine {
            line: 3,
            reason: "expected 2 values, got 1".to_string(),
        };
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: malformed series data at line 3: expected 2 values, got 1"
        );
    }
}
