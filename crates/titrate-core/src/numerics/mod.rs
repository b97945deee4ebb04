pub mod gradient;
pub mod interpolate;
pub mod peaks;

pub use gradient::{gradient_curve, GradientError, GradientInput};
pub use interpolate::{interpolate_linear, InterpolationError, LinearInterpolationInput};
pub use peaks::{find_prominent_peaks, Peak};
