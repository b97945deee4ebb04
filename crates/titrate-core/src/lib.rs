//! Acid/base titration curve analysis.
//!
//! Given an ordered series of (volume, pH) readings the analyzer locates the
//! equivalence point from the derivative curve, derives the half-equivalence
//! volume and interpolates the pKa of the sample. The report module renders
//! the chart and report artifacts consumed by the CLI.

pub mod analysis;
pub mod domain;
pub mod numerics;
pub mod report;
