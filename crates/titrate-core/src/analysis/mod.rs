mod analyzer;
pub mod parser;
pub mod standards;

pub use analyzer::{analyze, AnalyzerConfig, DEFAULT_PROMINENCE_FRACTION};
pub use parser::{parse_series_source, parse_series_source_with_count};
pub use standards::{
    compare_to_standard, lookup_standard, standard_references, StandardReference,
};
