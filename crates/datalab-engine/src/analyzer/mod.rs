//! Read-only analyses: outliers, correlation, trends, summarization.
//!
//! Every operation here returns the input dataset unchanged alongside its
//! analysis record.

pub mod correlation;
pub mod outliers;
pub mod summary;
pub mod trends;

pub use correlation::analyze_correlations;
pub use outliers::detect_outliers;
pub use summary::generate_summary;
pub use trends::analyze_trends;
