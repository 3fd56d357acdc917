//! DataLab Analysis Engine
//!
//! The local, deterministic data-processing engine behind DataLab's agent
//! operations. Every operation is a pure function over an in-memory table:
//! dataset in, processed dataset plus structured analysis out.
//!
//! # Overview
//!
//! Eight operations are implemented, dispatched through a closed enum:
//!
//! - **remove-duplicates**: exact-repeat detection under a normalized row key
//! - **handle-missing**: per-column imputation (median / mode / sentinel)
//! - **normalize-text**: whitespace, case, and title-case cleanup
//! - **detect-outliers**: IQR fences over numeric columns
//! - **generate-summary**: per-column statistical profiles and completeness
//! - **data-validator**: type-consistency checks and mixed-type warnings
//! - **correlation-analyzer**: pairwise Pearson correlation
//! - **trend-analyzer**: first-half vs. second-half mean-shift detection
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use datalab_engine::{AgentOp, Dataset, Engine, EngineConfig};
//!
//! let dataset: Dataset = serde_json::from_str(payload)?;
//!
//! // Option 1: defaults, string-identified operation (the wire contract)
//! let outcome = datalab_engine::run_agent("detect-outliers", &dataset)?;
//! println!("{}", outcome.analysis.reasoning());
//!
//! // Option 2: typed operation with custom thresholds
//! let engine = Engine::new(
//!     EngineConfig::builder()
//!         .iqr_multiplier(3.0)
//!         .strong_correlation_threshold(0.85)
//!         .build()?,
//! );
//! let outcome = engine.run(AgentOp::CorrelationAnalyzer, &dataset);
//! ```
//!
//! # Guarantees
//!
//! - Operations never mutate their input; mutating operations return a fresh
//!   dataset, read-only ones return the input unchanged.
//! - Empty datasets are a normal input: every operation returns a well-formed
//!   "nothing to do" analysis instead of failing.
//! - Unparseable cell values are excluded from whichever numeric or date
//!   interpretation is being computed, never raised as errors.
//! - The engine holds no state between calls and is `Send + Sync`.

pub mod agent;
pub mod analyzer;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod profiler;
pub mod quality;
pub mod types;
pub mod value;

// Re-exports for convenient access
pub use agent::{AgentCategory, AgentDescriptor, AgentOp, Engine, run_agent};
pub use config::{ConfigValidationError, EngineConfig, EngineConfigBuilder};
pub use error::{EngineError, Result, ResultExt};
pub use profiler::{ColumnInfo, ColumnType, DatasetInfo, profile_dataset};
pub use types::{
    AgentOutcome, Analysis, ColumnSummary, CorrelationAnalysis, DataShape, DuplicateAnalysis,
    ImputationStrategy, MissingValueAnalysis, OutlierAnalysis, OutlierInfo, SummaryAnalysis,
    TextNormalizationAnalysis, TopValue, TrendAnalysis, TrendPatterns, ValidationAnalysis,
};
pub use value::{Dataset, Row, Value};
