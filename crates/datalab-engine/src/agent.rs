//! Agent operations and dispatch.
//!
//! The operation set is closed: every identifier the frontend can send maps
//! to exactly one deterministic function, checked exhaustively at compile
//! time. An unrecognized identifier is a hard error; silently routing to the
//! wrong statistical method would corrupt results.

use crate::analyzer::{analyze_correlations, analyze_trends, detect_outliers, generate_summary};
use crate::cleaner::{handle_missing, normalize_text, remove_duplicates};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::quality::validate_data;
use crate::types::{AgentOutcome, Analysis};
use crate::value::Dataset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One agent operation selectable by the routing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentOp {
    RemoveDuplicates,
    HandleMissing,
    NormalizeText,
    DetectOutliers,
    GenerateSummary,
    DataValidator,
    CorrelationAnalyzer,
    TrendAnalyzer,
}

/// Catalog grouping for an agent operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentCategory {
    Cleaning,
    Analysis,
}

/// Static catalog entry describing an agent operation for display.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AgentDescriptor {
    pub op: AgentOp,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AgentCategory,
}

impl AgentOp {
    /// Every operation the engine implements, in catalog order.
    pub const ALL: [AgentOp; 8] = [
        AgentOp::RemoveDuplicates,
        AgentOp::HandleMissing,
        AgentOp::NormalizeText,
        AgentOp::DataValidator,
        AgentOp::DetectOutliers,
        AgentOp::GenerateSummary,
        AgentOp::CorrelationAnalyzer,
        AgentOp::TrendAnalyzer,
    ];

    /// The wire identifier of this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentOp::RemoveDuplicates => "remove-duplicates",
            AgentOp::HandleMissing => "handle-missing",
            AgentOp::NormalizeText => "normalize-text",
            AgentOp::DetectOutliers => "detect-outliers",
            AgentOp::GenerateSummary => "generate-summary",
            AgentOp::DataValidator => "data-validator",
            AgentOp::CorrelationAnalyzer => "correlation-analyzer",
            AgentOp::TrendAnalyzer => "trend-analyzer",
        }
    }

    /// Whether this operation replaces the working dataset. Read-only
    /// analyses return the input unchanged.
    pub fn mutates_data(&self) -> bool {
        matches!(
            self,
            AgentOp::RemoveDuplicates | AgentOp::HandleMissing | AgentOp::NormalizeText
        )
    }

    /// Catalog entry for display surfaces.
    pub fn descriptor(&self) -> AgentDescriptor {
        let (name, description, category) = match self {
            AgentOp::RemoveDuplicates => (
                "Duplicate Remover",
                "Identifies and removes duplicate rows from your dataset while preserving data integrity",
                AgentCategory::Cleaning,
            ),
            AgentOp::HandleMissing => (
                "Missing Value Handler",
                "Fills missing values using statistical strategies chosen per column",
                AgentCategory::Cleaning,
            ),
            AgentOp::NormalizeText => (
                "Text Normalizer",
                "Standardizes text formatting, case, and whitespace",
                AgentCategory::Cleaning,
            ),
            AgentOp::DataValidator => (
                "Data Validator",
                "Validates data types and flags mixed-type or empty columns",
                AgentCategory::Cleaning,
            ),
            AgentOp::DetectOutliers => (
                "Outlier Detector",
                "Identifies statistical outliers in numeric columns using IQR fences",
                AgentCategory::Analysis,
            ),
            AgentOp::GenerateSummary => (
                "Data Summarizer",
                "Creates statistical summaries and data profiling reports",
                AgentCategory::Analysis,
            ),
            AgentOp::CorrelationAnalyzer => (
                "Correlation Analyzer",
                "Discovers relationships and correlations between variables in your dataset",
                AgentCategory::Analysis,
            ),
            AgentOp::TrendAnalyzer => (
                "Trend Analyzer",
                "Identifies trends and seasonality eligibility in sequential data",
                AgentCategory::Analysis,
            ),
        };
        AgentDescriptor {
            op: *self,
            name,
            description,
            category,
        }
    }
}

impl fmt::Display for AgentOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentOp {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        AgentOp::ALL
            .iter()
            .find(|op| op.as_str() == s)
            .copied()
            .ok_or_else(|| EngineError::UnknownOperation(s.to_string()))
    }
}

/// The stateless analysis engine.
///
/// Holds only configuration; every run is a single-pass, synchronous
/// function of its input dataset. Instances are freely shareable across
/// threads, and nothing is retained between calls.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one operation over a dataset.
    pub fn run(&self, op: AgentOp, dataset: &Dataset) -> AgentOutcome {
        debug!(operation = %op, rows = dataset.row_count(), "running agent operation");

        let (processed_data, analysis) = match op {
            AgentOp::RemoveDuplicates => {
                let (data, analysis) = remove_duplicates(dataset);
                (data, Analysis::Duplicates(analysis))
            }
            AgentOp::HandleMissing => {
                let (data, analysis) = handle_missing(dataset, &self.config);
                (data, Analysis::Missing(analysis))
            }
            AgentOp::NormalizeText => {
                let (data, analysis) = normalize_text(dataset);
                (data, Analysis::TextNormalization(analysis))
            }
            AgentOp::DetectOutliers => (
                dataset.clone(),
                Analysis::Outliers(detect_outliers(dataset, &self.config)),
            ),
            AgentOp::GenerateSummary => (
                dataset.clone(),
                Analysis::Summary(generate_summary(dataset, &self.config)),
            ),
            AgentOp::DataValidator => (
                dataset.clone(),
                Analysis::Validation(validate_data(dataset, &self.config)),
            ),
            AgentOp::CorrelationAnalyzer => (
                dataset.clone(),
                Analysis::Correlation(analyze_correlations(dataset, &self.config)),
            ),
            AgentOp::TrendAnalyzer => (
                dataset.clone(),
                Analysis::Trend(analyze_trends(dataset, &self.config)),
            ),
        };

        AgentOutcome {
            processed_data,
            analysis,
        }
    }

    /// Run an operation identified by its wire string, failing fast on
    /// identifiers the engine does not implement.
    pub fn run_named(&self, operation: &str, dataset: &Dataset) -> Result<AgentOutcome> {
        let op = AgentOp::from_str(operation)?;
        Ok(self.run(op, dataset))
    }
}

/// Run an operation with the default configuration.
pub fn run_agent(operation: &str, dataset: &Dataset) -> Result<AgentOutcome> {
    Engine::default().run_named(operation, dataset)
}

// The routing layer may serve concurrent requests over one engine.
static_assertions::assert_impl_all!(Engine: Send, Sync);
static_assertions::assert_impl_all!(Dataset: Send, Sync);
