//! Analysis records returned by the agent operations.
//!
//! Field names serialize in camelCase because the embedding layer forwards
//! these records to the DataLab frontend unchanged (`originalCount`,
//! `duplicatesFound`, `fillValues`, ...). Every record carries a
//! human-readable `reasoning` string; operation-specific structure rides
//! alongside it.

use crate::profiler::ColumnType;
use crate::value::{Dataset, Row, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of one agent operation: the (possibly transformed) dataset plus
/// the structured analysis record.
///
/// For read-only analyses `processed_data` equals the input unchanged; the
/// mutating operations (dedup, missing-value fill, normalization) return the
/// transformed dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentOutcome {
    pub processed_data: Dataset,
    pub analysis: Analysis,
}

/// The analysis record of exactly one operation.
///
/// Serializes untagged: the wire shape is the inner record's flat object,
/// matching what the frontend renders per agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Analysis {
    Duplicates(DuplicateAnalysis),
    Missing(MissingValueAnalysis),
    TextNormalization(TextNormalizationAnalysis),
    Outliers(OutlierAnalysis),
    Summary(SummaryAnalysis),
    Validation(ValidationAnalysis),
    Correlation(CorrelationAnalysis),
    Trend(TrendAnalysis),
}

impl Analysis {
    /// The human-readable explanation every record carries.
    pub fn reasoning(&self) -> &str {
        match self {
            Analysis::Duplicates(a) => &a.reasoning,
            Analysis::Missing(a) => &a.reasoning,
            Analysis::TextNormalization(a) => &a.reasoning,
            Analysis::Outliers(a) => &a.reasoning,
            Analysis::Summary(a) => &a.reasoning,
            Analysis::Validation(a) => &a.reasoning,
            Analysis::Correlation(a) => &a.reasoning,
            Analysis::Trend(a) => &a.reasoning,
        }
    }
}

/// Outcome of `remove-duplicates`.
///
/// Invariant: `original_count == duplicates_found + final_count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateAnalysis {
    pub original_count: usize,
    pub duplicates_found: usize,
    pub final_count: usize,
    /// 1-based positions of the removed rows, in original row order.
    pub duplicate_rows: Vec<usize>,
    pub reasoning: String,
}

/// Imputation strategy chosen for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImputationStrategy {
    /// Upper-median of the column's numeric values.
    Median,
    /// Most frequent value, first-encountered on ties.
    Mode,
    /// Sentinel fill for columns with no observed values.
    Default,
}

/// Outcome of `handle-missing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingValueAnalysis {
    /// Missing-cell counts, for the columns that had any.
    pub missing_values: BTreeMap<String, usize>,
    pub strategies: BTreeMap<String, ImputationStrategy>,
    pub fill_values: BTreeMap<String, Value>,
    pub columns_processed: usize,
    pub reasoning: String,
    pub insights: Vec<String>,
}

/// Outcome of `normalize-text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNormalizationAnalysis {
    pub text_columns: Vec<String>,
    pub transformations: Vec<String>,
    pub reasoning: String,
    pub insights: Vec<String>,
}

/// One flagged value from outlier detection.
///
/// `row` is the snapshot as of detection time; detection never mutates rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlierInfo {
    /// 1-based, for display.
    pub row_index: usize,
    pub value: f64,
    pub row: Row,
}

/// Outcome of `detect-outliers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlierAnalysis {
    pub numeric_columns: Vec<String>,
    /// Flagged values grouped by column; columns without outliers are omitted.
    pub outliers: BTreeMap<String, Vec<OutlierInfo>>,
    pub total_outliers: usize,
    pub method: String,
    pub reasoning: String,
}

/// One entry of a categorical column's frequency ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopValue {
    pub value: Value,
    pub count: usize,
    /// Share of non-missing values, one decimal.
    pub percentage: f64,
}

/// Per-column statistical profile from `generate-summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColumnSummary {
    #[serde(rename_all = "camelCase")]
    Numeric {
        count: usize,
        missing: usize,
        unique: usize,
        min: f64,
        max: f64,
        mean: f64,
        median: f64,
    },
    #[serde(rename_all = "camelCase")]
    Categorical {
        count: usize,
        missing: usize,
        unique: usize,
        top_values: Vec<TopValue>,
    },
}

/// Dataset-level shape and completeness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataShape {
    pub rows: usize,
    pub columns: usize,
    /// Percentage of non-missing cells, formatted like "75.0%".
    pub completeness: String,
}

/// Outcome of `generate-summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryAnalysis {
    pub summary: BTreeMap<String, ColumnSummary>,
    pub data_shape: DataShape,
    pub insights: Vec<String>,
    pub reasoning: String,
}

/// Outcome of `data-validator`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationAnalysis {
    pub validation_errors: Vec<String>,
    pub data_types: BTreeMap<String, ColumnType>,
    pub reasoning: String,
}

/// Outcome of `correlation-analyzer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationAnalysis {
    /// Pearson r per column pair, keyed "colA-colB", rounded to 3 decimals.
    pub correlations: BTreeMap<String, f64>,
    pub strong_relationships: Vec<String>,
    pub reasoning: String,
}

/// Pattern flags from `trend-analyzer`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPatterns {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_points: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_seasonality: Option<bool>,
}

/// Outcome of `trend-analyzer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub trends: Vec<String>,
    pub patterns: TrendPatterns,
    pub reasoning: String,
}
