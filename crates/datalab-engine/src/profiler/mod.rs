//! Column classification and dataset profiling.

pub mod statistics;
pub mod type_inference;

pub use type_inference::{
    ColumnType, ColumnTypeProfile, infer_column_type, is_date_like, is_date_like_str,
    profile_column,
};

use crate::config::EngineConfig;
use crate::value::{Dataset, Value};
use serde::{Deserialize, Serialize};

/// How many sample values a column profile carries.
const MAX_SAMPLE_VALUES: usize = 5;

/// Per-column profile for dataset overviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub null_count: usize,
    pub unique_count: usize,
    pub sample_values: Vec<Value>,
}

/// Shape and per-column overview of a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfo {
    pub total_rows: usize,
    pub total_columns: usize,
    pub columns: Vec<ColumnInfo>,
}

/// Profile every column of a dataset: inferred type, null count, distinct
/// count, and a handful of sample values.
pub fn profile_dataset(dataset: &Dataset, config: &EngineConfig) -> DatasetInfo {
    let columns = dataset
        .columns
        .iter()
        .map(|name| {
            let present = dataset.present_values(name);
            let sample_values = present
                .iter()
                .take(MAX_SAMPLE_VALUES)
                .map(|v| (*v).clone())
                .collect();

            ColumnInfo {
                name: name.clone(),
                column_type: infer_column_type(dataset, name, config.date_fraction_threshold),
                null_count: dataset.row_count() - present.len(),
                unique_count: statistics::distinct_count(present.iter().copied()),
                sample_values,
            }
        })
        .collect();

    DatasetInfo {
        total_rows: dataset.row_count(),
        total_columns: dataset.column_count(),
        columns,
    }
}
