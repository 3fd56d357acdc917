//! IQR-based outlier detection.

use crate::config::EngineConfig;
use crate::profiler::statistics;
use crate::types::{OutlierAnalysis, OutlierInfo};
use crate::value::{Dataset, cell};
use std::collections::BTreeMap;
use tracing::debug;

const METHOD: &str = "IQR (Interquartile Range)";

/// Flag values falling strictly outside the IQR fences, per numeric column.
///
/// A column qualifies when at least one non-missing value is numeric, so
/// mixed columns are scanned too; values that fail to parse are simply not
/// part of that column's sample. Columns with fewer numeric values than the
/// configured minimum are skipped (the quartile positions would be
/// meaningless below that).
pub fn detect_outliers(dataset: &Dataset, config: &EngineConfig) -> OutlierAnalysis {
    if dataset.is_empty() {
        return OutlierAnalysis {
            numeric_columns: Vec::new(),
            outliers: BTreeMap::new(),
            total_outliers: 0,
            method: METHOD.to_string(),
            reasoning: "No data to scan for outliers.".to_string(),
        };
    }

    let numeric_columns: Vec<String> = dataset
        .columns
        .iter()
        .filter(|column| {
            dataset
                .present_values(column)
                .iter()
                .any(|v| v.as_number().is_some())
        })
        .cloned()
        .collect();

    let mut outliers: BTreeMap<String, Vec<OutlierInfo>> = BTreeMap::new();
    let mut total_outliers = 0;

    for column in &numeric_columns {
        let numbers: Vec<f64> = dataset
            .present_values(column)
            .iter()
            .filter_map(|v| v.as_number())
            .collect();

        let sorted = statistics::sorted_ascending(&numbers);
        let Some(bounds) =
            statistics::iqr_bounds(&sorted, config.iqr_multiplier, config.min_iqr_samples)
        else {
            debug!(column = %column, samples = sorted.len(), "too few numeric values for IQR");
            continue;
        };

        let mut flagged = Vec::new();
        for (index, row) in dataset.rows.iter().enumerate() {
            if let Some(value) = cell(row, column).as_number()
                && (value < bounds.lower || value > bounds.upper)
            {
                flagged.push(OutlierInfo {
                    row_index: index + 1,
                    value,
                    row: row.clone(),
                });
            }
        }

        if !flagged.is_empty() {
            total_outliers += flagged.len();
            outliers.insert(column.clone(), flagged);
        }
    }

    let reasoning = format!(
        "Applied the IQR method ({}x IQR fences) to {} numeric columns and flagged {} outlier \
         values.",
        config.iqr_multiplier,
        numeric_columns.len(),
        total_outliers
    );

    OutlierAnalysis {
        numeric_columns,
        outliers,
        total_outliers,
        method: METHOD.to_string(),
        reasoning,
    }
}
