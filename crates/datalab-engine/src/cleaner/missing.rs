//! Missing-value analysis and imputation.
//!
//! Strategy selection per column: median for fully numeric columns, mode for
//! everything else with data, and a sentinel fill when no value was ever
//! observed. Columns without missing cells are left untouched and get no
//! strategy recorded.

use crate::config::EngineConfig;
use crate::profiler::statistics;
use crate::types::{ImputationStrategy, MissingValueAnalysis};
use crate::value::{Dataset, Value, cell};
use std::collections::BTreeMap;
use tracing::debug;

/// Fill missing cells column by column.
pub fn handle_missing(dataset: &Dataset, config: &EngineConfig) -> (Dataset, MissingValueAnalysis) {
    if dataset.is_empty() {
        return (
            dataset.clone(),
            MissingValueAnalysis {
                missing_values: BTreeMap::new(),
                strategies: BTreeMap::new(),
                fill_values: BTreeMap::new(),
                columns_processed: 0,
                reasoning: "No data to analyze for missing values.".to_string(),
                insights: Vec::new(),
            },
        );
    }

    let mut missing_values = BTreeMap::new();
    let mut strategies = BTreeMap::new();
    let mut fill_values: BTreeMap<String, Value> = BTreeMap::new();

    for column in &dataset.columns {
        let missing = dataset.missing_count(column);
        if missing == 0 {
            continue;
        }

        let present = dataset.present_values(column);
        let (strategy, fill) = choose_fill(&present, config);
        debug!(column = %column, missing, ?strategy, "imputation strategy chosen");

        missing_values.insert(column.clone(), missing);
        strategies.insert(column.clone(), strategy);
        fill_values.insert(column.clone(), fill);
    }

    let mut rows = dataset.rows.clone();
    for (column, fill) in &fill_values {
        for row in &mut rows {
            if cell(row, column).is_missing() {
                row.insert(column.clone(), fill.clone());
            }
        }
    }

    let columns_processed = strategies.len();
    let total_missing: usize = missing_values.values().sum();
    let insights = build_insights(&strategies, columns_processed, dataset.column_count());

    let reasoning = if columns_processed == 0 {
        format!(
            "Checked {} columns; no missing values found.",
            dataset.column_count()
        )
    } else {
        format!(
            "Filled {total_missing} missing cells across {columns_processed} columns using \
             per-column strategies (median for numeric, mode for categorical)."
        )
    };

    (
        Dataset::new(dataset.columns.clone(), rows),
        MissingValueAnalysis {
            missing_values,
            strategies,
            fill_values,
            columns_processed,
            reasoning,
            insights,
        },
    )
}

/// Pick a strategy and fill value from a column's observed values.
fn choose_fill(present: &[&Value], config: &EngineConfig) -> (ImputationStrategy, Value) {
    if present.is_empty() {
        return (
            ImputationStrategy::Default,
            Value::String(config.fill_sentinel.clone()),
        );
    }

    let numbers: Vec<f64> = present.iter().filter_map(|v| v.as_number()).collect();
    if numbers.len() == present.len() {
        let sorted = statistics::sorted_ascending(&numbers);
        let median = statistics::upper_median(&sorted).unwrap_or(0.0);
        return (ImputationStrategy::Median, Value::Number(median));
    }

    let (mode, _) = statistics::mode(present.iter().copied())
        .unwrap_or((Value::String(config.fill_sentinel.clone()), 0));
    (ImputationStrategy::Mode, mode)
}

fn build_insights(
    strategies: &BTreeMap<String, ImputationStrategy>,
    columns_processed: usize,
    total_columns: usize,
) -> Vec<String> {
    if columns_processed == 0 {
        return vec!["All columns are complete".to_string()];
    }

    let count_of = |wanted: ImputationStrategy| {
        strategies.values().filter(|s| **s == wanted).count()
    };

    let mut insights = vec![format!(
        "{columns_processed} of {total_columns} columns contained missing values"
    )];
    let medians = count_of(ImputationStrategy::Median);
    if medians > 0 {
        insights.push(format!("Median fill applied to {medians} numeric columns"));
    }
    let modes = count_of(ImputationStrategy::Mode);
    if modes > 0 {
        insights.push(format!("Mode fill applied to {modes} categorical columns"));
    }
    let defaults = count_of(ImputationStrategy::Default);
    if defaults > 0 {
        insights.push(format!(
            "Sentinel fill applied to {defaults} columns with no observed values"
        ));
    }
    insights
}
