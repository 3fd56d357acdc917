//! Per-column statistical profiles and dataset-level completeness.

use crate::config::EngineConfig;
use crate::profiler::statistics;
use crate::types::{ColumnSummary, DataShape, SummaryAnalysis, TopValue};
use crate::value::Dataset;
use std::collections::BTreeMap;

/// Profile every column: numeric columns get min/max/mean/median, everything
/// else gets a distinct count and a top-value frequency ranking.
pub fn generate_summary(dataset: &Dataset, config: &EngineConfig) -> SummaryAnalysis {
    if dataset.is_empty() {
        return SummaryAnalysis {
            summary: BTreeMap::new(),
            data_shape: DataShape {
                rows: 0,
                columns: dataset.column_count(),
                completeness: "100.0%".to_string(),
            },
            insights: Vec::new(),
            reasoning: "No data to summarize.".to_string(),
        };
    }

    let mut summary = BTreeMap::new();
    let mut total_missing = 0;
    let mut numeric_columns = 0;
    let mut categorical_columns = 0;

    for column in &dataset.columns {
        let present = dataset.present_values(column);
        let missing = dataset.row_count() - present.len();
        total_missing += missing;

        let numbers: Vec<f64> = present.iter().filter_map(|v| v.as_number()).collect();
        let column_summary = if !present.is_empty() && numbers.len() == present.len() {
            numeric_columns += 1;
            let sorted = statistics::sorted_ascending(&numbers);
            ColumnSummary::Numeric {
                count: present.len(),
                missing,
                unique: statistics::distinct_count(present.iter().copied()),
                min: sorted[0],
                max: sorted[sorted.len() - 1],
                mean: statistics::mean(&numbers).unwrap_or(0.0),
                median: statistics::upper_median(&sorted).unwrap_or(0.0),
            }
        } else {
            categorical_columns += 1;
            let mut counts = statistics::value_counts(present.iter().copied());
            counts.sort_by(|a, b| b.1.cmp(&a.1)); // stable: ties keep first-seen order
            let top_values = counts
                .into_iter()
                .take(config.top_values)
                .map(|(value, count)| TopValue {
                    value,
                    count,
                    percentage: statistics::round1(count as f64 / present.len() as f64 * 100.0),
                })
                .collect();

            ColumnSummary::Categorical {
                count: present.len(),
                missing,
                unique: statistics::distinct_count(present.iter().copied()),
                top_values,
            }
        };

        summary.insert(column.clone(), column_summary);
    }

    let total_cells = dataset.row_count() * dataset.column_count();
    let completeness = if total_cells == 0 {
        100.0
    } else {
        (total_cells - total_missing) as f64 / total_cells as f64 * 100.0
    };
    let completeness = format!("{completeness:.1}%");

    let mut insights = vec![format!("Dataset completeness is {completeness}")];
    if numeric_columns > 0 {
        insights.push(format!(
            "{numeric_columns} numeric columns profiled with min/max/mean/median statistics"
        ));
    }
    if categorical_columns > 0 {
        insights.push(format!(
            "{categorical_columns} categorical columns profiled with top-value frequencies"
        ));
    }

    let reasoning = format!(
        "Generated a statistical profile for {} columns across {} rows ({} numeric, {} \
         categorical).",
        dataset.column_count(),
        dataset.row_count(),
        numeric_columns,
        categorical_columns
    );

    SummaryAnalysis {
        summary,
        data_shape: DataShape {
            rows: dataset.row_count(),
            columns: dataset.column_count(),
            completeness,
        },
        insights,
        reasoning,
    }
}
