//! Pairwise Pearson correlation across numeric columns.

use crate::config::EngineConfig;
use crate::profiler::statistics;
use crate::types::CorrelationAnalysis;
use crate::value::{Dataset, cell};
use std::collections::BTreeMap;
use tracing::debug;

/// Compute Pearson correlation for every unordered pair of numeric columns.
///
/// A column qualifies when it has at least one non-missing value and every
/// non-missing value coerces to a number. Pairing is row-wise: rows where
/// either side fails to parse are excluded from that pair's sample, so the
/// parse is re-evaluated per pair. Degenerate pairs (constant column, empty
/// sample) get no entry.
pub fn analyze_correlations(dataset: &Dataset, config: &EngineConfig) -> CorrelationAnalysis {
    if dataset.is_empty() {
        return CorrelationAnalysis {
            correlations: BTreeMap::new(),
            strong_relationships: Vec::new(),
            reasoning: "No data to correlate.".to_string(),
        };
    }

    let numeric_columns: Vec<String> = dataset
        .columns
        .iter()
        .filter(|column| {
            let present = dataset.present_values(column);
            !present.is_empty() && present.iter().all(|v| v.as_number().is_some())
        })
        .cloned()
        .collect();

    let mut correlations = BTreeMap::new();
    let mut strong_relationships = Vec::new();

    for (i, left) in numeric_columns.iter().enumerate() {
        for right in &numeric_columns[i + 1..] {
            let mut xs = Vec::with_capacity(dataset.row_count());
            let mut ys = Vec::with_capacity(dataset.row_count());
            for row in &dataset.rows {
                if let (Some(x), Some(y)) =
                    (cell(row, left).as_number(), cell(row, right).as_number())
                {
                    xs.push(x);
                    ys.push(y);
                }
            }

            let Some(r) = statistics::pearson(&xs, &ys) else {
                debug!(left = %left, right = %right, "degenerate column pair skipped");
                continue;
            };

            correlations.insert(format!("{left}-{right}"), statistics::round3(r));
            if r.abs() > config.strong_correlation_threshold {
                strong_relationships.push(format!("{left} and {right} ({r:.3})"));
            }
        }
    }

    let reasoning = format!(
        "Computed Pearson correlation for {} column pairs across {} numeric columns; {} strong \
         relationships (|r| > {}).",
        correlations.len(),
        numeric_columns.len(),
        strong_relationships.len(),
        config.strong_correlation_threshold
    );

    CorrelationAnalysis {
        correlations,
        strong_relationships,
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Row, Value};
    use pretty_assertions::assert_eq;

    fn xy_dataset(pairs: &[(f64, f64)]) -> Dataset {
        let rows = pairs
            .iter()
            .map(|(x, y)| {
                Row::from([
                    ("x".to_string(), Value::Number(*x)),
                    ("y".to_string(), Value::Number(*y)),
                ])
            })
            .collect();
        Dataset::new(vec!["x".to_string(), "y".to_string()], rows)
    }

    #[test]
    fn test_perfect_linear_relationship() {
        let ds = xy_dataset(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
        let analysis = analyze_correlations(&ds, &EngineConfig::default());

        assert_eq!(analysis.correlations["x-y"], 1.0);
        assert_eq!(analysis.strong_relationships.len(), 1);
        assert!(analysis.strong_relationships[0].starts_with("x and y"));
    }

    #[test]
    fn test_weak_relationship_not_reported_strong() {
        let ds = xy_dataset(&[(1.0, 5.0), (2.0, 1.0), (3.0, 4.0), (4.0, 2.0), (5.0, 3.0)]);
        let analysis = analyze_correlations(&ds, &EngineConfig::default());

        let r = analysis.correlations["x-y"];
        assert!(r.abs() <= 0.7);
        assert!(analysis.strong_relationships.is_empty());
    }

    #[test]
    fn test_constant_column_pair_skipped() {
        let ds = xy_dataset(&[(5.0, 1.0), (5.0, 2.0), (5.0, 3.0)]);
        let analysis = analyze_correlations(&ds, &EngineConfig::default());
        assert!(analysis.correlations.is_empty());
    }

    #[test]
    fn test_pairing_skips_rows_with_unparseable_side() {
        let mut ds = xy_dataset(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
        // A null y leaves x's other pairings alone; the row drops out of x-y
        ds.rows.push(Row::from([
            ("x".to_string(), Value::Number(100.0)),
            ("y".to_string(), Value::Null),
        ]));
        let analysis = analyze_correlations(&ds, &EngineConfig::default());
        assert_eq!(analysis.correlations["x-y"], 1.0);
    }

    #[test]
    fn test_mixed_column_is_not_numeric() {
        let mut ds = xy_dataset(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
        ds.columns.push("label".to_string());
        for (i, row) in ds.rows.iter_mut().enumerate() {
            row.insert("label".to_string(), Value::from(format!("r{i}")));
        }
        let analysis = analyze_correlations(&ds, &EngineConfig::default());
        // Only the x-y pair exists; label is excluded entirely
        assert_eq!(analysis.correlations.len(), 1);
    }

    #[test]
    fn test_negative_strong_relationship() {
        let ds = xy_dataset(&[(1.0, 9.0), (2.0, 7.0), (3.0, 5.0), (4.0, 3.0)]);
        let analysis = analyze_correlations(&ds, &EngineConfig::default());
        assert_eq!(analysis.correlations["x-y"], -1.0);
        assert_eq!(analysis.strong_relationships.len(), 1);
        assert!(analysis.strong_relationships[0].contains("-1.000"));
    }

    #[test]
    fn test_empty_dataset() {
        let analysis = analyze_correlations(&Dataset::default(), &EngineConfig::default());
        assert!(analysis.correlations.is_empty());
        assert!(!analysis.reasoning.is_empty());
    }
}
