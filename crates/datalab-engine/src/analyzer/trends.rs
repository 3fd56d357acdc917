//! Trend detection via first-half / second-half mean comparison.

use crate::config::EngineConfig;
use crate::profiler::{is_date_like, statistics};
use crate::types::{TrendAnalysis, TrendPatterns};
use crate::value::Dataset;
use tracing::debug;

/// Scan numeric columns for a mean shift between the two halves of the data.
///
/// The half-split scan applies to date-free datasets; when date-like columns
/// are present they are reported in the reasoning instead. Independently,
/// datasets with enough rows are flagged as eligible for seasonal analysis
/// (a descriptive flag only; no decomposition is performed).
pub fn analyze_trends(dataset: &Dataset, config: &EngineConfig) -> TrendAnalysis {
    if dataset.is_empty() {
        return TrendAnalysis {
            trends: Vec::new(),
            patterns: TrendPatterns::default(),
            reasoning: "No data to analyze for trends.".to_string(),
        };
    }

    let date_columns: Vec<String> = dataset
        .columns
        .iter()
        .filter(|column| dataset.present_values(column).iter().any(|v| is_date_like(v)))
        .cloned()
        .collect();

    let numeric_columns: Vec<String> = dataset
        .columns
        .iter()
        .filter(|column| {
            let present = dataset.present_values(column);
            !present.is_empty() && present.iter().all(|v| v.as_number().is_some())
        })
        .cloned()
        .collect();

    let mut trends = Vec::new();
    if date_columns.is_empty() {
        for column in &numeric_columns {
            let numbers: Vec<f64> = dataset
                .present_values(column)
                .iter()
                .filter_map(|v| v.as_number())
                .collect();
            if numbers.len() <= 2 {
                continue;
            }

            // First half takes the remainder row when the count is odd
            let split = numbers.len() - numbers.len() / 2;
            let first_avg = statistics::mean(&numbers[..split]).unwrap_or(0.0);
            let second_avg = statistics::mean(&numbers[split..]).unwrap_or(0.0);
            if first_avg == 0.0 {
                debug!(column = %column, "zero first-half mean, percent change undefined");
                continue;
            }

            let change = (second_avg - first_avg) / first_avg * 100.0;
            if change.abs() > config.trend_change_threshold {
                let direction = if change > 0.0 { "upward" } else { "downward" };
                trends.push(format!(
                    "{column} is trending {direction} ({change:.1}% change from first to \
                     second half)"
                ));
            }
        }
    }

    let patterns = if dataset.row_count() >= config.seasonality_min_rows {
        TrendPatterns {
            data_points: Some(dataset.row_count()),
            potential_seasonality: Some(true),
        }
    } else {
        TrendPatterns::default()
    };

    let reasoning = if date_columns.is_empty() {
        format!(
            "Compared first-half and second-half means across {} numeric columns; {} columns \
             moved more than {}%.",
            numeric_columns.len(),
            trends.len(),
            config.trend_change_threshold
        )
    } else {
        format!(
            "Found {} date-like columns ({}); sequential half-split trends apply to date-free \
             data only.",
            date_columns.len(),
            date_columns.join(", ")
        )
    };

    TrendAnalysis {
        trends,
        patterns,
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Row, Value};
    use pretty_assertions::assert_eq;

    fn column_of(name: &str, values: Vec<Value>) -> Dataset {
        let rows = values
            .into_iter()
            .map(|v| Row::from([(name.to_string(), v)]))
            .collect();
        Dataset::new(vec![name.to_string()], rows)
    }

    fn numbers(values: &[f64]) -> Dataset {
        column_of("sales", values.iter().map(|n| Value::Number(*n)).collect())
    }

    #[test]
    fn test_upward_trend_detected() {
        // halves [10, 10] and [20, 20]: +100% change
        let analysis = analyze_trends(&numbers(&[10.0, 10.0, 20.0, 20.0]), &EngineConfig::default());
        assert_eq!(analysis.trends.len(), 1);
        assert!(analysis.trends[0].contains("upward"));
        assert!(analysis.trends[0].contains("100.0%"));
    }

    #[test]
    fn test_downward_trend_detected() {
        let analysis = analyze_trends(&numbers(&[20.0, 20.0, 10.0, 10.0]), &EngineConfig::default());
        assert_eq!(analysis.trends.len(), 1);
        assert!(analysis.trends[0].contains("downward"));
    }

    #[test]
    fn test_odd_count_first_half_takes_remainder() {
        // split = 3: first [10, 10, 10], second [20, 20]: +100%
        let analysis =
            analyze_trends(&numbers(&[10.0, 10.0, 10.0, 20.0, 20.0]), &EngineConfig::default());
        assert_eq!(analysis.trends.len(), 1);
        assert!(analysis.trends[0].contains("100.0%"));
    }

    #[test]
    fn test_small_change_below_threshold() {
        let analysis =
            analyze_trends(&numbers(&[100.0, 100.0, 105.0, 105.0]), &EngineConfig::default());
        assert!(analysis.trends.is_empty());
    }

    #[test]
    fn test_too_few_values_skipped() {
        let analysis = analyze_trends(&numbers(&[1.0, 100.0]), &EngineConfig::default());
        assert!(analysis.trends.is_empty());
    }

    #[test]
    fn test_seasonality_flag_at_twelve_rows() {
        let values: Vec<f64> = (1..=12).map(|n| n as f64).collect();
        let analysis = analyze_trends(&numbers(&values), &EngineConfig::default());
        assert_eq!(analysis.patterns.data_points, Some(12));
        assert_eq!(analysis.patterns.potential_seasonality, Some(true));

        let short = analyze_trends(&numbers(&[1.0, 2.0, 3.0]), &EngineConfig::default());
        assert_eq!(short.patterns.data_points, None);
        assert_eq!(short.patterns.potential_seasonality, None);
    }

    #[test]
    fn test_date_columns_suppress_half_split_scan() {
        let rows = (0..6)
            .map(|i| {
                Row::from([
                    ("day".to_string(), Value::from(format!("2024-01-{:02}", i + 1))),
                    (
                        "sales".to_string(),
                        Value::Number(if i < 3 { 10.0 } else { 100.0 }),
                    ),
                ])
            })
            .collect();
        let ds = Dataset::new(vec!["day".to_string(), "sales".to_string()], rows);
        let analysis = analyze_trends(&ds, &EngineConfig::default());

        assert!(analysis.trends.is_empty());
        assert!(analysis.reasoning.contains("day"));
    }

    #[test]
    fn test_zero_first_half_mean_skipped() {
        let analysis = analyze_trends(&numbers(&[0.0, 0.0, 5.0, 5.0]), &EngineConfig::default());
        assert!(analysis.trends.is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let analysis = analyze_trends(&Dataset::default(), &EngineConfig::default());
        assert!(analysis.trends.is_empty());
        assert!(!analysis.reasoning.is_empty());
    }
}
