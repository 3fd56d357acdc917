//! Type inference logic for column analysis.
//!
//! This is the single source of truth for "is this value numeric" and "is
//! this value date-like"; every operation routes its classification through
//! here instead of re-deriving its own coercion rules.

use crate::value::{Dataset, Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Date pattern regexes - compiled once at startup
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}[-/]\d{1,2}[-/]\d{1,2}$").expect("Invalid regex: YYYY-MM-DD"),
        Regex::new(r"^\d{1,2}[-/]\d{1,2}[-/]\d{4}$").expect("Invalid regex: MM-DD-YYYY"),
        Regex::new(r"^\d{4}-\d{2}-\d{2}\s\d{2}:\d{2}:\d{2}$").expect("Invalid regex: datetime"),
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").expect("Invalid regex: ISO"),
    ]
});

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m-%d-%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Classification of a column's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Every non-missing value coerces to a number.
    Numeric,
    /// More than the configured fraction of values parses as a date.
    Date,
    /// Anything else with at least one value.
    Text,
    /// No non-missing values at all.
    Empty,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Date => "date",
            ColumnType::Text => "text",
            ColumnType::Empty => "empty",
        }
    }
}

/// Check whether a string looks like a calendar date or timestamp.
///
/// Numeric strings never qualify: the numeric check takes priority, because
/// values like "2024" would otherwise misclassify as dates.
pub fn is_date_like_str(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.parse::<f64>().is_ok() {
        return false;
    }
    if !DATE_PATTERNS.iter().any(|p| p.is_match(trimmed)) {
        return false;
    }

    // The patterns are shape-only; let chrono reject month 13 and friends.
    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(trimmed, fmt).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).is_ok())
        || DateTime::parse_from_rfc3339(trimmed).is_ok()
}

/// Check whether a cell value is date-like. Only string cells qualify.
pub fn is_date_like(value: &Value) -> bool {
    value.as_str().is_some_and(is_date_like_str)
}

/// Value counts backing a column classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnTypeProfile {
    /// Non-missing values observed.
    pub total: usize,
    /// Values that coerce to a finite number.
    pub numeric_count: usize,
    /// Values that parse as a date.
    pub date_count: usize,
}

impl ColumnTypeProfile {
    /// Classify using the priority order numeric > date > text.
    pub fn column_type(&self, date_fraction_threshold: f64) -> ColumnType {
        if self.total == 0 {
            return ColumnType::Empty;
        }
        if self.numeric_count == self.total {
            return ColumnType::Numeric;
        }
        if self.date_count as f64 / self.total as f64 > date_fraction_threshold {
            return ColumnType::Date;
        }
        ColumnType::Text
    }
}

/// Count numeric and date-like values among a column's non-missing cells.
pub fn profile_column(dataset: &Dataset, column: &str) -> ColumnTypeProfile {
    let values = dataset.present_values(column);
    let numeric_count = values.iter().filter(|v| v.as_number().is_some()).count();
    let date_count = values.iter().filter(|v| is_date_like(v)).count();
    ColumnTypeProfile {
        total: values.len(),
        numeric_count,
        date_count,
    }
}

/// Infer the type of a column from its non-missing values.
pub fn infer_column_type(
    dataset: &Dataset,
    column: &str,
    date_fraction_threshold: f64,
) -> ColumnType {
    profile_column(dataset, column).column_type(date_fraction_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Row;

    fn dataset_with_column(values: Vec<Value>) -> Dataset {
        let rows = values
            .into_iter()
            .map(|v| Row::from([("col".to_string(), v)]))
            .collect();
        Dataset::new(vec!["col".to_string()], rows)
    }

    // ==================== is_date_like_str tests ====================

    #[test]
    fn test_date_like_iso_format() {
        assert!(is_date_like_str("2024-01-15"));
        assert!(is_date_like_str("2024/01/15"));
        assert!(is_date_like_str("01/15/2024"));
    }

    #[test]
    fn test_date_like_with_time() {
        assert!(is_date_like_str("2024-01-15 10:30:00"));
        assert!(is_date_like_str("2024-01-15T10:30:00"));
    }

    #[test]
    fn test_date_like_rejects_numeric_strings() {
        // Tie-break rule: numeric strings are never dates
        assert!(!is_date_like_str("2024"));
        assert!(!is_date_like_str("1705312200"));
        assert!(!is_date_like_str("3.14"));
    }

    #[test]
    fn test_date_like_rejects_invalid_calendar_dates() {
        assert!(!is_date_like_str("2024-13-45"));
        assert!(!is_date_like_str("99/99/2024"));
    }

    #[test]
    fn test_date_like_rejects_plain_text() {
        assert!(!is_date_like_str("hello"));
        assert!(!is_date_like_str(""));
        assert!(!is_date_like_str("not a date"));
    }

    #[test]
    fn test_date_like_only_string_cells() {
        assert!(is_date_like(&Value::from("2024-01-15")));
        assert!(!is_date_like(&Value::Number(20240115.0)));
        assert!(!is_date_like(&Value::Null));
    }

    // ==================== infer_column_type tests ====================

    #[test]
    fn test_infer_type_all_numeric() {
        let ds = dataset_with_column(vec![
            Value::Number(1.0),
            Value::from("2"),
            Value::Bool(true),
        ]);
        assert_eq!(infer_column_type(&ds, "col", 0.8), ColumnType::Numeric);
    }

    #[test]
    fn test_infer_type_dates_above_threshold() {
        let ds = dataset_with_column(vec![
            Value::from("2024-01-15"),
            Value::from("2024-02-20"),
            Value::from("2024-03-25"),
            Value::from("2024-04-30"),
            Value::from("2024-05-05"),
        ]);
        assert_eq!(infer_column_type(&ds, "col", 0.8), ColumnType::Date);
    }

    #[test]
    fn test_infer_type_dates_below_threshold_is_text() {
        // 2 of 5 parse as dates (40% < 80%)
        let ds = dataset_with_column(vec![
            Value::from("2024-01-15"),
            Value::from("2024-02-20"),
            Value::from("pending"),
            Value::from("pending"),
            Value::from("pending"),
        ]);
        assert_eq!(infer_column_type(&ds, "col", 0.8), ColumnType::Text);
    }

    #[test]
    fn test_infer_type_numeric_priority_over_date() {
        // Year-like numeric strings stay numeric
        let ds = dataset_with_column(vec![
            Value::from("2021"),
            Value::from("2022"),
            Value::from("2023"),
        ]);
        assert_eq!(infer_column_type(&ds, "col", 0.8), ColumnType::Numeric);
    }

    #[test]
    fn test_infer_type_mixed_is_text() {
        let ds = dataset_with_column(vec![
            Value::from("abc"),
            Value::Number(1.0),
            Value::from("def"),
        ]);
        assert_eq!(infer_column_type(&ds, "col", 0.8), ColumnType::Text);
    }

    #[test]
    fn test_infer_type_empty_column() {
        let ds = dataset_with_column(vec![Value::Null, Value::from("")]);
        assert_eq!(infer_column_type(&ds, "col", 0.8), ColumnType::Empty);
    }

    #[test]
    fn test_infer_type_skips_missing_values() {
        let ds = dataset_with_column(vec![Value::Null, Value::from("5"), Value::from("")]);
        assert_eq!(infer_column_type(&ds, "col", 0.8), ColumnType::Numeric);
    }

    #[test]
    fn test_profile_column_counts() {
        let ds = dataset_with_column(vec![
            Value::from("1"),
            Value::from("2024-01-15"),
            Value::from("abc"),
            Value::Null,
        ]);
        let profile = profile_column(&ds, "col");
        assert_eq!(profile.total, 3);
        assert_eq!(profile.numeric_count, 1);
        assert_eq!(profile.date_count, 1);
    }
}
