//! Cell values and the in-memory dataset model.
//!
//! Rows arrive from the caller as flat JSON objects, so [`Value`] is a small
//! closed variant covering exactly the scalar types a cell can hold. All
//! "is this numeric" decisions in the engine go through [`Value::as_number`];
//! no component re-derives its own coercion rules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single cell value.
///
/// Serializes untagged, so a `Row` round-trips as a plain JSON object
/// (`{"id": 1, "name": "Bob", "active": true, "notes": null}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

/// Shared null used when a row is missing a column entirely.
pub(crate) const NULL: Value = Value::Null;

impl Value {
    /// A cell counts as missing when it is null or the empty string.
    /// Whitespace-only strings are present (the text normalizer handles those).
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Numeric coercion: numbers pass through, booleans coerce to 0/1, and
    /// strings are parsed after trimming. Returns `None` for anything that
    /// does not represent a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) => Some(*n).filter(|n| n.is_finite()),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }

    /// Borrow the string content, if this is a string cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// String rendering used for normalized row keys: null becomes empty,
    /// numbers render without a trailing `.0`.
    pub fn key_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => fmt_number(*n),
            Value::String(s) => s.clone(),
        }
    }

    /// Identity key for frequency maps and distinct-counts. Unlike
    /// [`Value::key_string`] this keeps types apart, so the number `1` and
    /// the string `"1"` count as different values.
    pub(crate) fn set_key(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => format!("b:{b}"),
            Value::Number(n) => {
                // 0.0 and -0.0 are the same value
                let n = if *n == 0.0 { 0.0 } else { *n };
                format!("n:{}", n.to_bits())
            }
            Value::String(s) => format!("s:{s}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", fmt_number(*n)),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// Render a float the way a cell would display it: integral values without a
/// fractional part, everything else via the shortest float representation.
pub(crate) fn fmt_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// One row of a dataset, keyed by column name.
pub type Row = BTreeMap<String, Value>;

/// Look up a cell, treating an absent key as null.
pub(crate) fn cell<'a>(row: &'a Row, column: &str) -> &'a Value {
    row.get(column).unwrap_or(&NULL)
}

/// An in-memory table: an ordered row sequence plus an explicit column list.
///
/// The column list drives iteration order everywhere (dedup keys, pair
/// enumeration, summaries); rows are not required to carry every column, and
/// the list is not required to be the union of all row keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset from an explicit column list and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Build a dataset deriving the column list from the first row's keys
    /// (in sorted key order). Callers that care about display order should
    /// pass the list explicitly via [`Dataset::new`].
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values of a column in row order, with absent keys read as null.
    pub fn column_values(&self, column: &str) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |row| cell(row, column))
    }

    /// Non-missing values of a column in row order.
    pub fn present_values(&self, column: &str) -> Vec<&Value> {
        self.column_values(column)
            .filter(|v| !v.is_missing())
            .collect()
    }

    /// Count of missing cells in a column.
    pub fn missing_count(&self, column: &str) -> usize {
        self.column_values(column).filter(|v| v.is_missing()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_is_missing() {
        assert!(Value::Null.is_missing());
        assert!(Value::String(String::new()).is_missing());
        assert!(!Value::String("  ".to_string()).is_missing());
        assert!(!Value::Number(0.0).is_missing());
        assert!(!Value::Bool(false).is_missing());
    }

    #[test]
    fn test_as_number_coercions() {
        assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
        assert_eq!(Value::Bool(true).as_number(), Some(1.0));
        assert_eq!(Value::Bool(false).as_number(), Some(0.0));
        assert_eq!(Value::from(" 42 ").as_number(), Some(42.0));
        assert_eq!(Value::from("-3.5").as_number(), Some(-3.5));
        assert_eq!(Value::from("hello").as_number(), None);
        assert_eq!(Value::from("").as_number(), None);
        assert_eq!(Value::Null.as_number(), None);
        assert_eq!(Value::Number(f64::NAN).as_number(), None);
        assert_eq!(Value::from("NaN").as_number(), None);
    }

    #[test]
    fn test_key_string_rendering() {
        assert_eq!(Value::Number(1.0).key_string(), "1");
        assert_eq!(Value::Number(1.5).key_string(), "1.5");
        assert_eq!(Value::Null.key_string(), "");
        assert_eq!(Value::Bool(true).key_string(), "true");
    }

    #[test]
    fn test_set_key_keeps_types_apart() {
        assert_ne!(Value::Number(1.0).set_key(), Value::from("1").set_key());
        assert_eq!(Value::Number(0.0).set_key(), Value::Number(-0.0).set_key());
    }

    #[test]
    fn test_value_json_roundtrip() {
        let row = row(&[
            ("id", Value::Number(1.0)),
            ("name", Value::from("Bob")),
            ("active", Value::Bool(true)),
            ("notes", Value::Null),
        ]);
        let json = serde_json::to_string(&row).expect("Should serialize");
        assert_eq!(json, r#"{"active":true,"id":1.0,"name":"Bob","notes":null}"#);

        let back: Row = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn test_from_rows_derives_columns() {
        let ds = Dataset::from_rows(vec![row(&[
            ("b", Value::Number(1.0)),
            ("a", Value::from("x")),
        ])]);
        assert_eq!(ds.columns, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(ds.row_count(), 1);

        let empty = Dataset::from_rows(vec![]);
        assert!(empty.is_empty());
        assert!(empty.columns.is_empty());
    }

    #[test]
    fn test_present_values_skips_missing_and_absent() {
        let ds = Dataset::new(
            vec!["a".to_string()],
            vec![
                row(&[("a", Value::Number(1.0))]),
                row(&[("a", Value::Null)]),
                row(&[("a", Value::from(""))]),
                row(&[]),
                row(&[("a", Value::from("x"))]),
            ],
        );
        assert_eq!(ds.present_values("a").len(), 2);
        assert_eq!(ds.missing_count("a"), 3);
    }
}
