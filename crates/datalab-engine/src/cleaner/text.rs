//! Text normalization for string columns.

use crate::types::TextNormalizationAnalysis;
use crate::value::{Dataset, Value, cell};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace run"));

/// Column names that get title-cased in addition to the base normalization.
fn is_name_like(column: &str) -> bool {
    let lower = column.to_lowercase();
    lower.contains("name") || lower.contains("title")
}

/// Trim, collapse whitespace runs to a single space, lower-case.
fn normalize(value: &str) -> String {
    WHITESPACE_RUN
        .replace_all(value.trim(), " ")
        .to_lowercase()
}

/// Upper-case the first word character of each word (a word character is
/// alphanumeric or underscore, matching `\b\w` boundaries).
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_is_word = false;
    for c in value.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

/// Normalize every string value in columns that contain strings.
///
/// A column qualifies when at least one of its values is a string, so mixed
/// columns are covered too; non-string values in those columns are left
/// untouched.
pub fn normalize_text(dataset: &Dataset) -> (Dataset, TextNormalizationAnalysis) {
    if dataset.is_empty() {
        return (
            dataset.clone(),
            TextNormalizationAnalysis {
                text_columns: Vec::new(),
                transformations: Vec::new(),
                reasoning: "No data to normalize.".to_string(),
                insights: Vec::new(),
            },
        );
    }

    let text_columns: Vec<String> = dataset
        .columns
        .iter()
        .filter(|column| {
            dataset
                .rows
                .iter()
                .any(|row| matches!(cell(row, column), Value::String(_)))
        })
        .cloned()
        .collect();

    let mut rows = dataset.rows.clone();
    for column in &text_columns {
        let titled = is_name_like(column);
        for row in &mut rows {
            if let Some(Value::String(s)) = row.get(column) {
                let mut normalized = normalize(s);
                if titled {
                    normalized = title_case(&normalized);
                }
                row.insert(column.clone(), Value::String(normalized));
            }
        }
    }
    debug!(columns = text_columns.len(), "text normalization complete");

    let name_like_count = text_columns.iter().filter(|c| is_name_like(c)).count();
    let transformations = vec![
        "Trimmed leading and trailing whitespace".to_string(),
        "Collapsed repeated whitespace to single spaces".to_string(),
        "Converted text to lowercase".to_string(),
        "Title-cased name and title columns".to_string(),
    ];
    let mut insights = vec![format!("{} text columns normalized", text_columns.len())];
    if name_like_count > 0 {
        insights.push(format!("{name_like_count} name-like columns title-cased"));
    }

    let reasoning = format!(
        "Standardized formatting in {} text columns: whitespace trimmed and collapsed, case \
         folded, and name-like columns title-cased.",
        text_columns.len()
    );

    (
        Dataset::new(dataset.columns.clone(), rows),
        TextNormalizationAnalysis {
            text_columns,
            transformations,
            reasoning,
            insights,
        },
    )
}
