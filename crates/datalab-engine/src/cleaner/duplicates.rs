//! Duplicate row detection and removal.

use crate::types::DuplicateAnalysis;
use crate::value::{Dataset, Row, cell};
use std::collections::HashSet;
use tracing::debug;

/// Join delimiter for normalized row keys; does not occur in normal data.
const KEY_DELIMITER: &str = "|";

/// Normalized whole-row key: every value in column order, stringified,
/// lower-cased and trimmed. Rows agreeing on this key are duplicates.
fn row_key(row: &Row, columns: &[String]) -> String {
    columns
        .iter()
        .map(|column| cell(row, column).key_string().to_lowercase().trim().to_string())
        .collect::<Vec<_>>()
        .join(KEY_DELIMITER)
}

/// Remove rows that are exact repeats under the normalized key.
///
/// The first occurrence of each key survives; later occurrences are recorded
/// by their 1-based position in the original order and dropped. Relative
/// order of surviving rows is unchanged.
pub fn remove_duplicates(dataset: &Dataset) -> (Dataset, DuplicateAnalysis) {
    if dataset.is_empty() {
        return (
            dataset.clone(),
            DuplicateAnalysis {
                original_count: 0,
                duplicates_found: 0,
                final_count: 0,
                duplicate_rows: Vec::new(),
                reasoning: "No data to deduplicate.".to_string(),
            },
        );
    }

    let original_count = dataset.row_count();
    let mut seen: HashSet<String> = HashSet::with_capacity(original_count);
    let mut kept: Vec<Row> = Vec::with_capacity(original_count);
    let mut duplicate_rows: Vec<usize> = Vec::new();

    for (index, row) in dataset.rows.iter().enumerate() {
        let key = row_key(row, &dataset.columns);
        if seen.insert(key) {
            kept.push(row.clone());
        } else {
            duplicate_rows.push(index + 1);
        }
    }

    let duplicates_found = duplicate_rows.len();
    let final_count = kept.len();
    debug!(original_count, duplicates_found, "deduplication complete");

    let reasoning = if duplicates_found == 0 {
        format!(
            "Scanned {original_count} rows using a normalized whole-row key; no duplicates found."
        )
    } else {
        format!(
            "Scanned {original_count} rows using a normalized whole-row key and removed \
             {duplicates_found} duplicate rows; {final_count} unique rows remain."
        )
    };

    (
        Dataset::new(dataset.columns.clone(), kept),
        DuplicateAnalysis {
            original_count,
            duplicates_found,
            final_count,
            duplicate_rows,
            reasoning,
        },
    )
}
