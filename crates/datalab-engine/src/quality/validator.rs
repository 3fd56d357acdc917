//! Per-column type-consistency validation.

use crate::config::EngineConfig;
use crate::profiler::{ColumnType, profile_column};
use crate::types::ValidationAnalysis;
use crate::value::Dataset;
use std::collections::BTreeMap;
use tracing::debug;

/// Classify every column and flag quality problems.
///
/// Two kinds of findings: columns with no values at all, and columns where
/// only some values are numeric. The mixed-type check is independent of the
/// final type label, so a column classified `date` or `text` by the priority
/// rule still gets the warning when it carries a stray numeric minority.
pub fn validate_data(dataset: &Dataset, config: &EngineConfig) -> ValidationAnalysis {
    if dataset.is_empty() {
        return ValidationAnalysis {
            validation_errors: Vec::new(),
            data_types: BTreeMap::new(),
            reasoning: "No data to validate.".to_string(),
        };
    }

    let mut validation_errors = Vec::new();
    let mut data_types = BTreeMap::new();

    for column in &dataset.columns {
        let profile = profile_column(dataset, column);
        let column_type = profile.column_type(config.date_fraction_threshold);
        data_types.insert(column.clone(), column_type);

        if column_type == ColumnType::Empty {
            validation_errors
                .push(format!("Column '{column}' contains only null/empty values"));
            continue;
        }

        let numeric = profile.numeric_count;
        let total = profile.total;
        if numeric > 0 && (numeric as f64) < total as f64 * config.mixed_type_threshold {
            debug!(column = %column, numeric, total, "mixed-type column");
            validation_errors.push(format!(
                "Column '{column}' has mixed data types ({numeric} of {total} values are \
                 numeric)"
            ));
        }
    }

    let reasoning = if validation_errors.is_empty() {
        format!(
            "Validated {} columns; all passed type-consistency checks.",
            dataset.column_count()
        )
    } else {
        format!(
            "Validated {} columns; {} issues found.",
            dataset.column_count(),
            validation_errors.len()
        )
    };

    ValidationAnalysis {
        validation_errors,
        data_types,
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Row, Value};
    use pretty_assertions::assert_eq;

    fn column_of(values: Vec<Value>) -> Dataset {
        let rows = values
            .into_iter()
            .map(|v| Row::from([("col".to_string(), v)]))
            .collect();
        Dataset::new(vec!["col".to_string()], rows)
    }

    #[test]
    fn test_numeric_column_clean() {
        let ds = column_of(vec![Value::from("1"), Value::Number(2.0), Value::Bool(true)]);
        let analysis = validate_data(&ds, &EngineConfig::default());

        assert_eq!(analysis.data_types["col"], ColumnType::Numeric);
        assert!(analysis.validation_errors.is_empty());
    }

    #[test]
    fn test_empty_column_flagged() {
        let ds = column_of(vec![Value::Null, Value::from("")]);
        let analysis = validate_data(&ds, &EngineConfig::default());

        assert_eq!(analysis.data_types["col"], ColumnType::Empty);
        assert_eq!(
            analysis.validation_errors,
            vec!["Column 'col' contains only null/empty values".to_string()]
        );
    }

    #[test]
    fn test_mixed_type_warning() {
        // 2 of 4 numeric: below the 90% threshold, above zero
        let ds = column_of(vec![
            Value::from("1"),
            Value::from("2"),
            Value::from("abc"),
            Value::from("def"),
        ]);
        let analysis = validate_data(&ds, &EngineConfig::default());

        assert_eq!(analysis.data_types["col"], ColumnType::Text);
        assert_eq!(analysis.validation_errors.len(), 1);
        assert!(analysis.validation_errors[0].contains("mixed data types"));
        assert!(analysis.validation_errors[0].contains("2 of 4"));
    }

    #[test]
    fn test_all_numeric_no_mixed_warning() {
        let ds = column_of(vec![Value::from("1"), Value::from("2"), Value::from("3")]);
        let analysis = validate_data(&ds, &EngineConfig::default());
        assert!(analysis.validation_errors.is_empty());
    }

    #[test]
    fn test_pure_text_no_mixed_warning() {
        let ds = column_of(vec![Value::from("a"), Value::from("b")]);
        let analysis = validate_data(&ds, &EngineConfig::default());
        assert_eq!(analysis.data_types["col"], ColumnType::Text);
        assert!(analysis.validation_errors.is_empty());
    }

    #[test]
    fn test_date_column_with_numeric_minority_gets_both() {
        // 5 dates + 1 numeric out of 6: date fraction 83% > 80%, classified
        // date, and the numeric minority still triggers the mixed warning
        let ds = column_of(vec![
            Value::from("2024-01-01"),
            Value::from("2024-01-02"),
            Value::from("2024-01-03"),
            Value::from("2024-01-04"),
            Value::from("2024-01-05"),
            Value::from("7"),
        ]);
        let analysis = validate_data(&ds, &EngineConfig::default());

        assert_eq!(analysis.data_types["col"], ColumnType::Date);
        assert_eq!(analysis.validation_errors.len(), 1);
        assert!(analysis.validation_errors[0].contains("mixed data types"));
    }

    #[test]
    fn test_empty_dataset() {
        let analysis = validate_data(&Dataset::default(), &EngineConfig::default());
        assert!(analysis.data_types.is_empty());
        assert!(!analysis.reasoning.is_empty());
    }
}
