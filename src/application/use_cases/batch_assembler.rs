//! Batch Assembler
//!
//! Folds validated rows into the batch-create payload. Holds no state
//! and applies no rules of its own; it only guarantees ordering: records
//! mirror input row order, and errors from earlier rows precede errors
//! from later ones.

use crate::application::use_cases::row_validator::validate_row;
use crate::domain::csv_row::RawRow;
use crate::domain::property::{BatchRequest, ValidationError};

/// Validate every row and flatten the results, preserving input order
/// in both the record sequence and the error sequence. Rows with errors
/// are still included in the batch with their coerced values.
pub fn assemble_batch(rows: &[RawRow]) -> (BatchRequest, Vec<ValidationError>) {
    let mut inputs = Vec::with_capacity(rows.len());
    let mut all_errors = Vec::new();

    for row in rows {
        let (record, errors) = validate_row(row);
        inputs.push(record);
        all_errors.extend(errors);
    }

    (BatchRequest { inputs }, all_errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::{PropertyFieldType, PropertyType};

    fn row(line: usize, columns: &[(&str, &str)]) -> RawRow {
        RawRow::new(
            line,
            columns
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_three_row_batch() {
        let rows = vec![
            row(2, &[("label", "Nome"), ("type", "string"), ("fieldType", "text")]),
            row(3, &[("label", "Idade"), ("type", "number"), ("fieldType", "slider")]),
            row(
                4,
                &[
                    ("label", "Estado"),
                    ("type", "enumeration"),
                    ("fieldType", "select"),
                    ("options", "{not json"),
                ],
            ),
        ];

        let (request, errors) = assemble_batch(&rows);

        // Every row is submitted, errors or not
        assert_eq!(request.inputs.len(), 3);
        assert_eq!(request.inputs[0].name, "nome");
        assert_eq!(request.inputs[1].field_type, PropertyFieldType::Text);
        assert_eq!(request.inputs[2].property_type, PropertyType::Enumeration);
        assert_eq!(request.inputs[2].options, None);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].line, 3);
        assert!(errors[0].message.contains("fieldType inválido"));
        assert_eq!(errors[1].line, 4);
        assert!(errors[1].message.contains("options com JSON inválido"));
    }

    #[test]
    fn test_empty_input_yields_empty_batch() {
        let (request, errors) = assemble_batch(&[]);
        assert!(request.inputs.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_error_order_matches_row_order() {
        let rows = vec![
            row(2, &[("label", "A"), ("type", "x"), ("fieldType", "y")]),
            row(3, &[("label", "B"), ("type", "z"), ("fieldType", "text")]),
        ];

        let (_, errors) = assemble_batch(&rows);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].line, 2);
        assert!(errors[0].message.contains("type inválido"));
        assert_eq!(errors[1].line, 2);
        assert!(errors[1].message.contains("fieldType inválido"));
        assert_eq!(errors[2].line, 3);
        assert!(errors[2].message.contains("type inválido"));
    }
}
