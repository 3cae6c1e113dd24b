//! Row Validator
//!
//! Turns one raw CSV row into a cleaned property record plus the list
//! of validation problems found along the way. Malformed fields never
//! abort the row: each one degrades to a safe default and is recorded,
//! so a batch is always fully assembled.

use crate::application::use_cases::property_name::property_name;
use crate::domain::csv_row::RawRow;
use crate::domain::property::{PropertyFieldType, PropertyRecord, PropertyType, ValidationError};

/// Group applied when the CSV does not provide one.
pub const DEFAULT_GROUP_NAME: &str = "contactinformation";

/// Validate and clean a single row. Errors are collected in step order
/// (type, fieldType, options) and never short-circuit.
pub fn validate_row(row: &RawRow) -> (PropertyRecord, Vec<ValidationError>) {
    let mut errors = Vec::new();
    let line = row.line();

    // 1. type: only the first whitespace-delimited token counts, so
    //    trailing descriptive text ("string texto livre") is tolerated.
    //    The error message still quotes the full raw value.
    let type_raw = row.get("type").trim();
    let type_token = type_raw.split_whitespace().next().unwrap_or("");
    let property_type = match PropertyType::from_token(type_token) {
        Some(property_type) => property_type,
        None => {
            errors.push(ValidationError::new(
                line,
                format!(
                    "type inválido '{}' (deve ser um de {:?})",
                    type_raw,
                    PropertyType::NAMES
                ),
            ));
            PropertyType::String
        }
    };

    // 2. fieldType: exact match, no token splitting
    let field_type_raw = row.get("fieldType").trim();
    let field_type = match PropertyFieldType::from_token(field_type_raw) {
        Some(field_type) => field_type,
        None => {
            errors.push(ValidationError::new(
                line,
                format!(
                    "fieldType inválido '{}' (deve ser um de {:?})",
                    field_type_raw,
                    PropertyFieldType::NAMES
                ),
            ));
            PropertyFieldType::Text
        }
    };

    // 3. label is kept stripped; name is derived from the stripped label
    let label = row.get("label").trim().to_string();
    let name = property_name(&label);

    // 4. groupName: blank after stripping counts as not provided
    let group_raw = row.get("groupName").trim();
    let group_name = if group_raw.is_empty() {
        DEFAULT_GROUP_NAME.to_string()
    } else {
        group_raw.to_string()
    };

    // 5. options: only for rows whose effective type is enumeration and
    //    whose options cell is non-blank. A decode failure drops the
    //    field; no partial value is ever kept.
    let mut options = None;
    if property_type == PropertyType::Enumeration {
        let options_raw = row.get("options").trim();
        if !options_raw.is_empty() {
            match serde_json::from_str::<serde_json::Value>(options_raw) {
                Ok(value) => options = Some(value),
                Err(_) => {
                    errors.push(ValidationError::new(
                        line,
                        "options com JSON inválido".to_string(),
                    ));
                }
            }
        }
    }

    let record = PropertyRecord {
        label,
        name,
        property_type,
        field_type,
        group_name,
        options,
    };

    (record, errors)
}
