// ============================================================
// PROPERTY TYPES
// ============================================================
// Data structures for HubSpot contact-property definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Underlying data type of a contact property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    String,
    Enumeration,
    Number,
    Bool,
    Datetime,
    Date,
    PhoneNumber,
}

impl PropertyType {
    /// Accepted spellings, in the order error messages list them.
    pub const NAMES: [&'static str; 7] = [
        "string",
        "enumeration",
        "number",
        "bool",
        "datetime",
        "date",
        "phone_number",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Enumeration => "enumeration",
            PropertyType::Number => "number",
            PropertyType::Bool => "bool",
            PropertyType::Datetime => "datetime",
            PropertyType::Date => "date",
            PropertyType::PhoneNumber => "phone_number",
        }
    }

    /// Parse an exact, case-sensitive token into a property type.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "string" => Some(PropertyType::String),
            "enumeration" => Some(PropertyType::Enumeration),
            "number" => Some(PropertyType::Number),
            "bool" => Some(PropertyType::Bool),
            "datetime" => Some(PropertyType::Datetime),
            "date" => Some(PropertyType::Date),
            "phone_number" => Some(PropertyType::PhoneNumber),
            _ => None,
        }
    }
}

/// UI widget used to render and edit a contact property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyFieldType {
    Text,
    Textarea,
    Select,
    Radio,
    Checkbox,
    Number,
    BooleanCheckbox,
    Date,
    PhoneNumber,
    File,
    Html,
}

impl PropertyFieldType {
    /// Accepted spellings, in the order error messages list them.
    pub const NAMES: [&'static str; 11] = [
        "text",
        "textarea",
        "select",
        "radio",
        "checkbox",
        "number",
        "booleancheckbox",
        "date",
        "phonenumber",
        "file",
        "html",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyFieldType::Text => "text",
            PropertyFieldType::Textarea => "textarea",
            PropertyFieldType::Select => "select",
            PropertyFieldType::Radio => "radio",
            PropertyFieldType::Checkbox => "checkbox",
            PropertyFieldType::Number => "number",
            PropertyFieldType::BooleanCheckbox => "booleancheckbox",
            PropertyFieldType::Date => "date",
            PropertyFieldType::PhoneNumber => "phonenumber",
            PropertyFieldType::File => "file",
            PropertyFieldType::Html => "html",
        }
    }

    /// Parse an exact, case-sensitive token into a field type.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "text" => Some(PropertyFieldType::Text),
            "textarea" => Some(PropertyFieldType::Textarea),
            "select" => Some(PropertyFieldType::Select),
            "radio" => Some(PropertyFieldType::Radio),
            "checkbox" => Some(PropertyFieldType::Checkbox),
            "number" => Some(PropertyFieldType::Number),
            "booleancheckbox" => Some(PropertyFieldType::BooleanCheckbox),
            "date" => Some(PropertyFieldType::Date),
            "phonenumber" => Some(PropertyFieldType::PhoneNumber),
            "file" => Some(PropertyFieldType::File),
            "html" => Some(PropertyFieldType::Html),
            _ => None,
        }
    }
}

/// One cleaned property definition, ready for the batch-create payload.
///
/// Serializes with the exact field names HubSpot expects; `options` is
/// omitted entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Human-readable label, stripped of surrounding whitespace
    pub label: String,

    /// Machine name derived from the label
    pub name: String,

    /// Underlying data type (coerced to `string` when invalid)
    #[serde(rename = "type")]
    pub property_type: PropertyType,

    /// Display widget (coerced to `text` when invalid)
    #[serde(rename = "fieldType")]
    pub field_type: PropertyFieldType,

    /// Property group, defaulting to `contactinformation`
    #[serde(rename = "groupName")]
    pub group_name: String,

    /// Enumerated options, present only for valid enumeration rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

/// A line-addressed validation message. Line numbers are 1-based and
/// match the original file (the header occupies line 1).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub line: usize,
    pub message: String,
}

impl ValidationError {
    pub fn new(line: usize, message: String) -> Self {
        Self { line, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linha {}: {}", self.line, self.message)
    }
}

/// Wire payload for the batch-create endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub inputs: Vec<PropertyRecord>,
}

/// Composite result returned to the caller: every validation error plus
/// HubSpot's own status and body, passed through verbatim.
#[derive(Debug, Serialize)]
pub struct BatchResult {
    pub validacao_erros: Vec<String>,
    pub hubspot_status_code: u16,
    pub hubspot_response: Value,
}
