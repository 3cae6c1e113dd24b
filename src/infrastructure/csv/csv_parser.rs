// ============================================================
// CSV PARSER
// ============================================================
// Decode uploaded property-definition CSVs into raw rows

use crate::domain::csv_row::RawRow;
use crate::domain::error::AppError;
use csv::{ReaderBuilder, StringRecord};

/// CSV reader for property uploads. All cells are kept as strings, with
/// no trimming: the validator owns stripping, so raw values survive
/// into error messages.
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Decode an uploaded byte stream. Invalid UTF-8 is replaced rather
    /// than rejected.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<RawRow>, AppError> {
        let content = String::from_utf8_lossy(bytes);
        self.parse_content(&content)
    }

    /// Parse CSV content from string.
    pub fn parse_content(&self, content: &str) -> Result<Vec<RawRow>, AppError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let mut rows = Vec::new();

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            rows.push(Self::to_raw_row(index, &headers, &record));
        }

        Ok(rows)
    }

    fn to_raw_row(index: usize, headers: &StringRecord, record: &StringRecord) -> RawRow {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header.to_string(), record.get(idx).unwrap_or("").to_string()))
            .collect();

        // The header occupies line 1, so the first data row is line 2
        RawRow::new(index + 2, columns)
    }
}
