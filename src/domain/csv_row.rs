// ============================================================
// RAW CSV ROW
// ============================================================
// One decoded data row, exactly as it came off the file

/// A raw CSV data row: header-keyed string values plus the 1-based line
/// number the row had in the original file (the header is line 1, so
/// the first data row is line 2).
///
/// Values are kept verbatim; stripping is the validator's job so that
/// error messages can quote the original cell content.
#[derive(Debug, Clone)]
pub struct RawRow {
    line: usize,
    columns: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(line: usize, columns: Vec<(String, String)>) -> Self {
        Self { line, columns }
    }

    /// Original file line number of this row.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Value of a column, or the empty string when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }
}
