//! Raw table and source metadata.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Delimiter used to split cells, as a printable string.
    pub delimiter: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of header columns.
    pub column_count: usize,
}

impl SourceMetadata {
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        delimiter: u8,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            delimiter: delimiter_label(delimiter),
            row_count,
            column_count,
        }
    }
}

fn delimiter_label(delimiter: u8) -> String {
    match delimiter {
        b'\t' => "\\t".to_string(),
        d => (d as char).to_string(),
    }
}

/// Header plus data rows exactly as read, one `Vec<String>` per record.
///
/// Rows keep their own width: short rows are not padded and long rows are
/// not truncated, since row width feeds the skip rules downstream.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Header cells.
    pub headers: Vec<String>,
    /// Data rows in input order.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of header columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// The first `n` data rows, for diagnostic echo.
    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Human-facing row number of a data row: the header is row 1.
    ///
    /// Numbers count records, not lines. Blank lines are dropped by the
    /// reader and take no number, and a quoted cell spanning several lines
    /// is still one row, so after either the number can be lower than the
    /// line the row starts on.
    pub fn row_number(index: usize) -> usize {
        index + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_clamps_to_row_count() {
        let table = RawTable::new(
            vec!["a".into()],
            vec![vec!["1".into()], vec!["2".into()]],
        );
        assert_eq!(table.preview(3).len(), 2);
        assert_eq!(table.preview(1), &[vec!["1".to_string()]]);
    }

    #[test]
    fn test_row_number_counts_header() {
        assert_eq!(RawTable::row_number(0), 2);
        assert_eq!(RawTable::row_number(9), 11);
    }

    #[test]
    fn test_metadata_file_name() {
        let meta = SourceMetadata::new(
            PathBuf::from("data/cities.csv"),
            "sha256:00".into(),
            12,
            b'\t',
            3,
            7,
        );
        assert_eq!(meta.file, "cities.csv");
        assert_eq!(meta.delimiter, "\\t");
    }
}
