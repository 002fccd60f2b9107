//! Row-to-record extraction.
//!
//! Each data row is handled on its own: it either becomes a [`CityRecord`]
//! or is skipped with a [`SkipReason`]. Nothing a single row contains can
//! abort the pass. Only the header width check is fatal.

use tracing::info;

use super::report::{ExtractionReport, SkipReason, SkippedRow};
use crate::error::{CitygenError, Result};
use crate::input::RawTable;
use crate::schema::{CityRecord, ColumnMap};

/// Default minimum number of cells a data row needs.
pub const DEFAULT_MIN_ROW_CELLS: usize = 6;

/// Records accepted from a table, in input order, plus the pass counters.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub records: Vec<CityRecord>,
    pub report: ExtractionReport,
}

/// Why one row was rejected, with the coordinate text that was examined.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub reason: SkipReason,
    pub lat: String,
    pub lon: String,
}

impl Rejection {
    fn new(reason: SkipReason) -> Self {
        Self {
            reason,
            lat: String::new(),
            lon: String::new(),
        }
    }

    fn with_coordinates(reason: SkipReason, lat: &str, lon: &str) -> Self {
        Self {
            reason,
            lat: lat.to_string(),
            lon: lon.to_string(),
        }
    }
}

/// Applies the column mapping and validation rules to data rows.
#[derive(Debug, Clone)]
pub struct RowExtractor {
    columns: ColumnMap,
    min_row_cells: usize,
}

impl RowExtractor {
    pub fn new(columns: ColumnMap) -> Self {
        Self {
            columns,
            min_row_cells: DEFAULT_MIN_ROW_CELLS,
        }
    }

    /// Override the minimum row width.
    pub fn with_min_row_cells(mut self, min_row_cells: usize) -> Self {
        self.min_row_cells = min_row_cells;
        self
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Fail unless the header is wide enough for the column mapping.
    pub fn check_header(&self, headers: &[String]) -> Result<()> {
        let required = self.columns.required_header_columns();
        if headers.len() < required {
            return Err(CitygenError::Format {
                found: headers.len(),
                required,
            });
        }
        Ok(())
    }

    /// Turn one data row into a record.
    pub fn extract_row(&self, row: &[String]) -> std::result::Result<CityRecord, Rejection> {
        if row.len() < self.min_row_cells {
            return Err(Rejection::new(SkipReason::ShortRow));
        }

        let text = |index: usize| row.get(index).map(|s| s.trim());
        let (Some(id), Some(admin), Some(city), Some(pinyin)) = (
            text(self.columns.id),
            text(self.columns.admin),
            text(self.columns.city),
            text(self.columns.pinyin),
        ) else {
            return Err(Rejection::new(SkipReason::ShortRow));
        };

        let mut lat_str = text(self.columns.lat).unwrap_or("");
        let mut lon_str = text(self.columns.lon).unwrap_or("");

        // Shifted layout: coordinates sit right after the pinyin column
        if lat_str.is_empty() && lon_str.is_empty() {
            let (lat_col, lon_col) = self.columns.fallback_columns();
            lat_str = text(lat_col).unwrap_or("");
            lon_str = text(lon_col).unwrap_or("");
        }

        let (Ok(lat), Ok(lon)) = (lat_str.parse::<f64>(), lon_str.parse::<f64>()) else {
            return Err(Rejection::with_coordinates(
                SkipReason::UnparseableCoordinate,
                lat_str,
                lon_str,
            ));
        };

        if !CityRecord::in_range(lat, lon) {
            return Err(Rejection::with_coordinates(
                SkipReason::OutOfRange,
                lat_str,
                lon_str,
            ));
        }

        if city.is_empty() {
            return Err(Rejection::with_coordinates(
                SkipReason::EmptyCity,
                lat_str,
                lon_str,
            ));
        }

        if CityRecord::is_zero_sentinel(lat, lon) {
            return Err(Rejection::with_coordinates(
                SkipReason::ZeroSentinel,
                lat_str,
                lon_str,
            ));
        }

        Ok(CityRecord::new(id, admin, city, pinyin, lat, lon))
    }

    /// Run every data row of `table` through [`extract_row`](Self::extract_row).
    ///
    /// The returned records keep input order. `diagnostic_limit` bounds how
    /// many rejected rows are kept in the report.
    pub fn extract_all(&self, table: &RawTable, diagnostic_limit: usize) -> Extraction {
        let mut records = Vec::new();
        let mut report = ExtractionReport::new(diagnostic_limit);

        for (index, row) in table.rows.iter().enumerate() {
            match self.extract_row(row) {
                Ok(record) => {
                    report.record_accepted();
                    records.push(record);
                }
                Err(rejection) => report.record_skipped(SkippedRow {
                    row: RawTable::row_number(index),
                    reason: rejection.reason,
                    lat: rejection.lat,
                    lon: rejection.lon,
                    cells: row.clone(),
                }),
            }
        }

        info!(
            accepted = report.accepted,
            skipped = report.total_skipped(),
            "extraction finished"
        );

        Extraction { records, report }
    }
}

impl Default for RowExtractor {
    fn default() -> Self {
        Self::new(ColumnMap::default())
    }
}
