//! Per-row extraction and validation of city records.

mod extractor;
mod report;

pub use extractor::{Extraction, Rejection, RowExtractor, DEFAULT_MIN_ROW_CELLS};
pub use report::{ExtractionReport, SkipReason, SkippedRow, DEFAULT_DIAGNOSTIC_LIMIT};
