//! Skip reasons and bounded per-row diagnostics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default number of reported rows before further reports are suppressed.
pub const DEFAULT_DIAGNOSTIC_LIMIT: usize = 10;

/// Why a data row was left out of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Too few cells to hold the mapped fields.
    ShortRow,
    /// Latitude or longitude is not a number.
    UnparseableCoordinate,
    /// Coordinate outside [-90, 90] x [-180, 180].
    OutOfRange,
    /// City name is blank.
    EmptyCity,
    /// Both coordinates are exactly zero.
    ZeroSentinel,
}

impl SkipReason {
    /// All reasons in reporting order.
    pub const ALL: [SkipReason; 5] = [
        SkipReason::ShortRow,
        SkipReason::UnparseableCoordinate,
        SkipReason::OutOfRange,
        SkipReason::EmptyCity,
        SkipReason::ZeroSentinel,
    ];

    /// Get a human-readable label for the reason.
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::ShortRow => "Short row",
            SkipReason::UnparseableCoordinate => "Unparseable coordinate",
            SkipReason::OutOfRange => "Coordinate out of range",
            SkipReason::EmptyCity => "Empty city name",
            SkipReason::ZeroSentinel => "Zero coordinate sentinel",
        }
    }

    /// Whether rows skipped for this reason are listed individually.
    ///
    /// Only coordinate parse failures are; every other reason is counted.
    pub fn is_reported(&self) -> bool {
        matches!(self, SkipReason::UnparseableCoordinate)
    }
}

/// A rejected row, kept for operator diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// Row number in the source file (header is row 1).
    pub row: usize,
    pub reason: SkipReason,
    /// Latitude text as extracted, after fallback.
    pub lat: String,
    /// Longitude text as extracted, after fallback.
    pub lon: String,
    /// Raw cells of the row.
    pub cells: Vec<String>,
}

/// Counters for a single extraction pass.
///
/// Every skip is counted. Rows whose reason is reported are additionally
/// kept in `reported` until `limit` of them have been seen; later ones only
/// bump `suppressed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Maximum number of rows kept in `reported`.
    pub limit: usize,
    /// Data rows examined.
    pub rows_seen: usize,
    /// Rows that became records.
    pub accepted: usize,
    /// Skip counts by reason, in first-seen order.
    pub skipped: IndexMap<SkipReason, usize>,
    /// The first `limit` reported rows.
    pub reported: Vec<SkippedRow>,
    /// Reportable rows beyond the limit.
    pub suppressed: usize,
}

impl ExtractionReport {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            rows_seen: 0,
            accepted: 0,
            skipped: IndexMap::new(),
            reported: Vec::new(),
            suppressed: 0,
        }
    }

    pub(crate) fn record_accepted(&mut self) {
        self.rows_seen += 1;
        self.accepted += 1;
    }

    pub(crate) fn record_skipped(&mut self, skipped: SkippedRow) {
        self.rows_seen += 1;
        *self.skipped.entry(skipped.reason).or_insert(0) += 1;

        if !skipped.reason.is_reported() {
            debug!(row = skipped.row, reason = skipped.reason.label(), "row skipped");
            return;
        }

        if self.reported.len() < self.limit {
            debug!(
                row = skipped.row,
                lat = %skipped.lat,
                lon = %skipped.lon,
                "coordinate parse failed"
            );
            self.reported.push(skipped);
        } else {
            if self.suppressed == 0 {
                warn!(
                    limit = self.limit,
                    "diagnostic limit reached, further parse failures suppressed"
                );
            }
            self.suppressed += 1;
        }
    }

    /// Number of rows skipped for `reason`.
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }

    /// Total rows skipped for any reason.
    pub fn total_skipped(&self) -> usize {
        self.skipped.values().sum()
    }

    /// Total rows that failed coordinate parsing, reported or not.
    pub fn parse_failures(&self) -> usize {
        self.skipped_for(SkipReason::UnparseableCoordinate)
    }
}

impl Default for ExtractionReport {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGNOSTIC_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skipped(row: usize, reason: SkipReason) -> SkippedRow {
        SkippedRow {
            row,
            reason,
            lat: "x".into(),
            lon: String::new(),
            cells: vec![],
        }
    }

    #[test]
    fn test_limit_suppresses_after_threshold() {
        let mut report = ExtractionReport::new(2);
        for row in 2..7 {
            report.record_skipped(skipped(row, SkipReason::UnparseableCoordinate));
        }

        assert_eq!(report.parse_failures(), 5);
        assert_eq!(report.reported.len(), 2);
        assert_eq!(report.reported[0].row, 2);
        assert_eq!(report.reported[1].row, 3);
        assert_eq!(report.suppressed, 3);
    }

    #[test]
    fn test_unreported_reasons_only_count() {
        let mut report = ExtractionReport::new(10);
        report.record_skipped(skipped(2, SkipReason::OutOfRange));
        report.record_skipped(skipped(3, SkipReason::EmptyCity));
        report.record_accepted();

        assert_eq!(report.rows_seen, 3);
        assert_eq!(report.total_skipped(), 2);
        assert_eq!(report.skipped_for(SkipReason::OutOfRange), 1);
        assert_eq!(report.skipped_for(SkipReason::ZeroSentinel), 0);
        assert!(report.reported.is_empty());
        assert_eq!(report.suppressed, 0);
    }

    #[test]
    fn test_zero_limit_reports_nothing() {
        let mut report = ExtractionReport::new(0);
        report.record_skipped(skipped(2, SkipReason::UnparseableCoordinate));
        assert!(report.reported.is_empty());
        assert_eq!(report.suppressed, 1);
    }
}
