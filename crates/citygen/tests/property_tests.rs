//! Property-based tests for citygen.
//!
//! These tests use proptest to generate random rows and verify that the
//! extraction, rendering and lookup invariants hold for all of them.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p citygen --test property_tests
//!
//! # More cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p citygen --test property_tests
//! ```

use proptest::prelude::*;

use citygen::codegen::{self, RenderConfig};
use citygen::validation::RowExtractor;
use citygen::{CityRecord, CityTable, RawTable};

// =============================================================================
// Test Strategies
// =============================================================================

/// Coordinate text: valid numbers, out-of-range numbers, blanks and junk.
fn coordinate_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (-200.0f64..200.0).prop_map(|v| format!("{:.4}", v)),
        Just("0".to_string()),
        Just(String::new()),
        Just("  ".to_string()),
        "[a-zA-Z]{1,6}",
        Just("NaN".to_string()),
        Just("inf".to_string()),
    ]
}

/// Free text cells, sometimes blank, sometimes non-ASCII.
fn text_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z ]{0,12}",
        "[北京上海广东深圳南山/]{0,6}",
        Just(String::new()),
    ]
}

/// A data row of varying width.
fn data_row() -> impl Strategy<Value = Vec<String>> {
    (
        text_cell(),
        text_cell(),
        text_cell(),
        text_cell(),
        coordinate_text(),
        coordinate_text(),
        0usize..=7,
    )
        .prop_map(|(id, admin, city, pinyin, lat, lon, width)| {
            let cells = vec!["0".to_string(), id, admin, city, pinyin, lat, lon];
            cells.into_iter().take(width).collect()
        })
}

fn table_of(rows: Vec<Vec<String>>) -> RawTable {
    let headers = (0..7).map(|i| format!("h{}", i)).collect();
    RawTable::new(headers, rows)
}

/// Valid records with printable names.
fn record() -> impl Strategy<Value = CityRecord> {
    (
        "[A-Z0-9]{1,8}",
        "[A-Za-z]{1,10}",
        "[A-Za-z]{1,10}",
        "[a-z]{1,10}",
        -90.0f64..=90.0,
        -180.0f64..=180.0,
    )
        .prop_map(|(id, admin, city, pinyin, lat, lon)| {
            CityRecord::new(id, admin, city, pinyin, lat, lon)
        })
}

// =============================================================================
// Extraction
// =============================================================================

proptest! {
    #[test]
    fn accepted_records_satisfy_invariants(rows in prop::collection::vec(data_row(), 0..40)) {
        let extraction = RowExtractor::default().extract_all(&table_of(rows), 10);

        for record in &extraction.records {
            prop_assert!((-90.0..=90.0).contains(&record.lat));
            prop_assert!((-180.0..=180.0).contains(&record.lon));
            prop_assert!(!record.city.is_empty());
            prop_assert!(!(record.lat == 0.0 && record.lon == 0.0));
            prop_assert!(record.is_valid());
        }
    }

    #[test]
    fn extraction_is_a_stable_filter(rows in prop::collection::vec(data_row(), 0..40)) {
        let extractor = RowExtractor::default();
        let extraction = extractor.extract_all(&table_of(rows.clone()), 10);

        // Same result as filtering row by row, in the same order
        let expected: Vec<CityRecord> = rows
            .iter()
            .filter_map(|row| extractor.extract_row(row).ok())
            .collect();
        prop_assert_eq!(&extraction.records, &expected);

        let report = &extraction.report;
        prop_assert_eq!(report.rows_seen, rows.len());
        prop_assert_eq!(report.accepted + report.total_skipped(), rows.len());
        prop_assert!(report.reported.len() <= 10);
        prop_assert_eq!(report.reported.len() + report.suppressed, report.parse_failures());
    }

    #[test]
    fn reported_rows_are_ascending(rows in prop::collection::vec(data_row(), 0..40)) {
        let extraction = RowExtractor::default().extract_all(&table_of(rows), 10);
        let numbers: Vec<usize> = extraction.report.reported.iter().map(|r| r.row).collect();
        prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }
}

// =============================================================================
// Rendering
// =============================================================================

proptest! {
    #[test]
    fn rendering_is_deterministic(records in prop::collection::vec(record(), 0..20)) {
        let config = RenderConfig::default();
        let first = codegen::render(&records, "city_data.h", &config);
        let second = codegen::render(&records, "city_data.h", &config);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn count_constant_matches_records(records in prop::collection::vec(record(), 0..20)) {
        let header = codegen::render_header(&records, &RenderConfig::default());
        let expected = format!("static const size_t city_count = {};", records.len());
        prop_assert!(header.contains(&expected));
    }

    #[test]
    fn entries_follow_record_order(records in prop::collection::vec(record(), 1..20)) {
        let header = codegen::render_header(&records, &RenderConfig::default());

        let mut cursor = 0;
        for record in &records {
            let entry = format!(
                "{{\"{}\", \"{}\", \"{}\", \"{}\", {:.6}, {:.6}}},",
                record.id, record.admin, record.city, record.pinyin, record.lat, record.lon
            );
            let found = header[cursor..].find(&entry);
            prop_assert!(found.is_some(), "missing entry {}", entry);
            cursor += found.unwrap_or(0) + entry.len();
        }
    }

    #[test]
    fn escaped_text_has_no_raw_quotes_or_newlines(value in any::<String>()) {
        let escaped = codegen::escape_c_string(&value);
        prop_assert!(!escaped.contains('\n'));
        prop_assert!(!escaped.contains('\r'));
        // Every quote is preceded by a backslash
        let chars: Vec<char> = escaped.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            if *c == '"' {
                prop_assert!(i > 0 && chars[i - 1] == '\\');
            }
        }
    }
}

// =============================================================================
// Lookup
// =============================================================================

proptest! {
    #[test]
    fn lookup_returns_first_containing_record(
        records in prop::collection::vec(record(), 0..20),
        query in "[A-Za-z]{0,4}",
    ) {
        let table = CityTable::new(&records);
        let expected = records
            .iter()
            .find(|r| r.city.contains(query.as_str()) || query.contains(r.city.as_str()))
            .map(|r| (r.lat, r.lon));
        prop_assert_eq!(table.find_by_name(&query), expected);
    }

    #[test]
    fn every_city_finds_itself_or_an_earlier_match(records in prop::collection::vec(record(), 1..20)) {
        let table = CityTable::new(&records);
        for (i, record) in records.iter().enumerate() {
            let found = table.find(citygen::LookupField::City, &record.city);
            prop_assert!(found.is_some());
            let position = records
                .iter()
                .position(|r| std::ptr::eq(r, found.unwrap_or(record)))
                .unwrap_or(usize::MAX);
            prop_assert!(position <= i);
        }
    }
}
