//! Human-readable diagnostics shared by convert and check.

use colored::Colorize;
use citygen::{Conversion, SkipReason};

/// Records echoed after a run.
const SAMPLE_RECORDS: usize = 10;

/// Header, column count, preview rows and the column mapping.
pub fn print_source(conversion: &Conversion) {
    println!("{} {:?}", "Header:".yellow().bold(), conversion.headers);
    println!("Columns: {}", conversion.headers.len().to_string().white().bold());

    if !conversion.preview.is_empty() {
        println!();
        println!(
            "{}",
            format!("First {} data rows:", conversion.preview.len())
                .yellow()
                .bold()
        );
        for (i, row) in conversion.preview.iter().enumerate() {
            println!("  Row {}: {:?}", i + 2, row);
        }
    }

    println!();
    println!("{} {}", "Column mapping:".yellow().bold(), conversion.columns);
}

/// Skipped-row counters and the reported rows.
pub fn print_skipped(conversion: &Conversion, verbose: bool) {
    let report = &conversion.report;

    if report.parse_failures() > 0 {
        println!();
        println!(
            "{} {} rows with unparseable coordinates",
            "Skipped".yellow().bold(),
            report.parse_failures().to_string().white().bold()
        );
        for row in &report.reported {
            println!(
                "  Row {}: lat='{}', lon='{}' {}",
                row.row,
                row.lat,
                row.lon,
                format!("{:?}", row.cells).dimmed()
            );
        }
        if report.suppressed > 0 {
            println!(
                "  {}",
                format!("... {} more not shown", report.suppressed).dimmed()
            );
        }
    }

    if verbose {
        println!();
        println!("{}", "Skipped by reason:".yellow().bold());
        for reason in SkipReason::ALL {
            println!(
                "  {:26} {}",
                reason.label(),
                report.skipped_for(reason)
            );
        }
    }
}

/// Accepted count, region coverage and the first few records.
pub fn print_records(conversion: &Conversion) {
    println!();
    println!(
        "Read {} cities covering {} administrative regions",
        conversion.records.len().to_string().green().bold(),
        conversion.distinct_admins().to_string().white().bold()
    );

    if conversion.records.is_empty() {
        println!("{}", "No rows passed validation.".yellow());
        return;
    }

    println!(
        "{}",
        format!(
            "First {} cities:",
            conversion.records.len().min(SAMPLE_RECORDS)
        )
        .yellow()
        .bold()
    );
    for record in conversion.records.iter().take(SAMPLE_RECORDS) {
        println!(
            "  {} ({}) - {:.4}, {:.4}",
            record.city.white(),
            record.admin,
            record.lat,
            record.lon
        );
    }
}
