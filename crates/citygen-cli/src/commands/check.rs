//! Check command - validate a city table without generating sources.

use std::path::PathBuf;

use colored::Colorize;

use super::report;
use citygen::validation::DEFAULT_DIAGNOSTIC_LIMIT;

pub fn run(
    input: PathBuf,
    delimiter: &str,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let converter = super::converter(delimiter, DEFAULT_DIAGNOSTIC_LIMIT)?;
    let conversion = converter.load(&input)?;

    if json_output {
        let summary = serde_json::json!({
            "summary": conversion.summary(),
            "size_bytes": conversion.source.size_bytes,
            "columns": conversion.columns,
            "reported": conversion.report.reported,
            "suppressed": conversion.report.suppressed,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Checking".cyan().bold(),
        conversion.source.file.white()
    );
    println!(
        "  {} bytes, {} data rows, delimiter '{}'",
        conversion.source.size_bytes,
        conversion.source.row_count,
        conversion.source.delimiter
    );
    println!("  {}", conversion.source.hash.dimmed());
    println!();

    report::print_source(&conversion);
    report::print_skipped(&conversion, true);
    report::print_records(&conversion);

    if verbose {
        println!();
        println!("{}", "Cities per region:".yellow().bold());
        for (admin, count) in conversion.admin_regions() {
            println!("  {:20} {}", admin, count);
        }
    }

    Ok(())
}
