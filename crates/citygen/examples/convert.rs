//! Example: Convert a city table and try a few lookups.
//!
//! Usage:
//!   cargo run --example convert -- <table.csv> <city_data.h> [query...]
//!
//! Example:
//!   cargo run --example convert -- cities.csv out/city_data.h 北京 深圳

use std::env;
use std::path::Path;

use citygen::{CityTable, Converter, SkipReason};

fn main() -> citygen::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example convert -- <table.csv> <city_data.h> [query...]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example convert -- cities.csv out/city_data.h 北京 深圳");
        std::process::exit(1);
    }

    let input = Path::new(&args[1]);
    let output = Path::new(&args[2]);

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("citygen: {}", input.display());
    println!("{}", separator);
    println!();

    let outcome = Converter::new().convert(input, output)?;
    let conversion = &outcome.conversion;

    println!("## Source");
    println!("  File: {}", conversion.source.file);
    println!("  Hash: {}", conversion.source.hash);
    println!("  Rows: {}", conversion.source.row_count);
    println!("  Columns: {}", conversion.source.column_count);
    println!("  Mapping: {}", conversion.columns);
    println!();

    println!("## Result");
    println!("  Accepted: {}", conversion.records.len());
    for reason in SkipReason::ALL {
        println!("  {:26} {}", reason.label(), conversion.report.skipped_for(reason));
    }
    println!("  Regions: {}", conversion.distinct_admins());
    println!();

    println!("## Output");
    println!("  {}", outcome.written.header.display());
    println!("  {}", outcome.written.implementation.display());

    let queries = &args[3..];
    if !queries.is_empty() {
        println!();
        println!("## Lookups");
        let table = CityTable::new(&conversion.records);
        for query in queries {
            match table.find_by_name(query) {
                Some((lat, lon)) => println!("  {:12} {:.6}, {:.6}", query, lat, lon),
                None => println!("  {:12} not found", query),
            }
        }
    }

    Ok(())
}
