//! Lookup command - query a table with the firmware's matching rule.

use std::path::PathBuf;

use colored::Colorize;

use citygen::validation::DEFAULT_DIAGNOSTIC_LIMIT;
use citygen::{CityTable, LookupField};

pub fn run(
    input: PathBuf,
    query: &str,
    by: LookupField,
    delimiter: &str,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let converter = super::converter(delimiter, DEFAULT_DIAGNOSTIC_LIMIT)?;
    let conversion = converter.load(&input)?;
    let table = CityTable::new(&conversion.records);

    if verbose {
        println!(
            "Searching {} cities by {} for {:?}",
            table.len(),
            by,
            query
        );
    }

    match table.find(by, query) {
        Some(record) => {
            println!(
                "{} {} ({}) - {:.6}, {:.6}",
                "Found".green().bold(),
                record.city.white().bold(),
                record.admin,
                record.lat,
                record.lon
            );
        }
        None => {
            println!("{} no {} matches {:?}", "Not found:".yellow().bold(), by, query);
        }
    }

    Ok(())
}
