//! Convert command - compile a city table into header and implementation.

use std::path::{Path, PathBuf};

use colored::Colorize;

use super::report;

pub fn run(
    input: PathBuf,
    output: PathBuf,
    delimiter: &str,
    max_diagnostics: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = convert(&input, &output, delimiter, max_diagnostics, verbose);

    println!();
    match &result {
        Ok(()) => {
            println!("{}", "Conversion complete!".green().bold());
            println!("Next steps:");
            println!("  1. Add the generated header and _impl.cc file to the firmware build");
            println!("  2. Call FindCityByName() or FindCityByAdmin() to look up coordinates");
        }
        Err(_) => println!("{}", "Conversion failed!".red().bold()),
    }

    result
}

fn convert(
    input: &Path,
    output: &Path,
    delimiter: &str,
    max_diagnostics: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let converter = super::converter(delimiter, max_diagnostics)?;

    println!(
        "{} {}",
        "Reading".cyan().bold(),
        input.display().to_string().white()
    );

    let conversion = converter.load(input)?;

    report::print_source(&conversion);
    report::print_skipped(&conversion, verbose);

    let written = converter.write(&conversion, output)?;

    println!();
    println!(
        "{} {}",
        "Header written to".green().bold(),
        written.header.display().to_string().white()
    );
    println!(
        "{} {}",
        "Implementation written to".green().bold(),
        written.implementation.display().to_string().white()
    );

    report::print_records(&conversion);

    Ok(())
}
