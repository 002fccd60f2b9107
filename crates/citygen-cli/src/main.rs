//! citygen CLI - city coordinate table compiler.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            if cli::is_usage_mistake(e.kind()) {
                println!();
                println!("{}", cli::USAGE_EXAMPLE);
            }
            return;
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Dispatch a parsed command line.
fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            delimiter,
            max_diagnostics,
        } => commands::convert::run(input, output, &delimiter, max_diagnostics, cli.verbose),

        Commands::Check {
            input,
            delimiter,
            json,
        } => commands::check::run(input, &delimiter, json, cli.verbose),

        Commands::Lookup {
            input,
            query,
            by,
            delimiter,
        } => commands::lookup::run(input, &query, by, &delimiter, cli.verbose),
    }
}

/// Route library events to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "citygen=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_missing_input_fails_run() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.csv");
        let output = dir.path().join("city_data.h");
        let cli = Cli::try_parse_from([
            OsStr::new("citygen"),
            OsStr::new("convert"),
            input.as_os_str(),
            output.as_os_str(),
        ])
        .unwrap();

        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("missing.csv"));
        assert!(!output.exists());
    }

    #[test]
    fn test_narrow_header_fails_run() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cities.csv");
        std::fs::write(&input, "id,admin,city,pinyin,lat,lon\nA,R,C,P,1,2\n").unwrap();
        let output = dir.path().join("city_data.h");

        let cli = Cli::try_parse_from([
            OsStr::new("citygen"),
            OsStr::new("convert"),
            input.as_os_str(),
            output.as_os_str(),
        ])
        .unwrap();

        assert!(run(cli).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_run_writes_sources() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cities.csv");
        std::fs::write(
            &input,
            ",id,admin,city,pinyin,lat,lon\n0,WX4F,北京市,北京,Beijing,39.9,116.4\n",
        )
        .unwrap();
        let output = dir.path().join("city_data.h");

        let cli = Cli::try_parse_from([
            OsStr::new("citygen"),
            OsStr::new("convert"),
            input.as_os_str(),
            output.as_os_str(),
        ])
        .unwrap();

        run(cli).unwrap();
        assert!(output.exists());
        assert!(dir.path().join("city_data_impl.cc").exists());
    }
}
