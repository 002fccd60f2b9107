//! CLI command implementations.

pub mod check;
pub mod convert;
pub mod lookup;

mod report;

use citygen::input::parse_delimiter;
use citygen::{Converter, ConverterConfig, ParserConfig};

/// Build a converter from the shared command-line settings.
fn converter(delimiter: &str, diagnostic_limit: usize) -> citygen::Result<Converter> {
    let config = ConverterConfig {
        parser: ParserConfig::default().with_delimiter(parse_delimiter(delimiter)?),
        diagnostic_limit,
        ..ConverterConfig::default()
    };
    Ok(Converter::with_config(config))
}
