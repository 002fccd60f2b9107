//! citygen: compile city coordinate tables into firmware lookup sources.
//!
//! A conversion reads a delimited table of cities (identifier, administrative
//! region, city name, pinyin, latitude, longitude), drops rows that cannot
//! yield a usable coordinate, and renders two C++ sources: a header with a
//! static table and a file with two linear-scan lookup functions.
//!
//! # Pipeline
//!
//! - **Parse**: read the header and data rows ([`input`])
//! - **Filter**: map columns and validate each row on its own ([`validation`])
//! - **Render**: produce both sources as strings ([`codegen`])
//! - **Write**: persist both files or neither ([`output`])
//!
//! # Example
//!
//! ```no_run
//! use citygen::Converter;
//!
//! let converter = Converter::new();
//! let conversion = converter.load("cities.csv").unwrap();
//!
//! println!("Accepted: {}", conversion.records.len());
//! println!("Skipped: {}", conversion.report.total_skipped());
//! ```

pub mod codegen;
pub mod error;
pub mod input;
pub mod lookup;
pub mod output;
pub mod schema;
pub mod validation;

mod converter;

pub use crate::converter::{
    Conversion, ConversionOutcome, ConversionSummary, Converter, ConverterConfig,
    DEFAULT_PREVIEW_ROWS,
};
pub use codegen::{GeneratedSources, RenderConfig};
pub use error::{CitygenError, Result};
pub use input::{Parser, ParserConfig, RawTable, SourceMetadata};
pub use lookup::{CityTable, LookupField};
pub use output::WrittenArtifacts;
pub use schema::{CityRecord, ColumnMap};
pub use validation::{ExtractionReport, SkipReason, SkippedRow};
