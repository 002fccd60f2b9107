//! Main converter struct and public API.

use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::codegen::{self, GeneratedSources, RenderConfig};
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::output::{self, WrittenArtifacts};
use crate::schema::{CityRecord, ColumnMap};
use crate::validation::{
    ExtractionReport, RowExtractor, SkipReason, DEFAULT_DIAGNOSTIC_LIMIT, DEFAULT_MIN_ROW_CELLS,
};

/// Default number of data rows echoed back as a preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 3;

/// Configuration for a conversion run.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Field to column mapping.
    pub columns: ColumnMap,
    /// Rows with fewer cells are skipped outright.
    pub min_row_cells: usize,
    /// Rejected rows listed before further reports are suppressed.
    pub diagnostic_limit: usize,
    /// Data rows echoed back in [`Conversion::preview`].
    pub preview_rows: usize,
    /// Names and formatting of the generated sources.
    pub render: RenderConfig,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            columns: ColumnMap::default(),
            min_row_cells: DEFAULT_MIN_ROW_CELLS,
            diagnostic_limit: DEFAULT_DIAGNOSTIC_LIMIT,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            render: RenderConfig::default(),
        }
    }
}

/// Parsed and filtered table, ready for rendering.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Header cells as read.
    pub headers: Vec<String>,
    /// The first few raw data rows.
    pub preview: Vec<Vec<String>>,
    /// Column mapping that was applied.
    pub columns: ColumnMap,
    /// Accepted records in input order.
    pub records: Vec<CityRecord>,
    /// Counters and diagnostics for skipped rows.
    pub report: ExtractionReport,
}

impl Conversion {
    /// Record count per administrative region, in first-seen order.
    pub fn admin_regions(&self) -> IndexMap<&str, usize> {
        let mut regions = IndexMap::new();
        for record in &self.records {
            *regions.entry(record.admin.as_str()).or_insert(0) += 1;
        }
        regions
    }

    /// Number of distinct administrative regions covered.
    pub fn distinct_admins(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.admin.as_str())
            .collect::<IndexSet<_>>()
            .len()
    }

    pub fn summary(&self) -> ConversionSummary {
        ConversionSummary {
            file: self.source.file.clone(),
            hash: self.source.hash.clone(),
            delimiter: self.source.delimiter.clone(),
            header_columns: self.headers.len(),
            rows: self.report.rows_seen,
            accepted: self.records.len(),
            skipped: SkipReason::ALL
                .iter()
                .map(|reason| (*reason, self.report.skipped_for(*reason)))
                .collect(),
            distinct_admins: self.distinct_admins(),
        }
    }
}

/// Serializable run summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub file: String,
    pub hash: String,
    pub delimiter: String,
    pub header_columns: usize,
    pub rows: usize,
    pub accepted: usize,
    pub skipped: IndexMap<SkipReason, usize>,
    pub distinct_admins: usize,
}

/// A completed conversion and where its output went.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub conversion: Conversion,
    pub written: WrittenArtifacts,
}

/// Converts a city coordinate table into firmware lookup sources.
///
/// ```no_run
/// use citygen::Converter;
///
/// let outcome = Converter::new().convert("cities.csv", "city_data.h").unwrap();
/// println!("{} cities", outcome.conversion.records.len());
/// ```
pub struct Converter {
    config: ConverterConfig,
    parser: Parser,
    extractor: RowExtractor,
}

impl Converter {
    /// Create a converter with default configuration.
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    /// Create a converter with custom configuration.
    pub fn with_config(config: ConverterConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let extractor = RowExtractor::new(config.columns).with_min_row_cells(config.min_row_cells);

        Self {
            config,
            parser,
            extractor,
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Read, check and filter a table without producing any output.
    ///
    /// Fails if the file cannot be read or its header is too narrow for
    /// the column mapping. Bad data rows never fail the load.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Conversion> {
        let (table, source) = self.parser.parse_file(path)?;

        self.extractor.check_header(&table.headers)?;

        let preview = table.preview(self.config.preview_rows).to_vec();
        let extraction = self
            .extractor
            .extract_all(&table, self.config.diagnostic_limit);

        info!(
            file = %source.file,
            accepted = extraction.records.len(),
            "table loaded"
        );

        Ok(Conversion {
            source,
            headers: table.headers,
            preview,
            columns: *self.extractor.columns(),
            records: extraction.records,
            report: extraction.report,
        })
    }

    /// Render the generated sources for `records`.
    pub fn render(&self, records: &[CityRecord], header_file_name: &str) -> GeneratedSources {
        codegen::render(records, header_file_name, &self.config.render)
    }

    /// Render `conversion` and write the header to `header_path` plus its
    /// implementation file alongside it.
    pub fn write(
        &self,
        conversion: &Conversion,
        header_path: impl AsRef<Path>,
    ) -> Result<WrittenArtifacts> {
        let header_path = header_path.as_ref();
        let include = output::include_name(header_path)?;
        let sources = self.render(&conversion.records, &include);
        output::write_sources(&sources, header_path, &self.config.render.impl_suffix)
    }

    /// Full run: [`load`](Self::load) then [`write`](Self::write).
    ///
    /// Nothing is written unless loading succeeded.
    pub fn convert(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ConversionOutcome> {
        let conversion = self.load(input)?;
        let written = self.write(&conversion, output)?;

        Ok(ConversionOutcome {
            conversion,
            written,
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
