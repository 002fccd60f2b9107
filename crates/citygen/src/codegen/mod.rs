//! Code generation for the firmware lookup table.
//!
//! Rendering is a pure function from records to text: nothing in this
//! module touches the filesystem. See [`crate::output`] for persistence.

mod escape;
mod header;
mod implementation;

pub use escape::{c_string_literal, escape_c_string};
pub use header::render_header;
pub use implementation::render_implementation;

use serde::{Deserialize, Serialize};

use crate::schema::CityRecord;

/// First line block of every generated file.
pub(crate) const GENERATED_BANNER: &str = "Auto-generated by citygen. Do not edit by hand.";

/// Names and formatting used in the generated sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Name of the record struct.
    pub struct_name: String,
    /// Name of the static table.
    pub table_name: String,
    /// Name of the record count constant.
    pub count_name: String,
    /// Lookup by city name.
    pub name_lookup: String,
    /// Lookup by administrative region.
    pub admin_lookup: String,
    /// Replaces the header's extension to name the implementation file.
    pub impl_suffix: String,
    /// Digits after the decimal point for coordinates.
    pub precision: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            struct_name: "CityData".to_string(),
            table_name: "city_coordinates".to_string(),
            count_name: "city_count".to_string(),
            name_lookup: "FindCityByName".to_string(),
            admin_lookup: "FindCityByAdmin".to_string(),
            impl_suffix: "_impl.cc".to_string(),
            precision: 6,
        }
    }
}

/// The two generated artifacts, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSources {
    /// Declarations: struct, table, count and function prototypes.
    pub header: String,
    /// Lookup function bodies.
    pub implementation: String,
}

/// Render both artifacts.
///
/// `header_file_name` is the base name the implementation file includes.
pub fn render(
    records: &[CityRecord],
    header_file_name: &str,
    config: &RenderConfig,
) -> GeneratedSources {
    GeneratedSources {
        header: render_header(records, config),
        implementation: render_implementation(header_file_name, config),
    }
}
