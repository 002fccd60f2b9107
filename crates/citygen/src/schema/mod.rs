//! Record layout: the column mapping and the validated city record.

mod columns;
mod record;

pub use columns::ColumnMap;
pub use record::{CityRecord, LAT_RANGE, LON_RANGE};
