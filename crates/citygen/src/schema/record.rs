//! The validated city record.

use serde::{Deserialize, Serialize};

/// Valid latitude range in degrees.
pub const LAT_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitude range in degrees.
pub const LON_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// One entry of the compiled coordinate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    /// Opaque city identifier.
    pub id: String,
    /// Administrative region.
    pub admin: String,
    /// City name.
    pub city: String,
    /// Phonetic spelling.
    pub pinyin: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl CityRecord {
    pub fn new(
        id: impl Into<String>,
        admin: impl Into<String>,
        city: impl Into<String>,
        pinyin: impl Into<String>,
        lat: f64,
        lon: f64,
    ) -> Self {
        Self {
            id: id.into(),
            admin: admin.into(),
            city: city.into(),
            pinyin: pinyin.into(),
            lat,
            lon,
        }
    }

    /// Both coordinates fall inside the valid degree ranges.
    pub fn in_range(lat: f64, lon: f64) -> bool {
        LAT_RANGE.contains(&lat) && LON_RANGE.contains(&lon)
    }

    /// The (0, 0) pair marks a missing coordinate in the source data.
    pub fn is_zero_sentinel(lat: f64, lon: f64) -> bool {
        lat == 0.0 && lon == 0.0
    }

    /// Whether this record satisfies every table invariant.
    pub fn is_valid(&self) -> bool {
        !self.city.trim().is_empty()
            && Self::in_range(self.lat, self.lon)
            && !Self::is_zero_sentinel(self.lat, self.lon)
    }

    /// Coordinates as a `(lat, lon)` pair.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}
