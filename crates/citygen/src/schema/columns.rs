//! Positional column mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maps each record field to the column index it is read from.
///
/// The default reflects the published city table layout, whose first
/// column is an unnamed row index:
///
/// ```text
/// "", id, admin, city, pinyin, lat, lon
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub id: usize,
    pub admin: usize,
    pub city: usize,
    pub pinyin: usize,
    pub lat: usize,
    pub lon: usize,
}

impl ColumnMap {
    /// The standard layout: id=1, admin=2, city=3, pinyin=4, lat=5, lon=6.
    pub const STANDARD: ColumnMap = ColumnMap {
        id: 1,
        admin: 2,
        city: 3,
        pinyin: 4,
        lat: 5,
        lon: 6,
    };

    /// Minimum header width for this mapping to make sense.
    pub fn required_header_columns(&self) -> usize {
        [self.id, self.admin, self.city, self.pinyin, self.lat, self.lon]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Columns holding latitude and longitude in the shifted layout,
    /// immediately after the pinyin column.
    pub fn fallback_columns(&self) -> (usize, usize) {
        (self.pinyin + 1, self.pinyin + 2)
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for ColumnMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={}, admin={}, city={}, pinyin={}, lat={}, lon={}",
            self.id, self.admin, self.city, self.pinyin, self.lat, self.lon
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_needs_seven_columns() {
        assert_eq!(ColumnMap::default().required_header_columns(), 7);
    }

    #[test]
    fn test_fallback_follows_pinyin() {
        let map = ColumnMap {
            pinyin: 2,
            ..ColumnMap::STANDARD
        };
        assert_eq!(map.fallback_columns(), (3, 4));
        assert_eq!(ColumnMap::STANDARD.fallback_columns(), (5, 6));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ColumnMap::STANDARD.to_string(),
            "id=1, admin=2, city=3, pinyin=4, lat=5, lon=6"
        );
    }
}
