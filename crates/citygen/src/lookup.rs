//! In-process lookup with the same semantics as the generated functions.
//!
//! Lets a table be queried on the host exactly the way the firmware will
//! query it: a linear scan in table order, first match wins, where a match
//! means the query contains the field or the field contains the query.
//! Both strings end at their first NUL, as C strings do.

use crate::schema::CityRecord;

/// Which record field a lookup matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupField {
    #[default]
    City,
    Admin,
}

impl LookupField {
    fn value<'a>(&self, record: &'a CityRecord) -> &'a str {
        match self {
            LookupField::City => &record.city,
            LookupField::Admin => &record.admin,
        }
    }
}

impl std::str::FromStr for LookupField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "city" | "name" => Ok(LookupField::City),
            "admin" => Ok(LookupField::Admin),
            _ => Err(format!("Unknown lookup field: {}. Use city or admin.", s)),
        }
    }
}

impl std::fmt::Display for LookupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupField::City => write!(f, "city"),
            LookupField::Admin => write!(f, "admin"),
        }
    }
}

/// Bidirectional, case-sensitive substring containment.
pub fn contains_either(field: &str, query: &str) -> bool {
    let (field, query) = (c_str(field), c_str(query));
    field.contains(query) || query.contains(field)
}

/// The part of `s` a C string would see.
fn c_str(s: &str) -> &str {
    s.find('\0').map_or(s, |end| &s[..end])
}

/// Borrowed view over records in table order.
#[derive(Debug, Clone, Copy)]
pub struct CityTable<'a> {
    records: &'a [CityRecord],
}

impl<'a> CityTable<'a> {
    pub fn new(records: &'a [CityRecord]) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose `field` matches `query`.
    pub fn find(&self, field: LookupField, query: &str) -> Option<&'a CityRecord> {
        self.records
            .iter()
            .find(|record| contains_either(field.value(record), query))
    }

    /// Coordinates of the first record whose city matches `query`.
    pub fn find_by_name(&self, query: &str) -> Option<(f64, f64)> {
        self.find(LookupField::City, query).map(CityRecord::coordinates)
    }

    /// Coordinates of the first record whose admin region matches `query`.
    pub fn find_by_admin(&self, query: &str) -> Option<(f64, f64)> {
        self.find(LookupField::Admin, query).map(CityRecord::coordinates)
    }
}
