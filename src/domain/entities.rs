//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the geoscan domain.
//! They have no external dependencies and contain only business logic.

use crate::domain::value_objects::Coordinates;
use chrono::{DateTime, FixedOffset};

/// Geographic location resolved from an IP address.
///
/// Any of the name fields may be empty when the GeoIP database lacks
/// data at that granularity. Coordinates are `None` when absent rather
/// than being coerced to 0,0.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    /// Country code (ISO 3166-1 alpha-2), or empty
    pub country_code: String,
    /// Country name, or empty
    pub country: String,
    /// Region / subdivision code, or empty
    pub region: String,
    /// City name, or empty
    pub city: String,
    /// Latitude/longitude, when the database records them
    pub coordinates: Option<Coordinates>,
}

/// A geo-tagged log event.
///
/// One GeoEvent is produced per access-log line that both matched the
/// log grammar and resolved to a location. It is immutable once built;
/// there is no partial GeoEvent.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoEvent {
    /// Country code (ISO 3166-1 alpha-2), or empty
    pub country_code: String,
    /// Country name, or empty
    pub country: String,
    /// Region / subdivision code, or empty
    pub region: String,
    /// City name, or empty
    pub city: String,
    /// Latitude/longitude, when the resolver provided them
    pub coordinates: Option<Coordinates>,
    /// Request timestamp with its original UTC offset
    pub timestamp: DateTime<FixedOffset>,
}

impl GeoEvent {
    /// Pair a resolved location with a normalized request timestamp.
    pub fn new(location: LocationRecord, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            country_code: location.country_code,
            country: location.country,
            region: location.region,
            city: location.city,
            coordinates: location.coordinates,
            timestamp,
        }
    }
}
