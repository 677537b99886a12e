//! MaxMind GeoIP Resolver
//!
//! Implements GeoResolver using a MaxMind GeoLite2-City database.

use crate::domain::entities::LocationRecord;
use crate::domain::ports::GeoResolver;
use crate::domain::value_objects::Coordinates;
use maxminddb::Reader;
use serde::Deserialize;
use std::net::IpAddr;
use std::sync::Arc;

/// MaxMind GeoIP resolver.
///
/// Looks up city-level records: country code and name, first subdivision,
/// city name, and coordinates. Fields missing from the database come back
/// as empty strings; missing coordinates come back as `None`.
pub struct MaxMindGeoResolver {
    reader: Arc<Reader<Vec<u8>>>,
}

#[derive(Debug, Deserialize)]
struct Names {
    en: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Country {
    iso_code: Option<String>,
    names: Option<Names>,
}

#[derive(Debug, Deserialize)]
struct Subdivision {
    iso_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct City {
    names: Option<Names>,
}

#[derive(Debug, Deserialize)]
struct Location {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CityResp {
    country: Option<Country>,
    subdivisions: Option<Vec<Subdivision>>,
    city: Option<City>,
    location: Option<Location>,
}

impl MaxMindGeoResolver {
    /// Load a GeoIP database from a file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let reader = Reader::open_readfile(path)?;
        Ok(Self {
            reader: Arc::new(reader),
        })
    }
}

impl GeoResolver for MaxMindGeoResolver {
    fn resolve(&self, ip: IpAddr) -> Option<LocationRecord> {
        let resp: CityResp = self.reader.lookup(ip).ok()?;

        let (country_code, country) = match resp.country {
            Some(c) => (
                c.iso_code.unwrap_or_default(),
                c.names.and_then(|n| n.en).unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };

        // Private/unannounced addresses produce an empty record in
        // GeoLite2; treat "no country at all" as unresolved.
        if country_code.is_empty() && country.is_empty() {
            return None;
        }

        let region = resp
            .subdivisions
            .and_then(|subs| subs.into_iter().next())
            .and_then(|s| s.iso_code)
            .unwrap_or_default();

        let city = resp
            .city
            .and_then(|c| c.names)
            .and_then(|n| n.en)
            .unwrap_or_default();

        let coordinates = resp.location.and_then(|l| match (l.latitude, l.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        });

        Some(LocationRecord {
            country_code,
            country,
            region,
            city,
            coordinates,
        })
    }
}
