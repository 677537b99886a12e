//! geoscan Library
//!
//! This module exposes the geoscan components for use in integration tests
//! and as a library.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::outbound::{
    ChartFormatter, FormatterGroup, KmlFormatter, MaxMindGeoResolver, PrintFormatter,
};
pub use application::{EventScanner, ScanError, ScanStats};
pub use config::{load_config, Config, FormatKind};
pub use domain::entities::{GeoEvent, LocationRecord};
pub use domain::ports::{Formatter, GeoResolver};
pub use domain::services::{normalize_timestamp, LogLineParser, ParsedLine};
pub use domain::value_objects::Coordinates;
