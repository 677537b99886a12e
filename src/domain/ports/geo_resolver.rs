//! GeoIP Resolver Port
//!
//! Defines the interface for resolving IP addresses to geographic locations.

use crate::domain::entities::LocationRecord;
use std::net::IpAddr;

/// Resolver for IP address to geographic location.
///
/// This is an outbound port that abstracts the GeoIP database.
/// Implementations may use MaxMind GeoLite2, IP2Location, or other databases.
/// Lookups are synchronous and side-effect-free.
pub trait GeoResolver: Send + Sync {
    /// Resolve an IP address to a location record.
    ///
    /// Returns `None` when the IP cannot be resolved; the scanner treats
    /// that as a normal skip, not an error.
    fn resolve(&self, ip: IpAddr) -> Option<LocationRecord>;
}
