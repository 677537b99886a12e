//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

/// A pair of decimal-degree coordinates.
///
/// Displays in KML order (`longitude,latitude`), which is what the
/// map-document formatter embeds in its geometry elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees (positive = north)
    pub latitude: f64,
    /// Longitude in decimal degrees (positive = east)
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // KML coordinate order: longitude first
        write!(f, "{},{}", self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lon_lat() {
        let c = Coordinates::new(37.4, -122.1);
        assert_eq!(c.to_string(), "-122.1,37.4");
    }

    #[test]
    fn test_display_keeps_sign_and_precision() {
        let c = Coordinates::new(35.655614, 139.701204);
        assert_eq!(c.to_string(), "139.701204,35.655614");
    }

    #[test]
    fn test_equality() {
        let a = Coordinates::new(35.655614, 139.701204);
        let b = Coordinates::new(35.655614, 139.701204);
        assert_eq!(a, b);
    }
}
