//! Domain layer - entities, value objects, ports, and pure services.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{GeoEvent, LocationRecord};
pub use value_objects::Coordinates;
