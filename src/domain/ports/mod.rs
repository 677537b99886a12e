mod formatter;
mod geo_resolver;

pub use formatter::Formatter;
pub use geo_resolver::GeoResolver;
