mod chart_formatter;
mod formatter_group;
mod kml_formatter;
mod maxmind_geo_resolver;
mod print_formatter;

pub use chart_formatter::ChartFormatter;
pub use formatter_group::FormatterGroup;
pub use kml_formatter::KmlFormatter;
pub use maxmind_geo_resolver::MaxMindGeoResolver;
pub use print_formatter::PrintFormatter;
