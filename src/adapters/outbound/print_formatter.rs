//! Print Formatter
//!
//! One human-readable line per geo event.

use crate::domain::entities::GeoEvent;
use crate::domain::ports::Formatter;
use std::io::Write;

/// Stateless line-per-event renderer. No header or trailer.
pub struct PrintFormatter<W: Write> {
    out: W,
}

impl<W: Write> PrintFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Formatter for PrintFormatter<W> {
    fn process_entry(&mut self, event: &GeoEvent) -> anyhow::Result<()> {
        let (lat, long) = match event.coordinates {
            Some(c) => (c.latitude.to_string(), c.longitude.to_string()),
            None => ("-".to_string(), "-".to_string()),
        };

        writeln!(
            self.out,
            "Country: {} Region: {} City: {} Lat: {} Long: {}",
            event.country, event.region, event.city, lat, long
        )?;
        Ok(())
    }
}
