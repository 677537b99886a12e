//! KML Map Formatter
//!
//! Renders the event stream as a KML document: a fixed preamble with a
//! static anchor placemark, one placemark per event with a line geometry
//! back to the anchor, and fixed closing tags.

use crate::domain::entities::GeoEvent;
use crate::domain::ports::Formatter;
use crate::domain::value_objects::Coordinates;
use std::io::Write;

/// Fixed anchor every event line geometry points at.
const ANCHOR: Coordinates = Coordinates {
    latitude: 35.655614,
    longitude: 139.701204,
};

const PREAMBLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
<Document>
  <name>geoscan requests</name>
  <description>Geolocated web requests</description>
  <Style id="yellowLineGreenPoly">
    <LineStyle>
      <color>7f00ffff</color>
      <width>4</width>
    </LineStyle>
    <PolyStyle>
      <color>7f00ff00</color>
    </PolyStyle>
  </Style>
  <Placemark>
    <name>Anchor</name>
    <description>Request destination</description>
    <Point>
      <coordinates>139.701204,35.655614,0</coordinates>
    </Point>
  </Placemark>
"#;

const CLOSING: &str = "</Document>\n</kml>\n";

/// Map-document renderer.
///
/// `close` is written unconditionally by the scanner, so the document has
/// matching open/close tags even when a fatal error truncates the scan.
pub struct KmlFormatter<W: Write> {
    out: W,
}

impl<W: Write> KmlFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Formatter for KmlFormatter<W> {
    fn open(&mut self) -> anyhow::Result<()> {
        self.out.write_all(PREAMBLE.as_bytes())?;
        Ok(())
    }

    fn process_entry(&mut self, event: &GeoEvent) -> anyhow::Result<()> {
        let label = format!("{} : {} - {}", event.country, event.region, event.city);

        writeln!(self.out, "  <Placemark>")?;
        writeln!(self.out, "    <name>{label}</name>")?;
        writeln!(self.out, "    <description>{label}</description>")?;
        writeln!(
            self.out,
            "    <TimeStamp><when>{}</when></TimeStamp>",
            event.timestamp.to_rfc3339()
        )?;
        writeln!(self.out, "    <styleUrl>#yellowLineGreenPoly</styleUrl>")?;

        // No coordinates, no geometry; never fabricate 0,0.
        if let Some(coords) = event.coordinates {
            writeln!(self.out, "    <LineString>")?;
            writeln!(self.out, "      <extrude>1</extrude>")?;
            writeln!(self.out, "      <tessellate>1</tessellate>")?;
            writeln!(self.out, "      <coordinates>{coords}")?;
            writeln!(self.out, "      {ANCHOR}")?;
            writeln!(self.out, "      </coordinates>")?;
            writeln!(self.out, "    </LineString>")?;
        }

        writeln!(self.out, "  </Placemark>")?;
        Ok(())
    }

    fn close(&mut self) -> anyhow::Result<()> {
        self.out.write_all(CLOSING.as_bytes())?;
        Ok(())
    }
}
