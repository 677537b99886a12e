//! geoscan - Access-Log Geolocation Pipeline
//!
//! This is the composition root that wires together all the components.

mod adapters;
mod application;
mod config;
mod domain;

use crate::adapters::outbound::{
    ChartFormatter, FormatterGroup, KmlFormatter, MaxMindGeoResolver, PrintFormatter,
};
use crate::application::EventScanner;
use crate::config::{load_config, Config, FormatKind};
use crate::domain::ports::{Formatter, GeoResolver};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    // ===== COMPOSITION ROOT =====
    // Wire up the resolver, the formatters, and the input stream

    // GeoIP resolver (MaxMind)
    let geo_resolver: Arc<dyn GeoResolver> = match MaxMindGeoResolver::from_file(&cfg.geoip_path) {
        Ok(g) => {
            tracing::info!("GeoIP DB loaded from {}", cfg.geoip_path);
            Arc::new(g)
        }
        Err(e) => {
            tracing::error!("failed to load GeoIP DB from {}: {:?}", cfg.geoip_path, e);
            return Err(e);
        }
    };

    // Output formatters
    let mut formatters = build_formatters(&cfg)?;

    // Input stream: first positional argument = file path, else stdin
    let input: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("scanning {}", path);
            Box::new(BufReader::new(File::open(&path)?))
        }
        None => {
            tracing::info!("scanning stdin");
            Box::new(BufReader::new(io::stdin()))
        }
    };

    // Run the scan
    let scanner = EventScanner::new(geo_resolver);
    let stats = scanner.scan(input, &mut formatters)?;

    tracing::info!(
        events = stats.events,
        skipped = stats.skipped_lines,
        unresolved = stats.unresolved,
        "done"
    );
    Ok(())
}

/// Construct the configured formatters.
///
/// A single format writes to stdout; several formats each get their own
/// file under the configured output directory so their streams do not
/// interleave.
fn build_formatters(cfg: &Config) -> anyhow::Result<FormatterGroup> {
    let mut group = FormatterGroup::new();

    for kind in &cfg.formats {
        let out: Box<dyn Write> = if cfg.formats.len() == 1 {
            Box::new(io::stdout())
        } else {
            let path = cfg.out_dir.join(kind.file_name());
            tracing::info!("{} output -> {}", kind, path.display());
            Box::new(File::create(path)?)
        };

        let formatter: Box<dyn Formatter> = match kind {
            FormatKind::Print => Box::new(PrintFormatter::new(out)),
            FormatKind::Kml => Box::new(KmlFormatter::new(out)),
            FormatKind::Chart => Box::new(ChartFormatter::new(out)),
        };
        group.add(kind.as_str(), formatter);
    }

    Ok(group)
}
