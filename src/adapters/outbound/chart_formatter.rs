//! Heat-Map Chart Formatter
//!
//! Accumulates per-country hit counts during the scan and emits a single
//! Google-Charts world-map URL at close.

use crate::domain::entities::GeoEvent;
use crate::domain::ports::Formatter;
use std::collections::BTreeMap;
use std::io::Write;

/// Google Charts "simple encoding" alphabet, one symbol per country.
const SYMBOLS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Accumulating renderer: no per-entry output, one complete URL at close.
///
/// Countries are keyed by code in a BTreeMap so repeated runs over the
/// same input emit byte-identical URLs.
pub struct ChartFormatter<W: Write> {
    out: W,
    hits: BTreeMap<String, u64>,
}

impl<W: Write> ChartFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            hits: BTreeMap::new(),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

/// Bucket a count into the symbol alphabet.
///
/// Scales `(count - min) / (max - min)` across the alphabet and clamps to
/// the last symbol. The original tool divided by `max` instead, which
/// compresses the scale whenever `min > 0`; the corrected divisor keeps
/// the minimum at the first symbol and the maximum at the last.
fn bucket(count: u64, min: u64, max: u64) -> usize {
    if max == min {
        return 0;
    }
    let scaled = (count - min) as f64 / (max - min) as f64 * SYMBOLS.len() as f64;
    (scaled.floor() as usize).min(SYMBOLS.len() - 1)
}

impl<W: Write> Formatter for ChartFormatter<W> {
    fn open(&mut self) -> anyhow::Result<()> {
        self.hits.clear();
        Ok(())
    }

    fn process_entry(&mut self, event: &GeoEvent) -> anyhow::Result<()> {
        *self.hits.entry(event.country_code.clone()).or_insert(0) += 1;
        Ok(())
    }

    fn close(&mut self) -> anyhow::Result<()> {
        // min/max of an empty map are irrelevant: both strings stay empty
        // and the URL is still emitted once, complete.
        let min = self.hits.values().min().copied().unwrap_or(0);
        let max = self.hits.values().max().copied().unwrap_or(0);

        let mut data = String::new();
        let mut countries = String::new();
        for (country, count) in &self.hits {
            countries.push_str(country);
            data.push(SYMBOLS[bucket(*count, min, max)] as char);
        }

        writeln!(
            self.out,
            "http://chart.apis.google.com/chart?cht=t&chs=440x220&chtm=world&chd=s:{data}&chco=ffffff,f4ed28,f11414&chld={countries}&chf=bg,s,EAF7FE"
        )?;
        Ok(())
    }
}
