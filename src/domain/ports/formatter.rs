//! Formatter Port
//!
//! Defines the lifecycle interface every output renderer implements.

use crate::domain::entities::GeoEvent;

/// Renderer for a stream of geo events.
///
/// The scanner drives the lifecycle `open -> zero or more entries -> close`.
/// `open` must emit any header before the first entry; `close` emits any
/// trailer or final computed rendering and is called on every exit path out
/// of a scan, so partial output is always finalized. Entries are only
/// delivered between `open` and `close`.
///
/// Stateless renderers (one line per event) only implement `process_entry`;
/// accumulating renderers mutate internal state per entry and emit once at
/// `close`.
pub trait Formatter {
    /// Emit any document header. Default: nothing.
    fn open(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Consume one geo event: emit a rendering for it, or fold it into
    /// internal state.
    fn process_entry(&mut self, event: &GeoEvent) -> anyhow::Result<()>;

    /// Emit any trailer or the final computed rendering. Default: nothing.
    fn close(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
