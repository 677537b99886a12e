//! Formatter Group
//!
//! Composite formatter fanning the lifecycle out to named children, so one
//! scan can drive several renderers simultaneously.

use crate::domain::entities::GeoEvent;
use crate::domain::ports::Formatter;

/// Ordered collection of child formatters.
///
/// Dispatch order is insertion order. A failing child is isolated: the
/// failure is logged under the child's name and dispatch continues to the
/// remaining children, so one broken renderer cannot block the others
/// from producing valid output. The group itself never fails.
#[derive(Default)]
pub struct FormatterGroup {
    children: Vec<(String, Box<dyn Formatter>)>,
}

impl FormatterGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named child; it will be dispatched after all earlier ones.
    pub fn add(&mut self, name: impl Into<String>, formatter: Box<dyn Formatter>) {
        self.children.push((name.into(), formatter));
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn dispatch<F>(&mut self, call: &str, mut f: F)
    where
        F: FnMut(&mut dyn Formatter) -> anyhow::Result<()>,
    {
        for (name, child) in &mut self.children {
            if let Err(error) = f(child.as_mut()) {
                tracing::warn!(formatter = %name, call, %error, "child formatter failed");
            }
        }
    }
}

impl Formatter for FormatterGroup {
    fn open(&mut self) -> anyhow::Result<()> {
        self.dispatch("open", |child| child.open());
        Ok(())
    }

    fn process_entry(&mut self, event: &GeoEvent) -> anyhow::Result<()> {
        self.dispatch("process_entry", |child| child.process_entry(event));
        Ok(())
    }

    fn close(&mut self) -> anyhow::Result<()> {
        self.dispatch("close", |child| child.close());
        Ok(())
    }
}
