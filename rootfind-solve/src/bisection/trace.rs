use std::fmt;

use rootfind_core::Observer;

use super::Event;

/// One midpoint evaluation recorded by [`Trace`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    pub iter: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

/// Observer that records every midpoint evaluation.
///
/// Its `Display` impl renders the recorded rows as a table:
///
/// ```text
///  It.         X value         Y value          Xerror
///    0    5.000000e-1     5.714286e-3     1.000000e0
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    rows: Vec<TraceRow>,
}

impl Trace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded rows in evaluation order.
    #[must_use]
    pub fn rows(&self) -> &[TraceRow] {
        &self.rows
    }
}

impl Observer<Event> for Trace {
    fn observe(&mut self, event: &Event) {
        if let Event::Midpoint { iter, x, y, width } = *event {
            self.rows.push(TraceRow { iter, x, y, width });
        }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>4} {:>15} {:>15} {:>15}", "It.", "X value", "Y value", "Xerror")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>4} {:>15.6e} {:>15.6e} {:>15.6e}",
                row.iter, row.x, row.y, row.width
            )?;
        }
        Ok(())
    }
}
