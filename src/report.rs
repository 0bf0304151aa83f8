use core::fmt;

use serde::Serialize;

/// One filter tick: the input consumed and the output produced
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct Sample {
    /// Filter input in volts
    pub input: f32,
    /// Filter output in volts
    pub output: f32,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.input, self.output)
    }
}

/// Report sink
///
/// Receives the input/output pair once per tick.
pub trait Report {
    /// Observe one tick
    fn report(&mut self, sample: &Sample);
}

impl<T: Report + ?Sized> Report for &mut T {
    fn report(&mut self, sample: &Sample) {
        (**self).report(sample)
    }
}

/// Report through the `log` facade at `info` level
#[derive(Copy, Clone, Debug, Default)]
pub struct LogReport;

impl Report for LogReport {
    fn report(&mut self, sample: &Sample) {
        log::info!("{sample}");
    }
}

/// Report one `"{input} {output}"` line per tick to a writer
#[cfg(any(test, feature = "std"))]
#[derive(Debug, Default)]
pub struct WriteReport<W>(pub W);

#[cfg(any(test, feature = "std"))]
impl<W: std::io::Write> Report for WriteReport<W> {
    fn report(&mut self, sample: &Sample) {
        if let Err(err) = writeln!(self.0, "{sample}") {
            log::warn!("Report dropped: {err}");
        }
    }
}
