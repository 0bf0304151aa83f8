use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use fugit::MillisDurationU32;

use crate::{
    AdcScale, Error, Report, Sample, SampleSource,
    iir::{Coefficients, History, evaluate},
};

/// Sampling driver
///
/// Runs the filter at a fixed period. Each tick
///
/// 1. evaluates the filter on the input acquired during the previous tick,
/// 2. reports the input/output pair,
/// 3. sleeps for the full configured period,
/// 4. acquires and converts a new input for the next tick.
///
/// The acquired sample is therefore used one period after its conversion. The delay is
/// paid in full on every tick: the actual period is the configured delay plus
/// the processing time, and scheduling jitter accumulates.
///
/// The sampler exclusively owns the filter history. It shares no state with other tasks.
#[derive(Debug)]
pub struct Sampler<S, R, const N: usize, const A: usize> {
    coefficients: Coefficients<N, A>,
    history: History<N>,
    source: S,
    report: R,
    period: MillisDurationU32,
    factor: f32,
}

impl<S: SampleSource, R: Report, const N: usize, const A: usize> Sampler<S, R, N, A> {
    /// Create a new sampler with zero history
    ///
    /// # Arguments
    /// * `coefficients`: Filter coefficients
    /// * `source`: Analog input
    /// * `report`: Sink for the per tick input/output pairs
    /// * `period`: Delay between ticks
    /// * `scale`: Conversion from `source` codes to volts
    pub fn new(
        coefficients: Coefficients<N, A>,
        source: S,
        report: R,
        period: MillisDurationU32,
        scale: &AdcScale,
    ) -> Self {
        Self {
            coefficients,
            history: History::new(),
            source,
            report,
            period,
            factor: scale.factor(),
        }
    }

    /// Filter coefficients
    pub fn coefficients(&self) -> &Coefficients<N, A> {
        &self.coefficients
    }

    /// Filter history
    pub fn history(&self) -> &History<N> {
        &self.history
    }

    /// Delay between ticks
    pub fn period(&self) -> MillisDurationU32 {
        self.period
    }

    /// Perform one tick
    ///
    /// Returns the reported sample.
    pub fn tick<D: DelayNs>(&mut self, delay: &mut D) -> Result<Sample, Error<S::Error>> {
        let input = self.history.input();
        let output = evaluate(&self.coefficients, &mut self.history);
        let sample = Sample { input, output };
        self.report.report(&sample);
        log::trace!("tick {sample}");

        delay.delay_ms(self.period.to_millis());

        let raw = self.source.read_raw().map_err(|err| {
            log::error!("Sample acquisition failed: {err:?}");
            Error::Acquisition(err)
        })?;
        self.history.set_input(raw as f32 * self.factor);
        Ok(sample)
    }

    /// Tick forever
    ///
    /// Only returns if acquisition fails.
    pub fn run<D: DelayNs>(&mut self, delay: &mut D) -> Result<Infallible, Error<S::Error>> {
        log::info!(
            "Sampling every {} ms with b = {:?}, a = {:?}",
            self.period.to_millis(),
            self.coefficients.b(),
            self.coefficients.a()
        );
        loop {
            self.tick(delay)?;
        }
    }

    /// Release the sample source and report sink
    pub fn release(self) -> (S, R) {
        (self.source, self.report)
    }
}
