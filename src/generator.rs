use core::convert::Infallible;

use embedded_hal::{
    delay::DelayNs,
    digital::{OutputPin, PinState},
};
use fugit::MillisDurationU32;
use num_traits::Float;

use crate::Error;

/// Square wave output level
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum::IntoStaticStr)]
pub enum Level {
    /// Outputs asserted
    #[default]
    High,
    /// Outputs deasserted
    Low,
}

impl Level {
    /// The other level
    pub fn toggle(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }
}

impl From<Level> for PinState {
    fn from(value: Level) -> Self {
        match value {
            Level::High => PinState::High,
            Level::Low => PinState::Low,
        }
    }
}

/// Half of the period of a square wave of the given frequency, in seconds
///
/// ```
/// assert_eq!(iir_node::half_period(0.0625), 8.0);
/// ```
pub fn half_period(frequency: f32) -> f32 {
    frequency.recip() / 2.0
}

/// [`half_period()`] rounded to whole milliseconds
///
/// `None` if the rounded half period is zero or does not fit a `u32` count of milliseconds.
///
/// ```
/// # use iir_node::half_period_ms;
/// assert_eq!(half_period_ms(0.0625).map(|h| h.to_millis()), Some(8000));
/// assert_eq!(half_period_ms(2e3), None);
/// assert_eq!(half_period_ms(1e-7), None);
/// ```
pub fn half_period_ms(frequency: f32) -> Option<MillisDurationU32> {
    let ms = Float::round(f64::from(half_period(frequency)) * 1e3);
    (1.0..=f64::from(u32::MAX))
        .contains(&ms)
        .then(|| MillisDurationU32::from_ticks(ms as u32))
}

/// Square wave generator
///
/// Drives a signal output and a companion indicator output together:
/// high for one half period, then low for one half period, forever. The first
/// half period is high.
///
/// The generator runs on its own timeline. It exchanges no data with the
/// [`crate::Sampler`]; the signal output reaches the sampler only through external wiring.
#[derive(Debug)]
pub struct SquareWave<P, L> {
    output: P,
    indicator: L,
    half_period: MillisDurationU32,
    level: Level,
}

impl<P, L> SquareWave<P, L>
where
    P: OutputPin,
    L: OutputPin<Error = P::Error>,
{
    /// Create a generator with the given half period
    pub fn new(output: P, indicator: L, half_period: MillisDurationU32) -> Self {
        Self {
            output,
            indicator,
            half_period,
            level: Level::default(),
        }
    }

    /// Create a generator for a frequency in Hertz
    ///
    /// The half period is rounded to whole milliseconds.
    /// `None` if that is not representable, see [`half_period_ms()`].
    pub fn with_frequency(output: P, indicator: L, frequency: f32) -> Option<Self> {
        Some(Self::new(output, indicator, half_period_ms(frequency)?))
    }

    /// Duration of each level
    pub fn half_period(&self) -> MillisDurationU32 {
        self.half_period
    }

    /// The level asserted by the next [`SquareWave::step()`]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Assert the current level, hold it for one half period, then toggle
    ///
    /// Returns the level that was held.
    pub fn step<D: DelayNs>(&mut self, delay: &mut D) -> Result<Level, Error<P::Error>> {
        let level = self.level;
        let state = PinState::from(level);
        self.indicator.set_state(state).map_err(Error::Output)?;
        self.output.set_state(state).map_err(Error::Output)?;
        log::debug!("Square wave {}", <&str>::from(level));
        delay.delay_ms(self.half_period.to_millis());
        self.level = level.toggle();
        Ok(level)
    }

    /// Generate forever
    ///
    /// Only returns if an output fails.
    pub fn run<D: DelayNs>(&mut self, delay: &mut D) -> Result<Infallible, Error<P::Error>> {
        log::info!(
            "Square wave with {} ms half period",
            self.half_period.to_millis()
        );
        loop {
            self.step(delay)?;
        }
    }

    /// Release the outputs
    pub fn release(self) -> (P, L) {
        (self.output, self.indicator)
    }
}
