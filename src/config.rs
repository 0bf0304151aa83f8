use fugit::MillisDurationU32;
use serde::{Deserialize, Serialize};

use crate::{AdcScale, half_period_ms, iir::FirstOrder};

/// Invalid node configuration
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The sampling period is zero
    #[error("sampling period must be nonzero")]
    Period,
    /// The ADC resolution is not supported
    #[error("ADC resolution of {0} bits is outside 1..=16")]
    AdcBits(u8),
    /// The generator frequency does not give a whole millisecond half period
    #[error("generator frequency must give a half period of 1 ms to u32::MAX ms")]
    Frequency,
}

/// Node constants
///
/// Fixed for the lifetime of the node.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Delay between sampler ticks in milliseconds
    pub period: u32,
    /// Sample source conversion
    pub adc: AdcScale,
    /// Square wave frequency in Hertz
    pub frequency: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            period: 25,
            adc: AdcScale::default(),
            frequency: 0.0625,
        }
    }
}

impl Config {
    /// Delay between sampler ticks
    pub fn period(&self) -> MillisDurationU32 {
        MillisDurationU32::from_ticks(self.period)
    }

    /// Duration of each square wave level
    ///
    /// Fails if the frequency gives no half period between 1 ms and `u32::MAX` ms.
    pub fn half_period(&self) -> Result<MillisDurationU32, ConfigError> {
        half_period_ms(self.frequency).ok_or(ConfigError::Frequency)
    }

    /// Check the constants for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period == 0 {
            return Err(ConfigError::Period);
        }
        if !(1..=16).contains(&self.adc.bits) {
            return Err(ConfigError::AdcBits(self.adc.bits));
        }
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(ConfigError::Frequency);
        }
        self.half_period()?;
        Ok(())
    }
}

/// Filter node designs
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Preset {
    /// First order low-pass, 0.5 s time constant, slow square wave
    #[default]
    Lowpass,
    /// First order DC blocking high-pass, faster square wave
    Highpass,
}

impl Preset {
    /// Filter coefficients
    pub fn coefficients(&self) -> FirstOrder {
        match self {
            Self::Lowpass => FirstOrder::LOWPASS,
            Self::Highpass => FirstOrder::HIGHPASS,
        }
    }

    /// Node constants
    pub fn config(&self) -> Config {
        match self {
            Self::Lowpass => Config::default(),
            Self::Highpass => Config {
                frequency: 0.5,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod test {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.validate(), Ok(()));
        assert_eq!(c.period().to_millis(), 25);
        assert_eq!(c.half_period().map(|h| h.to_millis()), Ok(8000));
        assert_eq!(c.adc.factor(), 3.3 / 65535.0);
    }

    #[test]
    fn invalid() {
        let c = Config {
            period: 0,
            ..Default::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::Period));
        let mut c = Config::default();
        c.adc.bits = 17;
        assert_eq!(c.validate(), Err(ConfigError::AdcBits(17)));
        c.adc.bits = 0;
        assert_eq!(c.validate(), Err(ConfigError::AdcBits(0)));
        // half periods rounding to 0 ms or beyond u32::MAX ms
        for frequency in [0.0, -1.0, f32::NAN, f32::INFINITY, 2e3, 1e-7] {
            let c = Config {
                frequency,
                ..Default::default()
            };
            assert_eq!(c.validate(), Err(ConfigError::Frequency));
        }
    }

    #[test]
    fn deserialize() {
        let (c, _): (Config, _) = serde_json_core::from_str(
            r#"{"period":10,"adc":{"bits":12,"reference":1.0},"frequency":2.0}"#,
        )
        .unwrap();
        assert_eq!(c.period().to_millis(), 10);
        assert_eq!(c.adc.full_scale(), 4095);
        assert_eq!(c.half_period().map(|h| h.to_millis()), Ok(250));
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn presets() {
        assert_eq!(Preset::from_str("highpass"), Ok(Preset::Highpass));
        assert_eq!(Preset::from_str("lowpass"), Ok(Preset::Lowpass));
        assert!(Preset::from_str("bandpass").is_err());
        assert_eq!(Preset::Highpass.as_ref(), "highpass");
        assert_eq!(Preset::default().config(), Config::default());
        assert_eq!(
            Preset::Highpass.config().half_period(),
            Ok(MillisDurationU32::from_ticks(1000))
        );
        assert_eq!(Preset::Highpass.coefficients().dc_gain(), 0.0);
        assert!((Preset::Lowpass.coefficients().dc_gain() - 1.0).abs() < 2e-3);
    }
}
