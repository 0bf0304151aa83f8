use core::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Analog sample source
///
/// The analog input feeding the filter. Conversions are performed on demand.
pub trait SampleSource {
    /// Conversion failure
    type Error: Debug;

    /// Perform a conversion and return the raw code in `0..=AdcScale::full_scale()`
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

impl<T: SampleSource + ?Sized> SampleSource for &mut T {
    type Error = T::Error;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        (**self).read_raw()
    }
}

/// Linear conversion from ADC codes to volts
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdcScale {
    /// Resolution in bits
    pub bits: u8,
    /// Reference voltage: the input at full scale
    pub reference: f32,
}

impl Default for AdcScale {
    /// 16 bit codes, 3.3 V reference
    fn default() -> Self {
        Self {
            bits: 16,
            reference: 3.3,
        }
    }
}

impl AdcScale {
    /// Largest raw code: `2**bits - 1`
    pub fn full_scale(&self) -> u16 {
        (u32::MAX >> (32 - u32::from(self.bits.clamp(1, 16)))) as u16
    }

    /// Volts per code: `reference / (2**bits - 1)`
    pub fn factor(&self) -> f32 {
        self.reference / self.full_scale() as f32
    }

    /// Convert a raw code
    pub fn volts(&self, raw: u16) -> f32 {
        raw as f32 * self.factor()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scale() {
        let s = AdcScale::default();
        assert_eq!(s.full_scale(), u16::MAX);
        assert_eq!(s.factor(), 3.3 / 65535.0);
        assert_eq!(s.volts(0), 0.0);
        assert!((s.volts(u16::MAX) - 3.3).abs() < 1e-6);
        let s = AdcScale {
            bits: 12,
            reference: 1.0,
        };
        assert_eq!(s.full_scale(), 4095);
        assert!((s.volts(2048) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn by_ref() {
        struct Fixed(u16);
        impl SampleSource for Fixed {
            type Error = ();
            fn read_raw(&mut self) -> Result<u16, ()> {
                Ok(self.0)
            }
        }
        fn read<S: SampleSource>(mut source: S) -> Result<u16, S::Error> {
            source.read_raw()
        }
        let mut f = Fixed(7);
        assert_eq!(read(&mut f), Ok(7));
    }
}
