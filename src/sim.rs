//! Host stand-ins for the node hardware
//!
//! On the target the generator output is wired to the analog input by a jumper.
//! Here the jumper is a shared flag: [`WirePin`] drives it and [`WireAdc`] converts it.
use core::convert::Infallible;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin},
};

use crate::{AdcScale, SampleSource};

/// Delay by sleeping the current thread
#[derive(Copy, Clone, Debug, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(ns.into()));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms.into()));
    }
}

/// Simulated jumper between a digital output and an analog input
#[derive(Clone, Debug, Default)]
pub struct Wire(Arc<AtomicBool>);

impl Wire {
    /// Current logic level
    pub fn is_high(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Output driving this wire
    pub fn pin(&self) -> WirePin {
        WirePin(self.clone())
    }

    /// Analog input converting this wire
    pub fn adc(&self, scale: &AdcScale) -> WireAdc {
        WireAdc {
            wire: self.clone(),
            full_scale: scale.full_scale(),
        }
    }
}

/// Digital output onto a [`Wire`]
#[derive(Clone, Debug)]
pub struct WirePin(Wire);

impl ErrorType for WirePin {
    type Error = Infallible;
}

impl OutputPin for WirePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.0.store(false, Ordering::Relaxed);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.0.store(true, Ordering::Relaxed);
        Ok(())
    }
}

/// Analog input from a [`Wire`]
///
/// Converts a high level to full scale and a low level to zero.
#[derive(Clone, Debug)]
pub struct WireAdc {
    wire: Wire,
    full_scale: u16,
}

impl SampleSource for WireAdc {
    type Error = Infallible;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        Ok(if self.wire.is_high() {
            self.full_scale
        } else {
            0
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Config, Level, Sampler, SquareWave, WriteReport, iir::FirstOrder};
    use fugit::MillisDurationU32;

    #[test]
    fn wire() {
        let wire = Wire::default();
        let scale = AdcScale::default();
        let mut adc = wire.adc(&scale);
        let mut pin = wire.pin();
        assert_eq!(adc.read_raw(), Ok(0));
        pin.set_high().unwrap();
        assert!(wire.is_high());
        assert_eq!(adc.read_raw(), Ok(u16::MAX));
        pin.set_low().unwrap();
        assert_eq!(adc.read_raw(), Ok(0));
    }

    #[test]
    fn node() {
        let wire = Wire::default();
        let config = Config {
            period: 1,
            ..Default::default()
        };

        let mut generator = SquareWave::new(
            wire.pin(),
            Wire::default().pin(),
            MillisDurationU32::from_ticks(10),
        );
        let generator = thread::spawn(move || {
            let mut delay = StdDelay;
            (0..6)
                .map(|_| generator.step(&mut delay).unwrap())
                .collect::<Vec<_>>()
        });

        let mut sampler = Sampler::new(
            FirstOrder::new([1.0, 0.0], [0.0]),
            wire.adc(&config.adc),
            WriteReport(Vec::new()),
            config.period(),
            &config.adc,
        );
        let mut delay = StdDelay;
        let inputs: Vec<_> = (0..80)
            .map(|_| sampler.tick(&mut delay).unwrap().input)
            .collect();

        let levels = generator.join().unwrap();
        assert_eq!(levels[..2], [Level::High, Level::Low]);
        // each tick only sees a rail
        assert!(
            inputs
                .iter()
                .all(|x| *x == 0.0 || (*x - 3.3).abs() < 1e-6)
        );
        assert!(inputs.iter().any(|x| *x > 3.0));
        let (_adc, report) = sampler.release();
        assert_eq!(String::from_utf8(report.0).unwrap().lines().count(), 80);
    }
}
