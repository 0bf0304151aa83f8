//! Host IIR filter node
//!
//! Usage: `iir-node [lowpass|highpass]`
//!
//! Runs the square wave generator and the sampler on two threads, joined by a simulated
//! jumper, and prints one `"{input} {output}"` line per tick.
use std::{error::Error, io, thread};

use iir_node::{
    Preset, Sampler, SquareWave, WriteReport,
    sim::{StdDelay, Wire},
};

fn main() -> Result<(), Box<dyn Error>> {
    let preset: Preset = match std::env::args().nth(1) {
        Some(name) => name
            .parse()
            .map_err(|_| format!("unknown preset {name:?}, expected lowpass or highpass"))?,
        None => Preset::default(),
    };
    let config = preset.config();
    config.validate()?;

    let wire = Wire::default();
    let led = Wire::default();

    let mut generator = SquareWave::new(wire.pin(), led.pin(), config.half_period()?);
    thread::Builder::new()
        .name("generator".into())
        .spawn(move || {
            let Err(err) = generator.run(&mut StdDelay);
            eprintln!("Generator stopped: {err}");
        })?;

    let mut sampler = Sampler::new(
        preset.coefficients(),
        wire.adc(&config.adc),
        WriteReport(io::stdout()),
        config.period(),
        &config.adc,
    );
    let Err(err) = sampler.run(&mut StdDelay);
    Err(err.into())
}
