#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
//! Real-time IIR filter node
//!
//! A [`Sampler`] acquires one analog sample per fixed period and runs it through a
//! direct form [`iir`] recurrence, reporting every input/output pair.
//! A [`SquareWave`] generator drives the test stimulus on an independent timeline.
//!
//! ```
//! use iir_node::iir::*;
//!
//! let mut h = History::<2>::new();
//! let y: Vec<_> = (0..4).map(|_| FirstOrder::HIGHPASS.update(&mut h, 5.0)).collect();
//! assert_eq!(y[..2], [5.0, 4.0]);
//! ```

pub mod iir;
mod adc;
pub use adc::*;
mod config;
pub use config::*;
mod error;
pub use error::*;
mod generator;
pub use generator::*;
mod report;
pub use report::*;
mod sampler;
pub use sampler::*;

#[cfg(any(test, feature = "std"))]
pub mod sim;

#[cfg(test)]
pub mod testing;
