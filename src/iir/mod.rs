//! Direct form IIR filters: coefficients, history and evaluation

mod coefficients;
pub use coefficients::*;
mod history;
pub use history::*;
mod engine;
pub use engine::*;
