//! Tolerances for comparing filter outputs
#![allow(dead_code)]
use num_complex::Complex;
use num_traits::Float;

/// Return whether `a` and `b` are within `rtol` relative to the larger magnitude plus `atol`
pub fn isclose<T: Float>(a: T, b: T, rtol: T, atol: T) -> bool {
    (a - b).abs() <= rtol * a.abs().max(b.abs()) + atol
}

/// Return whether all values are close
pub fn allclose<T: Float>(a: &[T], b: &[T], rtol: T, atol: T) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| isclose(*a, *b, rtol, atol))
}

/// Return whether both real and imaginary component are close
pub fn complex_isclose<T: Float>(a: Complex<T>, b: Complex<T>, rtol: T, atol: T) -> bool {
    isclose(a.re, b.re, rtol, atol) && isclose(a.im, b.im, rtol, atol)
}
