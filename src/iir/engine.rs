use num_traits::Float;

use super::{Coefficients, History};

/// Compile time check that coefficient and history lengths agree
struct Order<const N: usize, const A: usize>;
impl<const N: usize, const A: usize> Order<N, A> {
    /// `N` feed-forward taps need `N - 1` feed-back taps
    const MATCH: () = assert!(A + 1 == N, "feed-back taps do not match history depth");
}

/// Direct form update
///
/// Evaluate the recurrence on the current history, store the output and age the history.
///
/// `history.u()[0]` must hold the input for this tick. The new output is
///
/// ```text
/// y0 = b[0]*u[0] + b[1]*u[1] + .. + a[0]*y[1] + a[1]*y[2] + ..
/// ```
///
/// where `a` are the sign adjusted feed-back coefficients. The terms are
/// accumulated in this order with single precision fused multiply-adds, without
/// saturation.
///
/// On return `u[1]` is the input just consumed and `y[1] == y[0]` is the output just
/// produced. `u[0]` is to be overwritten with the next input before the next call.
///
/// ```
/// # use iir_node::iir::*;
/// let mut h = History::new();
/// h.set_input(1.0);
/// let y0 = evaluate(&FirstOrder::LOWPASS, &mut h);
/// assert_eq!(y0, 0.02439);
/// assert_eq!(h.u(), &[1.0, 1.0]);
/// assert_eq!(h.y(), &[y0, y0]);
/// ```
///
/// Mismatched orders do not compile:
///
/// ```compile_fail
/// # use iir_node::iir::*;
/// evaluate(&Coefficients::new([1.0, 0.5], [0.1, 0.2]), &mut History::new());
/// ```
#[inline]
pub fn evaluate<const N: usize, const A: usize>(
    coefficients: &Coefficients<N, A>,
    history: &mut History<N>,
) -> f32 {
    let () = Order::<N, A>::MATCH;
    let y0 = coefficients
        .b()
        .iter()
        .zip(history.u.iter())
        .chain(coefficients.a().iter().zip(history.y[1..].iter()))
        .fold(0.0, |y, (c, x)| Float::mul_add(*c, *x, y));
    history.y[0] = y0;
    history.shift();
    y0
}

impl<const N: usize, const A: usize> Coefficients<N, A> {
    /// Ingest a new input and evaluate
    ///
    /// See [`evaluate()`].
    #[inline]
    pub fn update(&self, history: &mut History<N>, x0: f32) -> f32 {
        history.set_input(x0);
        evaluate(self, history)
    }
}
