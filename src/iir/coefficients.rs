use num_complex::Complex;
use num_traits::{AsPrimitive, Float};

/// Direct form IIR coefficients
///
/// `b` holds the feed-forward (numerator) coefficients `[b0, b1, ..]` applied to the
/// current and past inputs `[x0, x1, ..]`.
/// `a` holds the feed-back (denominator) coefficients `[a1, a2, ..]` applied to the
/// past outputs `[y1, y2, ..]`. The leading `a0` is implicit and normalized to one.
///
/// The feed-back coefficients are stored *negated* with respect to the transfer function
///
/// ```text
///        b0 + b1 z^-1 + b2 z^-2
/// H(z) = ----------------------
///         1 + a1 z^-1 + a2 z^-2
/// ```
///
/// such that the recurrence is a pure sum of products:
/// `y0 = b0*x0 + b1*x1 + b2*x2 + a[0]*y1 + a[1]*y2`.
///
/// `B` is the number of feed-forward taps, `A` the number of feed-back taps.
/// A filter of order `A` is evaluated against a [`crate::iir::History`] of depth `A + 1 == B`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Coefficients<const B: usize, const A: usize> {
    b: [f32; B],
    a: [f32; A],
}

/// First order section: `[b0, b1]`, `[a1]`
pub type FirstOrder = Coefficients<2, 1>;

/// Second order section: `[b0, b1, b2]`, `[a1, a2]`
pub type SecondOrder = Coefficients<3, 2>;

impl<const B: usize, const A: usize> Coefficients<B, A> {
    /// Create from feed-forward and sign adjusted feed-back coefficients
    ///
    /// ```
    /// # use iir_node::iir::*;
    /// let c = FirstOrder::new([1.0, -1.0], [0.8]);
    /// assert_eq!(c, FirstOrder::HIGHPASS);
    /// ```
    pub const fn new(b: [f32; B], a: [f32; A]) -> Self {
        Self { b, a }
    }

    /// Create from a transfer function with explicit leading denominator coefficient
    ///
    /// All coefficients are normalized by `a0` and the feed-back coefficients are negated.
    ///
    /// ```
    /// # use iir_node::iir::*;
    /// // H(z) = (1 - z^-1)/(1 - 0.8 z^-1)
    /// let c = FirstOrder::from_transfer_function([1.0f64, -1.0], 1.0, [-0.8]);
    /// assert_eq!(c, FirstOrder::HIGHPASS);
    /// ```
    ///
    /// # Arguments
    /// * `b`: Numerator `[b0, b1, ..]`
    /// * `a0`: Leading denominator coefficient
    /// * `a`: Remaining denominator `[a1, a2, ..]`
    pub fn from_transfer_function<C>(b: [C; B], a0: C, a: [C; A]) -> Self
    where
        C: Float + AsPrimitive<f32>,
    {
        let ia0 = C::one() / a0;
        Self {
            b: b.map(|b| (b * ia0).as_()),
            a: a.map(|a| (-a * ia0).as_()),
        }
    }

    /// Feed-forward coefficients `[b0, b1, ..]`
    pub fn b(&self) -> &[f32; B] {
        &self.b
    }

    /// Sign adjusted feed-back coefficients `[-a1, -a2, ..]`
    pub fn a(&self) -> &[f32; A] {
        &self.a
    }

    /// Filter order
    pub const fn order(&self) -> usize {
        A
    }

    /// Transfer function in normalized form
    ///
    /// The inverse of [`Coefficients::from_transfer_function()`] with `a0 = 1`.
    pub fn transfer_function(&self) -> ([f32; B], [f32; A]) {
        (self.b, self.a.map(|a| -a))
    }

    /// Overall feed-forward gain: the sum of the `b` coefficients
    pub fn forward_gain(&self) -> f32 {
        self.b.iter().sum()
    }

    /// Gain at DC
    ///
    /// ```
    /// # use iir_node::iir::*;
    /// assert_eq!(FirstOrder::HIGHPASS.dc_gain(), 0.0);
    /// assert!((FirstOrder::LOWPASS.dc_gain() - 1.0).abs() < 1e-3);
    /// ```
    ///
    /// Infinite for integrators (`1 - Σa = 0`).
    pub fn dc_gain(&self) -> f32 {
        self.forward_gain() / (1.0 - self.a.iter().sum::<f32>())
    }

    /// Complex frequency response `H(exp(1j*w))`
    ///
    /// # Arguments
    /// * `w`: Angular frequency in units of the sample rate. `w = π` is Nyquist.
    pub fn response(&self, w: f32) -> Complex<f32> {
        let z = |k: usize| {
            let (s, c) = (w * k as f32).sin_cos();
            Complex::new(c, -s)
        };
        let num = self
            .b
            .iter()
            .enumerate()
            .fold(Complex::new(0.0, 0.0), |acc, (k, b)| acc + z(k) * *b);
        let den = self
            .a
            .iter()
            .enumerate()
            .fold(Complex::new(1.0, 0.0), |acc, (k, a)| acc - z(k + 1) * *a);
        num / den
    }
}

impl Coefficients<1, 0> {
    /// A memoryless filter with the given gain
    pub const fn proportional(k: f32) -> Self {
        Self::new([k], [])
    }

    /// Unity gain, no memory
    pub const IDENTITY: Self = Self::proportional(1.0);
}

impl FirstOrder {
    /// First order low-pass with `τ = 0.5 s`
    ///
    /// `H(s) = 2/(s + 2)` discretized with the bilinear transform at `Ts = 25 ms`:
    /// `H(z) = (0.02439 z + 0.02439)/(z - 0.9512)`.
    pub const LOWPASS: Self = Self::new([0.02439, 0.02439], [0.9512]);

    /// First order high-pass (DC blocker)
    ///
    /// `H(z) = (1 - z^-1)/(1 - 0.8 z^-1)`
    pub const HIGHPASS: Self = Self::new([1.0, -1.0], [0.8]);
}

impl SecondOrder {
    /// [`FirstOrder::LOWPASS`] embedded in a second order section with `b2 = a2 = 0`
    pub const LOWPASS: Self = Self::new([0.02439, 0.02439, 0.0], [0.9512, 0.0]);
}

impl From<FirstOrder> for SecondOrder {
    fn from(value: FirstOrder) -> Self {
        let ([b0, b1], [a1]) = (value.b, value.a);
        Self::new([b0, b1, 0.0], [a1, 0.0])
    }
}
