/// Filter memory
///
/// Recent inputs `u` and outputs `y`, most recent first.
/// Index 0 is the current tick, higher indices are older samples.
///
/// Between two evaluations `u[0]` is the input slot for the next tick and `y[0]`
/// is a stale copy of the last output (equal to `y[1]`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct History<const N: usize> {
    pub(super) u: [f32; N],
    pub(super) y: [f32; N],
}

impl<const N: usize> Default for History<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> History<N> {
    const NONEMPTY: () = assert!(N > 0, "history needs at least the current sample");

    /// Zero initialized history
    pub const fn new() -> Self {
        let () = Self::NONEMPTY;
        Self {
            u: [0.0; N],
            y: [0.0; N],
        }
    }

    /// Depth: current sample plus past samples
    pub const fn depth(&self) -> usize {
        N
    }

    /// Store the input to be used by the next evaluation
    pub fn set_input(&mut self, x0: f32) {
        self.u[0] = x0;
    }

    /// The current input `u[0]`
    pub fn input(&self) -> f32 {
        self.u[0]
    }

    /// The most recent output
    pub fn output(&self) -> f32 {
        self.y[0]
    }

    /// Inputs `[u0, u1, ..]`
    pub fn u(&self) -> &[f32; N] {
        &self.u
    }

    /// Outputs `[y0, y1, ..]`
    pub fn y(&self) -> &[f32; N] {
        &self.y
    }

    /// Age all samples by one tick
    ///
    /// The oldest sample is discarded. Slots are moved oldest first so that
    /// each one is read before it is overwritten. Index 0 keeps its value.
    pub fn shift(&mut self) {
        for i in (1..N).rev() {
            self.u[i] = self.u[i - 1];
            self.y[i] = self.y[i - 1];
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero() {
        let h = History::<3>::default();
        assert_eq!(h.u(), &[0.0; 3]);
        assert_eq!(h.y(), &[0.0; 3]);
        assert_eq!(h.depth(), 3);
    }

    #[test]
    fn shift_order() {
        let mut h = History::<3> {
            u: [1.0, 2.0, 3.0],
            y: [4.0, 5.0, 6.0],
        };
        h.shift();
        assert_eq!(h.u(), &[1.0, 1.0, 2.0]);
        assert_eq!(h.y(), &[4.0, 4.0, 5.0]);
        h.set_input(7.0);
        h.shift();
        assert_eq!(h.u(), &[7.0, 7.0, 1.0]);
        assert_eq!(h.input(), 7.0);
    }

    #[test]
    fn memoryless() {
        let mut h = History::<1>::new();
        h.set_input(2.0);
        h.shift();
        assert_eq!(h.u(), &[2.0]);
    }
}
