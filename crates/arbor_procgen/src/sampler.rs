use rand::Rng;

/// Source of randomness for tree generation.
///
/// Every stochastic decision (curvature jitter, split signs, divergence,
/// variance draws) goes through this trait, in depth-first traversal order.
/// Any [`rand::Rng`] is a `Sampler`; seed a `StdRng` for reproducible trees.
pub trait Sampler {
    /// Uniform draw from `[min, max)`. Returns `min` for an empty range.
    fn uniform(&mut self, min: f32, max: f32) -> f32;

    /// `-1.0` or `+1.0` with equal probability.
    fn sign(&mut self) -> f32;

    /// `value` jittered by a uniform draw in `[-variance, variance)`.
    ///
    /// A zero variance consumes no randomness.
    fn vary(&mut self, value: f32, variance: f32) -> f32 {
        let spread = variance.abs();
        if spread == 0.0 {
            value
        } else {
            value + self.uniform(-spread, spread)
        }
    }
}

impl<R: Rng> Sampler for R {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if min < max {
            self.gen_range(min..max)
        } else {
            min
        }
    }

    fn sign(&mut self) -> f32 {
        if self.gen::<bool>() {
            1.0
        } else {
            -1.0
        }
    }
}
