use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Strategy for moving the parameter vector after a stagnated epoch.
///
/// The controller calls [`reset`](Reset::reset) with the current values and
/// then refills every momentum to the initial step. Closures of the form
/// `FnMut(&mut [f64])` implement this trait.
pub trait Reset {
    /// Overwrites `values` with a new starting point.
    fn reset(&mut self, values: &mut [f64]);
}

impl<F> Reset for F
where
    F: FnMut(&mut [f64]),
{
    fn reset(&mut self, values: &mut [f64]) {
        self(values);
    }
}

/// Fills every value with a uniform random sample from `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct UniformReset {
    rng: SmallRng,
}

impl UniformReset {
    /// Creates a reset strategy seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a reset strategy with a fixed seed, for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformReset {
    fn default() -> Self {
        Self::new()
    }
}

impl Reset for UniformReset {
    fn reset(&mut self, values: &mut [f64]) {
        for value in values {
            *value = self.rng.gen_range(-1.0..=1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_reset_stays_in_range() {
        let mut reset = UniformReset::seeded(7);
        let mut values = vec![100.0; 64];

        reset.reset(&mut values);

        assert!(values.iter().all(|v| (-1.0..=1.0).contains(v)));
        assert!(values.iter().any(|v| *v != values[0]));
    }

    #[test]
    fn seeded_resets_are_reproducible() {
        let mut a = vec![0.0; 8];
        let mut b = vec![0.0; 8];

        UniformReset::seeded(42).reset(&mut a);
        UniformReset::seeded(42).reset(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn closure_reset() {
        let mut reset = |values: &mut [f64]| values.fill(-2.0);
        let mut values = [1.0, 2.0];

        reset.reset(&mut values);

        assert_eq!(values, [-2.0, -2.0]);
    }
}
