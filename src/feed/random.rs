use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws for the simulated feed.
///
/// Every `rand::Rng` is a `RandomSource`, so production code passes a
/// `StdRng` while tests can replay fixed values with [`ScriptedSource`].
pub trait RandomSource {
    /// Uniform draw from `[low, high)`. Returns `low` when the range is empty.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Uniform integer from `[0, upper)`. Returns 0 when `upper` is 0.
    fn below(&mut self, upper: u64) -> u64;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if !(high > low) {
            return low;
        }
        if (high - low).is_finite() {
            return self.gen_range(low..high);
        }
        // span overflows f64; draw around the midpoint from halved bounds
        let half = high / 2.0 - low / 2.0;
        let mid = low / 2.0 + high / 2.0;
        (mid + half * self.gen_range(-1.0..1.0)).clamp(low, high)
    }

    fn below(&mut self, upper: u64) -> u64 {
        if upper == 0 {
            return 0;
        }
        self.gen_range(0..upper)
    }
}

pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Replays unit fractions in `[0, 1)` in a loop and scales them into the requested range.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    fractions: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(fractions: Vec<f64>) -> Self {
        let fractions = fractions
            .into_iter()
            .map(|f| if f.is_finite() { f.clamp(0.0, 1.0 - f64::EPSILON) } else { 0.0 })
            .collect();
        Self {
            fractions,
            cursor: 0,
        }
    }

    fn next_fraction(&mut self) -> f64 {
        if self.fractions.is_empty() {
            return 0.0;
        }
        let f = self.fractions[self.cursor % self.fractions.len()];
        self.cursor += 1;
        f
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let f = self.next_fraction();
        if !(high > low) {
            return low;
        }
        if (high - low).is_finite() {
            return low + (high - low) * f;
        }
        let half = high / 2.0 - low / 2.0;
        (low + half * f + half * f).clamp(low, high)
    }

    fn below(&mut self, upper: u64) -> u64 {
        let f = self.next_fraction();
        ((upper as f64 * f) as u64).min(upper.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_rng_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let x = rng.uniform(-50.0, 50.0);
            assert!((-50.0..50.0).contains(&x));
            assert!(rng.below(10) < 10);
        }
    }

    #[test]
    fn empty_ranges_do_not_panic() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(rng.uniform(3.0, 3.0), 3.0);
        assert_eq!(rng.uniform(5.0, 1.0), 5.0);
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn overflowing_span_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1_000 {
            let x = rng.uniform(-1e308, 1e308);
            assert!(x.is_finite());
            assert!((-1e308..=1e308).contains(&x));
        }
        let mut src = ScriptedSource::new(vec![0.0, 0.5, 0.75]);
        assert_eq!(src.uniform(-1e308, 1e308), -1e308);
        assert!(src.uniform(-1e308, 1e308).abs() < 1e293);
        assert!((src.uniform(-1e308, 1e308) - 5e307).abs() < 1e293);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = rng_from_seed(Some(42));
        let mut b = rng_from_seed(Some(42));
        for _ in 0..10 {
            assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
        }
    }

    #[test]
    fn scripted_source_scales_and_cycles() {
        let mut src = ScriptedSource::new(vec![0.0, 0.5]);
        assert_eq!(src.uniform(-10.0, 10.0), -10.0);
        assert_eq!(src.uniform(-10.0, 10.0), 0.0);
        assert_eq!(src.below(100), 0);
        assert_eq!(src.below(100), 50);
    }

    #[test]
    fn scripted_source_clamps_to_half_open_range() {
        let mut src = ScriptedSource::new(vec![1.0]);
        assert!(src.uniform(0.0, 10.0) < 10.0);
        assert_eq!(src.below(10), 9);
        assert_eq!(ScriptedSource::new(vec![]).below(0), 0);
    }
}
