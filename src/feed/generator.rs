use crate::config::MarketConfig;
use crate::model::sample::Sample;

use super::random::RandomSource;

pub const DEFAULT_BASE_PRICE: f64 = 50_000.0;
pub const DEFAULT_WALK_STEP: f64 = 500.0;
pub const DEFAULT_MAX_VOLUME: u64 = 1_000_000;

/// Random-walk generator for the seed chart samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockDataGenerator {
    base_price: f64,
    walk_step: f64,
    max_volume: u64,
}

impl Default for MockDataGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PRICE, DEFAULT_WALK_STEP)
    }
}

impl MockDataGenerator {
    pub fn new(base_price: f64, walk_step: f64) -> Self {
        Self {
            base_price,
            walk_step: walk_step.abs(),
            max_volume: DEFAULT_MAX_VOLUME,
        }
    }

    pub fn from_config(market: &MarketConfig) -> Self {
        Self::new(market.base_price, market.walk_step).max_volume(market.max_volume)
    }

    pub fn max_volume(mut self, max_volume: u64) -> Self {
        self.max_volume = max_volume;
        self
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn walk_step(&self) -> f64 {
        self.walk_step
    }

    /// Produce `count` samples. Each step moves the running price by
    /// `uniform(-walk_step, +walk_step)` and draws an independent volume in
    /// `[0, max_volume)`.
    pub fn generate<R: RandomSource + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Sample> {
        let mut price = self.base_price;
        let mut samples = Vec::with_capacity(count);
        for step in 0..count {
            price += rng.uniform(-self.walk_step, self.walk_step);
            let volume = rng.below(self.max_volume);
            samples.push(Sample::new(step, price, volume));
        }
        tracing::debug!(
            count,
            base_price = self.base_price,
            last_price = price,
            "Generated mock samples"
        );
        samples
    }
}
