pub mod generator;
pub mod random;
pub mod ticker;

pub use generator::MockDataGenerator;
pub use random::{rng_from_seed, RandomSource, ScriptedSource};
pub use ticker::PriceTicker;
