pub mod metrics;
pub mod position;
pub mod sample;
