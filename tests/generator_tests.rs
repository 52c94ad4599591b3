use rand::rngs::StdRng;
use rand::SeedableRng;

use trading_dashboard::feed::{rng_from_seed, MockDataGenerator, ScriptedSource};

#[test]
fn generates_requested_count_in_chronological_order() {
    let mut rng = StdRng::seed_from_u64(1);
    let samples = MockDataGenerator::default().generate(30, &mut rng);
    assert_eq!(samples.len(), 30);
    for (i, s) in samples.iter().enumerate() {
        assert_eq!(s.time_label, format!("{}:00", i));
    }
}

#[test]
fn prices_stay_within_cumulative_walk_bound() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let generator = MockDataGenerator::default();
        let samples = generator.generate(30, &mut rng);
        for (i, s) in samples.iter().enumerate() {
            let bound = generator.walk_step() * (i + 1) as f64;
            assert!(
                (s.price - generator.base_price()).abs() <= bound + 1e-6,
                "seed {seed} step {i}: price {} outside ±{bound}",
                s.price
            );
        }
    }
}

#[test]
fn consecutive_steps_move_by_at_most_walk_step() {
    let mut rng = StdRng::seed_from_u64(9);
    let samples = MockDataGenerator::new(100.0, 5.0).generate(200, &mut rng);
    for pair in samples.windows(2) {
        assert!((pair[1].price - pair[0].price).abs() <= 5.0);
    }
}

#[test]
fn volumes_stay_below_max() {
    let mut rng = StdRng::seed_from_u64(3);
    let samples = MockDataGenerator::default().generate(500, &mut rng);
    assert!(samples.iter().all(|s| s.volume < 1_000_000));

    let small = MockDataGenerator::default()
        .max_volume(10)
        .generate(100, &mut rng);
    assert!(small.iter().all(|s| s.volume < 10));
}

#[test]
fn seeded_runs_are_reproducible() {
    let generator = MockDataGenerator::default();
    let a = generator.generate(30, &mut rng_from_seed(Some(42)));
    let b = generator.generate(30, &mut rng_from_seed(Some(42)));
    assert_eq!(a, b);
}

#[test]
fn midpoint_draws_keep_price_flat() {
    let mut src = ScriptedSource::new(vec![0.5]);
    let samples = MockDataGenerator::default().generate(10, &mut src);
    assert!(samples.iter().all(|s| (s.price - 50_000.0).abs() < 1e-9));
    assert!(samples.iter().all(|s| s.volume == 500_000));
}
