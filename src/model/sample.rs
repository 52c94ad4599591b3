/// One synthetic price/volume observation on the simulated timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub time_label: String,
    pub price: f64,
    pub volume: u64,
}

impl Sample {
    pub fn new(step: usize, price: f64, volume: u64) -> Self {
        Self {
            time_label: format!("{}:00", step),
            price,
            volume,
        }
    }
}

/// Percent move from the first sample price to `price`. `None` when the first price is zero.
pub fn change_from_open_pct(samples: &[Sample], price: f64) -> Option<f64> {
    let open = samples.first()?.price;
    let pct = (price - open) / open * 100.0;
    pct.is_finite().then_some(pct)
}

pub fn total_volume(samples: &[Sample]) -> u64 {
    samples
        .iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.volume))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_label_uses_step_index() {
        assert_eq!(Sample::new(0, 1.0, 0).time_label, "0:00");
        assert_eq!(Sample::new(29, 1.0, 0).time_label, "29:00");
    }

    #[test]
    fn change_from_open_handles_empty_and_zero_open() {
        assert_eq!(change_from_open_pct(&[], 10.0), None);
        let zero = [Sample::new(0, 0.0, 1)];
        assert_eq!(change_from_open_pct(&zero, 10.0), None);

        let samples = [Sample::new(0, 100.0, 1), Sample::new(1, 120.0, 1)];
        let pct = change_from_open_pct(&samples, 110.0).unwrap();
        assert!((pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn total_volume_sums_all_samples() {
        let samples = [
            Sample::new(0, 1.0, 10),
            Sample::new(1, 1.0, 20),
            Sample::new(2, 1.0, 30),
        ];
        assert_eq!(total_volume(&samples), 60);
    }
}
