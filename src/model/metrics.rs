use super::position::PortfolioPosition;

/// Portfolio-level totals derived from a position list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub total_value: f64,
    pub total_pnl: f64,
    /// `None` when the cost basis (`total_value - total_pnl`) is zero and the ratio is undefined.
    pub pnl_pct: Option<f64>,
}

impl DerivedMetrics {
    pub fn is_profitable(&self) -> bool {
        self.total_pnl >= 0.0
    }
}

pub fn compute_metrics(positions: &[PortfolioPosition]) -> DerivedMetrics {
    let total_value: f64 = positions.iter().map(PortfolioPosition::market_value).sum();
    let total_pnl: f64 = positions.iter().map(PortfolioPosition::pnl).sum();
    let pct = total_pnl / (total_value - total_pnl) * 100.0;
    DerivedMetrics {
        total_value,
        total_pnl,
        pnl_pct: pct.is_finite().then_some(pct),
    }
}
