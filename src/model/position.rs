use serde::Deserialize;

/// A portfolio holding with its cost basis and last known price.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioPosition {
    pub symbol: String,
    pub shares: u64,
    pub avg_price: f64,
    pub current_price: f64,
    #[serde(default)]
    pub change_pct: f64,
}

impl PortfolioPosition {
    pub fn new(
        symbol: &str,
        shares: u64,
        avg_price: f64,
        current_price: f64,
        change_pct: f64,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            shares,
            avg_price,
            current_price,
            change_pct,
        }
    }

    pub fn market_value(&self) -> f64 {
        self.shares as f64 * self.current_price
    }

    pub fn cost_basis(&self) -> f64 {
        self.shares as f64 * self.avg_price
    }

    pub fn pnl(&self) -> f64 {
        self.shares as f64 * (self.current_price - self.avg_price)
    }

    pub fn is_gaining(&self) -> bool {
        self.change_pct >= 0.0
    }
}

/// The static portfolio shown when no positions are configured.
pub fn mock_portfolio() -> Vec<PortfolioPosition> {
    vec![
        PortfolioPosition::new("PETR4", 1000, 35.20, 36.50, 3.69),
        PortfolioPosition::new("VALE3", 500, 68.40, 70.20, 2.63),
        PortfolioPosition::new("ITUB4", 2000, 28.90, 28.50, -1.38),
        PortfolioPosition::new("BBDC4", 1500, 15.60, 16.10, 3.21),
    ]
}
