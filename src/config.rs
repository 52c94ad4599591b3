use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::AppError;
use crate::model::position::{mock_portfolio, PortfolioPosition};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub portfolio: PortfolioConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub symbol: String,
    pub symbols: Vec<String>,
    pub base_price: f64,
    pub initial_price: f64,
    pub sample_count: usize,
    pub walk_step: f64,
    pub max_volume: u64,
    pub tick_interval_ms: u64,
    pub tick_step: f64,
    pub seed: Option<u64>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            symbol: "BTCUSD".to_string(),
            symbols: Vec::new(),
            base_price: 50_000.0,
            initial_price: 50_245.32,
            sample_count: 30,
            walk_step: 500.0,
            max_volume: 1_000_000,
            tick_interval_ms: 2_000,
            tick_step: 50.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default = "mock_portfolio")]
    pub positions: Vec<PortfolioPosition>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            positions: mock_portfolio(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub refresh_rate_ms: u64,
    pub currency_prefix: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: 100,
            currency_prefix: "R$".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "trading-dashboard.log".to_string(),
        }
    }
}

/// Parse a duration string such as "250ms", "2s", "1m" or "1h" into milliseconds.
pub fn parse_interval_ms(s: &str) -> Result<u64> {
    let s = s.trim();
    let (num_str, unit_ms) = if let Some(n) = s.strip_suffix("ms") {
        (n, 1)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1_000)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60_000)
    } else if let Some(n) = s.strip_suffix('h') {
        (n, 3_600_000)
    } else {
        bail!(
            "invalid interval '{}': expected a suffix of ms/s/m/h, e.g. '2s'",
            s
        );
    };

    let n: u64 = num_str.parse().with_context(|| {
        format!(
            "invalid interval '{}': quantity must be a positive integer",
            s
        )
    })?;
    if n == 0 {
        bail!("invalid interval '{}': quantity must be > 0", s);
    }

    n.checked_mul(unit_ms)
        .with_context(|| format!("invalid interval '{}': value is too large", s))
}

impl MarketConfig {
    /// Primary symbol first, then the extra symbols, uppercased and de-duplicated.
    pub fn selectable_symbols(&self) -> Vec<String> {
        let mut out = Vec::new();
        if !self.symbol.trim().is_empty() {
            out.push(self.symbol.trim().to_ascii_uppercase());
        }
        for sym in &self.symbols {
            let s = sym.trim().to_ascii_uppercase();
            if !s.is_empty() && !out.iter().any(|v| v == &s) {
                out.push(s);
            }
        }
        out
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = std::env::var("DASHBOARD_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        if let Ok(raw) = std::env::var("DASHBOARD_TICK_INTERVAL") {
            config.market.tick_interval_ms =
                parse_interval_ms(&raw).context("DASHBOARD_TICK_INTERVAL is invalid")?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(s)?)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let market = &self.market;
        if market.sample_count == 0 {
            return Err(AppError::Config("market.sample_count must be > 0".into()));
        }
        if market.tick_interval_ms == 0 {
            return Err(AppError::Config(
                "market.tick_interval_ms must be > 0".into(),
            ));
        }
        if market.max_volume == 0 {
            return Err(AppError::Config("market.max_volume must be > 0".into()));
        }
        for (name, value) in [
            ("market.walk_step", market.walk_step),
            ("market.tick_step", market.tick_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Config(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [
            ("market.base_price", market.base_price),
            ("market.initial_price", market.initial_price),
        ] {
            if !value.is_finite() {
                return Err(AppError::Config(format!("{} must be finite", name)));
            }
        }
        if self.ui.refresh_rate_ms == 0 {
            return Err(AppError::Config("ui.refresh_rate_ms must be > 0".into()));
        }

        let mut seen = HashSet::new();
        for pos in &self.portfolio.positions {
            if pos.symbol.trim().is_empty() {
                return Err(AppError::Config(
                    "portfolio position with empty symbol".into(),
                ));
            }
            for (field, value) in [
                ("avg_price", pos.avg_price),
                ("current_price", pos.current_price),
                ("change_pct", pos.change_pct),
            ] {
                if !value.is_finite() {
                    return Err(AppError::Config(format!(
                        "portfolio position '{}': {} must be finite",
                        pos.symbol, field
                    )));
                }
            }
            if !seen.insert(pos.symbol.to_ascii_uppercase()) {
                return Err(AppError::Config(format!(
                    "duplicate portfolio symbol '{}'",
                    pos.symbol
                )));
            }
        }
        Ok(())
    }
}
