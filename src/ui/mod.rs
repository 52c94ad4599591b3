pub mod chart;
pub mod dashboard;
pub mod format;
pub mod portfolio_table;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::config::Config;
use crate::feed::{MockDataGenerator, RandomSource};
use crate::model::metrics::{compute_metrics, DerivedMetrics};
use crate::model::position::PortfolioPosition;
use crate::model::sample::{change_from_open_pct, total_volume, Sample};

use chart::{PriceChart, VolumeChart};
use dashboard::{HeaderBar, KeybindBar, StatCards};
use portfolio_table::PortfolioTable;

pub const DEFAULT_TICK_STEP: f64 = 50.0;

/// Dashboard state owned by the render loop.
pub struct AppState {
    pub symbols: Vec<String>,
    pub selected_symbol_index: usize,
    pub current_price: f64,
    pub samples: Vec<Sample>,
    pub positions: Vec<PortfolioPosition>,
    pub tick_step: f64,
    pub tick_count: u64,
    pub skipped_ticks: u64,
    pub paused: bool,
    pub currency_prefix: String,
}

impl AppState {
    pub fn new(
        symbol: &str,
        current_price: f64,
        samples: Vec<Sample>,
        positions: Vec<PortfolioPosition>,
    ) -> Self {
        Self {
            symbols: vec![symbol.to_string()],
            selected_symbol_index: 0,
            current_price,
            samples,
            positions,
            tick_step: DEFAULT_TICK_STEP,
            tick_count: 0,
            skipped_ticks: 0,
            paused: false,
            currency_prefix: "R$".to_string(),
        }
    }

    /// Seed the chart samples once and build the initial state from config.
    pub fn from_config<R: RandomSource + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let market = &config.market;
        let samples =
            MockDataGenerator::from_config(market).generate(market.sample_count, rng);
        let mut symbols = market.selectable_symbols();
        if symbols.is_empty() {
            symbols.push("BTCUSD".to_string());
        }
        Self {
            symbols,
            tick_step: market.tick_step,
            currency_prefix: config.ui.currency_prefix.clone(),
            ..Self::new(
                "",
                market.initial_price,
                samples,
                config.portfolio.positions.clone(),
            )
        }
    }

    pub fn selected_symbol(&self) -> &str {
        self.symbols
            .get(self.selected_symbol_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Nudge the current price by `uniform(-tick_step, +tick_step)`. No bounds are applied.
    pub fn tick<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let delta = rng.uniform(-self.tick_step, self.tick_step);
        self.current_price += delta;
        self.tick_count += 1;
        tracing::debug!(
            symbol = %self.selected_symbol(),
            price = self.current_price,
            delta,
            "Price tick"
        );
    }

    /// Handle a timer firing. Paused feeds count the tick as skipped.
    pub fn on_price_tick<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        if self.paused {
            self.skipped_ticks += 1;
            return;
        }
        self.tick(rng);
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            tracing::info!(price = self.current_price, "Price feed paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            tracing::info!(
                price = self.current_price,
                skipped = self.skipped_ticks,
                "Price feed resumed"
            );
        }
    }

    pub fn cycle_symbol(&mut self) {
        if self.symbols.is_empty() {
            return;
        }
        self.selected_symbol_index = (self.selected_symbol_index + 1) % self.symbols.len();
        tracing::info!(symbol = %self.selected_symbol(), "Selected symbol changed");
    }

    pub fn metrics(&self) -> DerivedMetrics {
        compute_metrics(&self.positions)
    }

    pub fn session_change_pct(&self) -> Option<f64> {
        change_from_open_pct(&self.samples, self.current_price)
    }
}

/// Table rows plus borders and header, saturating at `u16::MAX`.
pub fn portfolio_height(positions: usize) -> u16 {
    u16::try_from(positions).unwrap_or(u16::MAX).saturating_add(3)
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(4), // stat cards
            Constraint::Min(8),    // charts
            Constraint::Length(portfolio_height(state.positions.len())), // portfolio
            Constraint::Length(1), // keybinds
        ])
        .split(frame.area());

    frame.render_widget(
        HeaderBar {
            symbol: state.selected_symbol(),
            metrics: state.metrics(),
            currency_prefix: &state.currency_prefix,
            paused: state.paused,
            tick_count: state.tick_count,
        },
        outer[0],
    );

    frame.render_widget(
        StatCards {
            current_price: state.current_price,
            session_change_pct: state.session_change_pct(),
            total_volume: total_volume(&state.samples),
            open_positions: state.positions.len(),
        },
        outer[1],
    );

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(outer[2]);
    frame.render_widget(
        PriceChart::new(&state.samples, state.selected_symbol())
            .current_price(Some(state.current_price)),
        charts[0],
    );
    frame.render_widget(VolumeChart::new(&state.samples), charts[1]);

    frame.render_widget(
        PortfolioTable::new(&state.positions, &state.currency_prefix),
        outer[3],
    );

    frame.render_widget(KeybindBar, outer[4]);
}
