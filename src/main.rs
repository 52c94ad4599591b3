use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event;
use tokio::sync::mpsc;

use trading_dashboard::config::Config;
use trading_dashboard::event::AppEvent;
use trading_dashboard::feed::{rng_from_seed, PriceTicker};
use trading_dashboard::input::{parse_main_command, UiCommand};
use trading_dashboard::ui::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            eprintln!("Set DASHBOARD_CONFIG or create config/default.toml");
            std::process::exit(1);
        }
    };

    // Log to file so it doesn't interfere with the TUI
    let log_file = std::fs::File::create(&config.logging.file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(&config.logging.level)
            }),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .json()
        .init();

    tracing::info!(
        symbol = %config.market.symbol,
        samples = config.market.sample_count,
        tick_interval_ms = config.market.tick_interval_ms,
        seed = ?config.market.seed,
        started_at = %chrono::Local::now().to_rfc3339(),
        "Starting trading-dashboard"
    );

    let mut rng = rng_from_seed(config.market.seed);
    let mut app_state = AppState::from_config(&config, &mut rng);
    let metrics = app_state.metrics();
    tracing::info!(
        positions = app_state.positions.len(),
        total_value = metrics.total_value,
        total_pnl = metrics.total_pnl,
        pnl_pct = ?metrics.pnl_pct,
        "Portfolio loaded"
    );

    let (app_tx, mut app_rx) = mpsc::channel::<AppEvent>(64);
    let mut ticker = PriceTicker::spawn(
        Duration::from_millis(config.market.tick_interval_ms),
        app_tx.clone(),
    );

    let ctrl_c_tx = app_tx.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Ctrl+C received");
        let _ = ctrl_c_tx.send(AppEvent::Shutdown).await;
    });
    drop(app_tx);

    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, &mut app_state, &mut app_rx, &mut rng, &config);
    ticker.stop();
    ratatui::restore();

    match &result {
        Ok(()) => tracing::info!(ticks = app_state.tick_count, "Shutdown complete"),
        Err(e) => tracing::error!(error = %e, "Dashboard loop failed"),
    }
    println!("Goodbye! Check {} for details.", config.logging.file);
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app_state: &mut AppState,
    app_rx: &mut mpsc::Receiver<AppEvent>,
    rng: &mut rand::rngs::StdRng,
    config: &Config,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, &*app_state))?;

        // Handle input (non-blocking with timeout)
        if crossterm::event::poll(Duration::from_millis(config.ui.refresh_rate_ms))? {
            if let Event::Key(key) = crossterm::event::read()? {
                match parse_main_command(&key) {
                    Some(UiCommand::Quit) => {
                        tracing::info!("User quit");
                        return Ok(());
                    }
                    Some(UiCommand::Pause) => app_state.pause(),
                    Some(UiCommand::Resume) => app_state.resume(),
                    Some(UiCommand::CycleSymbol) => app_state.cycle_symbol(),
                    None => {}
                }
            }
        }

        // Drain timer events
        while let Ok(evt) = app_rx.try_recv() {
            match evt {
                AppEvent::PriceTick => app_state.on_price_tick(rng),
                AppEvent::Shutdown => return Ok(()),
            }
        }
    }
}
