use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

use trading_dashboard::event::AppEvent;
use trading_dashboard::feed::PriceTicker;
use trading_dashboard::model::position::mock_portfolio;
use trading_dashboard::ui::AppState;

fn drain(rx: &mut mpsc::Receiver<AppEvent>, state: &mut AppState, rng: &mut StdRng) {
    while let Ok(evt) = rx.try_recv() {
        if evt == AppEvent::PriceTick {
            state.on_price_tick(rng);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn ticks_drive_state_every_two_seconds_until_teardown() {
    let (tx, mut rx) = mpsc::channel(64);
    let mut rng = StdRng::seed_from_u64(21);
    let mut state = AppState::new("BTCUSD", 50_245.32, Vec::new(), mock_portfolio());
    let mut ticker = PriceTicker::spawn(Duration::from_millis(2_000), tx);
    assert_eq!(ticker.period(), Duration::from_millis(2_000));

    tokio::time::sleep(Duration::from_millis(10_500)).await;
    drain(&mut rx, &mut state, &mut rng);
    assert_eq!(state.tick_count, 5);
    assert!((state.current_price - 50_245.32).abs() <= 5.0 * 50.0);

    assert!(ticker.stop());
    tokio::time::sleep(Duration::from_secs(60)).await;
    drain(&mut rx, &mut state, &mut rng);
    assert_eq!(state.tick_count, 5);
    assert!(!ticker.stop());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_ticker_closes_the_event_stream() {
    let (tx, mut rx) = mpsc::channel(64);
    drop(PriceTicker::spawn(Duration::from_millis(2_000), tx));
    assert_eq!(rx.recv().await, None);
}
