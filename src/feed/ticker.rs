use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::event::AppEvent;

/// Owned handle to the recurring price timer.
///
/// The timer task emits [`AppEvent::PriceTick`] every `period` until the
/// handle is stopped or dropped. Cancellation happens at most once.
#[derive(Debug)]
pub struct PriceTicker {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl PriceTicker {
    /// Must be called from within a tokio runtime.
    pub fn spawn(period: Duration, tx: mpsc::Sender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(AppEvent::PriceTick).await.is_err() {
                    tracing::info!("Event channel closed, price ticker exiting");
                    break;
                }
            }
        });
        tracing::info!(period_ms = period.as_millis() as u64, "Price ticker started");
        Self {
            period,
            handle: Some(handle),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the timer. Returns `true` only on the call that actually cancelled it.
    pub fn stop(&mut self) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };
        handle.abort();
        tracing::info!("Price ticker stopped");
        true
    }
}

impl Drop for PriceTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
