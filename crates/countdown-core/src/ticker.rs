//! Periodic countdown refresh owned by the caller.
//!
//! A [`Ticker`] is the only stateful piece: a tokio task sampling the clock,
//! building a [`CountdownSnapshot`] and handing it to the host. It stops on
//! its own once the countdown finishes. Dropping the handle aborts the task,
//! so no callback ever outlives its owner.

use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};

use crate::countdown::{Countdown, CountdownSnapshot};
use crate::storage::TickerConfig;
use crate::time::Clock;

pub struct Ticker {
    handle: Option<JoinHandle<()>>,
    cancel: Option<oneshot::Sender<()>>,
}

impl Ticker {
    /// Start ticking immediately; must be called inside a tokio runtime.
    ///
    /// The interval adapts to the unit on display (see
    /// [`TickerConfig::interval_for`]).
    pub fn spawn<C, F>(countdown: Countdown, clock: C, intervals: TickerConfig, mut on_tick: F) -> Self
    where
        C: Clock + 'static,
        F: FnMut(&CountdownSnapshot) + Send + 'static,
    {
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            tracing::debug!(event = %countdown.data().event_name, "ticker started");
            loop {
                let snapshot = countdown.snapshot(clock.now());
                on_tick(&snapshot);
                if snapshot.finished {
                    tracing::debug!("countdown finished, ticker stopping");
                    break;
                }

                let wait = intervals.interval_for(snapshot.display.unit);
                tokio::select! {
                    _ = tokio::time::sleep(wait) => {}
                    _ = &mut cancel_rx => {
                        tracing::debug!("ticker cancelled");
                        break;
                    }
                }
            }
        });

        Self {
            handle: Some(handle),
            cancel: Some(cancel_tx),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Stop ticking and wait for the task to wind down.
    pub async fn cancel(mut self) -> Result<(), JoinError> {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
        self.wait().await
    }

    /// Wait until the countdown finishes.
    pub async fn join(mut self) -> Result<(), JoinError> {
        self.wait().await
    }

    async fn wait(&mut self) -> Result<(), JoinError> {
        match self.handle.take() {
            Some(handle) => handle.await,
            None => Ok(()),
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::{CountdownData, DisplaySettings};
    use crate::time::{ManualClock, Timestamp};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::mpsc;

    const NOW: Timestamp = Timestamp::from_millis(1_700_000_000_000);

    fn countdown_until(target: Timestamp) -> Countdown {
        Countdown::new(
            CountdownData {
                event_name: "Launch".into(),
                target,
            },
            DisplaySettings::default(),
        )
    }

    #[tokio::test]
    async fn past_target_ticks_once_and_stops() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let ticker = Ticker::spawn(
            countdown_until(NOW.plus_millis(-1_000)),
            ManualClock::new(NOW),
            TickerConfig::default(),
            move |snap| {
                assert!(snap.finished);
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );
        ticker.join().await.unwrap();
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_once_clock_reaches_target() {
        let clock = ManualClock::new(NOW);
        let target = NOW.plus_millis(90_000);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::spawn(
            countdown_until(target),
            clock.clone(),
            TickerConfig::default(),
            move |snap| {
                let _ = tx.send(snap.clone());
            },
        );

        for _ in 0..3 {
            let snap = rx.recv().await.unwrap();
            assert!(!snap.finished);
        }
        clock.set(target);
        ticker.join().await.unwrap();

        let mut last = None;
        while let Some(snap) = rx.recv().await {
            last = Some(snap);
        }
        assert!(last.unwrap().finished);
    }

    #[tokio::test]
    async fn cancel_stops_a_long_countdown() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let ticker = Ticker::spawn(
            countdown_until(NOW.plus_millis(10 * 86_400_000)),
            ManualClock::new(NOW),
            TickerConfig::default(),
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );
        ticker.cancel().await.unwrap();
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_tears_down_the_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::spawn(
            countdown_until(NOW.plus_millis(3_600_000 * 5)),
            ManualClock::new(NOW),
            TickerConfig::default(),
            move |snap| {
                let _ = tx.send(snap.finished);
            },
        );
        assert_eq!(rx.recv().await, Some(false));
        assert!(!ticker.is_finished());
        drop(ticker);

        // The sender lives in the task; the channel closes once it is gone.
        while rx.recv().await.is_some() {}
    }
}
