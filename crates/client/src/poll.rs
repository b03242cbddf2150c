//! Fixed-interval polling on top of the typed client.
//!
//! The dashboard refreshes each panel every 5-30 seconds. [`spawn_poll`]
//! reproduces that model: fetch on every tick, publish successes into a
//! watch channel, and on failure keep the last good value until the next
//! tick -- observed staleness is bounded by the interval, and there is no
//! retry or backoff beyond the tick cadence itself.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// Spawn a polling task driving `fetch` every `interval`.
///
/// The first fetch fires immediately. The returned receiver starts at
/// `None` and thereafter holds the most recent successful value; failed
/// ticks leave it untouched. The task exits once every receiver is
/// dropped.
pub fn spawn_poll<T, F, Fut>(interval: Duration, mut fetch: F) -> watch::Receiver<Option<T>>
where
    T: Clone + Send + Sync + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = crate::error::ClientResult<T>> + Send,
{
    let (tx, rx) = watch::channel(None);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if tx.is_closed() {
                break;
            }

            match fetch().await {
                Ok(value) => {
                    let _ = tx.send(Some(value));
                }
                Err(err) => {
                    tracing::debug!(error = %err, "Poll tick failed, keeping last value");
                }
            }
        }
    });

    rx
}
