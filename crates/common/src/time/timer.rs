//! Cancellable recurring timers
//!
//! A [`TimerHandle`] stops its timer task the moment it is cancelled, so no
//! callback fires after `cancel` returns. [`TimerGuard`] ties that to a scope.

use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// A handle that cancels the timer it was returned with
#[derive(Debug, Clone, Default)]
pub struct TimerHandle {
    token: CancellationToken,
}

impl TimerHandle {
    fn new() -> Self {
        Self { token: CancellationToken::new() }
    }

    /// Cancel the timer; idempotent
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check if the timer has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wrap into a guard that cancels on drop
    pub fn guard(self) -> TimerGuard {
        TimerGuard { handle: Some(self) }
    }
}

/// Cancels the owned timer when dropped
#[derive(Debug, Default)]
pub struct TimerGuard {
    handle: Option<TimerHandle>,
}

impl TimerGuard {
    /// Guard that owns no timer
    pub fn empty() -> Self {
        Self { handle: None }
    }

    /// Whether a live timer is owned
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_cancelled())
    }

    /// Cancel now instead of on drop
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Create a recurring timer whose first tick fires after one `period`
///
/// Must be called from within a tokio runtime.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
///
/// use tasktime_common::time::timer::recurring;
///
/// #[tokio::main]
/// async fn main() {
///     let handle = recurring(Duration::from_secs(1), || {
///         println!("Tick!");
///     });
///
///     tokio::time::sleep(Duration::from_secs(5)).await;
///     handle.cancel();
/// }
/// ```
pub fn recurring<F>(period: Duration, callback: F) -> TimerHandle
where
    F: FnMut() + Send + 'static,
{
    spawn_ticker(Instant::now() + period, period, callback)
}

/// Create a recurring timer that also ticks immediately
pub fn recurring_now<F>(period: Duration, callback: F) -> TimerHandle
where
    F: FnMut() + Send + 'static,
{
    spawn_ticker(Instant::now(), period, callback)
}

fn spawn_ticker<F>(start: Instant, period: Duration, mut callback: F) -> TimerHandle
where
    F: FnMut() + Send + 'static,
{
    let handle = TimerHandle::new();
    let token = handle.token.clone();
    let period = period.max(Duration::from_millis(1));

    tokio::spawn(async move {
        let mut ticks = interval_at(start, period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                () = token.cancelled() => break,
                _ = ticks.tick() => {
                    if token.is_cancelled() {
                        break;
                    }
                    callback();
                }
            }
        }
        tracing::trace!("recurring timer stopped");
    });

    handle
}
