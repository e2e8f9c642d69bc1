use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// A pending timer task. Dropping the guard aborts the task, so a timer can
/// never fire into a view that has already been torn down.
#[derive(Debug)]
pub struct TimerGuard {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl TimerGuard {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-shot timers report finished once their message has been sent.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Explicit form of dropping the guard.
    pub fn cancel(self) {}
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            tracing::trace!(timer = self.name, "cancelling timer");
        }
        self.handle.abort();
    }
}

/// Send `msg` once after `delay`.
pub fn after<M>(name: &'static str, delay: Duration, tx: UnboundedSender<M>, msg: M) -> TimerGuard
where
    M: Send + 'static,
{
    tracing::trace!(timer = name, delay_ms = delay.as_millis() as u64, "arming one-shot timer");
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // Receiver gone means the page was torn down; nothing to deliver to.
        let _ = tx.send(msg);
    });

    TimerGuard { name, handle }
}

/// Send a copy of `msg` every `period`, first tick one period from now.
/// The task ends by itself once the receiving side is dropped.
pub fn every<M>(name: &'static str, period: Duration, tx: UnboundedSender<M>, msg: M) -> TimerGuard
where
    M: Clone + Send + 'static,
{
    tracing::trace!(timer = name, period_ms = period.as_millis() as u64, "arming interval timer");
    let period = period.max(Duration::from_millis(1));
    let handle = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if tx.send(msg.clone()).is_err() {
                break;
            }
        }
    });

    TimerGuard { name, handle }
}
