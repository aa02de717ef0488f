use std::time::Duration;

use tracing::trace;

/// Handle of a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// One-shot timer source.
///
/// Cancelling a handle that already fired, was already cancelled or was
/// never issued by this scheduler must be a no-op.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
    /// Moves time forward and returns the handles that fired, in the order
    /// they were scheduled. Each handle fires at most once.
    fn advance(&mut self, elapsed: Duration) -> Vec<TimerHandle>;
    fn pending(&self) -> usize;
}

/// Scheduler driven by frame deltas.
///
/// A timer whose remaining time runs out during an `advance` call fires
/// exactly once, however long the delta was. The overshoot is dropped.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    timers: Vec<(TimerHandle, Duration)>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self, handle: TimerHandle) -> Option<Duration> {
        self.timers
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, remaining)| *remaining)
    }
}

impl Scheduler for FrameScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.push((handle, delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let before = self.timers.len();
        self.timers.retain(|(h, _)| *h != handle);
        if self.timers.len() == before {
            trace!(?handle, "cancel of inactive timer ignored");
        }
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<TimerHandle> {
        let mut fired = Vec::new();
        self.timers.retain_mut(|(handle, remaining)| {
            *remaining = remaining.saturating_sub(elapsed);
            if remaining.is_zero() {
                fired.push(*handle);
                false
            } else {
                true
            }
        });
        fired
    }

    fn pending(&self) -> usize {
        self.timers.len()
    }
}
