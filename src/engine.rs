use std::time::Duration;

use tracing::{debug, info, trace};

use crate::config::CarouselConfig;
use crate::controls::{Control, PointerEvent};
use crate::error::CarouselError;
use crate::item::Item;
use crate::state::{CarouselState, Direction};
use crate::timer::{FrameScheduler, Scheduler, TimerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    Timer,
    Next,
    Previous,
}

/// A committed cursor transition, delivered to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub key: u64,
    pub cause: ChangeCause,
}

pub type Observer = Box<dyn FnMut(&CarouselState, &StateChange)>;

/// Registration returned by [`CarouselEngine::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Auto-advancing carousel.
///
/// Owns the cursor state and the single auto-advance timer. Every cursor
/// change, timed or manual, cancels the pending timer and schedules a new
/// one with the full period before observers are told about it.
pub struct CarouselEngine<S: Scheduler = FrameScheduler> {
    state: CarouselState,
    config: CarouselConfig,
    scheduler: S,
    pending: Option<TimerHandle>,
    running: bool,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl CarouselEngine<FrameScheduler> {
    pub fn new(items: Vec<Item>, config: CarouselConfig) -> Result<Self, CarouselError> {
        Self::with_scheduler(items, config, FrameScheduler::new())
    }
}

impl<S: Scheduler> CarouselEngine<S> {
    pub fn with_scheduler(
        items: Vec<Item>,
        config: CarouselConfig,
        scheduler: S,
    ) -> Result<Self, CarouselError> {
        let config = config.validate()?;
        Ok(Self {
            state: CarouselState::new(items)?,
            config,
            scheduler,
            pending: None,
            running: false,
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Starts auto-advancing. Calling it on a running engine does nothing.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.reset_timer();
        info!(items = self.state.items().len(), interval = ?self.config.interval, "carousel started");
    }

    /// Cancels the pending timer. No firing can move the cursor afterwards.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        info!(cursor = self.state.cursor(), "carousel stopped");
    }

    pub fn next(&mut self) {
        self.commit(ChangeCause::Next);
    }

    pub fn previous(&mut self) {
        self.commit(ChangeCause::Previous);
    }

    /// Button handler: navigates and keeps the event from reaching the
    /// enclosing card.
    pub fn activate(&mut self, control: Control, event: &mut PointerEvent) {
        event.stop_propagation();
        match control {
            Control::Previous => self.previous(),
            Control::Next => self.next(),
        }
    }

    /// Feeds elapsed frame time to the scheduler and applies at most one
    /// automatic advance.
    pub fn update(&mut self, dt: Duration) {
        for handle in self.scheduler.advance(dt) {
            if self.pending == Some(handle) {
                self.pending = None;
                self.commit(ChangeCause::Timer);
            } else {
                trace!(?handle, "stale timer firing ignored");
            }
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CarouselState, &StateChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn commit(&mut self, cause: ChangeCause) {
        let from = self.state.cursor();
        match cause {
            ChangeCause::Previous => self.state.retreat(),
            ChangeCause::Next | ChangeCause::Timer => self.state.advance(),
        }
        self.reset_timer();

        let change = StateChange {
            from,
            to: self.state.cursor(),
            direction: self.state.direction(),
            key: self.state.key(),
            cause,
        };
        debug!(from, to = change.to, direction = ?change.direction, cause = ?cause, "carousel moved");

        for (_, observer) in self.observers.iter_mut() {
            observer(&self.state, &change);
        }
    }

    fn reset_timer(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        if self.running {
            self.pending = Some(self.scheduler.schedule(self.config.interval));
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn items(&self) -> &[Item] {
        self.state.items()
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn timer_active(&self) -> bool {
        self.pending.is_some()
    }
}

impl<S: Scheduler> Drop for CarouselEngine<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
