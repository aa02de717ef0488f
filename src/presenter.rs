use std::sync::mpsc::{self, Receiver};

use crate::engine::{CarouselEngine, StateChange, SubscriptionId};
use crate::timer::Scheduler;
use crate::transition::Transition;

/// Rendering-side view of the carousel: collects committed changes from the
/// engine and keeps the active slot's transition in step with them.
#[derive(Debug)]
pub struct Presenter {
    transition: Transition,
    changes: Receiver<StateChange>,
    subscription: SubscriptionId,
}

impl Presenter {
    pub fn attach<S: Scheduler>(engine: &mut CarouselEngine<S>) -> Self {
        let (sender, changes) = mpsc::channel();
        let subscription = engine.subscribe(move |_, change| {
            // The presenter may be gone before the engine; nothing to redraw then.
            let _ = sender.send(*change);
        });
        let state = engine.state();
        let duration = engine.config().transition.as_secs_f32();
        Self {
            transition: Transition::settled(state.cursor(), state.key(), duration),
            changes,
            subscription,
        }
    }

    /// Removes the presenter's observer from `engine`.
    pub fn detach<S: Scheduler>(self, engine: &mut CarouselEngine<S>) {
        engine.unsubscribe(self.subscription);
    }

    /// Applies pending changes, newest last, then advances the animation.
    pub fn update(&mut self, dt: f32) {
        while let Ok(change) = self.changes.try_recv() {
            self.transition = self.transition.supersede(change.to, change.direction, change.key);
        }
        self.transition.update(dt);
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarouselConfig;
    use crate::item::Item;
    use crate::state::Direction;
    use crate::transition::TransitionPhase;

    fn engine() -> CarouselEngine {
        let items = (0..4).map(|i| Item::new(i, "Project", "", "", "")).collect();
        let mut engine = CarouselEngine::new(items, CarouselConfig::default()).unwrap();
        engine.start();
        engine
    }

    #[test]
    fn starts_settled_on_cursor() {
        let mut engine = engine();
        let presenter = Presenter::attach(&mut engine);
        assert_eq!(presenter.transition().visible_index(), 0);
        assert!(!presenter.transition().is_animating());
    }

    #[test]
    fn rapid_changes_settle_on_latest_cursor() {
        let mut engine = engine();
        let mut presenter = Presenter::attach(&mut engine);

        engine.next();
        engine.next();
        engine.previous();
        presenter.update(0.0);

        let transition = presenter.transition();
        assert_eq!(transition.phase(), TransitionPhase::Exiting);
        assert_eq!(transition.visible_index(), 0);
        assert_eq!(transition.incoming(), engine.cursor());
        assert_eq!(transition.direction(), Direction::Backward);
        assert_eq!(transition.key(), engine.state().key());

        for _ in 0..120 {
            presenter.update(1.0 / 60.0);
        }
        assert!(!presenter.transition().is_animating());
        assert_eq!(presenter.transition().visible_index(), 1);
    }

    #[test]
    fn detach_removes_the_observer() {
        let mut engine = engine();
        let presenter = Presenter::attach(&mut engine);
        assert_eq!(engine.observer_count(), 1);
        presenter.detach(&mut engine);
        assert_eq!(engine.observer_count(), 0);
        engine.next();
    }
}
