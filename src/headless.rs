use std::time::Duration;

use tracing::{debug, info};

use crate::constants::*;
use crate::engine::CarouselEngine;
use crate::presenter::Presenter;
use crate::timer::Scheduler;

/// Summary of an offline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub frames: u64,
    pub cursor: usize,
    pub key: u64,
}

/// Drives the carousel at a fixed frame step, without a window, for
/// `duration` of simulated time.
pub fn run<S: Scheduler>(engine: &mut CarouselEngine<S>, duration: Duration) -> RunReport {
    let mut presenter = Presenter::attach(engine);
    let logger = engine.subscribe(|state, change| {
        let item = state.current();
        info!(
            cursor = change.to,
            direction = ?change.direction,
            cause = ?change.cause,
            title = %item.title,
            category = %item.category,
            "now showing"
        );
    });

    engine.start();
    let frame = Duration::from_secs_f32(FRAME_TIME);
    let frames = (duration.as_secs_f64() / frame.as_secs_f64()).ceil() as u64;
    for _ in 0..frames {
        engine.update(frame);
        presenter.update(FRAME_TIME);
    }
    engine.stop();
    engine.unsubscribe(logger);

    let transition = presenter.transition();
    debug!(phase = ?transition.phase(), visible = transition.visible_index(), "final frame");
    presenter.detach(engine);
    RunReport {
        frames,
        cursor: engine.cursor(),
        key: engine.state().key(),
    }
}
