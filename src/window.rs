use std::time::Duration;

use raylib::prelude::*;
use tracing::info;

use crate::card::{Card, slots};
use crate::constants::*;
use crate::controls::{ControlLayout, PointerEvent, PointerOutcome, dispatch_pointer};
use crate::engine::CarouselEngine;
use crate::presenter::Presenter;

/// Opens a window and runs the carousel until it is closed.
pub fn run(engine: &mut CarouselEngine) {
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Transformations")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let cards: Vec<Card> = engine
        .items()
        .iter()
        .map(|item| Card::load(&mut rl, &thread, item))
        .collect();

    let mut presenter = Presenter::attach(engine);
    engine.start();

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let (previous_slot, active_slot, next_slot) =
            slots(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let controls = ControlLayout::for_card(active_slot);

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let position = rl.get_mouse_position();
            let mut event = PointerEvent::new(position.x, position.y);
            if let PointerOutcome::Opened(id) = dispatch_pointer(engine, &controls, &mut event) {
                info!(id, "project opened");
            }
        }

        engine.update(Duration::from_secs_f32(dt.max(0.0)));
        presenter.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::WHITE);

        let state = engine.state();
        cards[state.previous_index()].draw_preview(&mut d, previous_slot, -1.0);
        cards[state.next_index()].draw_preview(&mut d, next_slot, 1.0);

        let transition = presenter.transition();
        cards[transition.visible_index()].draw_active(
            &mut d,
            active_slot,
            transition.visible_pose(),
            &controls,
        );
    }

    presenter.detach(engine);
    engine.stop();
}
