use crate::engine::CarouselEngine;
use crate::timer::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
}

/// Pointer press in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    propagation_stopped: bool,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, propagation_stopped: false }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

const BUTTON_SIZE: f32 = 56.0;
const BUTTON_INSET: f32 = 32.0;

/// Hit areas of the active card: the card itself and its two arrow buttons,
/// which sit inside it, vertically centred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlLayout {
    pub card: Rect,
    pub previous: Rect,
    pub next: Rect,
}

impl ControlLayout {
    pub fn for_card(card: Rect) -> Self {
        let y = card.y + (card.height - BUTTON_SIZE) * 0.5;
        Self {
            card,
            previous: Rect::new(card.x + BUTTON_INSET, y, BUTTON_SIZE, BUTTON_SIZE),
            next: Rect::new(
                card.x + card.width - BUTTON_INSET - BUTTON_SIZE,
                y,
                BUTTON_SIZE,
                BUTTON_SIZE,
            ),
        }
    }

    pub fn hit(&self, x: f32, y: f32) -> Option<Control> {
        if self.previous.contains(x, y) {
            Some(Control::Previous)
        } else if self.next.contains(x, y) {
            Some(Control::Next)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Navigated(Control),
    /// The card region was pressed outside the buttons; carries the item id.
    Opened(u32),
    Ignored,
}

/// Routes a press to a button first, then to the enclosing card if the
/// button did not stop the event.
pub fn dispatch_pointer<S: Scheduler>(
    engine: &mut CarouselEngine<S>,
    layout: &ControlLayout,
    event: &mut PointerEvent,
) -> PointerOutcome {
    if let Some(control) = layout.hit(event.x, event.y) {
        engine.activate(control, event);
        if event.is_propagation_stopped() {
            return PointerOutcome::Navigated(control);
        }
    }
    if layout.card.contains(event.x, event.y) {
        return PointerOutcome::Opened(engine.state().current().id);
    }
    PointerOutcome::Ignored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarouselConfig;
    use crate::item::Item;
    use crate::state::Direction;

    fn engine() -> CarouselEngine {
        let items = (0..3)
            .map(|i| Item::new(i + 10, "Project", "", "", "Residential"))
            .collect();
        let mut engine = CarouselEngine::new(items, CarouselConfig::default()).unwrap();
        engine.start();
        engine
    }

    fn layout() -> ControlLayout {
        ControlLayout::for_card(Rect::new(100.0, 100.0, 800.0, 600.0))
    }

    #[test]
    fn buttons_sit_inside_the_card() {
        let layout = layout();
        let (px, py) = layout.previous.center();
        let (nx, ny) = layout.next.center();
        assert!(layout.card.contains(px, py));
        assert!(layout.card.contains(nx, ny));
        assert_eq!(py, 400.0);
        assert!(px < nx);
    }

    #[test]
    fn button_press_does_not_open_the_card() {
        let mut engine = engine();
        let layout = layout();
        let (x, y) = layout.next.center();
        let mut event = PointerEvent::new(x, y);

        let outcome = dispatch_pointer(&mut engine, &layout, &mut event);
        assert_eq!(outcome, PointerOutcome::Navigated(Control::Next));
        assert!(event.is_propagation_stopped());
        assert_eq!(engine.cursor(), 1);
    }

    #[test]
    fn previous_button_retreats() {
        let mut engine = engine();
        let layout = layout();
        let (x, y) = layout.previous.center();
        let outcome = dispatch_pointer(&mut engine, &layout, &mut PointerEvent::new(x, y));
        assert_eq!(outcome, PointerOutcome::Navigated(Control::Previous));
        assert_eq!(engine.cursor(), 2);
        assert_eq!(engine.direction(), Direction::Backward);
    }

    #[test]
    fn card_press_opens_current_item() {
        let mut engine = engine();
        let layout = layout();
        let mut event = PointerEvent::new(500.0, 650.0);
        assert_eq!(dispatch_pointer(&mut engine, &layout, &mut event), PointerOutcome::Opened(10));
        assert_eq!(engine.cursor(), 0);
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut engine = engine();
        let mut event = PointerEvent::new(10.0, 10.0);
        assert_eq!(dispatch_pointer(&mut engine, &layout(), &mut event), PointerOutcome::Ignored);
    }
}
