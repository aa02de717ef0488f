use std::path::Path;

use raylib::prelude::*;
use tracing::warn;

use crate::constants::*;
use crate::controls::{ControlLayout, Rect};
use crate::item::Item;
use crate::texture_loader::load_texture_with_exif_rotation;
use crate::transition::Pose;

const ACCENT: Color = Color::new(176, 137, 84, 255);
const PLACEHOLDER: Color = Color::new(58, 52, 46, 255);
const TITLE_SIZE: i32 = 40;
const BODY_SIZE: i32 = 22;

fn with_alpha(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8)
}

fn to_rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(rect.x, rect.y, rect.width, rect.height)
}

/// Shrinks `rect` around its centre and shifts it horizontally.
fn posed(rect: Rect, offset_x: f32, scale: f32) -> Rect {
    let width = rect.width * scale;
    let height = rect.height * scale;
    let (cx, cy) = rect.center();
    Rect::new(cx - width * 0.5 + offset_x, cy - height * 0.5, width, height)
}

/// Greedy word wrap by character count.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Drawable project card built from an [`Item`].
pub struct Card {
    texture: Option<Texture2D>,
    title: String,
    description: String,
}

impl Card {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, item: &Item) -> Self {
        let texture = match load_texture_with_exif_rotation(rl, thread, Path::new(&item.image)) {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!(id = item.id, error = %e, "cover image unavailable, using placeholder");
                None
            }
        };
        Self {
            texture,
            title: item.title.clone(),
            description: item.description.clone(),
        }
    }

    /// Image cropped to fill `rect`, keeping the texture's aspect ratio.
    fn draw_cover(&self, d: &mut RaylibDrawHandle, rect: Rect, opacity: f32) {
        let Some(texture) = &self.texture else {
            d.draw_rectangle_rec(to_rectangle(rect), with_alpha(PLACEHOLDER, opacity));
            return;
        };

        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;
        let scale = (rect.width / tex_width).max(rect.height / tex_height);
        let src_width = rect.width / scale;
        let src_height = rect.height / scale;
        let source = Rectangle::new(
            (tex_width - src_width) * 0.5,
            (tex_height - src_height) * 0.5,
            src_width,
            src_height,
        );

        d.draw_texture_pro(
            texture,
            source,
            to_rectangle(rect),
            Vector2::new(0.0, 0.0),
            0.0,
            with_alpha(Color::WHITE, opacity),
        );
    }

    pub fn draw_preview(&self, d: &mut RaylibDrawHandle, slot: Rect, outward: f32) {
        let shift = outward * slot.width * NEIGHBOR_SHIFT;
        self.draw_cover(d, posed(slot, shift, NEIGHBOR_SCALE), NEIGHBOR_OPACITY);
    }

    pub fn draw_active(&self, d: &mut RaylibDrawHandle, slot: Rect, pose: Pose, controls: &ControlLayout) {
        let rect = posed(slot, pose.offset_x, pose.scale);
        self.draw_cover(d, rect, pose.opacity);

        // Darken the bottom half so the caption stays readable
        let half = rect.height * 0.5;
        d.draw_rectangle_gradient_v(
            rect.x as i32,
            (rect.y + half) as i32,
            rect.width as i32,
            half as i32,
            with_alpha(Color::BLACK, 0.0),
            with_alpha(Color::BLACK, 0.8 * pose.opacity),
        );

        let padding = 48.0;
        let max_chars = ((rect.width * 0.85 - padding) / (BODY_SIZE as f32 * 0.55)).max(10.0) as usize;
        let body = wrap(&self.description, max_chars);
        let mut y = rect.y + rect.height - padding - body.len() as f32 * (BODY_SIZE as f32 * 1.4);
        for line in body.iter() {
            d.draw_text(line, (rect.x + padding) as i32, y as i32, BODY_SIZE, with_alpha(Color::WHITE, 0.8 * pose.opacity));
            y += BODY_SIZE as f32 * 1.4;
        }
        let title_y = rect.y + rect.height - padding - body.len() as f32 * (BODY_SIZE as f32 * 1.4) - TITLE_SIZE as f32 * 1.3;
        d.draw_text(&self.title, (rect.x + padding) as i32, title_y as i32, TITLE_SIZE, with_alpha(Color::WHITE, pose.opacity));

        // Buttons stay where their hit areas are, independent of the pose
        for (button, glyph) in [(controls.previous, "<"), (controls.next, ">")] {
            let (cx, cy) = button.center();
            d.draw_circle(cx as i32, cy as i32, button.width * 0.5, ACCENT);
            d.draw_text(glyph, (cx - 8.0) as i32, (cy - 16.0) as i32, 32, Color::WHITE);
        }
    }
}

/// Active slot and neighbour slots for a window of the given size.
pub fn slots(screen_width: f32, screen_height: f32) -> (Rect, Rect, Rect) {
    let height = screen_height * 0.8;
    let y = (screen_height - height) * 0.5;
    let active_width = screen_width * 0.5;
    let active = Rect::new((screen_width - active_width) * 0.5, y, active_width, height);

    let side_width = screen_width * 0.3;
    let side_height = height * 0.8;
    let side_y = (screen_height - side_height) * 0.5;
    let previous = Rect::new(0.0, side_y, side_width, side_height);
    let next = Rect::new(screen_width - side_width, side_y, side_width, side_height);
    (previous, active, next)
}
