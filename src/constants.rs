pub const RENDER_WIDTH: i32 = 1920;              // Width of the window render area
pub const RENDER_HEIGHT: i32 = 1080;             // Height of the window render area
pub const FPS: u32 = 60;                         // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32;    // Time per frame (seconds)

pub const AUTO_ADVANCE_MS: u64 = 5_000;          // Period between automatic advances
pub const TRANSITION_MS: u64 = 600;              // Duration of each exit/enter phase

pub const SLIDE_OFFSET: f32 = 50.0;              // Horizontal travel of entering/exiting cards (pixels)
pub const HIDDEN_SCALE: f32 = 0.95;              // Scale of a card at the start of enter / end of exit
pub const NEIGHBOR_OPACITY: f32 = 0.2;           // Opacity of the previous/next previews
pub const NEIGHBOR_SCALE: f32 = 0.85;            // Scale of the previous/next previews
pub const NEIGHBOR_SHIFT: f32 = 0.15;            // Outward shift of previews, fraction of their width

pub const ALL_CATEGORIES: &str = "All";          // Filter selection that matches every item
pub const CATEGORIES: [&str; 4] = [ALL_CATEGORIES, "Residential", "Commercial", "Renovation"];
