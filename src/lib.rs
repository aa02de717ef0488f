//! Rotating project showcase.
//!
//! A [`CarouselEngine`] cycles through a fixed list of [`Item`]s on a timer,
//! accepts manual next/previous navigation that restarts the timer, and
//! tells subscribers about every committed move so a front end can run
//! direction-aware transitions. [`CategoryFilter`] is the category selection
//! used by the portfolio grid.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod controls;
pub mod engine;
pub mod error;
pub mod filter;
pub mod headless;
pub mod item;
pub mod presenter;
pub mod state;
pub mod timer;
pub mod transition;

#[cfg(feature = "window")]
pub mod card;
#[cfg(feature = "window")]
pub mod texture_loader;
#[cfg(feature = "window")]
pub mod window;

pub use catalog::Catalog;
pub use config::CarouselConfig;
pub use engine::{CarouselEngine, ChangeCause, StateChange, SubscriptionId};
pub use error::CarouselError;
pub use filter::CategoryFilter;
pub use item::Item;
pub use state::{CarouselState, Direction};
pub use timer::{FrameScheduler, Scheduler, TimerHandle};
