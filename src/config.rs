use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::error::CarouselError;

/// Timing of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Period between automatic advances.
    pub interval: Duration,
    /// Duration of each phase (exit, enter) of a card transition.
    pub transition: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(AUTO_ADVANCE_MS),
            transition: Duration::from_millis(TRANSITION_MS),
        }
    }
}

impl CarouselConfig {
    pub fn validate(self) -> Result<Self, CarouselError> {
        if self.interval.is_zero() {
            return Err(CarouselError::InvalidPeriod);
        }
        Ok(self)
    }

    pub fn with_interval_ms(mut self, interval_ms: Option<u64>) -> Self {
        if let Some(ms) = interval_ms {
            self.interval = Duration::from_millis(ms);
        }
        self
    }
}

/// `[carousel]` table of a catalog file. Missing keys keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselSection {
    pub interval_ms: Option<u64>,
    pub transition_ms: Option<u64>,
}

impl From<CarouselSection> for CarouselConfig {
    fn from(section: CarouselSection) -> Self {
        let mut config = CarouselConfig::default().with_interval_ms(section.interval_ms);
        if let Some(ms) = section.transition_ms {
            config.transition = Duration::from_millis(ms);
        }
        config
    }
}
