use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use tracing::debug;

use crate::config::{CarouselConfig, CarouselSection};
use crate::error::CarouselError;
use crate::item::Item;

/// Items and carousel timing, as read from a catalog file.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub config: CarouselConfig,
    pub items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    carousel: CarouselSection,
    #[serde(default)]
    items: Vec<Item>,
}

impl Catalog {
    /// The "transformations" featured on the home page.
    pub fn builtin() -> Self {
        let items = vec![
            Item::new(
                1,
                "Sonoma Valley Vineyard Retreat",
                "A rustic-modern retreat set among Sonoma's vineyards, designed for leisure, gatherings, and weekend escapes.",
                "images/portfolio/1.jpg",
                "Residential",
            ),
            Item::new(
                2,
                "Modern Oasis Residence",
                "A luxurious Beverly Hills estate designed to blend elegance, comfort, and state-of-the-art technology.",
                "images/portfolio/2.jpg",
                "Residential",
            ),
            Item::new(
                3,
                "Santa Monica Creative Studio",
                "An industrial loft transformed into a vibrant, collaborative creative studio for a design-focused business.",
                "images/portfolio/3.jpg",
                "Commercial",
            ),
            Item::new(
                4,
                "Luxe Corporate Plaza",
                "A high-end corporate office in Dubai featuring sleek lines and premium materials.",
                "images/portfolio/4.jpg",
                "Commercial",
            ),
        ];
        Self { config: CarouselConfig::default(), items }
    }

    pub fn parse(text: &str, path: &Path) -> Result<Self, CarouselError> {
        let file: CatalogFile = toml::from_str(text).map_err(|source| CarouselError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })?;
        if file.items.is_empty() {
            return Err(CarouselError::EmptyCollection);
        }
        let config = CarouselConfig::from(file.carousel).validate()?;
        Ok(Self { config, items: file.items })
    }

    pub fn load(path: &Path) -> Result<Self, CarouselError> {
        let text = fs::read_to_string(path).map_err(|source| CarouselError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&text, path)?;
        debug!(?path, items = catalog.items.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Randomizes item order once, before the carousel is built.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
    }
}
