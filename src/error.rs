use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    EmptyCollection,

    #[error("auto-advance period must be greater than zero")]
    InvalidPeriod,

    #[error("failed to read catalog {path:?}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path:?}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
