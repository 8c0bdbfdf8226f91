//! Error types for Cattery

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cat not found: {0}")]
    CatNotFound(i64),

    #[error("Feed count overflow for cat: {0}")]
    FeedCountOverflow(i64),

    #[error("Duplicate cat id in seed: {0}")]
    DuplicateId(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
