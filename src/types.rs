//! Core types for Cattery

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Error, Result};

/// A cat in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Cat {
    /// Externally assigned identifier, unique within the catalog
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-form sex label ("Female", "Male")
    pub sex: String,
    /// Birthday as `YYYY-MM-DD`, kept as text
    pub birthday: String,
    /// Path to the cat's picture under `/static`
    pub image_url: String,
    /// Whether the cat has been fed at least once
    pub feed: bool,
    /// Number of times the cat has been fed
    pub feed_count: u64,
}

impl Cat {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        sex: impl Into<String>,
        birthday: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sex: sex.into(),
            birthday: birthday.into(),
            image_url: image_url.into(),
            feed: false,
            feed_count: 0,
        }
    }

    /// Record one feeding. Leaves the cat untouched if the counter is saturated.
    pub fn record_feed(&mut self) -> Result<()> {
        self.feed_count = self
            .feed_count
            .checked_add(1)
            .ok_or(Error::FeedCountOverflow(self.id))?;
        self.feed = true;
        Ok(())
    }
}

/// The catalog every process starts with
pub fn default_cats() -> Vec<Cat> {
    vec![
        Cat::new(1, "小乖", "Female", "2023-03-26", "/static/xiaoguai.jpg"),
        Cat::new(2, "小宝", "Female", "2023-12-12", "/static/xiaobao.jpg"),
    ]
}
