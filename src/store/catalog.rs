//! In-memory cat catalog keyed by id

use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;

use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::types::{default_cats, Cat};

#[derive(Debug, Default)]
struct Entries {
    cats: HashMap<i64, Cat>,
    /// Ids in insertion order, used for listing
    order: Vec<i64>,
}

/// The process-wide catalog. Every mutation takes the write lock, so
/// lookup and update are a single atomic step.
#[derive(Debug)]
pub struct Catalog {
    entries: RwLock<Entries>,
}

impl Default for Catalog {
    fn default() -> Self {
        let cats = default_cats();
        let order = cats.iter().map(|c| c.id).collect();
        let cats = cats.into_iter().map(|c| (c.id, c)).collect();

        Self {
            entries: RwLock::new(Entries { cats, order }),
        }
    }
}

impl Catalog {
    /// Build a catalog from seed records, rejecting repeated ids
    pub fn from_seed(cats: Vec<Cat>) -> Result<Self> {
        let mut entries = Entries::default();

        for mut cat in cats {
            if entries.cats.contains_key(&cat.id) {
                return Err(Error::DuplicateId(cat.id));
            }
            cat.feed = cat.feed_count > 0;
            entries.order.push(cat.id);
            entries.cats.insert(cat.id, cat);
        }

        Ok(Self {
            entries: RwLock::new(entries),
        })
    }

    /// Load seed records from a JSON array on disk
    pub fn load_seed(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let cats: Vec<Cat> = serde_json::from_str(&content)?;
        tracing::info!("Loaded {} cats from {:?}", cats.len(), path);
        Self::from_seed(cats)
    }

    /// Seed from the configured file, or the built-in cats when none is set
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        match &config.seed_path {
            Some(path) => Self::load_seed(path),
            None => Ok(Self::default()),
        }
    }

    /// All cats in insertion order
    pub async fn list(&self) -> Vec<Cat> {
        let entries = self.entries.read().await;
        entries
            .order
            .iter()
            .filter_map(|id| entries.cats.get(id).cloned())
            .collect()
    }

    pub async fn get(&self, id: i64) -> Option<Cat> {
        self.entries.read().await.cats.get(&id).cloned()
    }

    /// Feed a cat, returning the updated record
    pub async fn feed(&self, id: i64) -> Result<Cat> {
        let mut entries = self.entries.write().await;
        let cat = entries.cats.get_mut(&id).ok_or(Error::CatNotFound(id))?;
        cat.record_feed()?;

        tracing::info!("Fed cat {} ({}), count now {}", id, cat.name, cat.feed_count);
        Ok(cat.clone())
    }

    /// Remove a cat permanently, returning the removed record
    pub async fn delete(&self, id: i64) -> Result<Cat> {
        let mut entries = self.entries.write().await;
        let cat = entries.cats.remove(&id).ok_or(Error::CatNotFound(id))?;
        entries.order.retain(|existing| *existing != id);

        tracing::info!("Deleted cat {} ({})", id, cat.name);
        Ok(cat)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.cats.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
