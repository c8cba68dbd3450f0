use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use crate::config::Config;
use crate::store::{Item, ItemList, ListStore};

/// On-disk JSON snapshot of a packing list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    pub items: Vec<Item>,
}

impl Storage {
    pub fn new() -> Self {
        Storage { items: Vec::new() }
    }

    pub fn from_list(list: &ItemList) -> Self {
        Storage {
            items: list.to_vec(),
        }
    }

    pub fn into_list(self) -> Result<ItemList> {
        ItemList::from_items(self.items)
    }

    /// Returns `None` when no snapshot has been written yet.
    pub async fn load(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No snapshot at {}", path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };
        let storage: Storage = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(storage))
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved {} item(s) to {}", self.items.len(), path.display());
        Ok(())
    }
}

/// Loads the store described by `config`, falling back to an empty (or
/// seeded) store when nothing has been saved yet.
pub async fn open_store(config: &Config) -> Result<ListStore> {
    match Storage::load(&config.data_file).await? {
        Some(storage) => Ok(ListStore::with_list(storage.into_list()?)),
        None if config.seed => Ok(ListStore::seeded()),
        None => Ok(ListStore::new()),
    }
}

pub async fn save_list(config: &Config, list: &ItemList) -> Result<()> {
    Storage::from_list(list).save(&config.data_file).await
}
