use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::{
    KeyValueStore, load_from_json_string, save_data_from_state, save_to_json_string,
    state_from_save_data,
};
use crate::core::GameState;
use crate::data::Catalog;

/// Snapshots game state into a key-value store under one fixed key.
pub struct PersistenceAdapter {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl std::fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceAdapter")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl PersistenceAdapter {
    pub fn new(store: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self {
            store: Box::new(store),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Best effort: failures are logged and otherwise ignored.
    pub fn save(&self, state: &GameState) {
        if let Err(err) = self.try_save(state) {
            warn!(key = %self.key, error = %format!("{err:#}"), "failed to persist game state");
        }
    }

    pub fn try_save(&self, state: &GameState) -> Result<()> {
        let json = save_to_json_string(&save_data_from_state(state))?;
        self.store
            .set(&self.key, &json)
            .with_context(|| format!("failed writing save under key '{}'", self.key))?;
        debug!(key = %self.key, bytes = json.len(), "game state persisted");
        Ok(())
    }

    /// `None` when nothing is stored or the payload cannot be restored.
    pub fn load(&self, catalog: &Catalog) -> Option<GameState> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!(key = %self.key, "no saved game found");
                return None;
            }
            Err(err) => {
                warn!(key = %self.key, error = %format!("{err:#}"), "failed to read saved game");
                return None;
            }
        };

        match load_from_json_string(&raw).and_then(|save| state_from_save_data(&save, catalog)) {
            Ok(state) => {
                info!(key = %self.key, "saved game restored");
                Some(state)
            }
            Err(err) => {
                warn!(key = %self.key, error = %format!("{err:#}"), "discarding unreadable save");
                None
            }
        }
    }

    pub fn load_or_fresh(&self, catalog: &Catalog, epoch_ms: u64) -> GameState {
        self.load(catalog)
            .unwrap_or_else(|| GameState::fresh(catalog, epoch_ms))
    }
}
