use anyhow::{Result, bail};

use super::SaveData;
use crate::core::GameState;
use crate::data::Catalog;

pub fn save_data_from_state(state: &GameState) -> SaveData {
    SaveData {
        resource: state.resource,
        lifetime_resource: state.lifetime_resource,
        manual_action_count: state.manual_action_count,
        manual_action_level: state.manual_action_level,
        producer_counts: state.producer_counts.clone(),
        epoch: state.epoch_ms,
    }
}

/// Rebuilds a state from a payload, rejecting values no valid game can hold.
/// Producer ids the catalog does not know are dropped.
pub fn state_from_save_data(save: &SaveData, catalog: &Catalog) -> Result<GameState> {
    if !save.resource.is_finite() || save.resource < 0.0 {
        bail!("saved resource {} is not a valid balance", save.resource);
    }
    if !save.lifetime_resource.is_finite() || save.lifetime_resource < 0.0 {
        bail!(
            "saved lifetime resource {} is not a valid total",
            save.lifetime_resource
        );
    }
    if save.manual_action_level == 0 {
        bail!("saved manual action level must be at least 1");
    }

    let mut state = GameState {
        resource: save.resource,
        lifetime_resource: save.lifetime_resource,
        manual_action_count: save.manual_action_count,
        manual_action_level: save.manual_action_level,
        producer_counts: save.producer_counts.clone(),
        epoch_ms: save.epoch,
    };
    state.normalize(catalog);
    Ok(state)
}
