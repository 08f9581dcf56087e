use anyhow::{Context, Result, ensure};
use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::{SaveData, save_data_from_state, state_from_save_data};
use crate::core::GameState;
use crate::data::Catalog;

pub fn save_to_json_string(save_data: &SaveData) -> Result<String> {
    serde_json::to_string(save_data).context("failed to serialize save data to JSON")
}

pub fn load_from_json_string(json: &str) -> Result<SaveData> {
    serde_json::from_str(json).context("failed to parse save JSON")
}

/// Shareable text form of a game: the JSON payload, base64 encoded.
pub fn export_state(state: &GameState) -> Result<String> {
    let json = save_to_json_string(&save_data_from_state(state))?;
    Ok(STANDARD.encode(json.as_bytes()))
}

/// Inverse of [`export_state`]. Surrounding whitespace from copy-paste is ignored.
pub fn import_state(encoded: &str, catalog: &Catalog) -> Result<GameState> {
    let trimmed = encoded.trim();
    ensure!(!trimmed.is_empty(), "export string is empty");
    let raw = STANDARD
        .decode(trimmed)
        .context("export string is not valid base64")?;
    let json = String::from_utf8(raw).context("decoded export is not UTF-8")?;
    let save = load_from_json_string(&json)?;
    state_from_save_data(&save, catalog).context("exported game is not restorable")
}
