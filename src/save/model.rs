use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Persisted layout of a game. Field names are part of the storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
    pub resource: f64,
    pub lifetime_resource: f64,
    pub manual_action_count: u64,
    pub manual_action_level: u32,
    pub producer_counts: BTreeMap<String, u32>,
    /// Milliseconds since the Unix epoch.
    pub epoch: u64,
}
