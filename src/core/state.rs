use std::collections::BTreeMap;

use crate::data::Catalog;

/// The single source of truth for a running game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub(crate) resource: f64,
    pub(crate) lifetime_resource: f64,
    pub(crate) manual_action_count: u64,
    pub(crate) manual_action_level: u32,
    pub(crate) producer_counts: BTreeMap<String, u32>,
    pub(crate) epoch_ms: u64,
}

impl GameState {
    pub fn fresh(catalog: &Catalog, epoch_ms: u64) -> Self {
        Self {
            resource: 0.0,
            lifetime_resource: 0.0,
            manual_action_count: 0,
            manual_action_level: 1,
            producer_counts: catalog.ids().map(|id| (id.to_string(), 0)).collect(),
            epoch_ms,
        }
    }

    pub fn resource(&self) -> f64 {
        self.resource
    }

    pub fn lifetime_resource(&self) -> f64 {
        self.lifetime_resource
    }

    pub fn manual_action_count(&self) -> u64 {
        self.manual_action_count
    }

    pub fn manual_action_level(&self) -> u32 {
        self.manual_action_level
    }

    pub fn producer_count(&self, id: &str) -> u32 {
        self.producer_counts.get(id).copied().unwrap_or(0)
    }

    pub fn producer_counts(&self) -> &BTreeMap<String, u32> {
        &self.producer_counts
    }

    pub fn epoch_ms(&self) -> u64 {
        self.epoch_ms
    }

    /// Makes the count keys match the catalog's id set exactly.
    pub fn normalize(&mut self, catalog: &Catalog) {
        self.producer_counts.retain(|id, _| catalog.contains(id));
        for id in catalog.ids() {
            self.producer_counts.entry(id.to_string()).or_insert(0);
        }
        self.manual_action_level = self.manual_action_level.max(1);
        if !self.resource.is_finite() || self.resource < 0.0 {
            self.resource = 0.0;
        }
    }

    /// Credits earned energy. Only positive finite amounts count.
    pub(crate) fn credit(&mut self, amount: f64) -> f64 {
        if !amount.is_finite() || amount <= 0.0 {
            return 0.0;
        }
        self.resource += amount;
        self.lifetime_resource += amount;
        amount
    }

    /// Spends `amount` if the balance covers it. Lifetime totals are untouched.
    pub(crate) fn spend(&mut self, amount: f64) -> bool {
        if amount < 0.0 || self.resource < amount {
            return false;
        }
        self.resource = (self.resource - amount).max(0.0);
        true
    }

    pub(crate) fn add_producer(&mut self, id: &str) -> u32 {
        let count = self.producer_counts.entry(id.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::data::Catalog;

    #[test]
    fn fresh_state_covers_every_catalog_id() {
        let catalog = Catalog::standard();
        let state = GameState::fresh(&catalog, 1_700_000_000_000);

        assert_eq!(state.resource(), 0.0);
        assert_eq!(state.manual_action_level(), 1);
        assert_eq!(state.producer_counts().len(), catalog.len());
        assert!(catalog.ids().all(|id| state.producer_count(id) == 0));
        assert_eq!(state.epoch_ms(), 1_700_000_000_000);
    }

    #[test]
    fn credit_ignores_non_positive_amounts() {
        let mut state = GameState::fresh(&Catalog::standard(), 0);
        assert_eq!(state.credit(2.5), 2.5);
        assert_eq!(state.credit(0.0), 0.0);
        assert_eq!(state.credit(-4.0), 0.0);
        assert_eq!(state.credit(f64::INFINITY), 0.0);

        assert_eq!(state.resource(), 2.5);
        assert_eq!(state.lifetime_resource(), 2.5);
    }

    #[test]
    fn spend_is_all_or_nothing_and_keeps_lifetime() {
        let mut state = GameState::fresh(&Catalog::standard(), 0);
        state.credit(10.0);

        assert!(!state.spend(10.5));
        assert_eq!(state.resource(), 10.0);
        assert!(state.spend(10.0));
        assert_eq!(state.resource(), 0.0);
        assert_eq!(state.lifetime_resource(), 10.0);
    }

    #[test]
    fn normalize_drops_unknown_ids_and_repairs_level() {
        let catalog = Catalog::standard();
        let mut state = GameState::fresh(&catalog, 0);
        state.producer_counts.insert("warp-gate".to_string(), 3);
        state.producer_counts.remove("drone");
        state.manual_action_level = 0;

        state.normalize(&catalog);

        assert!(!state.producer_counts().contains_key("warp-gate"));
        assert_eq!(state.producer_count("drone"), 0);
        assert_eq!(state.manual_action_level(), 1);
    }
}
