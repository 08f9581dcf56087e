use std::sync::Arc;

use tracing::debug;

use super::economy;
use super::state::GameState;
use crate::data::Catalog;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PurchaseError {
    #[error("purchase costs {cost} but only {available} is available")]
    Unaffordable { cost: f64, available: f64 },
    #[error("unknown producer '{0}'")]
    UnknownProducer(String),
}

/// What a successful purchase cost and what it produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseReceipt {
    pub cost: f64,
    /// New manual-action level or new owned count.
    pub new_total: u32,
}

/// Mutation surface over one game. Every change to the state, apart from
/// clock accrual, goes through here.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    catalog: Arc<Catalog>,
    state: GameState,
}

impl Engine {
    pub fn new(catalog: Arc<Catalog>, mut state: GameState) -> Self {
        state.normalize(&catalog);
        Self { catalog, state }
    }

    pub fn fresh(catalog: Arc<Catalog>, epoch_ms: u64) -> Self {
        let state = GameState::fresh(&catalog, epoch_ms);
        Self { catalog, state }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn shared_catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn replace_state(&mut self, mut state: GameState) {
        state.normalize(&self.catalog);
        self.state = state;
    }

    pub fn total_production_rate(&self) -> f64 {
        economy::total_production_rate(&self.state, &self.catalog)
    }

    pub fn manual_action_value(&self) -> f64 {
        economy::manual_action_value(&self.state)
    }

    pub fn manual_upgrade_cost(&self) -> f64 {
        economy::manual_upgrade_cost(&self.state)
    }

    pub fn producer_cost(&self, id: &str) -> Option<f64> {
        economy::producer_purchase_cost(&self.state, &self.catalog, id)
    }

    pub fn can_afford_manual_upgrade(&self) -> bool {
        self.state.resource >= self.manual_upgrade_cost()
    }

    pub fn can_afford_producer(&self, id: &str) -> bool {
        self.producer_cost(id)
            .is_some_and(|cost| self.state.resource >= cost)
    }

    /// Credits one manual action and returns the amount, for floating feedback.
    pub fn perform_manual_action(&mut self) -> f64 {
        let value = self.manual_action_value();
        let credited = self.state.credit(value);
        self.state.manual_action_count = self.state.manual_action_count.saturating_add(1);
        credited
    }

    pub fn purchase_manual_upgrade(&mut self) -> bool {
        self.try_purchase_manual_upgrade().is_ok()
    }

    pub fn try_purchase_manual_upgrade(&mut self) -> Result<PurchaseReceipt, PurchaseError> {
        let cost = self.manual_upgrade_cost();
        self.spend(cost)?;
        self.state.manual_action_level = self.state.manual_action_level.saturating_add(1);
        debug!(
            cost,
            level = self.state.manual_action_level,
            "manual upgrade purchased"
        );
        Ok(PurchaseReceipt {
            cost,
            new_total: self.state.manual_action_level,
        })
    }

    pub fn purchase_producer(&mut self, id: &str) -> bool {
        self.try_purchase_producer(id).is_ok()
    }

    pub fn try_purchase_producer(&mut self, id: &str) -> Result<PurchaseReceipt, PurchaseError> {
        let cost = self
            .producer_cost(id)
            .ok_or_else(|| PurchaseError::UnknownProducer(id.to_string()))?;
        self.spend(cost)?;
        let owned = self.state.add_producer(id);
        debug!(producer = id, cost, owned, "producer purchased");
        Ok(PurchaseReceipt {
            cost,
            new_total: owned,
        })
    }

    /// Accrual entry point for the clock.
    pub(crate) fn accrue(&mut self, amount: f64) -> f64 {
        self.state.credit(amount)
    }

    fn spend(&mut self, cost: f64) -> Result<(), PurchaseError> {
        let available = self.state.resource;
        if self.state.spend(cost) {
            Ok(())
        } else {
            Err(PurchaseError::Unaffordable { cost, available })
        }
    }
}
