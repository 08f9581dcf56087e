//! Cost and income math. Every function here is pure and reads the current
//! state, so results never go stale after a purchase.

use rust_decimal::prelude::{FromPrimitive, MathematicalOps, ToPrimitive};
use rust_decimal::Decimal;

use super::state::GameState;
use crate::data::{Catalog, ProducerDefinition};

pub const MANUAL_UPGRADE_BASE_COST: u32 = 50;
/// Growth per manual-action level, as a decimal `17 * 10^-1`.
pub const MANUAL_UPGRADE_GROWTH: (i64, u32) = (17, 1);
/// Growth per producer unit already owned, as a decimal `115 * 10^-2`.
pub const PRODUCER_COST_GROWTH: (i64, u32) = (115, 2);

/// Energy per second from every owned producer.
pub fn total_production_rate(state: &GameState, catalog: &Catalog) -> f64 {
    catalog
        .list_all()
        .iter()
        .map(|def| producer_income(state, def))
        .sum()
}

pub fn producer_income(state: &GameState, def: &ProducerDefinition) -> f64 {
    def.base_income * f64::from(state.producer_count(&def.id))
}

/// Linear in the upgrade level.
pub fn manual_action_value(state: &GameState) -> f64 {
    f64::from(state.manual_action_level())
}

pub fn manual_upgrade_cost(state: &GameState) -> f64 {
    manual_upgrade_cost_at(state.manual_action_level())
}

/// `floor(50 * 1.7^(level - 1))`; level 1 costs exactly 50.
pub fn manual_upgrade_cost_at(level: u32) -> f64 {
    let (mantissa, scale) = MANUAL_UPGRADE_GROWTH;
    floored_growth(
        f64::from(MANUAL_UPGRADE_BASE_COST),
        Decimal::new(mantissa, scale),
        level.saturating_sub(1),
    )
}

/// `None` when the catalog does not know `id`.
pub fn producer_purchase_cost(state: &GameState, catalog: &Catalog, id: &str) -> Option<f64> {
    catalog
        .get(id)
        .map(|def| producer_cost_at(def, state.producer_count(id)))
}

/// `floor(base_cost * 1.15^count)`; the first unit costs exactly `base_cost`.
pub fn producer_cost_at(def: &ProducerDefinition, count: u32) -> f64 {
    let (mantissa, scale) = PRODUCER_COST_GROWTH;
    floored_growth(def.base_cost, Decimal::new(mantissa, scale), count)
}

// Binary floats turn 100 * 1.15 into 114.999..., so curves are evaluated in
// decimal and floored there. Overflowing decimals fall back to f64.
fn floored_growth(base: f64, growth: Decimal, exponent: u32) -> f64 {
    let exact = Decimal::from_f64(base).and_then(|base| {
        growth
            .checked_powu(u64::from(exponent))
            .and_then(|factor| base.checked_mul(factor))
    });

    match exact.and_then(|value| value.floor().to_f64()) {
        Some(cost) => cost,
        None => {
            let growth = growth.to_f64().unwrap_or(1.0);
            (base * growth.powi(exponent.min(i32::MAX as u32) as i32)).floor()
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{
        manual_action_value, manual_upgrade_cost, manual_upgrade_cost_at, producer_cost_at,
        producer_purchase_cost, total_production_rate,
    };
    use crate::core::GameState;
    use crate::data::{Catalog, ProducerDefinition, ProducerIcon};

    fn hundred() -> ProducerDefinition {
        ProducerDefinition::new("drone", "Drone", "", 100.0, 2.0, ProducerIcon::Box)
    }

    #[test]
    fn manual_upgrade_cost_curve() {
        assert_eq!(manual_upgrade_cost_at(1), 50.0);
        assert_eq!(manual_upgrade_cost_at(2), 85.0);
        assert_eq!(manual_upgrade_cost_at(3), 144.0);
        assert_eq!(manual_upgrade_cost_at(4), 245.0);
        assert_eq!(manual_upgrade_cost_at(0), 50.0);
    }

    #[test]
    fn producer_cost_curve() {
        let def = hundred();
        assert_eq!(producer_cost_at(&def, 0), 100.0);
        assert_eq!(producer_cost_at(&def, 1), 115.0);
        assert_eq!(producer_cost_at(&def, 2), 132.0);
        assert_eq!(producer_cost_at(&def, 3), 152.0);
    }

    #[test]
    fn huge_counts_fall_back_to_float_math() {
        let cost = producer_cost_at(&hundred(), 600);
        assert!(cost.is_finite());
        assert!(cost > 1e30);
        assert_eq!(cost, cost.floor());
    }

    #[test]
    fn production_rate_sums_owned_producers() {
        let catalog = Catalog::standard();
        let mut state = GameState::fresh(&catalog, 0);
        state.producer_counts.insert("probe".to_string(), 2);
        state.producer_counts.insert("drone".to_string(), 1);

        assert!((total_production_rate(&state, &catalog) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn manual_values_follow_level() {
        let catalog = Catalog::standard();
        let mut state = GameState::fresh(&catalog, 0);
        assert_eq!(manual_action_value(&state), 1.0);
        assert_eq!(manual_upgrade_cost(&state), 50.0);

        state.manual_action_level = 3;
        assert_eq!(manual_action_value(&state), 3.0);
        assert_eq!(manual_upgrade_cost(&state), 144.0);
    }

    #[test]
    fn unknown_producer_has_no_cost() {
        let catalog = Catalog::standard();
        let state = GameState::fresh(&catalog, 0);
        assert_eq!(producer_purchase_cost(&state, &catalog, "probe"), Some(15.0));
        assert_eq!(producer_purchase_cost(&state, &catalog, "warp-gate"), None);
    }

    proptest! {
        #[test]
        fn prop_producer_cost_is_integral_and_non_decreasing(count in 0u32..300) {
            let def = hundred();
            let now = producer_cost_at(&def, count);
            let next = producer_cost_at(&def, count + 1);
            prop_assert_eq!(now, now.floor());
            prop_assert!(next >= now, "{} then {}", now, next);
        }

        #[test]
        fn prop_manual_upgrade_cost_strictly_increases(level in 1u32..100) {
            prop_assert!(manual_upgrade_cost_at(level + 1) > manual_upgrade_cost_at(level));
        }
    }
}
