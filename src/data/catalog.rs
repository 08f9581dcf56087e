use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProducerIcon {
    Radio,
    Box,
    Satellite,
    Factory,
    Zap,
    Atom,
}

impl ProducerIcon {
    /// Unknown names resolve to [`ProducerIcon::Box`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Radio" => Self::Radio,
            "Satellite" => Self::Satellite,
            "Factory" => Self::Factory,
            "Zap" => Self::Zap,
            "Atom" => Self::Atom,
            _ => Self::Box,
        }
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::Radio => "Radio",
            Self::Box => "Box",
            Self::Satellite => "Satellite",
            Self::Factory => "Factory",
            Self::Zap => "Zap",
            Self::Atom => "Atom",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProducerDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Cost of the first unit.
    pub base_cost: f64,
    /// Energy per second contributed by each owned unit.
    pub base_income: f64,
    pub icon: ProducerIcon,
}

impl ProducerDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        base_cost: f64,
        base_income: f64,
        icon: ProducerIcon,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            base_cost,
            base_income,
            icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("producer definition at position {0} has an empty id")]
    EmptyId(usize),
    #[error("producer id '{0}' is declared more than once")]
    DuplicateId(String),
    #[error("producer '{id}' has invalid base cost {cost}")]
    InvalidBaseCost { id: String, cost: f64 },
    #[error("producer '{id}' has invalid base income {income}")]
    InvalidBaseIncome { id: String, income: f64 },
}

/// Immutable table of every producer the engine knows about, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    producers: Vec<ProducerDefinition>,
}

impl Catalog {
    pub fn new(producers: Vec<ProducerDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(producers.len());
        for (position, def) in producers.iter().enumerate() {
            if def.id.is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(def.id.as_str()) {
                return Err(CatalogError::DuplicateId(def.id.clone()));
            }
            if !def.base_cost.is_finite() || def.base_cost <= 0.0 {
                return Err(CatalogError::InvalidBaseCost {
                    id: def.id.clone(),
                    cost: def.base_cost,
                });
            }
            if !def.base_income.is_finite() || def.base_income < 0.0 {
                return Err(CatalogError::InvalidBaseIncome {
                    id: def.id.clone(),
                    income: def.base_income,
                });
            }
        }
        Ok(Self { producers })
    }

    /// The six producers the game ships with.
    pub fn standard() -> Self {
        use ProducerIcon::*;

        let table = [
            ("probe", "Probe", "A basic automated drone for gathering dust.", 15.0, 0.5, Radio),
            (
                "drone",
                "Miner Drone",
                "Drills into asteroids to extract core fragments.",
                100.0,
                2.0,
                Box,
            ),
            (
                "station",
                "Space Station",
                "A hub for processing cosmic debris.",
                500.0,
                10.0,
                Satellite,
            ),
            (
                "factory",
                "Orbital Factory",
                "Mass produces refined energy cells.",
                2500.0,
                45.0,
                Factory,
            ),
            (
                "reactor",
                "Fusion Reactor",
                "Harnesses the power of a small star.",
                12000.0,
                180.0,
                Zap,
            ),
            (
                "collider",
                "Hadron Collider",
                "Rips apart the fabric of reality for profit.",
                65000.0,
                750.0,
                Atom,
            ),
        ];

        Self {
            producers: table
                .into_iter()
                .map(|(id, name, description, cost, income, icon)| {
                    ProducerDefinition::new(id, name, description, cost, income, icon)
                })
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ProducerDefinition> {
        self.producers.iter().find(|def| def.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn list_all(&self) -> &[ProducerDefinition] {
        &self.producers
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.producers.iter().map(|def| def.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError, ProducerDefinition, ProducerIcon};

    fn def(id: &str, cost: f64, income: f64) -> ProducerDefinition {
        ProducerDefinition::new(id, id, "", cost, income, ProducerIcon::Box)
    }

    #[test]
    fn standard_catalog_keeps_declaration_order() {
        let catalog = Catalog::standard();
        let ids = catalog.ids().collect::<Vec<_>>();
        assert_eq!(
            ids,
            ["probe", "drone", "station", "factory", "reactor", "collider"]
        );
        assert!(Catalog::new(catalog.list_all().to_vec()).is_ok());
    }

    #[test]
    fn lookup_returns_none_for_unknown_id() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.get("probe").map(|d| d.base_cost), Some(15.0));
        assert!(catalog.get("warp-gate").is_none());
        assert!(!catalog.contains(""));
    }

    #[test]
    fn rejects_duplicate_and_invalid_definitions() {
        assert_eq!(
            Catalog::new(vec![def("a", 1.0, 0.0), def("a", 2.0, 0.0)]),
            Err(CatalogError::DuplicateId("a".to_string()))
        );
        assert_eq!(
            Catalog::new(vec![def("", 1.0, 0.0)]),
            Err(CatalogError::EmptyId(0))
        );
        assert!(matches!(
            Catalog::new(vec![def("a", 0.0, 1.0)]),
            Err(CatalogError::InvalidBaseCost { .. })
        ));
        assert!(matches!(
            Catalog::new(vec![def("a", 1.0, f64::NAN)]),
            Err(CatalogError::InvalidBaseIncome { .. })
        ));
    }

    #[test]
    fn unknown_icon_names_fall_back_to_box() {
        assert_eq!(ProducerIcon::from_name("Zap"), ProducerIcon::Zap);
        assert_eq!(ProducerIcon::from_name("Rocket"), ProducerIcon::Box);
        assert_eq!(ProducerIcon::Atom.canonical_name(), "Atom");
    }
}
