use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, CatalogError, ProducerDefinition, ProducerIcon};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub producers: Vec<ProducerEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub base_cost: f64,
    pub base_income: f64,
    #[serde(default)]
    pub icon: String,
}

impl CatalogFile {
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        Catalog::new(
            self.producers
                .into_iter()
                .map(|entry| {
                    let icon = ProducerIcon::from_name(&entry.icon);
                    ProducerDefinition::new(
                        entry.id,
                        entry.name,
                        entry.description,
                        entry.base_cost,
                        entry.base_income,
                        icon,
                    )
                })
                .collect(),
        )
    }
}

impl From<&Catalog> for CatalogFile {
    fn from(catalog: &Catalog) -> Self {
        Self {
            producers: catalog
                .list_all()
                .iter()
                .map(|def| ProducerEntry {
                    id: def.id.clone(),
                    name: def.name.clone(),
                    description: def.description.clone(),
                    base_cost: def.base_cost,
                    base_income: def.base_income,
                    icon: def.icon.canonical_name().to_string(),
                })
                .collect(),
        }
    }
}
