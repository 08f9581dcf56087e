mod catalog;
mod loader;
mod producer_file;

pub use catalog::{Catalog, CatalogError, ProducerDefinition, ProducerIcon};
pub use loader::{catalog_from_json_str, load_catalog_from_path, load_engine_config_from_path};
pub use producer_file::{CatalogFile, ProducerEntry};
