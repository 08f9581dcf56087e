pub mod config;
pub mod core;
pub mod data;
pub mod format;
pub mod save;

pub use config::{DEFAULT_SAVE_KEY, EngineConfig, MAX_CATCH_UP_LIMIT_MS};
pub use crate::core::{
    ChartHistory, ChartSample, ClockReport, ClockState, Engine, GameState, ManualTimeSource,
    PurchaseError, PurchaseReceipt, SimulationClock, SystemTimeSource, TimeSource, economy,
};
pub use data::{
    Catalog, CatalogError, CatalogFile, ProducerDefinition, ProducerEntry, ProducerIcon,
    catalog_from_json_str, load_catalog_from_path, load_engine_config_from_path,
};
pub use format::format_energy;
pub use save::{
    FileStore, KeyValueStore, MemoryStore, PersistenceAdapter, SaveData, export_state,
    import_state, load_from_json_string, save_data_from_state, save_to_json_string,
    state_from_save_data,
};
