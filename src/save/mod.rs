mod adapter;
mod bridge;
mod codec;
mod model;
mod store;

pub use adapter::PersistenceAdapter;
pub use bridge::{save_data_from_state, state_from_save_data};
pub use codec::{export_state, import_state, load_from_json_string, save_to_json_string};
pub use model::SaveData;
pub use store::{FileStore, KeyValueStore, MemoryStore};

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use anyhow::{Result, bail};

    use super::{
        FileStore, KeyValueStore, MemoryStore, PersistenceAdapter, SaveData, export_state,
        import_state, load_from_json_string, save_data_from_state, save_to_json_string,
        state_from_save_data,
    };
    use crate::core::GameState;
    use crate::data::Catalog;

    const KEY: &str = "cosmoClickerSave";

    fn sample_save() -> SaveData {
        SaveData {
            resource: 1234.5,
            lifetime_resource: 5678.25,
            manual_action_count: 321,
            manual_action_level: 4,
            producer_counts: BTreeMap::from([
                ("collider".to_string(), 0),
                ("drone".to_string(), 3),
                ("factory".to_string(), 1),
                ("probe".to_string(), 12),
                ("reactor".to_string(), 0),
                ("station".to_string(), 2),
            ]),
            epoch: 1_700_000_000_000,
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            bail!("storage unavailable")
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            bail!("storage unavailable")
        }
    }

    #[test]
    fn json_uses_camel_case_field_names() {
        let json = save_to_json_string(&sample_save()).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

        for field in [
            "resource",
            "lifetimeResource",
            "manualActionCount",
            "manualActionLevel",
            "producerCounts",
            "epoch",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(value["producerCounts"]["probe"], 12);
    }

    #[test]
    fn save_json_round_trip() {
        let original = sample_save();
        let json = save_to_json_string(&original).expect("save JSON should serialize");
        let restored = load_from_json_string(&json).expect("save JSON should deserialize");

        assert_eq!(restored, original);
    }

    #[test]
    fn exported_string_imports_the_same_game() {
        let catalog = Catalog::standard();
        let original = state_from_save_data(&sample_save(), &catalog).expect("valid save");
        let encoded = export_state(&original).expect("state should export");
        let restored =
            import_state(&format!("  {encoded}\n"), &catalog).expect("export should import");

        assert_eq!(restored, original);
        assert!(import_state("not base64!", &catalog).is_err());
        assert!(import_state("   ", &catalog).is_err());
    }

    #[test]
    fn bridge_rejects_impossible_values() {
        let catalog = Catalog::standard();

        let mut save = sample_save();
        save.resource = -1.0;
        assert!(state_from_save_data(&save, &catalog).is_err());

        let mut save = sample_save();
        save.manual_action_level = 0;
        assert!(state_from_save_data(&save, &catalog).is_err());

        let mut save = sample_save();
        save.producer_counts.insert("ghost".to_string(), 4);
        save.producer_counts.remove("reactor");
        let state = state_from_save_data(&save, &catalog).expect("extra ids are dropped");
        assert_eq!(state.producer_count("ghost"), 0);
        assert!(!state.producer_counts().contains_key("ghost"));
        assert_eq!(state.producer_count("reactor"), 0);
        assert_eq!(state.producer_counts().len(), catalog.len());
    }

    #[test]
    fn adapter_round_trips_default_and_played_states() {
        let catalog = Catalog::standard();
        let adapter = PersistenceAdapter::new(MemoryStore::new(), KEY);

        let fresh = GameState::fresh(&catalog, 42);
        adapter.save(&fresh);
        assert_eq!(adapter.load(&catalog), Some(fresh));

        let played = state_from_save_data(&sample_save(), &catalog).expect("valid save");
        adapter.save(&played);
        let restored = adapter.load(&catalog).expect("save should load");
        assert_eq!(save_data_from_state(&restored), sample_save());
    }

    #[test]
    fn missing_or_corrupt_saves_load_as_absent() {
        let catalog = Catalog::standard();
        let store = MemoryStore::new();
        let adapter = PersistenceAdapter::new(store.clone(), KEY);
        assert!(adapter.load(&catalog).is_none());

        store.set(KEY, "{\"resource\": 12").expect("memory set");
        assert!(adapter.load(&catalog).is_none());

        store.set(KEY, "{\"resource\": 12}").expect("memory set");
        assert!(adapter.load(&catalog).is_none());

        let state = adapter.load_or_fresh(&catalog, 7);
        assert_eq!(state, GameState::fresh(&catalog, 7));
    }

    #[test]
    fn broken_store_never_escapes_the_adapter() {
        let catalog = Catalog::standard();
        let adapter = PersistenceAdapter::new(BrokenStore, KEY);
        let state = GameState::fresh(&catalog, 0);

        adapter.save(&state);
        assert!(adapter.try_save(&state).is_err());
        assert!(adapter.load(&catalog).is_none());
    }

    #[test]
    fn file_store_overwrites_previous_value() {
        let dir = std::env::temp_dir().join(format!("cosmo-save-{}", std::process::id()));
        let store = FileStore::new(&dir);

        assert_eq!(store.get(KEY).expect("read missing"), None);
        store.set(KEY, "first").expect("first write");
        store.set(KEY, "second").expect("second write");
        assert_eq!(store.get(KEY).expect("read back"), Some("second".to_string()));
        assert!(store.path_for("../escape").starts_with(&dir));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
