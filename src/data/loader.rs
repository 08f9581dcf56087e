use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::{Catalog, CatalogFile};
use crate::config::EngineConfig;

pub fn catalog_from_json_str(json: &str) -> Result<Catalog> {
    let file: CatalogFile = serde_json::from_str(json).context("failed parsing catalog JSON")?;
    file.into_catalog().context("catalog definition is invalid")
}

pub fn load_catalog_from_path(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let file: CatalogFile = read_json(path, "catalog")?;
    file.into_catalog()
        .with_context(|| format!("catalog file is invalid: {}", path.display()))
}

pub fn load_engine_config_from_path(path: impl AsRef<Path>) -> Result<EngineConfig> {
    let config: EngineConfig = read_json(path.as_ref(), "engine config")?;
    config.validated()
}

fn read_json<T>(path: &Path, label: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading {label} file: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing {label} file as JSON: {}", path.display()))
}
