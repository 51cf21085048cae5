use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Read the YAML file at `path` as a raw mapping.
/// A missing or empty file is an empty mapping.
fn read_mapping(path: &Path) -> AppResult<Mapping> {
    if !path.exists() {
        return Ok(Mapping::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Default configuration as a YAML mapping, in declaration order.
fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Other("default config is not a mapping".into())),
    }
}

/// Keys present in the default configuration but absent from the file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value, keeping the values already
/// present (including keys this version does not know about).
///   Returns:
///   Ok(true)  → file updated
///   Ok(false) → no change needed
pub fn run_config_migrations(path: &Path) -> AppResult<bool> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut added = Vec::new();
    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if added.is_empty() {
        info("Configuration is up to date, nothing to migrate.");
        return Ok(false);
    }

    // the merged file must still deserialize; invalid values are only
    // reported, since the file is being repaired
    let merged: Config = serde_yaml::from_value(Value::Mapping(current.clone()))?;
    if let Err(e) = merged.validate() {
        warning(format!("Configuration still has an invalid value: {e}"));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;

    success(format!(
        "Configuration migrated, added: {}",
        added.join(", ")
    ));
    Ok(true)
}
