use super::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Every key a complete configuration file carries.
pub const FIELDS: &[&str] = &[
    "database",
    "tracker_database",
    "user_name",
    "daily_capacity",
    "strategy",
    "set_active_on_write",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        // empty file or a scalar: treat as no keys at all
        _ => Ok(Mapping::new()),
    }
}

/// Keys missing from the configuration file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(FIELDS
        .iter()
        .copied()
        .filter(|f| !map.contains_key(Value::String(f.to_string())))
        .collect())
}

/// Add the missing keys with their default values, keeping the existing ones.
///   Returns:
///   Ok(true)  → file updated
///   Ok(false) → nothing to do
pub fn fill_missing_fields(path: &Path) -> AppResult<bool> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        info("Configuration file is up to date.");
        return Ok(false);
    }

    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => Mapping::new(),
    };

    for field in &missing {
        let key = Value::String(field.to_string());
        if let Some(v) = defaults.get(&key) {
            map.insert(key, v.clone());
        }
    }

    fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;
    success(format!("Configuration updated, added: {}", missing.join(", ")));
    Ok(true)
}
