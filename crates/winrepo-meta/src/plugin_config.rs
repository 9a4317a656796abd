//! Translation of raw CLI arguments into importer/distributor configuration
//!
//! The builder runs in fixed stages:
//!
//! 1. hyphenated flag names are rewritten to underscores (all keys)
//! 2. arguments are projected onto the CLI keys of a [`KeyMapping`]
//! 3. CLI keys are renamed to plugin keys; missing values become
//!    [`Setting::Unspecified`]
//! 4. the option-removal convention turns empty strings into
//!    [`Setting::Remove`]
//! 5. remaining values are converted according to their [`ValueKind`]

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::keys::{ConfigKey, KeyMapping, ValueKind};

/// Arguments as produced by the CLI layer, keyed by flag name.
///
/// `Value::Null` marks an argument the user did not pass.
pub type RawArguments = serde_json::Map<String, Value>;

/// State of one plugin configuration entry
#[derive(Debug, Clone, PartialEq)]
pub enum Setting {
    /// Not supplied; the server keeps whatever it has
    Unspecified,
    /// Explicitly cleared by the user; sent as `null`
    Remove,
    Value(Value),
}

impl Setting {
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Setting::Unspecified)
    }
}

/// Configuration handed to an importer or distributor plugin
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginConfig {
    entries: BTreeMap<String, Setting>,
}

impl PluginConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Setting> {
        self.entries.get(key)
    }

    /// True when the key holds anything other than [`Setting::Unspecified`]
    pub fn is_specified(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|s| !s.is_unspecified())
    }

    pub fn insert(&mut self, key: impl Into<String>, setting: Setting) {
        self.entries.insert(key.into(), setting);
    }

    /// Store a concrete value for the key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.insert(key, Setting::Value(value.into()));
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}

impl<K: Into<String>> FromIterator<(K, Setting)> for PluginConfig {
    fn from_iter<I: IntoIterator<Item = (K, Setting)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, s)| (k.into(), s)).collect(),
        }
    }
}

/// The wire form: unspecified entries are left out, removed ones are `null`
impl Serialize for PluginConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let specified = self.entries.iter().filter(|(_, s)| !s.is_unspecified());
        let mut map = serializer.serialize_map(None)?;
        for (key, setting) in specified {
            match setting {
                Setting::Value(v) => map.serialize_entry(key, v)?,
                _ => map.serialize_entry(key, &Value::Null)?,
            }
        }
        map.end()
    }
}

/// Rewrite a hyphenated flag name into the underscore form plugins use
pub fn normalize_flag(name: &str) -> String {
    name.replace('-', "_")
}

/// Build the configuration for one plugin from the user's arguments.
///
/// The arguments are not modified. Every plugin key of `mapping` is present
/// in the result and no other key is.
pub fn build_plugin_config(args: &RawArguments, mapping: &KeyMapping) -> Result<PluginConfig> {
    let normalized: BTreeMap<String, &Value> =
        args.iter().map(|(k, v)| (normalize_flag(k), v)).collect();

    let mut config: PluginConfig = mapping
        .keys()
        .iter()
        .map(|key| {
            let setting = match normalized.get(key.cli_key) {
                None | Some(Value::Null) => Setting::Unspecified,
                Some(value) => Setting::Value((*value).clone()),
            };
            (key.plugin_key, setting)
        })
        .collect();

    convert_removed_options(&mut config);

    for key in mapping.keys() {
        if let Some(Setting::Value(value)) = config.entries.get_mut(key.plugin_key) {
            *value = convert_value(key, value)?;
        }
    }

    Ok(config)
}

/// Apply the option-removal convention: an empty string means "clear this
/// setting on the server".
pub fn convert_removed_options(config: &mut PluginConfig) {
    for setting in config.entries.values_mut() {
        if matches!(setting, Setting::Value(Value::String(s)) if s.is_empty()) {
            *setting = Setting::Remove;
        }
    }
}

fn convert_value(key: &ConfigKey, value: &Value) -> Result<Value> {
    match key.kind {
        ValueKind::Text => match value {
            Value::String(_) => Ok(value.clone()),
            Value::Bool(b) => Ok(Value::String(b.to_string())),
            Value::Number(n) => Ok(Value::String(n.to_string())),
            _ => Err(Error::invalid_config(format!(
                "Value for {} must be a single string",
                key.flag()
            ))),
        },
        ValueKind::Boolean => match value {
            Value::Bool(_) => Ok(value.clone()),
            Value::String(s) => parse_boolean(s).map(Value::Bool).ok_or_else(|| {
                Error::invalid_config(format!(
                    "Value for {} must be either true or false, got [{}]",
                    key.flag(),
                    s
                ))
            }),
            other => Err(Error::invalid_config(format!(
                "Value for {} must be either true or false, got [{}]",
                key.flag(),
                other
            ))),
        },
        ValueKind::FileContents => {
            let Value::String(path) = value else {
                return Err(Error::invalid_config(format!(
                    "Value for {} must be a file path",
                    key.flag()
                )));
            };
            std::fs::read_to_string(path)
                .map(Value::String)
                .map_err(|e| Error::invalid_config(format!("File [{}] cannot be read: {}", path, e)))
        }
    }
}

fn parse_boolean(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}
