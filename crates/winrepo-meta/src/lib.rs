//! Plugin configuration handling for winrepo.
//!
//! This crate owns the reserved identifiers shared with the server, the
//! declarative CLI-to-plugin key tables, the builder that turns raw CLI
//! arguments into plugin configuration, and the admin client settings.

pub mod config;
pub mod error;
pub mod ids;
pub mod keys;
pub mod plugin_config;

pub use config::{AdminConfig, ServerConfig};
pub use error::{Error, Result};
pub use keys::{ConfigKey, KeyMapping, ValueKind};
pub use plugin_config::{PluginConfig, RawArguments, Setting, build_plugin_config};
