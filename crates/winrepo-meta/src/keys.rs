//! Declarative tables mapping plugin config keys to CLI argument names
//!
//! Each table must list *every* config value a user can set from the command
//! line: the builder starts by projecting the user arguments onto these keys,
//! so anything missing here is silently dropped.

/// How a raw CLI value is converted before it is handed to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free-form text
    Text,
    /// `true`/`false` (also `yes`/`no`)
    Boolean,
    /// Path to a file whose contents become the value
    FileContents,
}

/// One plugin key and the CLI argument it is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigKey {
    /// Key the importer/distributor plugin expects
    pub plugin_key: &'static str,
    /// Underscore form of the CLI flag the value comes from
    pub cli_key: &'static str,
    pub kind: ValueKind,
}

impl ConfigKey {
    pub const fn text(plugin_key: &'static str, cli_key: &'static str) -> Self {
        Self {
            plugin_key,
            cli_key,
            kind: ValueKind::Text,
        }
    }

    pub const fn boolean(plugin_key: &'static str, cli_key: &'static str) -> Self {
        Self {
            plugin_key,
            cli_key,
            kind: ValueKind::Boolean,
        }
    }

    pub const fn file_contents(plugin_key: &'static str, cli_key: &'static str) -> Self {
        Self {
            plugin_key,
            cli_key,
            kind: ValueKind::FileContents,
        }
    }

    /// The hyphenated flag name as typed by the user
    pub fn flag(&self) -> String {
        format!("--{}", self.cli_key.replace('_', "-"))
    }
}

/// Ordered key table for one plugin type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapping {
    keys: &'static [ConfigKey],
}

impl KeyMapping {
    pub const fn new(keys: &'static [ConfigKey]) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &'static [ConfigKey] {
        self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn plugin_keys(&self) -> impl Iterator<Item = &'static str> {
        self.keys.iter().map(|k| k.plugin_key)
    }

    pub fn cli_keys(&self) -> impl Iterator<Item = &'static str> {
        self.keys.iter().map(|k| k.cli_key)
    }

    /// Find the entry read from the given (underscore) CLI key
    pub fn by_cli_key(&self, cli_key: &str) -> Option<&'static ConfigKey> {
        self.keys.iter().find(|k| k.cli_key == cli_key)
    }

    /// Both key columns are free of duplicates
    pub fn is_well_formed(&self) -> bool {
        let unique = |column: Vec<&str>| {
            column
                .iter()
                .enumerate()
                .all(|(i, key)| !column[i + 1..].contains(key))
        };
        unique(self.plugin_keys().collect()) && unique(self.cli_keys().collect())
    }
}

/// Importer options for Windows repositories. The importer takes no
/// user-settable configuration.
pub const IMPORTER_CONFIG_KEYS: KeyMapping = KeyMapping::new(&[]);

/// Distributor options for Windows repositories
pub const WIN_DISTRIBUTOR_CONFIG_KEYS: KeyMapping = KeyMapping::new(&[
    ConfigKey::text("relative_url", "relative_url"),
    ConfigKey::boolean("http", "serve_http"),
    ConfigKey::boolean("https", "serve_https"),
    ConfigKey::text("checksum_type", "checksum_type"),
    ConfigKey::text("skip", "skip"),
]);
