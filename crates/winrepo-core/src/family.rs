//! Per-family policy for the generic repository commands

use tracing::debug;
use winrepo_client::{Notes, RepositoryRecord};
use winrepo_meta::ids::{
    REPO_NOTE_TYPE_KEY, REPO_NOTE_WIN, TYPE_ID_DISTRIBUTOR_WIN, TYPE_ID_IMPORTER_WIN,
    WIN_DISTRIBUTOR_ID,
};
use winrepo_meta::keys::{IMPORTER_CONFIG_KEYS, WIN_DISTRIBUTOR_CONFIG_KEYS};
use winrepo_meta::{KeyMapping, PluginConfig, RawArguments, Result, build_plugin_config};

/// Everything that distinguishes one kind of repository from another
#[derive(Debug, Clone, Copy)]
pub struct RepositoryFamily {
    /// Value of the `_repo-type` note for repositories of this family
    pub note_marker: &'static str,
    pub importer_type_id: &'static str,
    pub distributor_type_id: &'static str,
    /// Id of the distributor created alongside each repository
    pub distributor_id: &'static str,
    pub importer_keys: KeyMapping,
    pub distributor_keys: KeyMapping,
    /// Heading of the list command
    pub repos_title: &'static str,
    /// Fills in distributor settings the user left out on create
    pub create_defaults: fn(&str, &mut PluginConfig),
}

/// Windows package repositories
pub const WIN: RepositoryFamily = RepositoryFamily {
    note_marker: REPO_NOTE_WIN,
    importer_type_id: TYPE_ID_IMPORTER_WIN,
    distributor_type_id: TYPE_ID_DISTRIBUTOR_WIN,
    distributor_id: WIN_DISTRIBUTOR_ID,
    importer_keys: IMPORTER_CONFIG_KEYS,
    distributor_keys: WIN_DISTRIBUTOR_CONFIG_KEYS,
    repos_title: "Windows Repositories",
    create_defaults: default_publish_settings,
};

impl RepositoryFamily {
    /// Importer configuration from the user's arguments
    pub fn importer_config(&self, args: &RawArguments) -> Result<PluginConfig> {
        let config = build_plugin_config(args, &self.importer_keys)?;
        debug!(importer_type = self.importer_type_id, config = ?config, "Importer configuration options");
        Ok(config)
    }

    /// Distributor configuration from the user's arguments
    pub fn distributor_config(&self, args: &RawArguments) -> Result<PluginConfig> {
        let config = build_plugin_config(args, &self.distributor_keys)?;
        debug!(distributor_type = self.distributor_type_id, config = ?config, "Distributor configuration options");
        Ok(config)
    }

    /// Mark notes as belonging to this family, replacing any existing marker
    pub fn tag_notes(&self, notes: &mut Notes) {
        notes.insert(REPO_NOTE_TYPE_KEY.to_string(), self.note_marker.into());
    }

    pub fn is_member(&self, record: &RepositoryRecord) -> bool {
        record.note(REPO_NOTE_TYPE_KEY) == Some(self.note_marker)
    }
}

/// Publishing defaults for a new repository.
///
/// The relative URL falls back to the repository id. With neither protocol
/// chosen only HTTPS is served; the server needs both flags present, so
/// whichever is still missing is turned off.
pub fn default_publish_settings(repo_id: &str, config: &mut PluginConfig) {
    if !config.is_specified("relative_url") {
        config.set("relative_url", repo_id);
    }

    if !config.is_specified("http") && !config.is_specified("https") {
        config.set("https", true);
        config.set("http", false);
    }

    for key in ["http", "https"] {
        if !config.is_specified(key) {
            config.set(key, false);
        }
    }
}
