//! The repository operations commands depend on

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value, json};
use winrepo_meta::PluginConfig;

use crate::error::Result;
use crate::model::{Notes, RepositoryRecord, UpdateResponse};

/// Distributor to add while creating a repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributorSpec {
    pub distributor_type_id: String,
    pub distributor_config: PluginConfig,
    pub auto_publish: bool,
    pub distributor_id: String,
}

/// Create a repository with its importer and distributors in one call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateRepository {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub notes: Notes,
    pub importer_type_id: String,
    pub importer_config: PluginConfig,
    pub distributors: Vec<DistributorSpec>,
}

/// Update a repository and the configuration of its plugins.
///
/// `None` fields are left untouched on the server.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRepository {
    pub id: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub notes: Option<Notes>,
    pub importer_config: PluginConfig,
    /// Distributor configuration keyed by distributor type
    pub distributor_configs: BTreeMap<String, PluginConfig>,
}

impl UpdateRepository {
    /// Request body for the update endpoint
    pub fn body(&self) -> Value {
        let mut delta = Map::new();
        if let Some(name) = &self.display_name {
            delta.insert("display_name".into(), json!(name));
        }
        if let Some(description) = &self.description {
            delta.insert("description".into(), json!(description));
        }
        if let Some(notes) = &self.notes {
            delta.insert("notes".into(), Value::Object(notes.clone()));
        }

        json!({
            "delta": delta,
            "importer_config": self.importer_config,
            "distributor_configs": self.distributor_configs,
        })
    }
}

/// Options for listing repositories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Include importers and distributors
    pub details: bool,
}

impl QueryParams {
    pub fn detailed() -> Self {
        Self { details: true }
    }

    pub fn pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::new();
        if self.details {
            pairs.push(("details", "true"));
        }
        pairs
    }
}

/// Repository operations offered by the server.
///
/// Calls are synchronous; timeouts are the implementation's business.
pub trait RepositoryApi {
    fn create_and_configure(&self, request: &CreateRepository) -> Result<RepositoryRecord>;

    fn update_repo_and_plugins(&self, request: &UpdateRepository) -> Result<UpdateResponse>;

    fn repositories(&self, query: &QueryParams) -> Result<Vec<RepositoryRecord>>;
}
