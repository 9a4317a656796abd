//! Records returned by the repository server

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Free-form annotations attached to a repository
pub type Notes = Map<String, Value>;

/// A repository as listed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: Notes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_unit_counts: Option<Map<String, Value>>,
    /// Only present in a detailed listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importers: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distributors: Option<Vec<DistributorRecord>>,
    /// Fields this client does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RepositoryRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            description: None,
            notes: Notes::new(),
            content_unit_counts: None,
            importers: None,
            distributors: None,
            extra: Map::new(),
        }
    }

    pub fn with_note(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.notes.insert(key.into(), value.into());
        self
    }

    pub fn with_distributors(mut self, distributors: Vec<DistributorRecord>) -> Self {
        self.distributors = Some(distributors);
        self
    }

    /// String value of a note, if set to a string
    pub fn note(&self, key: &str) -> Option<&str> {
        self.notes.get(key).and_then(Value::as_str)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Notes, D::Error> {
    Option::<Notes>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A distributor attached to a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributorRecord {
    pub id: String,
    #[serde(default)]
    pub distributor_type_id: String,
    #[serde(default)]
    pub config: Value,
    #[serde(default)]
    pub auto_publish: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_publish: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DistributorRecord {
    pub fn new(id: impl Into<String>, distributor_type_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            distributor_type_id: distributor_type_id.into(),
            config: Value::Object(Map::new()),
            auto_publish: false,
            last_publish: None,
            extra: Map::new(),
        }
    }
}

/// Why the server postponed an operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub resource_id: String,
    #[serde(default)]
    pub operation: String,
}

/// Background task created for a postponed operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTask {
    pub task_id: String,
    #[serde(rename = "_href", default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Body of an HTTP 202 answer
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PostponedBody {
    #[serde(default)]
    pub reasons: Vec<Reason>,
    #[serde(default)]
    pub spawned_tasks: Vec<SpawnedTask>,
}

/// Outcome of an update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResponse {
    /// Applied before the server answered
    Completed,
    /// Queued behind a conflicting operation
    Postponed {
        reasons: Vec<Reason>,
        spawned_tasks: Vec<SpawnedTask>,
    },
}

impl UpdateResponse {
    pub fn is_async(&self) -> bool {
        matches!(self, UpdateResponse::Postponed { .. })
    }

    pub fn reasons(&self) -> &[Reason] {
        match self {
            UpdateResponse::Postponed { reasons, .. } => reasons,
            UpdateResponse::Completed => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_record_from_detailed_listing() {
        let record: RepositoryRecord = serde_json::from_value(json!({
            "id": "win1",
            "display_name": "Windows",
            "notes": {"_repo-type": "win-repo"},
            "content_unit_counts": {"msi": 3},
            "importers": [{"id": "win_importer", "config": {}}],
            "distributors": [
                {"id": "win_distributor", "distributor_type_id": "win_distributor",
                 "config": {"relative_url": "win1"}, "auto_publish": true}
            ],
            "_ns": "repos",
            "scratchpad": {}
        }))
        .unwrap();

        assert_eq!(record.note("_repo-type"), Some("win-repo"));
        assert_eq!(record.importers.as_ref().map(Vec::len), Some(1));
        let distributors = record.distributors.as_ref().unwrap();
        assert_eq!(distributors[0].id, "win_distributor");
        assert!(distributors[0].auto_publish);
        assert_eq!(record.extra.get("_ns"), Some(&json!("repos")));
    }

    #[test]
    fn test_null_notes_become_empty() {
        let record: RepositoryRecord =
            serde_json::from_value(json!({"id": "r", "notes": null})).unwrap();
        assert!(record.notes.is_empty());
        assert!(record.distributors.is_none());
    }

    #[test]
    fn test_serialized_record_keeps_unknown_fields() {
        let mut record = RepositoryRecord::new("r").with_note("k", "v");
        record.extra.insert("_href".into(), json!("/r/"));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"id": "r", "notes": {"k": "v"}, "_href": "/r/"}));
    }

    #[test]
    fn test_update_response_reasons() {
        let postponed = UpdateResponse::Postponed {
            reasons: vec![Reason {
                resource_type: "repository".into(),
                resource_id: "win1".into(),
                operation: "sync".into(),
            }],
            spawned_tasks: vec![],
        };
        assert!(postponed.is_async());
        assert_eq!(postponed.reasons().len(), 1);
        assert!(!UpdateResponse::Completed.is_async());
        assert!(UpdateResponse::Completed.reasons().is_empty());
    }
}
