//! Canned records and argument maps

use serde_json::Value;
use winrepo_client::{DistributorRecord, RepositoryRecord};
use winrepo_meta::RawArguments;
use winrepo_meta::ids::{REPO_NOTE_TYPE_KEY, REPO_NOTE_WIN, TYPE_ID_DISTRIBUTOR_WIN, WIN_DISTRIBUTOR_ID};

/// Turn a `json!({...})` object into raw CLI arguments
pub fn raw_args(value: Value) -> RawArguments {
    match value {
        Value::Object(map) => map,
        other => panic!("raw arguments must be a JSON object, got {}", other),
    }
}

/// A Windows repository with the family's distributor and an export one
pub fn win_repo(id: &str) -> RepositoryRecord {
    RepositoryRecord::new(id)
        .with_note(REPO_NOTE_TYPE_KEY, REPO_NOTE_WIN)
        .with_distributors(vec![
            DistributorRecord::new("export_distributor", "export_distributor"),
            DistributorRecord::new(WIN_DISTRIBUTOR_ID, TYPE_ID_DISTRIBUTOR_WIN),
        ])
}

/// A repository of another family
pub fn typed_repo(id: &str, marker: &str) -> RepositoryRecord {
    RepositoryRecord::new(id).with_note(REPO_NOTE_TYPE_KEY, marker)
}

/// A repository with no family marker at all
pub fn untyped_repo(id: &str) -> RepositoryRecord {
    RepositoryRecord::new(id)
}
