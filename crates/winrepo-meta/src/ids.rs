//! Identifiers that must match the server-side plugins exactly.

/// Note key the server uses to tag a repository's content family
pub const REPO_NOTE_TYPE_KEY: &str = "_repo-type";

/// Note value marking a Windows package repository
pub const REPO_NOTE_WIN: &str = "win-repo";

pub const TYPE_ID_IMPORTER_WIN: &str = "win_importer";
pub const TYPE_ID_DISTRIBUTOR_WIN: &str = "win_distributor";

/// Fixed id of the distributor attached to every Windows repository
pub const WIN_DISTRIBUTOR_ID: &str = "win_distributor";
