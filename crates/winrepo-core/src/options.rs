//! Arguments shared by the create and update commands

use serde_json::Value;
use winrepo_client::Notes;
use winrepo_meta::RawArguments;

use crate::error::{Error, Result};

pub const OPTION_REPO_ID: &str = "repo-id";
pub const OPTION_NAME: &str = "display-name";
pub const OPTION_DESCRIPTION: &str = "description";
pub const OPTION_NOTES: &str = "note";

/// Repository-level arguments, removed from the raw arguments so only
/// plugin options remain
#[derive(Debug, Clone, PartialEq)]
pub struct RepoIdentity {
    pub id: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// `None` when `--note` was not given at all
    pub notes: Option<Notes>,
}

impl RepoIdentity {
    pub fn take(args: &mut RawArguments) -> Result<Self> {
        let id = take_string(args, OPTION_REPO_ID)?.ok_or_else(|| Error::MissingArgument {
            name: OPTION_REPO_ID.to_string(),
        })?;
        Ok(Self {
            id,
            display_name: take_string(args, OPTION_NAME)?,
            description: take_string(args, OPTION_DESCRIPTION)?,
            notes: take_notes(args)?,
        })
    }
}

fn take_string(args: &mut RawArguments, name: &str) -> Result<Option<String>> {
    match args.remove(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(Error::InvalidArgument {
            name: name.to_string(),
            message: format!("expected text, got {}", other),
        }),
    }
}

fn take_notes(args: &mut RawArguments) -> Result<Option<Notes>> {
    match args.remove(OPTION_NOTES) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(notes)) => Ok(Some(notes)),
        Some(other) => Err(Error::InvalidArgument {
            name: OPTION_NOTES.to_string(),
            message: format!("expected key=value pairs, got {}", other),
        }),
    }
}
