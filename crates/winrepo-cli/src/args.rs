//! Conversion of parsed options into the raw argument map the commands take

use serde::Serialize;
use serde_json::Value;
use winrepo_meta::RawArguments;

use crate::cli::{PublishArgs, RepoArgs};
use crate::error::Result;

/// Flag-keyed arguments for the create and update commands.
///
/// Options the user left out are present with a null value.
pub fn raw_arguments(repo: &RepoArgs, publish: &PublishArgs) -> Result<RawArguments> {
    let mut raw = to_object(repo)?;
    raw.extend(to_object(publish)?);
    Ok(raw)
}

fn to_object(args: &impl Serialize) -> Result<RawArguments> {
    match serde_json::to_value(args)? {
        Value::Object(map) => Ok(map),
        _ => Ok(RawArguments::new()),
    }
}
