//! Repository commands for the winrepo admin client.
//!
//! The commands are generic over a [`RepositoryFamily`], the policy object
//! that names the plugin types, note marker and key tables of one kind of
//! repository. [`WIN`] is the family for Windows package repositories.

pub mod context;
pub mod create;
pub mod error;
pub mod family;
pub mod list;
pub mod options;
pub mod prompt;
pub mod update;

pub use context::CommandContext;
pub use create::CreateRepositoryCommand;
pub use error::{Error, Result};
pub use family::{RepositoryFamily, WIN};
pub use list::{ListOptions, ListRepositoriesCommand};
pub use prompt::Prompt;
pub use update::UpdateRepositoryCommand;
