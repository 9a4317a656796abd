//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;

/// Manage Windows package repositories on a repository server
#[derive(Parser, Debug)]
#[command(name = "winrepo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Admin configuration file (defaults to <config dir>/winrepo/admin.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Server API base URL, overriding the configuration file
    #[arg(long, global = true, env = "WINREPO_SERVER", value_name = "URL")]
    pub server: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create, update and list Windows repositories
    Repo {
        /// Repository action to perform
        #[command(subcommand)]
        action: RepoAction,
    },
}

/// Repository actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RepoAction {
    /// Create a new repository
    ///
    /// Unless told otherwise the repository is published over HTTPS only,
    /// at a relative URL equal to its id.
    ///
    /// Examples:
    ///   winrepo repo create --repo-id desktop
    ///   winrepo repo create --repo-id desktop --serve-http true --relative-url win/desktop
    Create {
        #[command(flatten)]
        repo: RepoArgs,

        #[command(flatten)]
        publish: PublishArgs,
    },

    /// Change an existing repository
    ///
    /// Only the options given are changed. Pass an empty value (e.g.
    /// --checksum-type "") to clear a setting.
    Update {
        #[command(flatten)]
        repo: RepoArgs,

        #[command(flatten)]
        publish: PublishArgs,
    },

    /// List Windows repositories
    List {
        /// Only show ids and display names
        #[arg(long, conflicts_with = "details")]
        summary: bool,

        /// Include importer and distributor information
        #[arg(long)]
        details: bool,

        /// Also list repositories of other types
        #[arg(long)]
        all: bool,
    },
}

/// Repository-level options. Serializes to the raw argument map, keyed by
/// flag name.
#[derive(Args, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct RepoArgs {
    /// Unique identifier; letters, numbers, underscores and hyphens only
    #[arg(long = "repo-id", value_name = "ID")]
    pub repo_id: String,

    /// User-readable name for the repository
    #[arg(long, value_name = "NAME")]
    pub display_name: Option<String>,

    /// User-readable description
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Note to attach to the repository; may be repeated
    #[arg(long = "note", value_name = "KEY=VALUE", value_parser = parse_note)]
    #[serde(rename = "note", serialize_with = "serialize_notes")]
    pub notes: Vec<(String, String)>,
}

/// Distributor options
#[derive(Args, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[command(next_help_heading = "Publishing")]
pub struct PublishArgs {
    /// URL path the repository is published at (defaults to the repository id)
    #[arg(long, value_name = "PATH")]
    pub relative_url: Option<String>,

    /// Serve the published repository over HTTP
    #[arg(long, value_name = "BOOL")]
    pub serve_http: Option<String>,

    /// Serve the published repository over HTTPS
    #[arg(long, value_name = "BOOL")]
    pub serve_https: Option<String>,

    /// Checksum type used in the published metadata
    #[arg(long, value_name = "TYPE")]
    pub checksum_type: Option<String>,

    /// Content types to leave out when publishing
    #[arg(long, value_name = "TYPES")]
    pub skip: Option<String>,
}

fn parse_note(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

/// No notes serialize as null so update can tell "not given" from "empty"
#[allow(clippy::ptr_arg)]
fn serialize_notes<S: Serializer>(
    notes: &Vec<(String, String)>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if notes.is_empty() {
        return serializer.serialize_none();
    }
    let mut map = serializer.serialize_map(Some(notes.len()))?;
    for (key, value) in notes {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["winrepo"]);
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "winrepo",
            "repo",
            "list",
            "-v",
            "--server",
            "https://pulp.example.com/pulp/api",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.server.as_deref(), Some("https://pulp.example.com/pulp/api"));
    }

    #[test]
    fn parse_create() {
        let cli = Cli::parse_from([
            "winrepo",
            "repo",
            "create",
            "--repo-id",
            "win1",
            "--note",
            "team=desktop",
            "--note",
            "tier=gold",
            "--serve-http",
            "true",
            "--checksum-type",
            "",
        ]);
        match cli.command {
            Some(Commands::Repo {
                action: RepoAction::Create { repo, publish },
            }) => {
                assert_eq!(repo.repo_id, "win1");
                assert_eq!(
                    repo.notes,
                    vec![
                        ("team".to_string(), "desktop".to_string()),
                        ("tier".to_string(), "gold".to_string())
                    ]
                );
                assert_eq!(publish.serve_http.as_deref(), Some("true"));
                assert_eq!(publish.checksum_type.as_deref(), Some(""));
                assert_eq!(publish.relative_url, None);
            }
            other => panic!("Expected create command, got {:?}", other),
        }
    }

    #[test]
    fn parse_create_requires_repo_id() {
        let result = Cli::try_parse_from(["winrepo", "repo", "create"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_list_flags() {
        let cli = Cli::parse_from(["winrepo", "repo", "list", "--details", "--all"]);
        assert_eq!(
            cli.command,
            Some(Commands::Repo {
                action: RepoAction::List {
                    summary: false,
                    details: true,
                    all: true
                }
            })
        );
    }

    #[test]
    fn parse_list_summary_conflicts_with_details() {
        let result = Cli::try_parse_from(["winrepo", "repo", "list", "--summary", "--details"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_note_rejects_missing_separator() {
        assert!(parse_note("team").is_err());
        assert!(parse_note("=x").is_err());
        assert_eq!(parse_note("k=").unwrap(), ("k".to_string(), String::new()));
        assert_eq!(parse_note("k=a=b").unwrap(), ("k".to_string(), "a=b".to_string()));
    }
}
