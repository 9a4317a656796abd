//! List repositories, split into this family's and everybody else's
//!
//! Both halves of the listing come from one fetch of all repositories,
//! cached on the command. A command instance lives for a single invocation
//! and the CLI runs one command at a time, so the cache needs no locking.

use serde_json::{Map, Value};
use winrepo_client::{QueryParams, RepositoryApi, RepositoryRecord};

use crate::context::CommandContext;
use crate::error::Result;
use crate::family::RepositoryFamily;
use crate::prompt::Prompt;

const OTHER_REPOS_TITLE: &str = "Other Repositories";
const EMPTY_MESSAGE: &str = "No repositories found";

const SUMMARY_FIELDS: &[&str] = &[
    "id",
    "display_name",
    "description",
    "content_unit_counts",
    "notes",
];
const DETAIL_FIELDS: &[&str] = &[
    "id",
    "display_name",
    "description",
    "content_unit_counts",
    "notes",
    "importers",
    "distributors",
];

/// Flags of the list command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Only show ids and display names
    pub summary: bool,
    /// Include importers and distributors
    pub details: bool,
    /// Also show repositories of other families
    pub all: bool,
}

impl ListOptions {
    fn query(&self) -> QueryParams {
        QueryParams {
            details: self.details,
        }
    }

    fn fields(&self) -> &'static [&'static str] {
        if self.details {
            DETAIL_FIELDS
        } else {
            SUMMARY_FIELDS
        }
    }
}

pub struct ListRepositoriesCommand {
    family: RepositoryFamily,
    all_repos_cache: Option<Vec<RepositoryRecord>>,
}

impl ListRepositoriesCommand {
    pub fn new(family: RepositoryFamily) -> Self {
        Self {
            family,
            all_repos_cache: None,
        }
    }

    pub fn run(&mut self, ctx: &mut CommandContext<'_>, options: ListOptions) -> Result<()> {
        ctx.prompt.render_title(self.family.repos_title);
        let repos = self.matching(ctx.server, &options.query())?;
        render_repositories(ctx.prompt, &repos, options)?;

        if options.all {
            ctx.prompt.render_title(OTHER_REPOS_TITLE);
            let others = self.others(ctx.server, &options.query())?;
            render_repositories(ctx.prompt, &others, options)?;
        }
        Ok(())
    }

    /// Repositories of this family, each keeping only the family's own
    /// distributor
    pub fn matching(
        &mut self,
        server: &dyn RepositoryApi,
        query: &QueryParams,
    ) -> Result<Vec<RepositoryRecord>> {
        let family = self.family;
        let repos = self
            .all_repos(server, query)?
            .iter()
            .filter(|r| family.is_member(r))
            .cloned()
            .map(|mut repo| {
                if let Some(distributors) = repo.distributors.as_mut() {
                    distributors.retain(|d| d.id == family.distributor_id);
                }
                repo
            })
            .collect();
        Ok(repos)
    }

    /// Repositories without this family's marker, untouched
    pub fn others(
        &mut self,
        server: &dyn RepositoryApi,
        query: &QueryParams,
    ) -> Result<Vec<RepositoryRecord>> {
        let family = self.family;
        let repos = self
            .all_repos(server, query)?
            .iter()
            .filter(|r| !family.is_member(r))
            .cloned()
            .collect();
        Ok(repos)
    }

    /// All repositories, fetched on first use
    fn all_repos(
        &mut self,
        server: &dyn RepositoryApi,
        query: &QueryParams,
    ) -> Result<&[RepositoryRecord]> {
        if self.all_repos_cache.is_none() {
            self.all_repos_cache = Some(server.repositories(query)?);
        }
        Ok(self.all_repos_cache.as_deref().unwrap_or_default())
    }
}

fn render_repositories(
    prompt: &mut dyn Prompt,
    repos: &[RepositoryRecord],
    options: ListOptions,
) -> Result<()> {
    if repos.is_empty() {
        prompt.render_paragraph(EMPTY_MESSAGE);
        return Ok(());
    }

    if options.summary {
        let width = repos.iter().map(|r| r.id.len()).max().unwrap_or(0);
        for repo in repos {
            let name = repo.display_name.as_deref().unwrap_or("");
            prompt.render_paragraph(format!("{:<width$}  {}", repo.id, name).trim_end());
        }
        return Ok(());
    }

    let fields = options.fields();
    for repo in repos {
        prompt.render_document(&document(repo, fields)?, fields);
    }
    Ok(())
}

/// The record as a JSON object restricted to `fields`
fn document(repo: &RepositoryRecord, fields: &[&str]) -> Result<Map<String, Value>> {
    let mut document = match serde_json::to_value(repo)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    document.retain(|key, _| fields.contains(&key.as_str()));
    Ok(document)
}
