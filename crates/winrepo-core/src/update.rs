//! Update a repository and its plugin configuration

use std::collections::BTreeMap;

use winrepo_client::UpdateRepository;
use winrepo_meta::{PluginConfig, RawArguments};

use crate::context::CommandContext;
use crate::error::Result;
use crate::family::RepositoryFamily;
use crate::options::RepoIdentity;

const POSTPONED_MESSAGE: &str = "Repository update postponed due to another operation. \
     Progress on this task can be viewed using the commands under \"repo tasks\"";

pub struct UpdateRepositoryCommand {
    family: RepositoryFamily,
}

impl UpdateRepositoryCommand {
    pub fn new(family: RepositoryFamily) -> Self {
        Self { family }
    }

    /// Send the settings the user supplied; nothing is defaulted, so options
    /// left out stay unchanged on the server.
    pub fn run(&self, ctx: &mut CommandContext<'_>, mut args: RawArguments) -> Result<()> {
        let identity = RepoIdentity::take(&mut args)?;

        let Some(importer_config) = self.build(ctx, &args, RepositoryFamily::importer_config)?
        else {
            return Ok(());
        };
        let Some(distributor_config) =
            self.build(ctx, &args, RepositoryFamily::distributor_config)?
        else {
            return Ok(());
        };

        let request = UpdateRepository {
            id: identity.id,
            display_name: identity.display_name,
            description: identity.description,
            notes: identity.notes,
            importer_config,
            distributor_configs: BTreeMap::from([(
                self.family.distributor_type_id.to_string(),
                distributor_config,
            )]),
        };

        let response = ctx.server.update_repo_and_plugins(&request)?;

        if response.is_async() {
            ctx.prompt.render_paragraph(POSTPONED_MESSAGE);
            ctx.prompt.render_reasons(response.reasons());
        } else {
            ctx.prompt
                .render_success_message(&format!("Repository [{}] successfully updated", request.id));
        }
        Ok(())
    }

    /// Run one config builder; `None` once an invalid option was reported
    fn build(
        &self,
        ctx: &mut CommandContext<'_>,
        args: &RawArguments,
        builder: impl Fn(&RepositoryFamily, &RawArguments) -> winrepo_meta::Result<PluginConfig>,
    ) -> Result<Option<PluginConfig>> {
        match builder(&self.family, args) {
            Ok(config) => Ok(Some(config)),
            Err(winrepo_meta::Error::InvalidConfig { message }) => {
                ctx.prompt.render_failure_message(&message);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
