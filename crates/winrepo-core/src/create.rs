//! Create a repository of one family

use tracing::debug;
use winrepo_client::{CreateRepository, DistributorSpec};
use winrepo_meta::{PluginConfig, RawArguments};

use crate::context::CommandContext;
use crate::error::Result;
use crate::family::RepositoryFamily;
use crate::options::RepoIdentity;

pub struct CreateRepositoryCommand {
    family: RepositoryFamily,
}

impl CreateRepositoryCommand {
    pub fn new(family: RepositoryFamily) -> Self {
        Self { family }
    }

    /// Create the repository described by `args`.
    ///
    /// Invalid plugin options are reported through the prompt and end the
    /// command without contacting the server. Server errors are returned.
    pub fn run(&self, ctx: &mut CommandContext<'_>, mut args: RawArguments) -> Result<()> {
        let identity = RepoIdentity::take(&mut args)?;
        let mut notes = identity.notes.unwrap_or_default();
        self.family.tag_notes(&mut notes);

        let (importer_config, mut distributor_config) = match self.build_configs(&args) {
            Ok(configs) => configs,
            Err(winrepo_meta::Error::InvalidConfig { message }) => {
                ctx.prompt.render_failure_message(&message);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        (self.family.create_defaults)(&identity.id, &mut distributor_config);
        debug!(repo_id = %identity.id, config = ?distributor_config, "Distributor configuration after defaults");

        let request = CreateRepository {
            id: identity.id,
            display_name: identity.display_name,
            description: identity.description,
            notes,
            importer_type_id: self.family.importer_type_id.to_string(),
            importer_config,
            distributors: vec![DistributorSpec {
                distributor_type_id: self.family.distributor_type_id.to_string(),
                distributor_config,
                auto_publish: true,
                distributor_id: self.family.distributor_id.to_string(),
            }],
        };

        ctx.server.create_and_configure(&request)?;

        ctx.prompt
            .render_success_message(&format!("Successfully created repository [{}]", request.id));
        Ok(())
    }

    fn build_configs(&self, args: &RawArguments) -> winrepo_meta::Result<(PluginConfig, PluginConfig)> {
        let importer_config = self.family.importer_config(args)?;
        let distributor_config = self.family.distributor_config(args)?;
        Ok((importer_config, distributor_config))
    }
}
