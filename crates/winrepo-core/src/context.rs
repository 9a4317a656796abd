//! What a command needs from its surroundings

use winrepo_client::RepositoryApi;

use crate::prompt::Prompt;

/// Server connection and output target for one command invocation
pub struct CommandContext<'a> {
    pub server: &'a dyn RepositoryApi,
    pub prompt: &'a mut dyn Prompt,
}

impl<'a> CommandContext<'a> {
    pub fn new(server: &'a dyn RepositoryApi, prompt: &'a mut dyn Prompt) -> Self {
        Self { server, prompt }
    }
}
