use crate::github::{builder::create_tree_builder::CreateTreeBuilder, GithubClient};

pub struct TreesHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> TreesHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        TreesHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn create(&self) -> CreateTreeBuilder<'a> {
        CreateTreeBuilder::new(self.client, &self.owner, &self.repo)
    }
}
