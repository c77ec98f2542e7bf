use crate::github::{builder::create_commit_builder::CreateCommitBuilder, GithubClient};

pub struct CommitsHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> CommitsHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        CommitsHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn create(&self) -> CreateCommitBuilder<'a> {
        CreateCommitBuilder::new(self.client, &self.owner, &self.repo)
    }
}
