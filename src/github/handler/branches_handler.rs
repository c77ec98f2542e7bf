use crate::github::{builder::create_branch_builder::CreateBranchBuilder, GithubClient};

pub struct BranchesHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> BranchesHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        BranchesHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn create(&self) -> CreateBranchBuilder<'a> {
        CreateBranchBuilder::new(self.client, &self.owner, &self.repo)
    }
}
