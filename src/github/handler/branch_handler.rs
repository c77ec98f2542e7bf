use crate::github::{response::Reference, GithubClient};
use anyhow::Result;

pub struct BranchHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    branch: String,
}

impl<'a> BranchHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        BranchHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
        }
    }

    /// Fetches `heads/<branch>`.
    pub async fn get_ref(&self) -> Result<Reference> {
        self.client
            .get_ref(&self.owner, &self.repo, &format!("heads/{}", self.branch))
            .await
    }
}
