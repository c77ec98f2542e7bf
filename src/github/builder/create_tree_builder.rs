use super::BuilderExecutor;
use crate::{
    git::tree::TreeEntry,
    github::{request::tree_request::TreeRequest, response::Sha, GithubClient},
};
use anyhow::Result;

pub struct CreateTreeBuilder<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    base_tree: String,
    entries: Vec<TreeEntry>,
}

impl<'a> CreateTreeBuilder<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        CreateTreeBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            base_tree: String::new(),
            entries: vec![],
        }
    }

    pub fn base_tree(mut self, base_tree: impl Into<String>) -> Self {
        self.base_tree = base_tree.into();
        self
    }

    pub fn entries(mut self, entries: Vec<TreeEntry>) -> Self {
        self.entries = entries;
        self
    }
}

impl BuilderExecutor for CreateTreeBuilder<'_> {
    type Output = Sha;

    async fn execute(self) -> Result<Self::Output> {
        let request = TreeRequest::new(
            self.base_tree,
            self.entries.into_iter().map(Into::into).collect(),
        );

        self.client
            .create_tree(&self.owner, &self.repo, request)
            .await
    }
}
