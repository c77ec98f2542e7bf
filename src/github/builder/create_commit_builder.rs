use super::BuilderExecutor;
use crate::{
    git::committer::Committer,
    github::{request::commit_request::CommitRequest, response::Sha, GithubClient},
};
use anyhow::Result;

pub struct CreateCommitBuilder<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    message: String,
    tree: String,
    parents: Vec<String>,
    committer: Option<Committer>,
}

impl<'a> CreateCommitBuilder<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        CreateCommitBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            message: String::new(),
            tree: String::new(),
            parents: vec![],
            committer: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn tree(mut self, tree: impl Into<String>) -> Self {
        self.tree = tree.into();
        self
    }

    pub fn parent(mut self, sha: impl Into<String>) -> Self {
        self.parents.push(sha.into());
        self
    }

    pub fn committer(mut self, committer: &Committer) -> Self {
        self.committer = Some(committer.to_owned());
        self
    }
}

impl BuilderExecutor for CreateCommitBuilder<'_> {
    type Output = Sha;

    async fn execute(self) -> Result<Self::Output> {
        let request = CommitRequest::new(
            self.message,
            self.tree,
            self.parents,
            self.committer.map(Into::into),
        );

        self.client
            .create_commit(&self.owner, &self.repo, request)
            .await
    }
}
