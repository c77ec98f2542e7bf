use super::{
    branch_handler::BranchHandler, branches_handler::BranchesHandler,
    commits_handler::CommitsHandler, pull_request_handler::PullRequestHandler,
    trees_handler::TreesHandler,
};
use crate::github::GithubClient;

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn branch(&self, branch: impl Into<String>) -> BranchHandler<'a> {
        BranchHandler::new(self.client, &self.owner, &self.repo, branch)
    }

    pub fn branches(&self) -> BranchesHandler<'a> {
        BranchesHandler::new(self.client, &self.owner, &self.repo)
    }

    pub fn trees(&self) -> TreesHandler<'a> {
        TreesHandler::new(self.client, &self.owner, &self.repo)
    }

    pub fn commits(&self) -> CommitsHandler<'a> {
        CommitsHandler::new(self.client, &self.owner, &self.repo)
    }

    pub fn pull_request(&self) -> PullRequestHandler<'a> {
        PullRequestHandler::new(self.client, &self.owner, &self.repo)
    }
}
