pub mod branch_handler;
pub mod branches_handler;
pub mod commits_handler;
pub mod pull_request_handler;
pub mod repository_handler;
pub mod trees_handler;

use super::github_client::GithubClient;
use repository_handler::RepositoryHandler;

/// Github repo handler access implementation
impl GithubClient {
    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }
}
