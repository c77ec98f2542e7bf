use super::{
    dto::pull_request_dto::PullRequestDto,
    request::{
        branch_ref_request::BranchRefRequest, commit_request::CommitRequest,
        pull_request_request::PullRequestRequest, tree_request::TreeRequest,
    },
    response::{PullRequest, Reference, Sha},
};
use crate::{credential::Credential, get, http, http::HttpClient, post};
use anyhow::Result;

/// Client for the git data and pull request endpoints of one GitHub API host.
pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    credential: Credential,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, credential: Credential) -> Self {
        let api_url: String = api_url.into();

        GithubClient {
            http: HttpClient::new(),
            api_url: api_url.trim_end_matches('/').to_owned(),
            credential,
        }
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn token(&self) -> &str {
        self.credential.token()
    }

    fn repo_uri(&self, owner: &str, repo: &str, path: &str) -> String {
        format!("{}/repos/{}/{}/{}", self.api_url, owner, repo, path)
    }

    pub(super) async fn get_ref(&self, owner: &str, repo: &str, r#ref: &str) -> Result<Reference> {
        let uri = self.repo_uri(owner, repo, &format!("git/ref/{}", r#ref));
        log::debug!("GET {}", uri);

        let response = get!(self, &uri)?;

        let reference = http::parse::<Reference>(&response)?;
        log::debug!(
            "{} points at {} {}",
            reference.r#ref,
            reference.object.r#type,
            reference.object.sha
        );

        Ok(reference)
    }

    pub(super) async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        request: TreeRequest,
    ) -> Result<Sha> {
        let uri = self.repo_uri(owner, repo, "git/trees");
        log::debug!("POST {} ({} entries)", uri, request.tree.len());

        let response = post!(self, &uri, request)?;

        let tree = http::parse::<Sha>(&response)?;
        log::debug!("created tree {} at {}", tree.sha, tree.url);

        Ok(tree)
    }

    pub(super) async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        request: CommitRequest,
    ) -> Result<Sha> {
        let uri = self.repo_uri(owner, repo, "git/commits");
        log::debug!("POST {}", uri);

        let response = post!(self, &uri, request)?;

        let commit = http::parse::<Sha>(&response)?;
        log::debug!("created commit {} at {}", commit.sha, commit.url);

        Ok(commit)
    }

    pub(super) async fn create_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<Reference> {
        let uri = self.repo_uri(owner, repo, "git/refs");
        log::debug!("POST {}", uri);

        let request = BranchRefRequest::new(branch, sha);

        let response = post!(self, &uri, request)?;

        let reference = http::parse::<Reference>(&response)?;

        Ok(reference)
    }

    pub(super) async fn create_pull_request(
        &self,
        pull_request: PullRequestDto,
    ) -> Result<PullRequest> {
        log::debug!("Creating pull request");
        let uri = self.repo_uri(&pull_request.owner, &pull_request.repo, "pulls");

        let request = PullRequestRequest::from(pull_request);

        let response = post!(self, &uri, request)?;

        let pr = http::parse::<PullRequest>(&response)?;
        log::debug!("pull request #{} is {} ({})", pr.number, pr.state, pr.url);

        Ok(pr)
    }
}
