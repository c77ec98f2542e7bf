use crate::{
    config::Config,
    credential::Credential,
    git::tree::{self, TreeEntry},
    github::{BuilderExecutor, GithubClient},
};
use anyhow::{Context, Result};

#[derive(Debug)]
pub struct PipelineOutput {
    pub ref_url: String,
    pub pull_request_url: String,
}

/// Uploads `config.files` as a new branch and opens a pull request for it.
///
/// Every file is read before the first request is sent. The remote steps run
/// strictly in order and stop at the first failure; objects created by earlier
/// steps stay on the remote.
pub async fn run(config: &Config, credential: &Credential) -> Result<PipelineOutput> {
    let entries = tree::entries_from_files(&config.files)
        .await
        .context("Cannot build the tree entries")?;

    let client = GithubClient::new(&config.api_url, credential.clone());

    publish(&client, config, entries).await
}

async fn publish(
    client: &GithubClient,
    config: &Config,
    entries: Vec<TreeEntry>,
) -> Result<PipelineOutput> {
    let repo = client.repo(&config.owner, &config.repo);

    log::debug!("Resolving base branch {}", config.base_branch);
    let base = repo
        .branch(&config.base_branch)
        .get_ref()
        .await
        .with_context(|| format!("Error getting the {} branch ref", config.base_branch))?;
    let base_sha = base.object.sha;

    log::debug!("Creating tree on top of {}", base_sha);
    let tree = repo
        .trees()
        .create()
        .base_tree(&base_sha)
        .entries(entries)
        .execute()
        .await
        .context("Error creating the tree")?;

    log::debug!("Creating commit for tree {}", tree.sha);
    let mut commit = repo
        .commits()
        .create()
        .message(&config.commit_message)
        .tree(&tree.sha)
        .parent(&base_sha);
    if let Some(committer) = &config.committer {
        commit = commit.committer(committer);
    }
    let commit = commit
        .execute()
        .await
        .context("Error creating the commit")?;

    log::debug!("Creating branch {}", config.pr_branch);
    let reference = repo
        .branches()
        .create()
        .branch(&config.pr_branch)
        .sha(&commit.sha)
        .execute()
        .await
        .with_context(|| {
            format!(
                "Error creating the branch {}, commit {} was left unreferenced",
                config.pr_branch, commit.sha
            )
        })?;
    log::debug!("created {}", reference.r#ref);

    let head = format!("{}:{}", config.owner, config.pr_branch);
    log::info!("pr head: {}", head);
    let pull_request = repo
        .pull_request()
        .create()
        .title(&config.pr_title)
        .head(&head)
        .base(&config.base_branch)
        .body(&config.pr_body)
        .execute()
        .await
        .with_context(|| {
            format!(
                "Error creating the pull request, branch {} was created and must be removed manually",
                config.pr_branch
            )
        })?;

    Ok(PipelineOutput {
        ref_url: reference.url,
        pull_request_url: pull_request.html_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::committer::Committer;
    use mockito::{Matcher, Mock, Server, ServerGuard};
    use serde_json::json;
    use std::{fs::File, io::Write, path::PathBuf};
    use tempdir::TempDir;

    const REF_URL: &str = "https://api.github.com/repos/acme/widgets/git/refs/heads/feature-x";
    const PR_URL: &str = "https://github.com/acme/widgets/pull/1";

    fn config(api_url: String, files: Vec<PathBuf>) -> Config {
        Config {
            files,
            pr_branch: "feature-x".to_owned(),
            owner: "acme".to_owned(),
            repo: "widgets".to_owned(),
            base_branch: "master".to_owned(),
            commit_message: "this is commit message".to_owned(),
            pr_title: "this is pull request title".to_owned(),
            pr_body: "this is pull request body".to_owned(),
            committer: None,
            api_url,
        }
    }

    fn notes_file(dir: &TempDir) -> std::io::Result<PathBuf> {
        let path = dir.path().join("notes.txt");
        File::create(&path)?.write_all(b"hello")?;
        Ok(path)
    }

    async fn mock_base_ref(server: &mut ServerGuard) -> Mock {
        server
            .mock("GET", "/repos/acme/widgets/git/ref/heads/master")
            .match_header("authorization", "Bearer token")
            .with_body(
                json!({
                    "ref": "refs/heads/master",
                    "url": "https://api.github.com/repos/acme/widgets/git/refs/heads/master",
                    "object": { "sha": "aaa", "type": "commit" }
                })
                .to_string(),
            )
            .create_async()
            .await
    }

    async fn mock_tree(server: &mut ServerGuard) -> Mock {
        server
            .mock("POST", "/repos/acme/widgets/git/trees")
            .match_body(Matcher::Json(json!({
                "base_tree": "aaa",
                "tree": [
                    { "path": "notes.txt", "mode": "100644", "type": "blob", "content": "hello" }
                ]
            })))
            .with_status(201)
            .with_body(r#"{"sha":"bbb","url":"tree-url"}"#)
            .create_async()
            .await
    }

    async fn mock_commit(server: &mut ServerGuard, body: serde_json::Value) -> Mock {
        server
            .mock("POST", "/repos/acme/widgets/git/commits")
            .match_body(Matcher::Json(body))
            .with_status(201)
            .with_body(r#"{"sha":"ccc","url":"commit-url"}"#)
            .create_async()
            .await
    }

    fn default_commit_body() -> serde_json::Value {
        json!({ "message": "this is commit message", "tree": "bbb", "parents": ["aaa"] })
    }

    #[tokio::test]
    async fn should_open_a_pull_request() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("pipeline")?;
        let mut server = Server::new_async().await;

        let base_ref = mock_base_ref(&mut server).await;
        let tree = mock_tree(&mut server).await;
        let commit = mock_commit(&mut server, default_commit_body()).await;
        let branch = server
            .mock("POST", "/repos/acme/widgets/git/refs")
            .match_body(Matcher::Json(
                json!({ "ref": "refs/heads/feature-x", "sha": "ccc" }),
            ))
            .with_status(201)
            .with_body(
                json!({
                    "ref": "refs/heads/feature-x",
                    "url": REF_URL,
                    "object": { "sha": "ccc", "type": "commit" }
                })
                .to_string(),
            )
            .create_async()
            .await;
        let pull_request = server
            .mock("POST", "/repos/acme/widgets/pulls")
            .match_body(Matcher::Json(json!({
                "title": "this is pull request title",
                "head": "acme:feature-x",
                "base": "master",
                "body": "this is pull request body"
            })))
            .with_status(201)
            .with_body(
                json!({
                    "number": 1,
                    "state": "open",
                    "url": "https://api.github.com/repos/acme/widgets/pulls/1",
                    "html_url": PR_URL
                })
                .to_string(),
            )
            .create_async()
            .await;

        let config = config(server.url(), vec![notes_file(&dir)?]);
        let output = run(&config, &Credential::new("token")).await?;

        base_ref.assert_async().await;
        tree.assert_async().await;
        commit.assert_async().await;
        branch.assert_async().await;
        pull_request.assert_async().await;
        assert_eq!(output.ref_url, REF_URL);
        assert_eq!(output.pull_request_url, PR_URL);

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_not_open_a_pull_request_when_the_branch_exists(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("pipeline")?;
        let mut server = Server::new_async().await;

        let _base_ref = mock_base_ref(&mut server).await;
        let _tree = mock_tree(&mut server).await;
        let _commit = mock_commit(&mut server, default_commit_body()).await;
        let branch = server
            .mock("POST", "/repos/acme/widgets/git/refs")
            .with_status(422)
            .with_body(r#"{"message":"Reference already exists"}"#)
            .create_async()
            .await;
        let pull_request = server
            .mock("POST", "/repos/acme/widgets/pulls")
            .expect(0)
            .create_async()
            .await;

        let config = config(server.url(), vec![notes_file(&dir)?]);
        let result = run(&config, &Credential::new("token")).await;

        branch.assert_async().await;
        pull_request.assert_async().await;
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Reference already exists"));
        assert!(message.contains("ccc"));

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_not_call_github_when_a_file_is_missing(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("pipeline")?;
        let mut server = Server::new_async().await;

        let reads = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let writes = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let config = config(
            server.url(),
            vec![notes_file(&dir)?, dir.path().join("missing.txt")],
        );
        let result = run(&config, &Credential::new("token")).await;

        reads.assert_async().await;
        writes.assert_async().await;
        assert!(result.is_err());

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_stop_when_the_base_branch_is_missing(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("pipeline")?;
        let mut server = Server::new_async().await;

        let base_ref = server
            .mock("GET", "/repos/acme/widgets/git/ref/heads/master")
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;
        let writes = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let config = config(server.url(), vec![notes_file(&dir)?]);
        let result = run(&config, &Credential::new("token")).await;

        base_ref.assert_async().await;
        writes.assert_async().await;
        assert!(format!("{:#}", result.unwrap_err()).contains("404: Not Found"));

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_send_the_configured_committer() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("pipeline")?;
        let mut server = Server::new_async().await;

        let _base_ref = mock_base_ref(&mut server).await;
        let _tree = mock_tree(&mut server).await;
        let commit = mock_commit(
            &mut server,
            json!({
                "message": "this is commit message",
                "tree": "bbb",
                "parents": ["aaa"],
                "committer": { "name": "Bot", "email": "bot@example.com" }
            }),
        )
        .await;
        let _branch = server
            .mock("POST", "/repos/acme/widgets/git/refs")
            .with_status(500)
            .with_body(r#"{"message":"Server Error"}"#)
            .create_async()
            .await;

        let mut config = config(server.url(), vec![notes_file(&dir)?]);
        config.committer = Some(Committer {
            author: "Bot".to_owned(),
            email: "bot@example.com".to_owned(),
        });
        let result = run(&config, &Credential::new("token")).await;

        commit.assert_async().await;
        assert!(result.is_err());

        dir.close()?;
        Ok(())
    }
}
