use crate::{cli::Cli, git::committer::Committer};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_OWNER: &str = "electricface";
const DEFAULT_REPO: &str = "pull-request-bot-test";
const DEFAULT_BASE_BRANCH_NAME: &str = "master";
const DEFAULT_COMMIT_MESSAGE: &str = "this is commit message";
const DEFAULT_PR_TITLE: &str = "this is pull request title";
const DEFAULT_PR_BODY: &str = "this is pull request body";
const DEFAULT_API_URL: &str = "https://api.github.com";

const DEFAULT_SETTINGS_FILE_NAME: &str = "prbot.yaml";

/// Resolved run configuration, built once at startup.
#[derive(Debug)]
pub struct Config {
    pub files: Vec<PathBuf>,
    pub pr_branch: String,
    pub owner: String,
    pub repo: String,
    pub base_branch: String,
    pub commit_message: String,
    pub pr_title: String,
    pub pr_body: String,
    pub committer: Option<Committer>,
    pub api_url: String,
}

impl Config {
    pub async fn load(cli: Cli) -> Result<Config> {
        let settings = Settings::load(cli.config.as_deref()).await?;

        Config::resolve(cli, settings)
    }

    /// Merges CLI flags over the settings file. Fails on an empty `--pr-branch`
    /// so nothing is read or sent for a run that could never open a pull request.
    pub fn resolve(cli: Cli, settings: Settings) -> Result<Config> {
        let pr_branch = cli.pr_branch.trim().to_owned();
        if pr_branch.is_empty() {
            bail!("empty pr branch");
        }

        Ok(Config {
            files: cli.files,
            pr_branch,
            owner: cli
                .owner
                .or(settings.owner)
                .unwrap_or_else(|| DEFAULT_OWNER.to_owned()),
            repo: cli
                .repo
                .or(settings.repo)
                .unwrap_or_else(|| DEFAULT_REPO.to_owned()),
            base_branch: settings.base_branch,
            commit_message: settings.commit_message,
            pr_title: settings.pull_request.title,
            pr_body: settings.pull_request.body,
            committer: settings.commit_author.map(Committer::from),
            api_url: settings.api_url,
        })
    }
}

/// Optional YAML settings file. Every key has a default.
#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    pub owner: Option<String>,
    pub repo: Option<String>,
    #[serde(default = "Settings::default_base_branch_name")]
    pub base_branch: String,
    #[serde(default = "Settings::default_commit_message")]
    pub commit_message: String,
    pub commit_author: Option<CommitterConfig>,
    #[serde(default)]
    pub pull_request: PullRequestConfig,
    #[serde(default = "Settings::default_api_url")]
    pub api_url: String,
}

impl Settings {
    pub async fn load(path: Option<&Path>) -> Result<Settings> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_SETTINGS_FILE_NAME).is_file() => {
                Path::new(DEFAULT_SETTINGS_FILE_NAME)
            }
            None => return Ok(Settings::default()),
        };

        log::debug!("reading settings from {}", path.display());
        let settings_string = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read the settings file {}", path.display()))?;

        let settings = serde_yaml::from_str::<Settings>(&settings_string)
            .with_context(|| format!("Cannot parse the settings file {}", path.display()))?;

        Ok(settings)
    }

    fn default_base_branch_name() -> String {
        DEFAULT_BASE_BRANCH_NAME.to_owned()
    }

    fn default_commit_message() -> String {
        DEFAULT_COMMIT_MESSAGE.to_owned()
    }

    fn default_api_url() -> String {
        DEFAULT_API_URL.to_owned()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            owner: None,
            repo: None,
            base_branch: Settings::default_base_branch_name(),
            commit_message: Settings::default_commit_message(),
            commit_author: None,
            pull_request: PullRequestConfig::default(),
            api_url: Settings::default_api_url(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommitterConfig {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PullRequestConfig {
    #[serde(default = "PullRequestConfig::default_title")]
    pub title: String,
    #[serde(default = "PullRequestConfig::default_body")]
    pub body: String,
}

impl Default for PullRequestConfig {
    fn default() -> Self {
        PullRequestConfig {
            title: PullRequestConfig::default_title(),
            body: PullRequestConfig::default_body(),
        }
    }
}

impl PullRequestConfig {
    fn default_title() -> String {
        DEFAULT_PR_TITLE.to_owned()
    }

    fn default_body() -> String {
        DEFAULT_PR_BODY.to_owned()
    }
}
