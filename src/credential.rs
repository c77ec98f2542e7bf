use anyhow::{bail, Context, Result};
use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
};

const TOKEN_FILE_NAME: &str = ".prbot-token";

/// GitHub access token, read once per run.
#[derive(Clone)]
pub struct Credential {
    token: String,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Credential {
            token: token.into(),
        }
    }

    /// Reads `~/.prbot-token`.
    pub fn load() -> Result<Credential> {
        let home = env::var_os("HOME").context("HOME is not set")?;

        Credential::load_from(Path::new(&home))
    }

    pub fn load_from(home: &Path) -> Result<Credential> {
        let path: PathBuf = home.join(TOKEN_FILE_NAME);

        let data = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read the token file {}", path.display()))?;

        let token = data.trim();
        if token.is_empty() {
            bail!("The token file {} is empty", path.display());
        }

        Ok(Credential::new(token))
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential").field("token", &"***").finish()
    }
}
