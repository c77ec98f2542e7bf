use serde::Deserialize;

/// Response of the tree and commit endpoints, only the identifiers are kept.
#[derive(Debug, Deserialize, Default)]
pub struct Sha {
    pub sha: String,
    #[serde(default)]
    pub url: String,
}
