use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct BranchRefRequest {
    pub r#ref: String,
    pub sha: String,
}

impl BranchRefRequest {
    pub fn new(branch: impl Into<String>, sha: impl Into<String>) -> Self {
        let branch: String = branch.into();

        Self {
            r#ref: format!("refs/heads/{}", branch),
            sha: sha.into(),
        }
    }
}
