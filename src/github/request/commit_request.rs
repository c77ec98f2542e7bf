use crate::git::committer::Committer;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommitterRequest {
    pub name: String,
    pub email: String,
}

impl From<Committer> for CommitterRequest {
    fn from(committer: Committer) -> Self {
        CommitterRequest {
            name: committer.author,
            email: committer.email,
        }
    }
}

#[derive(Serialize)]
pub struct CommitRequest {
    pub message: String,
    pub tree: String,
    pub parents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer: Option<CommitterRequest>,
}

impl CommitRequest {
    pub fn new(
        message: impl Into<String>,
        tree: impl Into<String>,
        parents: Vec<String>,
        committer: Option<CommitterRequest>,
    ) -> Self {
        CommitRequest {
            message: message.into(),
            tree: tree.into(),
            parents,
            committer,
        }
    }
}
