use crate::config::CommitterConfig;

#[derive(Debug, Clone)]
pub struct Committer {
    pub author: String,
    pub email: String,
}

impl From<CommitterConfig> for Committer {
    fn from(value: CommitterConfig) -> Self {
        Committer {
            author: value.name,
            email: value.email,
        }
    }
}
