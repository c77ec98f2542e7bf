use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Object {
    pub sha: String,
    pub r#type: String,
}
