use super::object::Object;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Reference {
    pub r#ref: String,
    pub url: String,
    pub object: Object,
}
