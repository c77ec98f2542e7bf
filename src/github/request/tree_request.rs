use crate::git::tree::TreeEntry;
use serde::Serialize;

#[derive(Serialize)]
pub struct TreeItemRequest {
    pub path: String,
    pub mode: String,
    pub r#type: String,
    pub content: String,
}

impl From<TreeEntry> for TreeItemRequest {
    fn from(entry: TreeEntry) -> Self {
        TreeItemRequest {
            path: entry.path,
            mode: entry.mode,
            r#type: entry.kind,
            content: entry.content,
        }
    }
}

#[derive(Serialize)]
pub struct TreeRequest {
    pub base_tree: String,
    pub tree: Vec<TreeItemRequest>,
}

impl TreeRequest {
    pub fn new(base_tree: impl Into<String>, tree: Vec<TreeItemRequest>) -> Self {
        TreeRequest {
            base_tree: base_tree.into(),
            tree,
        }
    }
}
