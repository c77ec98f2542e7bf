pub mod committer;
pub mod tree;
