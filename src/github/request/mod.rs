pub mod branch_ref_request;
pub mod commit_request;
pub mod pull_request_request;
pub mod tree_request;
