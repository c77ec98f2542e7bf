pub mod builder;
mod dto;
pub mod github_client;
pub mod handler;
pub mod macros;
mod request;
mod response;

pub use builder::BuilderExecutor;
pub use github_client::GithubClient;
