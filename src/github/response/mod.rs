mod object;
mod pull_request_response;
mod reference_response;
mod sha_response;

pub use object::Object;
pub use pull_request_response::PullRequest;
pub use reference_response::Reference;
pub use sha_response::Sha;
