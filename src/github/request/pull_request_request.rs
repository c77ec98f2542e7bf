use crate::github::dto::pull_request_dto::PullRequestDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PullRequestRequest {
    pub title: String,
    pub head: String,
    pub base: String,
    pub body: String,
}

impl From<PullRequestDto> for PullRequestRequest {
    fn from(pull_request: PullRequestDto) -> Self {
        PullRequestRequest {
            title: pull_request.title,
            head: pull_request.head,
            base: pull_request.base,
            body: pull_request.pr_body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_drop_the_repository_coordinates() {
        let dto = PullRequestDto::new("acme", "widgets", "title", "acme:feature-x", "master", "body");

        assert_eq!(
            serde_json::to_value(PullRequestRequest::from(dto)).unwrap(),
            json!({ "title": "title", "head": "acme:feature-x", "base": "master", "body": "body" })
        );
    }
}
