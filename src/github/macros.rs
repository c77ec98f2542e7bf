use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder,
};

const GITHUB_API_VERSION: &str = "2022-11-28";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const USER_AGENT_NAME: &str = "prbot";

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, USER_AGENT_NAME)
    }
}

#[macro_export]
macro_rules! get {
    ($client:expr, $url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $client
            .http()
            .get($url)
            .default_headers($client.token())
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! post {
    ($client:expr, $url:expr, $body:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $client
            .http()
            .post($url)
            .default_headers($client.token())
            .json(&$body)
            .send()
            .await
            .handle()
            .await
    }};
}
