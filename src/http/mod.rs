use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use std::ops::Deref;
use thiserror::Error;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to send request")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("{status}: {message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub trait ResponseHandler {
    /// Returns the body of a 2xx response, anything else is an error.
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Result<reqwest::Response> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);

            return Err(Error::GenericResponseError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(text)
    }
}

pub fn parse<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(text).map_err(|cause| Error::ParseResponseError { cause })
}
