use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Connection parameters for the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The backend contract: submit a verification, list stored URLs,
/// delete one URL by value.
#[async_trait::async_trait]
pub trait ContentApi: Send + Sync {
    /// POST `{url, words}`; returns the server's confirmation message.
    async fn submit_check(&self, url: &str, words: &[String]) -> Result<String, ApiError>;
    /// GET the stored URLs; HTTP 204 maps to the empty list.
    async fn list_urls(&self) -> Result<Vec<String>, ApiError>;
    /// DELETE one URL, carried in the request body.
    async fn delete_url(&self, url: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Serialize)]
struct CheckRequest<'a> {
    url: &'a str,
    words: &'a [String],
}

#[derive(Debug, Serialize)]
struct DeleteRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct UrlRecord {
    url: String,
}

#[derive(Debug, Clone)]
pub struct ReqwestContentApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestContentApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl ContentApi for ReqwestContentApi {
    async fn submit_check(&self, url: &str, words: &[String]) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/api/v1/content/check"))
            .json(&CheckRequest { url, words })
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_body(status, response).await);
        }
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|_| ApiError::InvalidResponse)?;
        first_message(&body).ok_or(ApiError::InvalidResponse)
    }

    async fn list_urls(&self) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/api/v1/content"))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        // A 404 here means nobody is serving the API at all.
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::ServerUnreachable);
        }
        if !status.is_success() {
            return Err(error_from_body(status, response).await);
        }

        let records: Vec<UrlRecord> = response
            .json()
            .await
            .map_err(|_| ApiError::InvalidResponse)?;
        Ok(records.into_iter().map(|record| record.url).collect())
    }

    async fn delete_url(&self, url: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.endpoint("/api/v1/content"))
            .json(&DeleteRequest { url })
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_body(status, response).await);
        }
        Ok(())
    }
}

/// Error bodies are single-key objects whose first value is the message.
fn first_message(body: &serde_json::Value) -> Option<String> {
    body.as_object()?
        .values()
        .next()
        .and_then(|value| value.as_str())
        .map(ToOwned::to_owned)
}

async fn error_from_body(status: StatusCode, response: reqwest::Response) -> ApiError {
    match response.json::<serde_json::Value>().await {
        Ok(body) => match first_message(&body) {
            Some(message) => ApiError::Application { message },
            None => ApiError::Http(status.as_u16()),
        },
        Err(_) => ApiError::Http(status.as_u16()),
    }
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    if err.is_connect() {
        return ApiError::ServerUnreachable;
    }
    ApiError::Network(err.to_string())
}
