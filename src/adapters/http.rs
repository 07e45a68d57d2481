use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        match config.request_timeout() {
            Some(timeout) => Self::with_timeout(timeout),
            None => Ok(Self::new()),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;

        // Bodies that are empty or not JSON carry no records.
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BookError;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_get_json_decodes_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/books");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"books": []}));
        });

        let transport = ReqwestTransport::new();
        let body = transport.get_json(&server.url("/books")).await.unwrap();

        api_mock.assert();
        assert_eq!(body, serde_json::json!({"books": []}));
    }

    #[tokio::test]
    async fn test_get_json_rejects_error_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/books");
            then.status(503);
        });

        let transport = ReqwestTransport::with_timeout(Duration::from_secs(5)).unwrap();
        let result = transport.get_json(&server.url("/books")).await;

        api_mock.assert();
        match result {
            Err(BookError::Http(e)) => assert!(e.is_status()),
            other => panic!("expected an HTTP status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_json_non_json_body_is_null() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/books");
            then.status(200).body("<html>not json</html>");
        });
        server.mock(|when, then| {
            when.method(GET).path("/empty");
            then.status(204);
        });

        let transport = ReqwestTransport::new();

        let html = transport.get_json(&server.url("/books")).await.unwrap();
        let empty = transport.get_json(&server.url("/empty")).await.unwrap();

        assert_eq!(html, serde_json::Value::Null);
        assert_eq!(empty, serde_json::Value::Null);
    }
}
