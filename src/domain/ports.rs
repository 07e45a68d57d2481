use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Network seam: issue one GET and decode the body as JSON.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}
