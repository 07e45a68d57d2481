use crate::adapters::ReqwestTransport;
use crate::core::normalizer::normalize;
use crate::domain::model::{CanonicalBook, RawRecord};
use crate::domain::ports::Transport;
use crate::utils::error::{BookError, Result};
use crate::utils::validation::validate_api_url;
use serde_json::Value;

pub struct BookFetcher<T: Transport> {
    transport: T,
}

impl<T: Transport> BookFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches `api_url` once and normalizes every record in order.
    ///
    /// An empty URL fails with [`BookError::InvalidArgument`] before the
    /// transport is touched. Any transport or response failure is reported as
    /// [`BookError::FetchFailed`] carrying only the underlying message.
    pub async fn fetch(&self, api_url: &str) -> Result<Vec<CanonicalBook>> {
        validate_api_url(api_url)?;

        let payload = self
            .transport
            .get_json(api_url)
            .await
            .map_err(BookError::fetch_failed)?;

        let raw_list = extract_raw_list(payload);
        tracing::debug!("Extracted {} raw records", raw_list.len());

        Ok(raw_list
            .into_iter()
            .map(|value| normalize(&RawRecord::from_value(value)))
            .collect())
    }
}

impl Default for BookFetcher<ReqwestTransport> {
    fn default() -> Self {
        Self::new(ReqwestTransport::new())
    }
}

/// Fetches with a default reqwest-backed transport.
pub async fn fetch_books(api_url: &str) -> Result<Vec<CanonicalBook>> {
    BookFetcher::default().fetch(api_url).await
}

/// Accepts a bare array or an object with a `books` array; anything else is empty.
pub fn extract_raw_list(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("books") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
