pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ReqwestTransport;
pub use crate::core::{
    fetcher::{extract_raw_list, fetch_books, BookFetcher},
    normalizer::normalize,
};
pub use domain::model::{AuthorField, CanonicalBook, Identifier, RawRecord};
pub use domain::ports::{ConfigProvider, Transport};
pub use utils::error::{BookError, Result};
