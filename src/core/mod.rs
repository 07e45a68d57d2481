pub mod fetcher;
pub mod normalizer;
