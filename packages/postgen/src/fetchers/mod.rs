//! Fetcher implementations.
//!
//! The pipeline only depends on the
//! [`ContentFetcher`](crate::traits::ContentFetcher) trait; this module
//! supplies a reference HTTP implementation for callers that do not bring
//! their own.

mod http;

pub use http::HttpFetcher;
