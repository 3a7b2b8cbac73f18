//! Access to the HNPWA Hacker News REST API.
//!
//! - [`client`] - one-shot JSON GETs with a timeout and body size cap
//! - [`feeds`] - the five paginated listings and their page counts
//! - [`types`] - typed mirrors of the upstream JSON

mod client;
mod feeds;
mod types;

pub use client::{
    HnClient, UpstreamError, DEFAULT_BASE_URL, DEFAULT_MAX_RESPONSE_BYTES, DEFAULT_TIMEOUT,
};
pub use feeds::{checked_page, is_valid_page, FeedKind, UnknownFeedKind};
pub use types::{FeedItem, Item, User};
