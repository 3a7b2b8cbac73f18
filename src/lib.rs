//! GraphQL gateway over the HNPWA Hacker News REST API.
//!
//! Each GraphQL field maps to exactly one upstream `GET`:
//!
//! | field | upstream |
//! |---|---|
//! | `item(id)` | `/item/{id}.json` |
//! | `user(id)` | `/user/{id}.json` |
//! | `feeds(type, index)` | `/{type}/{index}.json` |
//!
//! Feed pages are checked against a static page table before any request
//! is made. Nothing is cached or retried.

pub mod config;
pub mod graphql;
pub mod hn;
pub mod server;
pub mod util;
