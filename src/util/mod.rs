//! Utility functions shared by the gateway.
//!
//! - **Base URL validation**: HTTPS enforcement for the upstream API address

mod url_validator;

pub use url_validator::{validate_base_url, BaseUrlError};
