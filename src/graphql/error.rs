use crate::hn::UpstreamError;
use async_graphql::{value, ErrorExtensions};
use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Failed to get data due to validation errors";
pub const INVALID_PAGE_MESSAGE: &str = "This is not a valid page number";

/// Errors a resolver can surface as a GraphQL field error.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Bad `(type, index)` pair. Raised before any upstream call.
    #[error("{}", VALIDATION_MESSAGE)]
    Validation { kind: String, index: i64 },

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ErrorExtensions for GatewayError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| match self {
            GatewayError::Validation { kind, index } => {
                e.set("code", "BAD_USER_INPUT");
                e.set("feed", kind.as_str());
                e.set("index", *index);
                e.set("validationErrors", value!({ "page": INVALID_PAGE_MESSAGE }));
            }
            GatewayError::Upstream(err) => {
                e.set("code", "UPSTREAM_ERROR");
                if let Some(status) = err.status() {
                    e.set("status", status);
                }
            }
        })
    }
}
