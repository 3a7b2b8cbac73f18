//! GraphQL schema exposed by the gateway.
//!
//! # Example Queries
//!
//! ```graphql
//! query {
//!   feeds(type: "news", index: 1) { id title points user time_ago comments_count }
//!   item(id: 8863) { title comments { user content comments { user content } } }
//!   user(id: "pg") { karma created }
//! }
//! ```

mod error;
mod query;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::hn::HnClient;

pub use self::error::{GatewayError, INVALID_PAGE_MESSAGE, VALIDATION_MESSAGE};
pub use self::query::QueryRoot;

pub type GatewaySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Bounds applied to every incoming query before resolution starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    /// Maximum selection nesting, which bounds `item.comments` recursion.
    pub max_depth: usize,
    pub max_complexity: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_depth: 24,
            max_complexity: 2000,
        }
    }
}

/// Build the schema with the upstream client injected as context data.
pub fn build_schema(client: HnClient, limits: QueryLimits) -> GatewaySchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(client)
        .limit_depth(limits.max_depth)
        .limit_complexity(limits.max_complexity)
        .finish()
}
