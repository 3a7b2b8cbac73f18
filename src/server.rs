//! HTTP surface: GraphQL over `POST /graphql`, GraphiQL on `GET /graphql`,
//! and a `GET /health` liveness probe.

use crate::config::Config;
use crate::graphql::{build_schema, GatewaySchema};
use crate::hn::HnClient;
use crate::util::BaseUrlError;
use async_graphql::http::GraphiQLSource;
use async_graphql::{BatchRequest, BatchResponse, ServerError};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::future::Future;
use thiserror::Error;
use tokio::net::TcpListener;

const GRAPHQL_PATH: &str = "/graphql";

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("Invalid upstream base URL: {0}")]
    BaseUrl(#[from] BaseUrlError),
}

/// Wire the upstream client, schema and routes together from `config`.
pub fn app(config: &Config) -> Result<Router, StartupError> {
    let http = reqwest::Client::builder()
        .user_agent(concat!("hn-gateway/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let client = HnClient::new(http, &config.base_url)?
        .with_timeout(config.request_timeout())
        .with_max_response_bytes(config.max_response_bytes);

    tracing::info!(
        base_url = %client.base_url(),
        timeout_secs = config.request_timeout_secs,
        max_depth = config.max_query_depth,
        "Upstream client configured"
    );

    let schema = build_schema(client, config.query_limits());
    Ok(router(schema, config.graphiql))
}

pub fn router(schema: GatewaySchema, graphiql: bool) -> Router {
    let mut graphql = post(graphql_handler);
    if graphiql {
        graphql = graphql.get(graphiql_page);
    }

    Router::new()
        .route(GRAPHQL_PATH, graphql)
        .route("/health", get(health))
        .with_state(schema)
}

/// Serve `router` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(addr = %addr, path = GRAPHQL_PATH, "GraphQL endpoint listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Accepts a single request object or an array of them.
///
/// Bodies that are not a GraphQL request still get a GraphQL-shaped
/// `errors` response, with the rejection's status code.
async fn graphql_handler(
    State(schema): State<GatewaySchema>,
    request: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected malformed GraphQL request body");
            let response = async_graphql::Response::from_errors(vec![ServerError::new(
                rejection.body_text(),
                None,
            )]);
            return (rejection.status(), Json(BatchResponse::Single(response))).into_response();
        }
    };

    let response = schema.execute_batch(request).await;

    let errors: usize = match &response {
        BatchResponse::Single(r) => r.errors.len(),
        BatchResponse::Batch(rs) => rs.iter().map(|r| r.errors.len()).sum(),
    };
    if errors > 0 {
        tracing::debug!(errors, "GraphQL request completed with errors");
    }

    Json(response).into_response()
}

async fn graphiql_page() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}
