mod api;
mod graphql;

use std::sync::Arc;

use anyhow::Result as AnyResult;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use paytrack_platform::ServiceConfig;
use paytrack_store::InMemoryPaymentStore;
use tracing::info;

use crate::api::PaymentApi;
use crate::graphql::{GraphqlRequest, GraphqlResponse};

#[derive(Clone)]
struct AppState {
    api: PaymentApi,
}

#[tokio::main]
async fn main() -> AnyResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "paytrack_gateway=info,paytrack_store=info".to_string()),
        )
        .init();

    let config = ServiceConfig::from_env("0.0.0.0:8080")?;
    let store = Arc::new(InMemoryPaymentStore::new());

    let state = AppState {
        api: PaymentApi::new(store),
    };
    let router = router(state);

    let addr = config.socket_addr()?;
    info!("payments gateway listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/graphql", post(graphql_endpoint))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn graphql_endpoint(
    State(state): State<AppState>,
    Json(request): Json<GraphqlRequest>,
) -> (StatusCode, Json<GraphqlResponse>) {
    let (status, response) = graphql::execute(&state.api, request).await;
    (status, Json(response))
}
