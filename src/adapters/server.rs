//! HTTP surface of the lookup service.
//!
//! The lookup endpoint answers at `/` and `/parks` with one of:
//! - `?state=<code>`: plain-text park list (or a JSON array with `&format=json`)
//! - `?park=<name>`: JSON park record, or 400 `National Park not found.`

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;

use crate::core::lookup::{LookupQuery, LookupResponse, LookupService};
use crate::domain::ports::{ConfigProvider, ParkStore};
use crate::utils::error::{ParkError, Result};

/// Create the router with the lookup and health routes.
pub fn create_router<S: ParkStore + 'static>(service: Arc<LookupService<S>>) -> Router {
    Router::new()
        .route("/", get(lookup_handler::<S>))
        .route("/parks", get(lookup_handler::<S>))
        .route("/health", get(health_handler))
        .with_state(service)
}

/// Serve on an already bound listener until ctrl-c.
pub async fn serve<S: ParkStore + 'static>(listener: TcpListener, store: S) -> Result<()> {
    let app = create_router(Arc::new(LookupService::new(store)));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Bind to the configured address and serve.
pub async fn run_server<C: ConfigProvider, S: ParkStore + 'static>(config: &C, store: S) -> Result<()> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🏞️  Park lookup service listening on http://{}", listener.local_addr()?);
    serve(listener, store).await?;
    tracing::info!("Park lookup service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn lookup_handler<S: ParkStore + 'static>(
    State(service): State<Arc<LookupService<S>>>,
    Query(query): Query<LookupQuery>,
) -> std::result::Result<LookupResponse, ParkError> {
    tracing::debug!("Lookup request {:?}", query);
    service.handle(query).await
}

async fn health_handler() -> &'static str {
    "ok"
}

impl IntoResponse for LookupResponse {
    fn into_response(self) -> Response {
        match self {
            LookupResponse::ParkListText(text) => text.into_response(),
            LookupResponse::ParkListJson(names) => Json(names).into_response(),
            LookupResponse::Park(record) => Json(record).into_response(),
        }
    }
}

impl IntoResponse for ParkError {
    fn into_response(self) -> Response {
        let status = match &self {
            ParkError::ParkNotFound { name } => {
                tracing::debug!("No park file for {:?}", name);
                StatusCode::BAD_REQUEST
            }
            ParkError::StateNotFound { .. } => StatusCode::NOT_FOUND,
            ParkError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
            other => {
                tracing::error!("❌ Lookup failed: {} (Category: {:?})", other, other.category());
                return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response();
            }
        };
        (status, self.to_string()).into_response()
    }
}
