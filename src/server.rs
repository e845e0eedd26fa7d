use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::BackendClient;
use crate::cache::MemoryCache;
use crate::config::ServerConfig;
use crate::executor::ToolExecutor;
use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcResponse};

/// Maximum bytes per JSON-RPC message (1 MiB).
const MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// Body of `GET /`.
pub const LIVENESS_MESSAGE: &str = "Movie MCP gateway is running! Use POST / for MCP requests";

/// Build the HTTP router around an executor.
///
/// `POST /` carries JSON-RPC, `GET /` answers a liveness check, `OPTIONS`
/// succeeds everywhere and everything else is `405`.
pub fn router(executor: Arc<ToolExecutor>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/", get(liveness).post(rpc).fallback(fallback))
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(MAX_MESSAGE_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(executor)
}

/// Run the gateway until Ctrl-C.
///
/// Owns the cache: creates it, hands it to the executor and sweeps
/// expired entries on `config.cache_sweep_interval`.
pub async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let cache = Arc::new(MemoryCache::new());
    let backend = BackendClient::new(config.backend_url.clone(), config.backend_timeout)?;
    let executor = Arc::new(ToolExecutor::new(backend, cache.clone()));

    let sweeper = tokio::spawn(sweep_cache(cache, config.cache_sweep_interval));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        addr = %config.listen_addr,
        backend = %config.backend_url,
        "movie MCP gateway listening"
    );

    let result = axum::serve(listener, router(executor))
        .with_graceful_shutdown(shutdown_signal())
        .await;
    sweeper.abort();
    result?;

    tracing::info!("movie MCP gateway stopped");
    Ok(())
}

async fn sweep_cache(cache: Arc<MemoryCache>, every: std::time::Duration) {
    let mut ticker = tokio::time::interval(every);
    loop {
        ticker.tick().await;
        let removed = cache.purge_expired().await;
        if removed > 0 {
            tracing::debug!(removed, "purged expired cache entries");
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

async fn liveness() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"))],
        LIVENESS_MESSAGE,
    )
}

async fn rpc(
    State(executor): State<Arc<ToolExecutor>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let response = match body {
        Ok(body) => handlers::handle_message(&body, &executor).await,
        // Oversized or unreadable bodies still answer with a JSON-RPC envelope.
        Err(rejection) => {
            tracing::warn!(error = %rejection, "cannot read request body");
            JsonRpcResponse::error(None, JsonRpcError::parse_error(rejection.body_text()))
        }
    };
    let status = if response.is_parse_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    match serde_json::to_vec(&response) {
        Ok(json) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            json,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "cannot serialize response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
    }
}
