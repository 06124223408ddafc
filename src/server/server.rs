//! HTTP server wiring.

use std::io;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;

use super::handlers;
use super::middleware::{cors, log_requests, recover_panics};
use super::state::{AppState, SharedState};

/// Build the router over the given state.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/qs", get(handlers::list_suites))
        .route("/qs/{name}/random", get(handlers::random_question))
        .route("/qs/{name}/{index}", get(handlers::indexed_question))
        .layer(from_fn(recover_panics))
        .layer(from_fn(cors))
        .layer(from_fn(log_requests))
        .with_state(state)
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: SharedState, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Run the question server until Ctrl-C.
pub async fn run(config: ServerConfig) -> io::Result<()> {
    if !config.content_dir.is_dir() {
        warn!(
            dir = %config.content_dir.display(),
            "content directory is not readable yet; requests will fail until it exists"
        );
    }

    let state = SharedState::new(AppState::from_config(&config));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        content = %config.content_dir.display(),
        "question server listening"
    );

    serve(listener, state, shutdown_signal()).await?;
    info!("question server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
