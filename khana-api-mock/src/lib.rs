//! Khana API Mock - in-memory stand-in for the restaurant backend
//!
//! Serves the same routes and error envelope the admin console talks to,
//! backed by a [`MockState`] that tests seed directly.

pub mod api;
pub mod auth;
pub mod seed;
pub mod state;

use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use auth::CurrentUser;
pub use state::{MockState, Store};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<MockState> {
    Router::new()
        .merge(api::invoice::router())
        .merge(api::user::router())
        .merge(api::branch::router())
}

/// Build the fully configured application under `/api`
pub fn build_app(state: MockState) -> Router {
    let api = build_router().layer(axum::middleware::from_fn_with_state(
        state.clone(),
        auth::require_auth,
    ));

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `state` on an ephemeral local port, returning the bound address
pub async fn spawn(state: MockState) -> std::io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = build_app(state);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "mock server stopped");
        }
    });
    Ok(addr)
}
