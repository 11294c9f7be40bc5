//! Invoice API Module

mod handler;

use axum::{Router, routing::get};

use crate::state::MockState;

/// Invoice router
pub fn router() -> Router<MockState> {
    Router::new()
        .route("/invoice/{branch}/date/{date}", get(handler::daily))
        .route("/invoice/{branch}/dashboard", get(handler::dashboard))
}
