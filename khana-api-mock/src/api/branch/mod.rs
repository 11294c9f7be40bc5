//! Branch API Module

mod handler;

use axum::{Router, routing::post};

use crate::state::MockState;

/// Branch router
pub fn router() -> Router<MockState> {
    Router::new().route("/branch/setup-wizard", post(handler::setup_wizard))
}
