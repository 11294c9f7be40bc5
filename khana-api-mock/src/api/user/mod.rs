//! User API Module

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::MockState;

/// User router
pub fn router() -> Router<MockState> {
    Router::new()
        .route("/user/branch/{branch}", get(handler::list))
        .route("/user/get-id/{id}", get(handler::get_by_id))
        .route("/user/post", post(handler::create))
        .route("/user/update/{id}", put(handler::update))
        .route("/user/delete/{id}", delete(handler::delete))
}
