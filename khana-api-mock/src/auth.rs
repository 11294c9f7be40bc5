//! 认证中间件
//!
//! Resolves `Authorization: Bearer <token>` to a seeded user and injects it
//! into the request extensions as [`CurrentUser`].

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::models::User;
use shared::{AppError, ErrorCode};
use tracing::warn;

use crate::state::MockState;

/// The authenticated caller
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// 认证中间件 - 要求用户登录
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 NotAuthenticated |
/// | 未知令牌 | 401 TokenInvalid |
pub async fn require_auth(
    State(state): State<MockState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .map(str::to_string);

    let Some(token) = token else {
        warn!(uri = %req.uri(), "auth_missing");
        return Err(AppError::not_authenticated());
    };

    let user = {
        let store = state.store().read().await;
        store
            .tokens
            .get(&token)
            .and_then(|id| store.users.iter().find(|u| &u.id == id))
            .cloned()
    };

    match user {
        Some(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            Ok(next.run(req).await)
        }
        None => {
            warn!(uri = %req.uri(), "auth_failed");
            Err(AppError::new(ErrorCode::TokenInvalid))
        }
    }
}
