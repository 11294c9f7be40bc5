//! User API Handlers
//!
//! The server re-checks every action regardless of what the console showed.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use shared::models::{User, UserCreate, UserQuery, UserRole, UserUpdate};
use shared::{AppError, AppResult, ErrorCode, MessageResponse, PaginatedResponse, Pagination};
use tracing::info;

use crate::auth::CurrentUser;
use crate::state::MockState;

/// Paginated, searchable list of a branch's users
pub async fn list(
    State(state): State<MockState>,
    Path(branch): Path<String>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<PaginatedResponse<User>>> {
    let store = state.store().read().await;
    let needle = query.search.trim().to_lowercase();
    let matched: Vec<&User> = store
        .users
        .iter()
        .filter(|u| u.branch == branch)
        .filter(|u| {
            needle.is_empty()
                || u.name.to_lowercase().contains(&needle)
                || u.email.to_lowercase().contains(&needle)
        })
        .collect();

    let page = query.page.max(1);
    let limit = query.limit.max(1);
    let offset = u64::from(page - 1).saturating_mul(u64::from(limit));
    let data = matched
        .iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(limit as usize)
        .map(|u| (*u).clone())
        .collect();

    Ok(Json(PaginatedResponse::new(
        data,
        Pagination::new(page, limit, matched.len() as u64),
    )))
}

/// Get user by id
pub async fn get_by_id(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let store = state.store().read().await;
    store
        .users
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| user_not_found(&id))
}

/// Create a user
pub async fn create(
    State(state): State<MockState>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<User>> {
    require_manager(&actor)?;
    if payload.role.is_admin() && !actor.role.is_admin() {
        return Err(AppError::new(ErrorCode::AdminRequired));
    }
    for (field, value) in [
        ("name", &payload.name),
        ("email", &payload.email),
        ("password", &payload.password),
        ("branch", &payload.branch),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::required(field));
        }
    }

    let mut store = state.store().write().await;
    if store
        .users
        .iter()
        .any(|u| u.email.eq_ignore_ascii_case(&payload.email))
    {
        return Err(AppError::new(ErrorCode::UserEmailExists).with_detail("email", payload.email));
    }

    let user = User {
        id: state.next_user_id(),
        name: payload.name,
        email: payload.email,
        role: payload.role,
        branch: payload.branch,
        status: payload.status.or_else(|| Some("active".to_string())),
    };
    store.passwords.insert(user.id.clone(), payload.password);
    store.users.push(user.clone());
    info!(user_id = %user.id, "User created");
    Ok(Json(user))
}

/// Update a user
pub async fn update(
    State(state): State<MockState>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<User>> {
    let mut store = state.store().write().await;
    let idx = store
        .users
        .iter()
        .position(|u| u.id == id)
        .ok_or_else(|| user_not_found(&id))?;

    if actor.id == id {
        if payload.role.as_ref().is_some_and(|r| *r != actor.role) {
            return Err(AppError::permission_denied("Cannot change your own role"));
        }
    } else {
        require_manager(&actor)?;
        if store.users[idx].role.is_admin() && !actor.role.is_admin() {
            return Err(AppError::new(ErrorCode::CannotModifyAdmin));
        }
    }
    if payload.role.as_ref().is_some_and(UserRole::is_admin) && !actor.role.is_admin() {
        return Err(AppError::new(ErrorCode::AdminRequired));
    }
    if let Some(email) = &payload.email {
        let taken = store
            .users
            .iter()
            .any(|u| u.id != id && u.email.eq_ignore_ascii_case(email));
        if taken {
            return Err(
                AppError::new(ErrorCode::UserEmailExists).with_detail("email", email.clone())
            );
        }
    }

    if let Some(password) = payload.password {
        store.passwords.insert(id.clone(), password);
    }
    let user = &mut store.users[idx];
    if let Some(name) = payload.name {
        user.name = name;
    }
    if let Some(email) = payload.email {
        user.email = email;
    }
    if let Some(role) = payload.role {
        user.role = role;
    }
    if let Some(status) = payload.status {
        user.status = Some(status);
    }
    Ok(Json(user.clone()))
}

/// Delete a user
pub async fn delete(
    State(state): State<MockState>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if actor.id == id {
        return Err(AppError::new(ErrorCode::UserCannotDeleteSelf));
    }
    require_manager(&actor)?;

    let mut store = state.store().write().await;
    let idx = store
        .users
        .iter()
        .position(|u| u.id == id)
        .ok_or_else(|| user_not_found(&id))?;
    if store.users[idx].role.is_admin() && !actor.role.is_admin() {
        return Err(AppError::new(ErrorCode::CannotDeleteAdmin));
    }

    let removed = store.users.remove(idx);
    store.passwords.remove(&removed.id);
    store.tokens.retain(|_, uid| *uid != removed.id);
    info!(user_id = %removed.id, "User deleted");
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

fn require_manager(actor: &User) -> AppResult<()> {
    if actor.role.rank() < UserRole::Manager.rank() {
        return Err(AppError::permission_denied("Manager or admin role required"));
    }
    Ok(())
}

fn user_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::UserNotFound, format!("User {} not found", id))
        .with_detail("id", id)
}
