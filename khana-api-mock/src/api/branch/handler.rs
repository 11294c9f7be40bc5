//! Branch API Handlers

use axum::{Extension, Json, extract::State};
use shared::models::{SetupWizardPayload, User};
use shared::{AppError, AppResult, ErrorCode, MessageResponse};
use tracing::info;

use crate::auth::CurrentUser;
use crate::state::MockState;

/// Accept the whole setup wizard payload at once
///
/// Either everything is stored or nothing is.
pub async fn setup_wizard(
    State(state): State<MockState>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Json(mut payload): Json<SetupWizardPayload>,
) -> AppResult<Json<MessageResponse>> {
    if !actor.role.is_admin() {
        return Err(AppError::new(ErrorCode::AdminRequired));
    }
    if payload.branch.trim().is_empty() {
        payload.branch = actor.branch.clone();
    }
    validate(&payload)?;

    let mut store = state.store().write().await;
    if store.setups.contains_key(&payload.branch) {
        return Err(
            AppError::new(ErrorCode::BranchAlreadySetUp).with_detail("branch", payload.branch)
        );
    }
    for wu in &payload.users {
        if store.users.iter().any(|u| u.email.eq_ignore_ascii_case(&wu.email)) {
            return Err(
                AppError::new(ErrorCode::UserEmailExists).with_detail("email", wu.email.clone())
            );
        }
    }

    for wu in &payload.users {
        let user = User {
            id: state.next_user_id(),
            name: wu.name.clone(),
            email: wu.email.clone(),
            role: wu.role.clone(),
            branch: payload.branch.clone(),
            status: Some("active".to_string()),
        };
        store.passwords.insert(user.id.clone(), wu.password.clone());
        store.users.push(user);
    }

    info!(
        branch = %payload.branch,
        categories = payload.categories.len(),
        products = payload.products.len(),
        tables = payload.tables.len(),
        users = payload.users.len(),
        "Branch set up"
    );
    store.setups.insert(payload.branch.clone(), payload);
    Ok(Json(MessageResponse::new("Branch setup completed")))
}

fn validate(payload: &SetupWizardPayload) -> AppResult<()> {
    if payload.company.name.trim().is_empty() {
        return Err(AppError::required("company name"));
    }
    for product in &payload.products {
        if !payload.has_category(&product.category) {
            return Err(AppError::with_message(
                ErrorCode::WizardUnknownCategory,
                format!("Unknown category: {}", product.category),
            )
            .with_detail("product", product.name.clone()));
        }
    }
    for user in &payload.users {
        if !payload.has_role(&user.role) {
            return Err(AppError::with_message(
                ErrorCode::WizardUnknownRole,
                format!("Unknown role: {}", user.role),
            )
            .with_detail("email", user.email.clone()));
        }
    }
    Ok(())
}
