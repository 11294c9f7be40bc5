use khana_client::{AdminApi, HttpClient};
use shared::Pagination;
use shared::models::{User, UserCreate, UserQuery, UserUpdate};
use tracing::{info, instrument};

use super::policy::{ActionHints, action_hints};
use crate::core::{AdminError, AdminResult, SessionContext};

/// A listed user with the actions shown next to it
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub user: User,
    pub hints: ActionHints,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserPage {
    pub rows: Vec<UserRow>,
    pub pagination: Pagination,
}

/// User management for the signed-in session
pub struct UserService<'a, C> {
    api: &'a AdminApi<C>,
    session: &'a SessionContext,
}

impl<'a, C: HttpClient> UserService<'a, C> {
    pub fn new(api: &'a AdminApi<C>, session: &'a SessionContext) -> Self {
        Self { api, session }
    }

    fn branch(&self) -> AdminResult<&str> {
        if self.session.branch.is_empty() {
            return Err(AdminError::Config("KHANA_BRANCH is not set".into()));
        }
        Ok(&self.session.branch)
    }

    pub async fn list(&self, query: &UserQuery) -> AdminResult<UserPage> {
        let page = self.api.list_users(self.branch()?, query).await?;
        let rows = page
            .data
            .into_iter()
            .map(|user| UserRow {
                hints: action_hints(self.session, &user),
                user,
            })
            .collect();
        Ok(UserPage {
            rows,
            pagination: page.pagination,
        })
    }

    pub async fn get(&self, id: &str) -> AdminResult<UserRow> {
        let user = self.api.get_user(id).await?;
        Ok(UserRow {
            hints: action_hints(self.session, &user),
            user,
        })
    }

    /// Create a user; an empty branch means the session's branch
    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn create(&self, mut new_user: UserCreate) -> AdminResult<User> {
        if new_user.name.trim().is_empty() {
            return Err(AdminError::InvalidInput("Name is required".into()));
        }
        if !new_user.email.contains('@') {
            return Err(AdminError::InvalidInput(format!("Invalid email '{}'", new_user.email)));
        }
        if new_user.password.is_empty() {
            return Err(AdminError::InvalidInput("Password is required".into()));
        }
        if new_user.branch.trim().is_empty() {
            new_user.branch = self.branch()?.to_string();
        }
        let user = self.api.create_user(&new_user).await?;
        info!(id = %user.id, role = %user.role, "User created");
        Ok(user)
    }

    /// Update a user after checking the action hint for it
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: &str, update: &UserUpdate) -> AdminResult<User> {
        if update.is_empty() {
            return Err(AdminError::InvalidInput("Nothing to update".into()));
        }
        if !self.get(id).await?.hints.can_edit {
            return Err(AdminError::PermissionDenied(format!("Cannot edit user {}", id)));
        }
        let user = self.api.update_user(id, update).await?;
        info!(id = %user.id, "User updated");
        Ok(user)
    }

    /// Delete a user after checking the action hint for it
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> AdminResult<String> {
        if !self.get(id).await?.hints.can_delete {
            return Err(AdminError::PermissionDenied(format!("Cannot delete user {}", id)));
        }
        let res = self.api.delete_user(id).await?;
        info!(id = %id, "User deleted");
        Ok(res.message)
    }
}
