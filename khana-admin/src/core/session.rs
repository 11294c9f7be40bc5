//! Signed-in user context
//!
//! Built once at start-up and passed by reference into every component that
//! needs to know who is acting. Never mutated.

use shared::models::{User, UserRole};

use super::config::AdminConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub branch: String,
    pub token: Option<String>,
}

impl SessionContext {
    pub fn new(user: User, token: Option<String>) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            branch: user.branch,
            token,
        }
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        Self {
            user_id: config.user_id.clone(),
            name: config.user_name.clone(),
            email: config.user_email.clone(),
            role: config.user_role.clone(),
            branch: config.branch.trim().to_string(),
            token: config.token.clone(),
        }
    }

    /// Whether `user` is the signed-in user
    pub fn is_self(&self, user: &User) -> bool {
        !self.user_id.is_empty() && self.user_id == user.id
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_self() {
        let user = User {
            id: "u1".into(),
            name: "Monir".into(),
            email: "m@khana.test".into(),
            role: UserRole::Manager,
            branch: "gulshan".into(),
            status: None,
        };
        let session = SessionContext::new(user.clone(), Some("tok".into()));
        assert!(session.is_self(&user));
        assert!(session.is_authenticated());

        let other = User {
            id: "u2".into(),
            ..user
        };
        assert!(!session.is_self(&other));
    }

    #[test]
    fn test_empty_id_is_never_self() {
        let user = User {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            role: UserRole::User,
            branch: String::new(),
            status: None,
        };
        let session = SessionContext::new(user.clone(), None);
        assert!(!session.is_self(&user));
    }
}
