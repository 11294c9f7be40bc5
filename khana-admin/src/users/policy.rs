//! Client-side action hints
//!
//! Decides which buttons to show next to a user row. The server repeats the
//! same checks and stays authoritative.

use shared::models::{User, UserRole};

use crate::core::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionHints {
    pub can_edit: bool,
    pub can_delete: bool,
}

impl ActionHints {
    pub const NONE: ActionHints = ActionHints {
        can_edit: false,
        can_delete: false,
    };

    pub fn any(&self) -> bool {
        self.can_edit || self.can_delete
    }
}

/// Whether `actor` may act on `target` (self is always excluded by the caller)
pub fn may_manage(actor: &UserRole, target: &UserRole) -> bool {
    match actor {
        UserRole::Admin => true,
        UserRole::Manager => !target.is_admin(),
        UserRole::User | UserRole::Custom(_) => false,
    }
}

pub fn action_hints(session: &SessionContext, target: &User) -> ActionHints {
    if session.is_self(target) || !may_manage(&session.role, &target.role) {
        return ActionHints::NONE;
    }
    ActionHints {
        can_edit: true,
        can_delete: true,
    }
}
