//! Role Model
//!
//! Built-in roles (`admin`, `manager`, `user`) plus custom roles defined per
//! branch in the setup wizard.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Built-in role names
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_USER: &str = "user";

pub const BUILTIN_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MANAGER, ROLE_USER];

/// Normalized role name: lowercase, no whitespace
///
/// The only constructor normalizes its input, so a `RoleName` with uppercase
/// characters or embedded whitespace cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoleName(String);

impl RoleName {
    /// Normalize raw input (applied on every keystroke in the wizard form)
    pub fn normalize(raw: &str) -> String {
        raw.chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }

    /// Build a role name; `None` when nothing is left after normalization
    pub fn new(raw: &str) -> Option<Self> {
        let name = Self::normalize(raw);
        if name.is_empty() { None } else { Some(Self(name)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_builtin(&self) -> bool {
        BUILTIN_ROLES.contains(&self.0.as_str())
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for RoleName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RoleName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        RoleName::new(&raw).ok_or_else(|| serde::de::Error::custom("role name is empty"))
    }
}

/// Role attached to a user account
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    User,
    /// Branch-defined role (always normalized)
    Custom(RoleName),
}

impl UserRole {
    /// Parse a role string as sent by the server
    pub fn parse(raw: &str) -> Self {
        match RoleName::new(raw) {
            Some(name) => match name.as_str() {
                ROLE_ADMIN => Self::Admin,
                ROLE_MANAGER => Self::Manager,
                ROLE_USER => Self::User,
                _ => Self::Custom(name),
            },
            None => Self::User,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => ROLE_ADMIN,
            Self::Manager => ROLE_MANAGER,
            Self::User => ROLE_USER,
            Self::Custom(name) => name.as_str(),
        }
    }

    /// Privilege rank: admin > manager > everyone else
    pub fn rank(&self) -> u8 {
        match self {
            Self::Admin => 3,
            Self::Manager => 2,
            Self::User | Self::Custom(_) => 1,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_normalizes() {
        let name = RoleName::new("  Head Chef ").unwrap();
        assert_eq!(name.as_str(), "headchef");
        assert_eq!(RoleName::normalize("Shift\tLead\n"), "shiftlead");
        assert!(RoleName::new("   ").is_none());
    }

    #[test]
    fn test_role_name_deserialize_normalizes() {
        let name: RoleName = serde_json::from_str("\"Bar Tender\"").unwrap();
        assert_eq!(name.as_str(), "bartender");
        assert!(serde_json::from_str::<RoleName>("\" \"").is_err());
    }

    #[test]
    fn test_user_role_parse() {
        assert_eq!(UserRole::parse("Admin"), UserRole::Admin);
        assert_eq!(UserRole::parse("manager"), UserRole::Manager);
        assert_eq!(UserRole::parse("user"), UserRole::User);
        assert_eq!(
            UserRole::parse("Cashier"),
            UserRole::Custom(RoleName::new("cashier").unwrap())
        );
    }

    #[test]
    fn test_user_role_rank() {
        assert!(UserRole::Admin.rank() > UserRole::Manager.rank());
        assert!(UserRole::Manager.rank() > UserRole::User.rank());
        assert_eq!(UserRole::parse("waiter").rank(), UserRole::User.rank());
    }

    #[test]
    fn test_user_role_serde() {
        assert_eq!(serde_json::to_string(&UserRole::Manager).unwrap(), "\"manager\"");
        let role: UserRole = serde_json::from_str("\"chef\"").unwrap();
        assert_eq!(role.as_str(), "chef");
    }
}
