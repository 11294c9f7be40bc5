//! Setup Wizard Model
//!
//! Body of `POST /branch/setup-wizard`: everything collected by the branch
//! setup wizard, submitted in one request.

use super::company::CompanyInfo;
use super::role::{RoleName, UserRole};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardCategory {
    pub name: String,
}

/// Menu product, referencing its category by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardProduct {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub price: Decimal,
    /// VAT percentage
    #[serde(default)]
    pub vat: Decimal,
}

/// Dining table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardTable {
    pub name: String,
    #[serde(default)]
    pub capacity: u32,
}

/// Staff account created with the branch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Full setup payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupWizardPayload {
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub company: CompanyInfo,
    #[serde(default)]
    pub categories: Vec<WizardCategory>,
    #[serde(default)]
    pub products: Vec<WizardProduct>,
    #[serde(default)]
    pub tables: Vec<WizardTable>,
    /// Custom roles; may be empty
    #[serde(default)]
    pub roles: Vec<RoleName>,
    #[serde(default)]
    pub users: Vec<WizardUser>,
}

impl SetupWizardPayload {
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Built-in roles always exist; custom roles must be listed
    pub fn has_role(&self, role: &UserRole) -> bool {
        match role {
            UserRole::Custom(name) => self.roles.contains(name),
            _ => true,
        }
    }
}
