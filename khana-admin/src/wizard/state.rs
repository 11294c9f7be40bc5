//! Accumulated wizard state and per-step checks

use serde::{Deserialize, Serialize};
use shared::models::{
    CompanyInfo, RoleName, SetupWizardPayload, UserRole, WizardCategory, WizardProduct,
    WizardTable, WizardUser,
};

use super::{TableSpec, WizardStep};
use crate::core::{AdminError, AdminResult};

/// Data produced by one step's form on "next"
#[derive(Debug, Clone, PartialEq)]
pub enum StepPatch {
    Company(CompanyInfo),
    Categories(Vec<String>),
    Products(Vec<WizardProduct>),
    Tables(Vec<WizardTable>),
    GenerateTables(TableSpec),
    /// Raw role input; normalized and de-duplicated on merge
    Roles(Vec<String>),
    Users(Vec<WizardUser>),
    Review,
}

impl StepPatch {
    /// The step whose form produces this patch
    pub fn step(&self) -> WizardStep {
        match self {
            StepPatch::Company(_) => WizardStep::Company,
            StepPatch::Categories(_) => WizardStep::Categories,
            StepPatch::Products(_) => WizardStep::Products,
            StepPatch::Tables(_) | StepPatch::GenerateTables(_) => WizardStep::Tables,
            StepPatch::Roles(_) => WizardStep::Roles,
            StepPatch::Users(_) => WizardStep::Users,
            StepPatch::Review => WizardStep::Review,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub company: CompanyInfo,
    pub categories: Vec<WizardCategory>,
    pub products: Vec<WizardProduct>,
    pub tables: Vec<WizardTable>,
    pub roles: Vec<RoleName>,
    pub users: Vec<WizardUser>,
}

impl WizardState {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge a patch into the state (no validation)
    pub fn apply(&mut self, patch: StepPatch) -> AdminResult<()> {
        match patch {
            StepPatch::Company(company) => self.company = company,
            StepPatch::Categories(names) => {
                self.categories = names
                    .into_iter()
                    .map(|name| WizardCategory {
                        name: name.trim().to_string(),
                    })
                    .collect();
            }
            StepPatch::Products(products) => self.products = products,
            StepPatch::Tables(tables) => self.tables = tables,
            StepPatch::GenerateTables(spec) => self.tables = spec.generate()?,
            StepPatch::Roles(raw) => {
                let mut roles: Vec<RoleName> = Vec::new();
                for name in raw.iter().filter_map(|r| RoleName::new(r)) {
                    if !roles.contains(&name) {
                        roles.push(name);
                    }
                }
                self.roles = roles;
            }
            StepPatch::Users(users) => self.users = users,
            StepPatch::Review => {}
        }
        Ok(())
    }

    /// Required-field checks of one step against the current state
    pub fn validate(&self, step: WizardStep) -> AdminResult<()> {
        let fail = |msg: String| Err(AdminError::wizard(step, msg));
        match step {
            WizardStep::Company => {
                if self.company.name.trim().is_empty() {
                    return fail("Company name is required".into());
                }
            }
            WizardStep::Categories => {
                if self.categories.is_empty() {
                    return fail("At least one category is required".into());
                }
                for (i, cat) in self.categories.iter().enumerate() {
                    if cat.name.is_empty() {
                        return fail(format!("Category {} has no name", i + 1));
                    }
                    let dup = self.categories[..i]
                        .iter()
                        .any(|c| c.name.eq_ignore_ascii_case(&cat.name));
                    if dup {
                        return fail(format!("Duplicate category '{}'", cat.name));
                    }
                }
            }
            WizardStep::Products => {
                for (i, product) in self.products.iter().enumerate() {
                    if product.name.trim().is_empty() {
                        return fail(format!("Product {} has no name", i + 1));
                    }
                    if !self.has_category(&product.category) {
                        return fail(format!(
                            "Product '{}' uses unknown category '{}'",
                            product.name.trim(),
                            product.category
                        ));
                    }
                    if product.price.is_sign_negative() {
                        return fail(format!("Product '{}' has a negative price", product.name.trim()));
                    }
                }
            }
            WizardStep::Tables => {
                if self.tables.is_empty() {
                    return fail("At least one table is required".into());
                }
                for (i, table) in self.tables.iter().enumerate() {
                    if table.name.trim().is_empty() {
                        return fail(format!("Table {} has no name", i + 1));
                    }
                    if self.tables[..i].iter().any(|t| t.name == table.name) {
                        return fail(format!("Duplicate table '{}'", table.name));
                    }
                }
            }
            // zero custom roles is valid; names are normalized on merge
            WizardStep::Roles => {
                if let Some(role) = self.roles.iter().find(|r| r.is_builtin()) {
                    return fail(format!("'{}' is a built-in role", role));
                }
            }
            WizardStep::Users => {
                for (i, user) in self.users.iter().enumerate() {
                    let who = user.name.trim();
                    if who.is_empty() {
                        return fail(format!("User {} has no name", i + 1));
                    }
                    if !user.email.contains('@') {
                        return fail(format!("User '{}' needs a valid email", who));
                    }
                    if user.password.is_empty() {
                        return fail(format!("User '{}' needs a password", who));
                    }
                    if !self.has_role(&user.role) {
                        return fail(format!("User '{}' has unknown role '{}'", who, user.role));
                    }
                    let dup = self.users[..i]
                        .iter()
                        .any(|u| u.email.eq_ignore_ascii_case(&user.email));
                    if dup {
                        return fail(format!("Duplicate user email '{}'", user.email));
                    }
                }
            }
            WizardStep::Review => {
                for step in WizardStep::ALL {
                    if step != WizardStep::Review {
                        self.validate(step)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn has_role(&self, role: &UserRole) -> bool {
        match role {
            UserRole::Custom(name) => self.roles.contains(name),
            _ => true,
        }
    }

    fn has_category(&self, name: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Request body for `POST /branch/setup-wizard`
    pub fn to_payload(&self, branch: &str) -> SetupWizardPayload {
        SetupWizardPayload {
            branch: branch.to_string(),
            company: self.company.clone(),
            categories: self.categories.clone(),
            products: self.products.clone(),
            tables: self.tables.clone(),
            roles: self.roles.clone(),
            users: self.users.clone(),
        }
    }

    /// The patches that rebuild this state, one per step
    pub fn into_patches(self) -> Vec<StepPatch> {
        vec![
            StepPatch::Company(self.company),
            StepPatch::Categories(self.categories.into_iter().map(|c| c.name).collect()),
            StepPatch::Products(self.products),
            StepPatch::Tables(self.tables),
            StepPatch::Roles(self.roles.into_iter().map(|r| r.to_string()).collect()),
            StepPatch::Users(self.users),
        ]
    }
}

impl From<SetupWizardPayload> for WizardState {
    fn from(p: SetupWizardPayload) -> Self {
        Self {
            company: p.company,
            categories: p.categories,
            products: p.products,
            tables: p.tables,
            roles: p.roles,
            users: p.users,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(name: &str, category: &str) -> WizardProduct {
        WizardProduct {
            name: name.into(),
            category: category.into(),
            price: Decimal::from(100),
            ..Default::default()
        }
    }

    fn user(email: &str, role: &str) -> WizardUser {
        WizardUser {
            name: "Karim".into(),
            email: email.into(),
            password: "secret".into(),
            role: UserRole::parse(role),
        }
    }

    #[test]
    fn test_roles_normalized_and_deduped() {
        let mut state = WizardState::default();
        state
            .apply(StepPatch::Roles(vec![
                "Head Waiter".into(),
                "headwaiter".into(),
                "  ".into(),
                "Chef".into(),
            ]))
            .unwrap();
        let names: Vec<&str> = state.roles.iter().map(|r| r.as_str()).collect();
        assert_eq!(names, vec!["headwaiter", "chef"]);
    }

    #[test]
    fn test_builtin_names_rejected_as_custom_roles() {
        let mut state = WizardState::default();
        state
            .apply(StepPatch::Roles(vec!["Admin".into(), "Manager".into()]))
            .unwrap();
        let err = state.validate(WizardStep::Roles).unwrap_err();
        assert!(err.to_string().contains("'admin' is a built-in role"));

        state.apply(StepPatch::Roles(vec!["Chef".into()])).unwrap();
        assert!(state.validate(WizardStep::Roles).is_ok());
    }

    #[test]
    fn test_zero_roles_valid() {
        let state = WizardState::default();
        assert!(state.validate(WizardStep::Roles).is_ok());
    }

    #[test]
    fn test_company_name_required() {
        let err = WizardState::default().validate(WizardStep::Company).unwrap_err();
        assert_eq!(err.to_string(), "Company: Company name is required");
    }

    #[test]
    fn test_categories_checks() {
        let mut state = WizardState::default();
        assert!(state.validate(WizardStep::Categories).is_err());
        state
            .apply(StepPatch::Categories(vec![" Rice ".into(), "rice".into()]))
            .unwrap();
        let err = state.validate(WizardStep::Categories).unwrap_err();
        assert!(err.to_string().contains("Duplicate category"));
    }

    #[test]
    fn test_product_category_must_exist() {
        let mut state = WizardState::default();
        state.apply(StepPatch::Categories(vec!["Rice".into()])).unwrap();
        state
            .apply(StepPatch::Products(vec![product("Kacchi", "rice")]))
            .unwrap();
        assert!(state.validate(WizardStep::Products).is_ok());

        state
            .apply(StepPatch::Products(vec![product("Borhani", "Drinks")]))
            .unwrap();
        let err = state.validate(WizardStep::Products).unwrap_err();
        assert!(matches!(err, AdminError::Wizard { step: WizardStep::Products, .. }));
    }

    #[test]
    fn test_tables_required_and_generated() {
        let mut state = WizardState::default();
        assert!(state.validate(WizardStep::Tables).is_err());
        state
            .apply(StepPatch::GenerateTables(TableSpec::new("T", 4)))
            .unwrap();
        assert_eq!(state.tables.len(), 4);
        assert!(state.validate(WizardStep::Tables).is_ok());
    }

    #[test]
    fn test_user_role_must_be_known() {
        let mut state = WizardState::default();
        state
            .apply(StepPatch::Users(vec![user("k@x.com", "Head Waiter")]))
            .unwrap();
        assert!(state.validate(WizardStep::Users).is_err());

        state.apply(StepPatch::Roles(vec!["head waiter".into()])).unwrap();
        assert!(state.validate(WizardStep::Users).is_ok());

        state
            .apply(StepPatch::Users(vec![user("k@x.com", "manager"), user("K@x.com", "user")]))
            .unwrap();
        assert!(state.validate(WizardStep::Users).is_err());
    }

    #[test]
    fn test_user_email_checked() {
        let mut state = WizardState::default();
        state.apply(StepPatch::Users(vec![user("nope", "user")])).unwrap();
        let err = state.validate(WizardStep::Users).unwrap_err();
        assert!(err.to_string().contains("valid email"));
    }

    #[test]
    fn test_payload_round_trip_through_patches() {
        let payload = SetupWizardPayload {
            branch: "gulshan".into(),
            company: CompanyInfo {
                name: "Khana".into(),
                ..Default::default()
            },
            categories: vec![WizardCategory { name: "Rice".into() }],
            products: vec![product("Kacchi", "Rice")],
            tables: vec![WizardTable {
                name: "T1".into(),
                capacity: 4,
            }],
            roles: vec![RoleName::new("chef").unwrap()],
            users: vec![user("c@x.com", "chef")],
        };
        let mut state = WizardState::default();
        for patch in WizardState::from(payload.clone()).into_patches() {
            state.apply(patch).unwrap();
        }
        assert_eq!(state.to_payload("gulshan"), payload);
        assert!(state.validate(WizardStep::Review).is_ok());
    }
}
