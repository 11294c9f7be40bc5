//! In-memory store behind the mock API

use shared::models::{DailyInvoiceReport, DashboardSummary, SetupWizardPayload, User};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Mutable data of the mock server
#[derive(Debug, Default)]
pub struct Store {
    pub users: Vec<User>,
    /// user id → password (never returned)
    pub passwords: HashMap<String, String>,
    /// bearer token → user id
    pub tokens: HashMap<String, String>,
    /// (branch, YYYY-MM-DD) → report
    pub invoices: HashMap<(String, String), DailyInvoiceReport>,
    pub dashboards: HashMap<String, DashboardSummary>,
    /// Accepted setup payloads, by branch
    pub setups: HashMap<String, SetupWizardPayload>,
}

/// Shared server state (cheap to clone)
#[derive(Debug, Clone, Default)]
pub struct MockState {
    store: Arc<RwLock<Store>>,
    next_id: Arc<AtomicU64>,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &RwLock<Store> {
        &self.store
    }

    /// Generate the next user id (`u{n}`)
    pub fn next_user_id(&self) -> String {
        format!("u{}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    // ========== Seeding ==========

    /// Add a user that authenticates with `token`
    pub async fn with_user(self, user: User, token: &str) -> Self {
        {
            let mut store = self.store.write().await;
            store.tokens.insert(token.to_string(), user.id.clone());
            store.users.push(user);
        }
        self
    }

    pub async fn with_invoices(self, branch: &str, date: &str, report: DailyInvoiceReport) -> Self {
        self.store
            .write()
            .await
            .invoices
            .insert((branch.to_string(), date.to_string()), report);
        self
    }

    pub async fn with_dashboard(self, branch: &str, summary: DashboardSummary) -> Self {
        self.store
            .write()
            .await
            .dashboards
            .insert(branch.to_string(), summary);
        self
    }

    // ========== Inspection ==========

    pub async fn setup_for(&self, branch: &str) -> Option<SetupWizardPayload> {
        self.store.read().await.setups.get(branch).cloned()
    }

    pub async fn users(&self) -> Vec<User> {
        self.store.read().await.users.clone()
    }
}
