//! Typed endpoints of the remote restaurant API

use crate::{ClientResult, HttpClient};
use shared::models::{
    DailyInvoiceReport, DashboardSummary, SetupWizardPayload, User, UserCreate, UserQuery,
    UserUpdate,
};
use shared::{MessageResponse, PaginatedResponse};
use tracing::instrument;
use urlencoding::encode;

/// Endpoint wrapper over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct AdminApi<C> {
    http: C,
}

impl<C: HttpClient> AdminApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    // ========== Invoices ==========

    /// `GET /invoice/{branch}/date/{YYYY-MM-DD}`
    #[instrument(skip(self))]
    pub async fn daily_invoices(&self, branch: &str, date: &str) -> ClientResult<DailyInvoiceReport> {
        self.http
            .get(&format!("invoice/{}/date/{}", encode(branch), encode(date)))
            .await
    }

    /// `GET /invoice/{branch}/dashboard`
    #[instrument(skip(self))]
    pub async fn dashboard(&self, branch: &str) -> ClientResult<DashboardSummary> {
        self.http
            .get(&format!("invoice/{}/dashboard", encode(branch)))
            .await
    }

    // ========== Users ==========

    /// `GET /user/branch/{branch}?page=&limit=&search=`
    #[instrument(skip(self))]
    pub async fn list_users(
        &self,
        branch: &str,
        query: &UserQuery,
    ) -> ClientResult<PaginatedResponse<User>> {
        self.http
            .get_with_query(&format!("user/branch/{}", encode(branch)), query)
            .await
    }

    /// `GET /user/get-id/{id}`
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> ClientResult<User> {
        self.http
            .get(&format!("user/get-id/{}", encode(id)))
            .await
    }

    /// `POST /user/post`
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create_user(&self, user: &UserCreate) -> ClientResult<User> {
        self.http.post("user/post", user).await
    }

    /// `PUT /user/update/{id}`
    #[instrument(skip(self, update))]
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> ClientResult<User> {
        self.http
            .put(&format!("user/update/{}", encode(id)), update)
            .await
    }

    /// `DELETE /user/delete/{id}`
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> ClientResult<MessageResponse> {
        self.http
            .delete(&format!("user/delete/{}", encode(id)))
            .await
    }

    // ========== Branch setup ==========

    /// `POST /branch/setup-wizard`
    #[instrument(skip(self, payload), fields(branch = %payload.branch))]
    pub async fn submit_setup_wizard(
        &self,
        payload: &SetupWizardPayload,
    ) -> ClientResult<MessageResponse> {
        self.http.post("branch/setup-wizard", payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use async_trait::async_trait;
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    /// Answers every call with `NotFound(path)` so the built path can be inspected
    struct EchoPath;

    #[async_trait]
    impl HttpClient for EchoPath {
        async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
            Err(ClientError::NotFound(path.to_string()))
        }
        async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync>(
            &self,
            path: &str,
            _query: &Q,
        ) -> ClientResult<T> {
            Err(ClientError::NotFound(path.to_string()))
        }
        async fn post<T: DeserializeOwned, B: Serialize + Sync>(
            &self,
            path: &str,
            _body: &B,
        ) -> ClientResult<T> {
            Err(ClientError::NotFound(path.to_string()))
        }
        async fn put<T: DeserializeOwned, B: Serialize + Sync>(
            &self,
            path: &str,
            _body: &B,
        ) -> ClientResult<T> {
            Err(ClientError::NotFound(path.to_string()))
        }
        async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
            Err(ClientError::NotFound(path.to_string()))
        }
        fn token(&self) -> Option<&str> {
            None
        }
    }

    fn path_of<T>(result: ClientResult<T>) -> String {
        match result {
            Err(ClientError::NotFound(path)) => path,
            _ => panic!("expected the echoed path"),
        }
    }

    #[tokio::test]
    async fn test_path_segments_are_percent_encoded() {
        let api = AdminApi::new(EchoPath);
        assert_eq!(
            path_of(api.daily_invoices("Dhanmondi 27", "2024-03-09").await),
            "invoice/Dhanmondi%2027/date/2024-03-09"
        );
        assert_eq!(path_of(api.get_user("a/b").await), "user/get-id/a%2Fb");
        assert_eq!(path_of(api.delete_user("x?y").await), "user/delete/x%3Fy");
        assert_eq!(
            path_of(api.dashboard("banani").await),
            "invoice/banani/dashboard"
        );
    }
}
