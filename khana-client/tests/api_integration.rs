//! AdminApi against a live khana-api-mock server

use khana_api_mock::seed::{self, ADMIN_TOKEN, DEMO_BRANCH, MANAGER_TOKEN, USER_TOKEN};
use khana_client::{AdminApi, ClientConfig, ClientError, NetworkHttpClient};
use rust_decimal::Decimal;
use shared::ErrorCode;
use shared::models::{
    CompanyInfo, SetupWizardPayload, UserCreate, UserQuery, UserRole, UserUpdate, WizardCategory,
    WizardProduct,
};

async fn api_as(token: Option<&str>) -> (AdminApi<NetworkHttpClient>, khana_api_mock::MockState) {
    let state = seed::demo_state().await;
    let addr = khana_api_mock::spawn(state.clone()).await.unwrap();
    let mut config = ClientConfig::new(format!("http://{}/api", addr)).with_timeout(5);
    if let Some(token) = token {
        config = config.with_token(token);
    }
    (AdminApi::new(config.build_http_client().unwrap()), state)
}

#[tokio::test]
async fn test_missing_token_maps_to_unauthorized() {
    let (api, _) = api_as(None).await;
    let err = api.dashboard(DEMO_BRANCH).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.error_code(), Some(ErrorCode::NotAuthenticated));
}

#[tokio::test]
async fn test_daily_invoices_decode() {
    let (api, _) = api_as(Some(USER_TOKEN)).await;
    let report = api.daily_invoices(DEMO_BRANCH, "2024-03-09").await.unwrap();
    assert_eq!(report.total_orders, 2);
    assert_eq!(report.summary.total_amount, Decimal::from(1376));
    assert_eq!(report.orders[1].reference(), "foodpanda");
    let keys: Vec<&str> = report
        .summary
        .sales_by_order_type
        .iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(keys, vec!["dine-in", "takeaway", "delivery"]);

    let empty = api.daily_invoices(DEMO_BRANCH, "2024-01-01").await.unwrap();
    assert!(empty.orders.is_empty());
}

#[tokio::test]
async fn test_dashboard_decode() {
    let (api, _) = api_as(Some(MANAGER_TOKEN)).await;
    let dashboard = api.dashboard(DEMO_BRANCH).await.unwrap();
    assert_eq!(dashboard.total_orders, 96);
    assert_eq!(dashboard.top_products[0].product_name, "Kacchi Biryani");
}

#[tokio::test]
async fn test_user_crud_as_admin() {
    let (api, _) = api_as(Some(ADMIN_TOKEN)).await;

    let created = api
        .create_user(&UserCreate {
            name: "Tanvir".into(),
            email: "tanvir@khana.test".into(),
            password: "secret".into(),
            role: UserRole::parse("Head Waiter"),
            branch: DEMO_BRANCH.into(),
            status: None,
        })
        .await
        .unwrap();
    assert_eq!(created.role.as_str(), "headwaiter");
    assert_eq!(created.status.as_deref(), Some("active"));

    let page = api
        .list_users(
            DEMO_BRANCH,
            &UserQuery {
                search: "tanvir".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pagination.total_documents, 1);

    let updated = api
        .update_user(
            &created.id,
            &UserUpdate {
                role: Some(UserRole::Manager),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.role, UserRole::Manager);

    let msg = api.delete_user(&created.id).await.unwrap();
    assert_eq!(msg.message, "User deleted successfully");

    let err = api.get_user(&created.id).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.error_code(), Some(ErrorCode::UserNotFound));
}

#[tokio::test]
async fn test_pagination_across_pages() {
    let (api, _) = api_as(Some(ADMIN_TOKEN)).await;
    let query = UserQuery {
        page: 2,
        limit: 2,
        search: String::new(),
    };
    let page = api.list_users(DEMO_BRANCH, &query).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pagination.total_pages, 2);
    assert!(page.pagination.has_prev());
    assert!(!page.pagination.has_next());
}

#[tokio::test]
async fn test_manager_delete_admin_is_permission_denied() {
    let (api, state) = api_as(Some(MANAGER_TOKEN)).await;
    let err = api.delete_user("admin").await.unwrap_err();
    assert!(err.is_permission_denied());
    assert_eq!(err.error_code(), Some(ErrorCode::CannotDeleteAdmin));
    assert!(state.users().await.iter().any(|u| u.id == "admin"));
}

#[tokio::test]
async fn test_cannot_delete_self() {
    let (api, _) = api_as(Some(ADMIN_TOKEN)).await;
    let err = api.delete_user("admin").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 403, .. }));
    assert_eq!(err.error_code(), Some(ErrorCode::UserCannotDeleteSelf));
}

#[tokio::test]
async fn test_setup_wizard_submit() {
    let (api, state) = api_as(Some(ADMIN_TOKEN)).await;
    let payload = SetupWizardPayload {
        branch: "mirpur".into(),
        company: CompanyInfo {
            name: "Khana Mirpur".into(),
            address: "Section 10".into(),
            phone: "01700000000".into(),
            email: None,
            vat_reg_no: "VAT-42".into(),
        },
        categories: vec![WizardCategory { name: "Rice".into() }],
        products: vec![WizardProduct {
            name: "Kacchi".into(),
            category: "Rice".into(),
            price: Decimal::from(350),
            vat: Decimal::from(5),
        }],
        ..Default::default()
    };

    api.submit_setup_wizard(&payload).await.unwrap();
    let stored = state.setup_for("mirpur").await.unwrap();
    assert_eq!(stored, payload);

    let err = api.submit_setup_wizard(&payload).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.error_code(), Some(ErrorCode::BranchAlreadySetUp));
}
