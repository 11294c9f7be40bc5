//! UserService against the mock API

use khana_admin::users::UserService;
use khana_admin::{AdminError, SessionContext};
use khana_api_mock::seed::{self, ADMIN_TOKEN, DEMO_BRANCH, MANAGER_TOKEN};
use khana_api_mock::MockState;
use khana_client::{AdminApi, ClientConfig, NetworkHttpClient};
use shared::models::{User, UserCreate, UserQuery, UserRole, UserUpdate};

async fn setup(token: &str) -> (AdminApi<NetworkHttpClient>, MockState) {
    let state = seed::demo_state().await;
    let addr = khana_api_mock::spawn(state.clone()).await.unwrap();
    let config = ClientConfig::new(format!("http://{}/api", addr))
        .with_token(token)
        .with_timeout(5);
    (AdminApi::new(config.build_http_client().unwrap()), state)
}

fn session(id: &str, role: UserRole, token: &str) -> SessionContext {
    SessionContext::new(
        User {
            id: id.into(),
            name: id.into(),
            email: format!("{}@khana.test", id),
            role,
            branch: DEMO_BRANCH.into(),
            status: None,
        },
        Some(token.into()),
    )
}

async fn user_exists(state: &MockState, id: &str) -> bool {
    state.store().read().await.users.iter().any(|u| u.id == id)
}

#[tokio::test]
async fn test_list_carries_hints_for_manager() {
    let (api, _) = setup(MANAGER_TOKEN).await;
    let me = session("manager", UserRole::Manager, MANAGER_TOKEN);
    let service = UserService::new(&api, &me);

    let page = service.list(&UserQuery::default()).await.unwrap();
    assert_eq!(page.pagination.total_documents, 3);
    let hints = |id: &str| page.rows.iter().find(|r| r.user.id == id).unwrap().hints;
    assert!(!hints("admin").any());
    assert!(!hints("manager").any());
    assert!(hints("cashier").can_delete);
}

#[tokio::test]
async fn test_manager_cannot_delete_admin_locally() {
    let (api, state) = setup(MANAGER_TOKEN).await;
    let me = session("manager", UserRole::Manager, MANAGER_TOKEN);
    let service = UserService::new(&api, &me);

    let err = service.delete("admin").await.unwrap_err();
    assert!(err.is_permission_denied());
    assert!(user_exists(&state, "admin").await);
}

#[tokio::test]
async fn test_server_refusal_maps_to_permission_denied() {
    // The session claims admin but the token belongs to the manager
    let (api, state) = setup(MANAGER_TOKEN).await;
    let me = session("someone", UserRole::Admin, MANAGER_TOKEN);
    let service = UserService::new(&api, &me);

    let err = service.delete("admin").await.unwrap_err();
    assert!(matches!(err, AdminError::PermissionDenied(_)));
    assert!(user_exists(&state, "admin").await);
}

#[tokio::test]
async fn test_manager_deletes_cashier() {
    let (api, state) = setup(MANAGER_TOKEN).await;
    let me = session("manager", UserRole::Manager, MANAGER_TOKEN);
    let service = UserService::new(&api, &me);

    let message = service.delete("cashier").await.unwrap();
    assert_eq!(message, "User deleted successfully");
    assert!(!user_exists(&state, "cashier").await);
}

#[tokio::test]
async fn test_create_defaults_to_session_branch() {
    let (api, _) = setup(ADMIN_TOKEN).await;
    let me = session("admin", UserRole::Admin, ADMIN_TOKEN);
    let service = UserService::new(&api, &me);

    let user = service
        .create(UserCreate {
            name: "Karim".into(),
            email: "karim@khana.test".into(),
            password: "secret".into(),
            role: UserRole::parse("Head Waiter"),
            branch: String::new(),
            status: None,
        })
        .await
        .unwrap();
    assert_eq!(user.branch, DEMO_BRANCH);
    assert_eq!(user.role.as_str(), "headwaiter");

    let updated = service
        .update(
            &user.id,
            &UserUpdate {
                role: Some(UserRole::Manager),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.role, UserRole::Manager);
}

#[tokio::test]
async fn test_create_validates_before_request() {
    let (api, state) = setup(ADMIN_TOKEN).await;
    let me = session("admin", UserRole::Admin, ADMIN_TOKEN);
    let service = UserService::new(&api, &me);

    let err = service
        .create(UserCreate {
            name: "Karim".into(),
            email: "not-an-email".into(),
            password: "secret".into(),
            role: UserRole::User,
            branch: String::new(),
            status: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::InvalidInput(_)));
    assert_eq!(state.store().read().await.users.len(), 3);
}

#[tokio::test]
async fn test_empty_update_rejected() {
    let (api, _) = setup(ADMIN_TOKEN).await;
    let me = session("admin", UserRole::Admin, ADMIN_TOKEN);
    let service = UserService::new(&api, &me);
    let err = service.update("cashier", &UserUpdate::default()).await.unwrap_err();
    assert!(matches!(err, AdminError::InvalidInput(_)));
}

#[tokio::test]
async fn test_get_unknown_user() {
    let (api, _) = setup(ADMIN_TOKEN).await;
    let me = session("admin", UserRole::Admin, ADMIN_TOKEN);
    let service = UserService::new(&api, &me);
    let err = service.get("nobody").await.unwrap_err();
    assert!(matches!(err, AdminError::Client(_)));
}
