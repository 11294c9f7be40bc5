//! Setup wizard submitted to the mock API

use khana_admin::cli::{Command, WizardCommand};
use khana_admin::wizard::TableSpec;
use khana_admin::{AdminConfig, AdminError, StepPatch, Wizard, WizardStep, commands};
use khana_api_mock::seed::{self, ADMIN_TOKEN, DEMO_BRANCH, MANAGER_TOKEN};
use khana_api_mock::MockState;
use khana_client::{AdminApi, ClientConfig, NetworkHttpClient};
use rust_decimal::Decimal;
use shared::ErrorCode;
use shared::models::{CompanyInfo, UserRole, WizardProduct, WizardUser};

async fn setup(token: &str) -> (AdminApi<NetworkHttpClient>, MockState, String) {
    let state = seed::demo_state().await;
    let addr = khana_api_mock::spawn(state.clone()).await.unwrap();
    let url = format!("http://{}/api", addr);
    let config = ClientConfig::new(url.clone()).with_token(token).with_timeout(5);
    (AdminApi::new(config.build_http_client().unwrap()), state, url)
}

fn filled_wizard() -> Wizard {
    let mut w = Wizard::new();
    w.next(StepPatch::Company(CompanyInfo {
        name: "Khana Kitchen".into(),
        address: "Banani 11".into(),
        ..Default::default()
    }))
    .unwrap();
    w.next(StepPatch::Categories(vec!["Rice".into(), "Drinks".into()]))
        .unwrap();
    w.next(StepPatch::Products(vec![WizardProduct {
        name: "Kacchi Biryani".into(),
        category: "Rice".into(),
        price: Decimal::from(350),
        vat: Decimal::from(5),
    }]))
    .unwrap();
    w.next(StepPatch::GenerateTables(TableSpec::new("T", 6)))
        .unwrap();
    w.next(StepPatch::Roles(vec!["Head Waiter".into()])).unwrap();
    w.next(StepPatch::Users(vec![WizardUser {
        name: "Karim".into(),
        email: "karim@banani.test".into(),
        password: "secret".into(),
        role: UserRole::parse("headwaiter"),
    }]))
    .unwrap();
    w
}

#[tokio::test]
async fn test_submit_success_resets_and_stores_payload() {
    let (api, state, _) = setup(ADMIN_TOKEN).await;
    let mut wizard = filled_wizard();
    let expected = wizard.state().to_payload("banani");

    let res = wizard.submit(&api, "banani").await.unwrap();
    assert_eq!(res.message, "Branch setup completed");
    assert_eq!(wizard.step(), WizardStep::Company);
    assert!(wizard.state().is_empty());
    assert_eq!(state.setup_for("banani").await, Some(expected));
}

#[tokio::test]
async fn test_rejected_submit_keeps_state_for_retry() {
    let (api, state, _) = setup(MANAGER_TOKEN).await;
    let mut wizard = filled_wizard();
    let before = wizard.clone();

    let err = wizard.submit(&api, "banani").await.unwrap_err();
    assert!(err.is_permission_denied());
    assert_eq!(err.error_code(), ErrorCode::PermissionDenied);
    assert_eq!(wizard, before);
    assert!(state.setup_for("banani").await.is_none());
}

#[tokio::test]
async fn test_second_setup_conflicts() {
    let (api, _, _) = setup(ADMIN_TOKEN).await;
    filled_wizard().submit(&api, "banani").await.unwrap();

    let mut again = filled_wizard();
    let err = again.submit(&api, "banani").await.unwrap_err();
    match err {
        AdminError::Client(e) => {
            assert_eq!(e.status(), Some(409));
            assert_eq!(e.error_code(), Some(ErrorCode::BranchAlreadySetUp));
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(again.step(), WizardStep::Review);
}

#[tokio::test]
async fn test_submit_command_reads_payload_file() {
    let (api, state, url) = setup(ADMIN_TOKEN).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("setup.json");
    let mut payload = filled_wizard().state().to_payload("");
    payload.tables.truncate(2);
    std::fs::write(&path, serde_json::to_vec_pretty(&payload).unwrap()).unwrap();

    let mut config = AdminConfig::from_env();
    config.api_url = url;
    config.branch = DEMO_BRANCH.into();
    config.token = Some(ADMIN_TOKEN.into());

    let out = commands::execute(
        &api,
        Command::Wizard(WizardCommand::Submit { payload: path }),
        &config,
    )
    .await
    .unwrap();
    assert_eq!(out, "Branch setup completed");

    let stored = state.setup_for(DEMO_BRANCH).await.unwrap();
    assert_eq!(stored.branch, DEMO_BRANCH);
    assert_eq!(stored.tables.len(), 2);
    assert_eq!(stored.roles[0].as_str(), "headwaiter");
}

#[tokio::test]
async fn test_submit_command_rejects_incomplete_payload() {
    let (api, state, url) = setup(ADMIN_TOKEN).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("setup.json");
    let mut payload = filled_wizard().state().to_payload(DEMO_BRANCH);
    payload.company.name.clear();
    std::fs::write(&path, serde_json::to_vec(&payload).unwrap()).unwrap();

    let mut config = AdminConfig::from_env();
    config.api_url = url;

    let err = commands::execute(
        &api,
        Command::Wizard(WizardCommand::Submit { payload: path }),
        &config,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AdminError::Wizard { step: WizardStep::Company, .. }));
    assert!(state.setup_for(DEMO_BRANCH).await.is_none());
}
