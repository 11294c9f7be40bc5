use khana_api_mock::{build_app, seed};
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "khana_api_mock=info,tower_http=info".into()),
        )
        .init();

    let addr = std::env::var("KHANA_MOCK_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let app = build_app(seed::demo_state().await);

    info!(
        addr = %listener.local_addr()?,
        admin = seed::ADMIN_TOKEN,
        manager = seed::MANAGER_TOKEN,
        user = seed::USER_TOKEN,
        "khana-api-mock listening under /api"
    );
    axum::serve(listener, app).await
}
