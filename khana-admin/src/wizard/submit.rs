use async_trait::async_trait;
use khana_client::{AdminApi, ClientResult, HttpClient};
use shared::MessageResponse;
use shared::models::SetupWizardPayload;

/// Sink for a finished setup payload
#[async_trait]
pub trait WizardSubmitter: Send + Sync {
    async fn submit(&self, payload: &SetupWizardPayload) -> ClientResult<MessageResponse>;
}

#[async_trait]
impl<C: HttpClient> WizardSubmitter for AdminApi<C> {
    async fn submit(&self, payload: &SetupWizardPayload) -> ClientResult<MessageResponse> {
        self.submit_setup_wizard(payload).await
    }
}
