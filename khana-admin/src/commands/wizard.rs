use std::path::Path;

use shared::models::SetupWizardPayload;
use tracing::debug;

use crate::core::{AdminConfig, AdminError, AdminResult};
use crate::wizard::{Wizard, WizardSubmitter};

/// Read a payload file
pub fn read_payload(path: &Path) -> AdminResult<SetupWizardPayload> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AdminError::InvalidInput(format!("Cannot read {}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| AdminError::InvalidInput(format!("Invalid payload {}: {}", path.display(), e)))
}

/// Walk the payload through every step, then submit it
///
/// The payload's own branch wins over the configured one.
pub async fn submit(
    submitter: &dyn WizardSubmitter,
    config: &AdminConfig,
    payload: SetupWizardPayload,
) -> AdminResult<String> {
    let branch = if payload.branch.trim().is_empty() {
        config.require_branch()?.to_string()
    } else {
        payload.branch.trim().to_string()
    };
    let mut wizard = Wizard::from_payload(payload)?;
    debug!(step = %wizard.step(), "Payload validated");
    let res = wizard.submit(submitter, &branch).await?;
    Ok(res.message)
}
