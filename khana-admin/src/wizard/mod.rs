//! Branch setup wizard
//!
//! A fixed sequence of steps, each merging a [`StepPatch`] into the
//! accumulated [`WizardState`]. Going back only moves the cursor; data
//! collected on later steps stays in the state. Submission posts the whole
//! state once: failure keeps it for a retry, success resets the wizard.

mod state;
mod step;
mod submit;
mod tables;

use shared::MessageResponse;
use shared::models::SetupWizardPayload;
use tracing::{info, instrument, warn};

use crate::core::{AdminError, AdminResult};

pub use state::{StepPatch, WizardState};
pub use step::WizardStep;
pub use submit::WizardSubmitter;
pub use tables::TableSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    step: WizardStep,
    state: WizardState,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Company,
            state: WizardState::default(),
        }
    }

    /// Walk a complete payload through every step, ending on review
    pub fn from_payload(payload: SetupWizardPayload) -> AdminResult<Self> {
        let mut wizard = Self::new();
        for patch in WizardState::from(payload).into_patches() {
            wizard.next(patch)?;
        }
        Ok(wizard)
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Merge the current step's patch and advance
    ///
    /// A patch that fails its step's checks leaves the state untouched.
    pub fn next(&mut self, patch: StepPatch) -> AdminResult<WizardStep> {
        if patch.step() != self.step {
            return Err(AdminError::InvalidInput(format!(
                "{} data submitted on the {} step",
                patch.step(),
                self.step
            )));
        }
        let next = self.step.next().ok_or_else(|| {
            AdminError::wizard(self.step, "Last step reached; submit to finish")
        })?;

        let mut candidate = self.state.clone();
        candidate.apply(patch)?;
        candidate.validate(self.step)?;

        self.state = candidate;
        self.step = next;
        Ok(next)
    }

    /// Move back one step; collected data is kept
    pub fn back(&mut self) -> WizardStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Post the accumulated state (only from the review step)
    #[instrument(skip(self, submitter))]
    pub async fn submit(
        &mut self,
        submitter: &dyn WizardSubmitter,
        branch: &str,
    ) -> AdminResult<MessageResponse> {
        if self.step != WizardStep::Review {
            return Err(AdminError::wizard(self.step, "Complete all steps before submitting"));
        }
        self.state.validate(WizardStep::Review)?;

        let payload = self.state.to_payload(branch);
        match submitter.submit(&payload).await {
            Ok(response) => {
                info!(branch = %branch, "Branch setup submitted");
                self.reset();
                Ok(response)
            }
            Err(e) => {
                warn!(branch = %branch, error = %e, "Branch setup failed, state kept");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use khana_client::{ClientError, ClientResult};
    use shared::models::{CompanyInfo, UserRole, WizardUser};
    use std::sync::Mutex;

    /// Records payloads; fails while `fail` is set
    struct Recorder {
        fail: Mutex<bool>,
        sent: Mutex<Vec<SetupWizardPayload>>,
    }

    impl Recorder {
        fn new(fail: bool) -> Self {
            Self {
                fail: Mutex::new(fail),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl WizardSubmitter for Recorder {
        async fn submit(&self, payload: &SetupWizardPayload) -> ClientResult<MessageResponse> {
            self.sent.lock().unwrap().push(payload.clone());
            if *self.fail.lock().unwrap() {
                Err(ClientError::Api {
                    status: 500,
                    code: 9001,
                    message: "Internal server error".into(),
                    details: None,
                })
            } else {
                Ok(MessageResponse::new("Branch setup completed"))
            }
        }
    }

    fn company() -> StepPatch {
        StepPatch::Company(CompanyInfo {
            name: "Khana Kitchen".into(),
            ..Default::default()
        })
    }

    fn filled() -> Wizard {
        let mut w = Wizard::new();
        w.next(company()).unwrap();
        w.next(StepPatch::Categories(vec!["Rice".into()])).unwrap();
        w.next(StepPatch::Products(vec![])).unwrap();
        w.next(StepPatch::GenerateTables(TableSpec::new("T", 2))).unwrap();
        w.next(StepPatch::Roles(vec![])).unwrap();
        w.next(StepPatch::Users(vec![WizardUser {
            name: "Karim".into(),
            email: "karim@example.com".into(),
            password: "secret".into(),
            role: UserRole::User,
        }]))
        .unwrap();
        w
    }

    #[test]
    fn test_walks_to_review() {
        let w = filled();
        assert_eq!(w.step(), WizardStep::Review);
        assert!(w.state().roles.is_empty());
        assert_eq!(w.state().tables.len(), 2);
    }

    #[test]
    fn test_invalid_patch_keeps_state_and_step() {
        let mut w = Wizard::new();
        w.next(company()).unwrap();
        let before = w.clone();
        let err = w.next(StepPatch::Categories(vec![])).unwrap_err();
        assert!(matches!(err, AdminError::Wizard { step: WizardStep::Categories, .. }));
        assert_eq!(w, before);
    }

    #[test]
    fn test_patch_for_wrong_step_rejected() {
        let mut w = Wizard::new();
        assert!(matches!(
            w.next(StepPatch::Roles(vec![])),
            Err(AdminError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_back_preserves_later_data() {
        let mut w = filled();
        let state = w.state().clone();
        assert_eq!(w.back(), WizardStep::Users);
        assert_eq!(w.back(), WizardStep::Roles);
        assert_eq!(w.back(), WizardStep::Tables);
        assert_eq!(w.state(), &state);

        // re-entering a step replaces only that step's data
        w.next(StepPatch::GenerateTables(TableSpec::new("A", 3))).unwrap();
        assert_eq!(w.state().tables.len(), 3);
        assert_eq!(w.state().users, state.users);
        assert_eq!(w.state().company, state.company);
    }

    #[test]
    fn test_back_at_first_step_stays() {
        let mut w = Wizard::new();
        assert_eq!(w.back(), WizardStep::Company);
    }

    #[tokio::test]
    async fn test_submit_failure_retains_state() {
        let mut w = filled();
        let before = w.clone();
        let recorder = Recorder::new(true);
        assert!(w.submit(&recorder, "gulshan").await.is_err());
        assert_eq!(w, before);

        // retry succeeds with the same payload
        *recorder.fail.lock().unwrap() = false;
        let res = w.submit(&recorder, "gulshan").await.unwrap();
        assert_eq!(res.message, "Branch setup completed");
        let sent = recorder.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
        assert_eq!(sent[0].branch, "gulshan");
    }

    #[tokio::test]
    async fn test_submit_success_resets() {
        let mut w = filled();
        w.submit(&Recorder::new(false), "gulshan").await.unwrap();
        assert_eq!(w.step(), WizardStep::Company);
        assert!(w.state().is_empty());
    }

    #[tokio::test]
    async fn test_submit_before_review_rejected() {
        let mut w = Wizard::new();
        let recorder = Recorder::new(false);
        assert!(w.submit(&recorder, "gulshan").await.is_err());
        assert!(recorder.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_from_payload_validates() {
        let payload = filled().state().to_payload("gulshan");
        let w = Wizard::from_payload(payload.clone()).unwrap();
        assert_eq!(w.step(), WizardStep::Review);
        assert_eq!(w.state().to_payload("gulshan"), payload);

        let mut bad = payload;
        bad.tables.clear();
        let err = Wizard::from_payload(bad).unwrap_err();
        assert!(matches!(err, AdminError::Wizard { step: WizardStep::Tables, .. }));
    }
}
