use crate::domain::checkout::CheckoutState;
use crate::domain::payment::SubmissionResponse;
use crate::error::CheckoutError;
use crate::submission::client::CheckoutClient;
use crate::submission::normalizer::build_submission;
use crate::validation::validator::validate;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    ErrorDisplayed(String),
}

/// The pay button. Disabled while a submission is in flight.
#[derive(Debug, Clone, Default)]
pub struct SubmitControl {
    state: Arc<Mutex<SubmitState>>,
}

impl SubmitControl {
    pub fn state(&self) -> SubmitState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_enabled(&self) -> bool {
        self.state() != SubmitState::Submitting
    }

    pub fn try_begin(&self) -> Result<SubmitGuard, CheckoutError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == SubmitState::Submitting {
            return Err(CheckoutError::SubmissionInFlight);
        }
        *state = SubmitState::Submitting;
        Ok(SubmitGuard {
            control: self.clone(),
            finished: false,
        })
    }

    /// Closes a displayed error.
    pub fn dismiss(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if matches!(*state, SubmitState::ErrorDisplayed(_)) {
            *state = SubmitState::Idle;
        }
    }

    fn set(&self, next: SubmitState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

/// Held for the duration of one submission. Dropping it without `finish`
/// re-enables the control.
pub struct SubmitGuard {
    control: SubmitControl,
    finished: bool,
}

impl SubmitGuard {
    pub fn finish<T>(mut self, outcome: &Result<T, CheckoutError>) {
        let next = match outcome {
            Ok(_) => SubmitState::Idle,
            Err(e) => SubmitState::ErrorDisplayed(e.to_string()),
        };
        self.control.set(next);
        self.finished = true;
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        if !self.finished {
            self.control.set(SubmitState::Idle);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckoutSession {
    pub state: CheckoutState,
    pub control: SubmitControl,
}

impl CheckoutSession {
    pub fn new(state: CheckoutState) -> Self {
        Self {
            state,
            control: SubmitControl::default(),
        }
    }

    /// Validate, normalize, send. A declined payment surfaces as
    /// [`CheckoutError::GatewayDeclined`]; nothing is retried.
    pub async fn pay(
        &self,
        client: &CheckoutClient,
        amount: &str,
        today: NaiveDate,
    ) -> Result<SubmissionResponse, CheckoutError> {
        validate(&self.state, today)?;
        let submission = build_submission(&self.state, amount);

        let guard = self.control.try_begin()?;
        tracing::debug!(payment_method = %submission.payment_method, "submitting payment");

        let outcome = match client.submit(&submission).await {
            Ok(resp) if resp.success => Ok(resp),
            Ok(resp) => Err(CheckoutError::GatewayDeclined { response: resp }),
            Err(e) => {
                tracing::warn!("payment submission failed: {}", e);
                Err(e)
            }
        };

        guard.finish(&outcome);
        outcome
    }

    /// The retry action: clear the form and any displayed error.
    pub fn retry(&mut self) {
        self.state.reset();
        self.control.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn declined(message: &str) -> CheckoutError {
        CheckoutError::GatewayDeclined {
            response: SubmissionResponse {
                success: false,
                message: message.to_string(),
                payment_method: "Paytm Wallet".to_string(),
                amount: "₹99.00".to_string(),
                transaction_id: None,
                timestamp: "2025-06-01T10:00:00.000Z".to_string(),
            },
        }
    }

    #[test]
    fn second_begin_is_rejected() {
        let control = SubmitControl::default();
        let guard = control.try_begin().unwrap();
        assert!(!control.is_enabled());
        assert!(matches!(
            control.try_begin(),
            Err(CheckoutError::SubmissionInFlight)
        ));
        drop(guard);
        assert_eq!(control.state(), SubmitState::Idle);
    }

    #[test]
    fn failed_outcome_is_displayed() {
        let control = SubmitControl::default();
        let guard = control.try_begin().unwrap();
        let outcome: Result<(), CheckoutError> = Err(declined("declined"));
        guard.finish(&outcome);
        assert_eq!(control.state(), SubmitState::ErrorDisplayed("declined".to_string()));
        assert!(control.is_enabled());

        control.dismiss();
        assert_eq!(control.state(), SubmitState::Idle);
    }

    #[test]
    fn can_resubmit_after_error() {
        let control = SubmitControl::default();
        control
            .try_begin()
            .unwrap()
            .finish::<()>(&Err(CheckoutError::SubmissionInFlight));
        assert!(control.try_begin().is_ok());
    }

    #[tokio::test]
    async fn validation_failure_never_disables_control() {
        let session = CheckoutSession::default();
        let client = CheckoutClient::new("http://127.0.0.1:9/api/process-payment", 100);
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let err = session.pay(&client, "₹1.00", today).await.unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Validation(ValidationError::MissingUpi)
        ));
        assert_eq!(session.control.state(), SubmitState::Idle);
    }

    #[test]
    fn retry_clears_form_and_error() {
        let mut session = CheckoutSession::default();
        session.state.fields.upi_id = "user@upi".to_string();
        session
            .control
            .try_begin()
            .unwrap()
            .finish::<()>(&Err(declined("declined")));
        session.retry();
        assert!(session.state.fields.upi_id.is_empty());
        assert_eq!(session.control.state(), SubmitState::Idle);
    }
}
