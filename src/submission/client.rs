use crate::domain::payment::{PaymentSubmission, SubmissionResponse};
use crate::error::CheckoutError;

/// Sends a checkout submission to the processing endpoint.
#[derive(Clone)]
pub struct CheckoutClient {
    pub endpoint: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

impl CheckoutClient {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_ms,
            client: reqwest::Client::new(),
        }
    }

    /// One request, one JSON answer. Transport and decode failures come back
    /// as [`CheckoutError::Network`]; a declined payment is still `Ok`.
    pub async fn submit(
        &self,
        submission: &PaymentSubmission,
    ) -> Result<SubmissionResponse, CheckoutError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await?
            .error_for_status()?;

        let body: SubmissionResponse = resp.json().await?;
        Ok(body)
    }
}
