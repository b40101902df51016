use crate::domain::payment::PaymentStatus;
use crate::gateways::{GatewayRequest, GatewayResult, NormalizedGatewayResponse, PaymentGateway};
use anyhow::Result;
use std::fmt;
use std::str::FromStr;

/// How the simulated gateway answers. The demo ships with `AlwaysFailure`:
/// every payment is declined and no transaction id is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockBehavior {
    #[default]
    AlwaysFailure,
    AlwaysSuccess,
}

impl MockBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            MockBehavior::AlwaysFailure => "ALWAYS_FAILURE",
            MockBehavior::AlwaysSuccess => "ALWAYS_SUCCESS",
        }
    }
}

impl fmt::Display for MockBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MockBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALWAYS_FAILURE" => Ok(MockBehavior::AlwaysFailure),
            "ALWAYS_SUCCESS" => Ok(MockBehavior::AlwaysSuccess),
            other => Err(format!("unknown mock behavior: {other}")),
        }
    }
}

pub struct MockGateway {
    pub gateway_name: String,
    pub behavior: MockBehavior,
}

impl MockGateway {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            gateway_name: "simulated_gateway".to_string(),
            behavior,
        }
    }
}

#[async_trait::async_trait]
impl PaymentGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn initiate_payment(&self, request: GatewayRequest) -> Result<GatewayResult> {
        let response = match self.behavior {
            MockBehavior::AlwaysFailure => NormalizedGatewayResponse {
                status: PaymentStatus::Failure,
                transaction_id: None,
                error_code: Some("MOCK_DECLINED".to_string()),
                error_message: Some(format!(
                    "Unable to process payment via {}. Please try again in some time.",
                    request.payment_method
                )),
            },
            MockBehavior::AlwaysSuccess => NormalizedGatewayResponse {
                status: PaymentStatus::Success,
                transaction_id: Some(format!("mock_txn_{}", uuid::Uuid::new_v4())),
                error_code: None,
                error_message: None,
            },
        };

        Ok(GatewayResult {
            gateway_used: self.gateway_name.clone(),
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GatewayRequest {
        GatewayRequest {
            payment_method: "UPI (user@upi)".to_string(),
            amount: "₹5,500.00".to_string(),
        }
    }

    #[tokio::test]
    async fn default_behavior_declines() {
        let gateway = MockGateway::new(MockBehavior::default());
        let result = gateway.initiate_payment(request()).await.unwrap();
        assert_eq!(result.response.status, PaymentStatus::Failure);
        assert!(result.response.transaction_id.is_none());
        assert_eq!(
            result.response.error_message.as_deref(),
            Some("Unable to process payment via UPI (user@upi). Please try again in some time.")
        );
    }

    #[tokio::test]
    async fn success_behavior_issues_transaction_id() {
        let gateway = MockGateway::new(MockBehavior::AlwaysSuccess);
        let result = gateway.initiate_payment(request()).await.unwrap();
        assert_eq!(result.response.status, PaymentStatus::Success);
        assert!(result
            .response
            .transaction_id
            .is_some_and(|id| id.starts_with("mock_txn_")));
    }

    #[test]
    fn parses_env_values() {
        assert_eq!(
            "always_failure".parse::<MockBehavior>(),
            Ok(MockBehavior::AlwaysFailure)
        );
        assert_eq!(
            "ALWAYS_SUCCESS".parse::<MockBehavior>(),
            Ok(MockBehavior::AlwaysSuccess)
        );
        assert!("ALWAYS_TIMEOUT".parse::<MockBehavior>().is_err());
    }
}
