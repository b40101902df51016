use crate::domain::payment::{
    ErrorEnvelope, ErrorPayload, PaymentStatus, ProcessPaymentRequest, SubmissionResponse,
};
use crate::gateways::{GatewayRequest, PaymentGateway};
use axum::http::StatusCode;
use chrono::SecondsFormat;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct PaymentService {
    pub gateway: Arc<dyn PaymentGateway>,
    pub response_delay: Duration,
}

impl PaymentService {
    pub async fn process(
        &self,
        req: ProcessPaymentRequest,
    ) -> Result<SubmissionResponse, (StatusCode, ErrorEnvelope)> {
        validate_request(&req)?;

        if !self.response_delay.is_zero() {
            tokio::time::sleep(self.response_delay).await;
        }

        let result = self
            .gateway
            .initiate_payment(GatewayRequest {
                payment_method: req.payment_method.clone(),
                amount: req.amount.clone(),
            })
            .await
            .map_err(internal)?;

        let success = result.response.status == PaymentStatus::Success;
        let message = match (&result.response.status, result.response.error_message) {
            (PaymentStatus::Success, _) => format!(
                "Payment of {} via {} processed.",
                req.amount, req.payment_method
            ),
            (PaymentStatus::Failure, Some(msg)) => msg,
            (PaymentStatus::Failure, None) => format!(
                "Unable to process payment via {}. Please try again in some time.",
                req.payment_method
            ),
        };

        tracing::info!(
            gateway = %result.gateway_used,
            payment_method = %req.payment_method,
            error_code = ?result.response.error_code,
            success,
            "payment processed"
        );

        Ok(SubmissionResponse {
            success,
            message,
            payment_method: req.payment_method,
            amount: req.amount,
            transaction_id: result.response.transaction_id,
            timestamp: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

fn validate_request(req: &ProcessPaymentRequest) -> Result<(), (StatusCode, ErrorEnvelope)> {
    if req.payment_method.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            err("INVALID_PAYMENT_METHOD", "paymentMethod is required"),
        ));
    }

    let card_digits = req
        .details
        .get("cardNumber")
        .and_then(|v| v.as_str())
        .map(|s| s.chars().filter(char::is_ascii_digit).count())
        .unwrap_or(0);
    if card_digits > 4 {
        return Err((
            StatusCode::BAD_REQUEST,
            err(
                "CARD_NUMBER_NOT_ALLOWED",
                "only the last 4 digits of a card number may be sent",
            ),
        ));
    }

    Ok(())
}

fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}

fn internal(e: anyhow::Error) -> (StatusCode, ErrorEnvelope) {
    tracing::error!("gateway error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorEnvelope {
            error: ErrorPayload {
                code: "INTERNAL_ERROR".to_string(),
                message: "internal server error".to_string(),
                details: Some(e.to_string()),
            },
        },
    )
}
