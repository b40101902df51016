use crate::domain::payment::SubmissionResponse;
use thiserror::Error;

/// User-correctable problems with the form. The display text is what the
/// customer sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a UPI ID or select a UPI app.")]
    MissingUpi,
    #[error("Please enter a valid UPI ID (e.g., user@upi, 9876543210@paytm).")]
    InvalidUpiId,
    #[error("Please enter a valid credit/debit card number.")]
    InvalidCardNumber,
    #[error("Please enter the cardholder name (letters and spaces only).")]
    InvalidCardName,
    #[error("Please enter expiry date in MM/YY format.")]
    InvalidExpiryFormat,
    #[error("Expiry month must be between 01 and 12.")]
    InvalidExpiryMonth,
    #[error("Card expiry date cannot be in the past.")]
    CardExpired,
    #[error("Please enter a valid 3 or 4 digit CVV.")]
    InvalidCvv,
    #[error("Please select a bank.")]
    MissingBank,
    #[error("Please select a wallet.")]
    MissingWallet,
}

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Network error. Please try again.")]
    Network(#[from] reqwest::Error),
    /// The backend answered with `success: false`. The full answer is kept.
    #[error("{}", response.message)]
    GatewayDeclined { response: SubmissionResponse },
    #[error("A payment is already being processed.")]
    SubmissionInFlight,
}

impl CheckoutError {
    pub fn kind(&self) -> &'static str {
        match self {
            CheckoutError::Validation(_) => "VALIDATION_ERROR",
            CheckoutError::Network(_) => "NETWORK_ERROR",
            CheckoutError::GatewayDeclined { .. } => "GATEWAY_DECLINED",
            CheckoutError::SubmissionInFlight => "SUBMISSION_IN_FLIGHT",
        }
    }
}
