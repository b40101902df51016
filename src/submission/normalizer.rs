use crate::domain::checkout::CheckoutState;
use crate::domain::payment::{PaymentDetails, PaymentMethod, PaymentSubmission};
use crate::validation::rules::strip_whitespace;

/// Builds the request body for a form that already passed validation.
pub fn build_submission(state: &CheckoutState, amount: &str) -> PaymentSubmission {
    PaymentSubmission {
        payment_method: method_label(state),
        amount: amount.to_string(),
        details: payment_details(state),
    }
}

pub fn method_label(state: &CheckoutState) -> String {
    let fields = &state.fields;
    match state.method {
        PaymentMethod::Upi => match &state.selected_upi_app {
            Some(app) => format!("UPI ({app})"),
            None => format!("UPI ({})", fields.upi_id.trim()),
        },
        PaymentMethod::Card => format!("{} Card", fields.card_type.display_name()),
        PaymentMethod::Netbanking => format!("Net Banking ({})", bank_name(state)),
        PaymentMethod::Wallet => format!(
            "{} Wallet",
            state.selected_wallet.as_deref().unwrap_or_default()
        ),
    }
}

pub fn payment_details(state: &CheckoutState) -> PaymentDetails {
    let fields = &state.fields;
    match state.method {
        PaymentMethod::Upi => PaymentDetails::Upi {
            upi_id: fields.upi_id.trim().to_string(),
            app: state.selected_upi_app.clone(),
        },
        PaymentMethod::Card => PaymentDetails::Card {
            card_type: fields.card_type,
            card_number: last4(&fields.card_number),
            card_name: fields.card_name.trim().to_string(),
        },
        PaymentMethod::Netbanking => PaymentDetails::Netbanking {
            bank: bank_name(state),
        },
        PaymentMethod::Wallet => PaymentDetails::Wallet {
            wallet: state.selected_wallet.clone().unwrap_or_default(),
        },
    }
}

fn bank_name(state: &CheckoutState) -> String {
    state
        .selected_bank
        .clone()
        .unwrap_or_else(|| state.fields.other_bank.clone())
}

/// Last four digits, ignoring the grouping spaces the form inserts.
fn last4(card_number: &str) -> String {
    let digits = strip_whitespace(card_number);
    let skip = digits.chars().count().saturating_sub(4);
    digits.chars().skip(skip).collect()
}
