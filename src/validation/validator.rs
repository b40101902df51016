use crate::domain::checkout::CheckoutState;
use crate::domain::payment::PaymentMethod;
use crate::error::ValidationError;
use crate::validation::rules;
use chrono::NaiveDate;

/// Checks the active method's inputs. Card checks run in a fixed order and the
/// first failure is returned.
pub fn validate(state: &CheckoutState, reference: NaiveDate) -> Result<(), ValidationError> {
    let fields = &state.fields;
    match state.method {
        PaymentMethod::Upi => {
            if state.selected_upi_app.is_some() {
                return Ok(());
            }
            let upi_id = fields.upi_id.trim();
            if upi_id.is_empty() {
                return Err(ValidationError::MissingUpi);
            }
            if !rules::is_valid_upi_id(upi_id) {
                return Err(ValidationError::InvalidUpiId);
            }
            Ok(())
        }
        PaymentMethod::Card => {
            rules::check_card_number(&fields.card_number)?;
            rules::check_card_name(&fields.card_name)?;
            rules::check_expiry(&fields.card_expiry, reference)?;
            rules::check_cvv(&fields.card_cvv)
        }
        PaymentMethod::Netbanking => {
            if state.selected_bank.is_none() && fields.other_bank.is_empty() {
                return Err(ValidationError::MissingBank);
            }
            Ok(())
        }
        PaymentMethod::Wallet => {
            if state.selected_wallet.is_none() {
                return Err(ValidationError::MissingWallet);
            }
            Ok(())
        }
    }
}
