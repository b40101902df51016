use crate::domain::payment::{CardType, PaymentMethod};

/// Raw form values. Only the active method's fields are read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutFields {
    pub upi_id: String,
    pub card_number: String,
    pub card_name: String,
    pub card_expiry: String,
    pub card_cvv: String,
    pub card_type: CardType,
    pub other_bank: String,
}

/// Selection state of the checkout form, passed explicitly to validation and
/// normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutState {
    pub method: PaymentMethod,
    pub selected_bank: Option<String>,
    pub selected_wallet: Option<String>,
    pub selected_upi_app: Option<String>,
    pub fields: CheckoutFields,
}

impl CheckoutState {
    pub fn new(method: PaymentMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Switching tabs drops bank, wallet and UPI app selections, even when the
    /// same method is chosen again.
    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = method;
        self.clear_selections();
    }

    pub fn select_upi_app(&mut self, app: impl Into<String>) {
        self.selected_upi_app = non_empty(app.into());
    }

    pub fn select_bank(&mut self, bank: impl Into<String>) {
        self.selected_bank = non_empty(bank.into());
    }

    pub fn select_wallet(&mut self, wallet: impl Into<String>) {
        self.selected_wallet = non_empty(wallet.into());
    }

    /// Clears every field and selection but keeps the active method.
    pub fn reset(&mut self) {
        self.fields = CheckoutFields::default();
        self.clear_selections();
    }

    fn clear_selections(&mut self) {
        self.selected_bank = None;
        self.selected_wallet = None;
        self.selected_upi_app = None;
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
