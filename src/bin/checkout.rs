use anyhow::Result;
use clap::{Parser, Subcommand};
use payment_checkout::config::AppConfig;
use payment_checkout::domain::checkout::CheckoutState;
use payment_checkout::domain::payment::{CardType, PaymentMethod};
use payment_checkout::error::CheckoutError;
use payment_checkout::input::format::{digits_only, format_card_number, format_expiry};
use payment_checkout::submission::client::CheckoutClient;
use payment_checkout::submission::session::CheckoutSession;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Fill in the checkout form and press pay", long_about = None)]
struct Cli {
    /// Processing endpoint. Defaults to CHECKOUT_ENDPOINT.
    #[arg(long)]
    endpoint: Option<String>,

    /// Display amount sent with the payment. Defaults to CHECKOUT_AMOUNT.
    #[arg(long)]
    amount: Option<String>,

    #[command(subcommand)]
    method: Method,
}

#[derive(Subcommand)]
enum Method {
    /// Pay with a UPI ID or a UPI app
    Upi {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        app: Option<String>,
    },
    /// Pay with a credit or debit card
    Card {
        #[arg(long)]
        number: String,
        #[arg(long)]
        name: String,
        /// MM/YY
        #[arg(long)]
        expiry: String,
        #[arg(long)]
        cvv: String,
        #[arg(long, default_value = "credit")]
        card_type: CardType,
    },
    /// Pay through net banking
    Netbanking {
        #[arg(long)]
        bank: Option<String>,
        /// Any bank not in the list
        #[arg(long)]
        other_bank: Option<String>,
    },
    /// Pay with a wallet
    Wallet {
        #[arg(long)]
        wallet: Option<String>,
    },
}

fn fill_form(method: Method) -> CheckoutState {
    let mut state = CheckoutState::default();
    match method {
        Method::Upi { id, app } => {
            state.select_method(PaymentMethod::Upi);
            state.fields.upi_id = id.unwrap_or_default();
            if let Some(app) = app {
                state.select_upi_app(app);
            }
        }
        Method::Card {
            number,
            name,
            expiry,
            cvv,
            card_type,
        } => {
            state.select_method(PaymentMethod::Card);
            state.fields.card_number = format_card_number(&number);
            state.fields.card_name = name;
            state.fields.card_expiry = format_expiry(&expiry);
            state.fields.card_cvv = digits_only(&cvv);
            state.fields.card_type = card_type;
        }
        Method::Netbanking { bank, other_bank } => {
            state.select_method(PaymentMethod::Netbanking);
            if let Some(bank) = bank {
                state.select_bank(bank);
            }
            state.fields.other_bank = other_bank.unwrap_or_default();
        }
        Method::Wallet { wallet } => {
            state.select_method(PaymentMethod::Wallet);
            if let Some(wallet) = wallet {
                state.select_wallet(wallet);
            }
        }
    }
    state
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cfg = AppConfig::from_env();

    let endpoint = cli.endpoint.unwrap_or(cfg.checkout_endpoint);
    let amount = cli.amount.unwrap_or(cfg.checkout_amount);
    let client = CheckoutClient::new(endpoint, cfg.client_timeout_ms);
    let session = CheckoutSession::new(fill_form(cli.method));

    let today = chrono::Local::now().date_naive();
    match session.pay(&client, &amount, today).await {
        Ok(resp) => {
            println!("{}", serde_json::to_string_pretty(&resp)?);
            Ok(())
        }
        Err(CheckoutError::GatewayDeclined { response }) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            anyhow::bail!("[GATEWAY_DECLINED] {}", response.message)
        }
        Err(e) => anyhow::bail!("[{}] {}", e.kind(), e),
    }
}
