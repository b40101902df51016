use crate::gateways::mock::MockBehavior;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub response_delay_ms: u64,
    pub mock_behavior: MockBehavior,
    pub checkout_endpoint: String,
    pub checkout_amount: String,
    pub client_timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            response_delay_ms: std::env::var("RESPONSE_DELAY_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(2000),
            mock_behavior: std::env::var("MOCK_BEHAVIOR")
                .ok()
                .and_then(|s| s.parse::<MockBehavior>().ok())
                .unwrap_or_default(),
            checkout_endpoint: std::env::var("CHECKOUT_ENDPOINT")
                .unwrap_or_else(|_| "http://127.0.0.1:3000/api/process-payment".to_string()),
            checkout_amount: std::env::var("CHECKOUT_AMOUNT")
                .unwrap_or_else(|_| "₹5,500.00".to_string()),
            client_timeout_ms: std::env::var("CLIENT_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(10_000),
        }
    }
}
