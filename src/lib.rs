pub mod config;
pub mod domain {
    pub mod checkout;
    pub mod payment;
}
pub mod error;
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod payments;
    }
    pub mod routes;
}
pub mod input {
    pub mod format;
}
pub mod service {
    pub mod payment_service;
}
pub mod submission {
    pub mod client;
    pub mod normalizer;
    pub mod session;
}
pub mod validation {
    pub mod rules;
    pub mod validator;
}

use crate::config::AppConfig;
use crate::gateways::mock::{MockBehavior, MockGateway};
use crate::service::payment_service::PaymentService;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub payment_service: PaymentService,
    pub mock_behavior: MockBehavior,
}

impl AppState {
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            payment_service: PaymentService {
                gateway: Arc::new(MockGateway::new(cfg.mock_behavior)),
                response_delay: Duration::from_millis(cfg.response_delay_ms),
            },
            mock_behavior: cfg.mock_behavior,
        }
    }
}
