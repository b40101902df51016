use crate::domain::payment::PaymentStatus;
use anyhow::Result;
use serde::{Deserialize, Serialize};

pub mod mock;

#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub payment_method: String,
    pub amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedGatewayResponse {
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GatewayResult {
    pub gateway_used: String,
    pub response: NormalizedGatewayResponse,
}

#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn initiate_payment(&self, request: GatewayRequest) -> Result<GatewayResult>;
}
