//! # Mock Gateway
//!
//! `PaymentGateway` implementation that never talks to Razorpay.
//! Lets the surrounding application be exercised without real gateway
//! credentials: orders are synthesized locally and signature verification
//! is skipped entirely.

use async_trait::async_trait;
use chrono::Utc;
use pay_core::{
    Order, OrderRequest, OrderStatus, PaymentGateway, PaymentResult, VerificationParams,
};
use tracing::info;

/// Prefix for locally synthesized order ids
pub const MOCK_ORDER_PREFIX: &str = "order_mock_";

/// Mock payment gateway for development and testing
#[derive(Debug, Default)]
pub struct MockGateway;

impl MockGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<Order> {
        let now = Utc::now().timestamp();

        Ok(Order {
            id: format!("{}{}", MOCK_ORDER_PREFIX, now),
            entity: "order".to_string(),
            amount: request.amount,
            amount_paid: 0,
            amount_due: request.amount,
            currency: request.currency.clone(),
            receipt: Some(request.receipt_label().to_string()),
            status: OrderStatus::Created,
            attempts: 0,
            notes: serde_json::json!([]),
            created_at: now,
        })
    }

    async fn verify_payment(&self, _params: &VerificationParams) -> PaymentResult<()> {
        info!("mock mode: skipping signature verification");
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
