//! # Payment Gateway Trait
//!
//! Strategy trait for the external payment gateway.
//! Implementations: Razorpay (live), Mock (development/testing).
//!
//! The implementation is selected once at startup from configuration, so
//! handler code never re-checks a mock flag inline.

use crate::error::PaymentResult;
use crate::order::{Order, OrderRequest, VerificationParams};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment gateway implementations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment-capture-enabled order with the gateway.
    ///
    /// # Arguments
    /// * `request` - Amount, currency, and optional receipt label
    ///
    /// # Returns
    /// The gateway's order record (or a locally synthesized equivalent
    /// under mock mode).
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<Order>;

    /// Verify a payment signature against the order/payment id pair.
    ///
    /// Returns `PaymentError::SignatureVerification` when the signature
    /// does not match.
    async fn verify_payment(&self, params: &VerificationParams) -> PaymentResult<()>;

    /// Get the provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
