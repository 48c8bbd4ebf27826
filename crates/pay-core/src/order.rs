//! # Order Types
//!
//! Gateway order types for campus-pay.
//!
//! `Order` mirrors the shape the gateway returns for a created order.
//! Amounts are always in the minor currency unit (paise for INR).

use serde::{Deserialize, Serialize};

/// Currency used when the caller does not supply one
pub const DEFAULT_CURRENCY: &str = "INR";

/// Receipt label used when the caller does not supply one
pub const DEFAULT_RECEIPT: &str = "receipt_1";

/// Parameters for creating a gateway order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Amount in the minor currency unit (e.g. 10000 paise = 100 INR)
    pub amount: u64,

    /// ISO currency code
    pub currency: String,

    /// Optional receipt label supplied by the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

impl OrderRequest {
    /// Create an order request with the default currency
    pub fn new(amount: u64) -> Self {
        Self {
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            receipt: None,
        }
    }

    /// Set the currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the receipt label
    pub fn with_receipt(mut self, receipt: impl Into<String>) -> Self {
        self.receipt = Some(receipt.into());
        self
    }

    /// The receipt label sent to the gateway (caller's, or the default)
    pub fn receipt_label(&self) -> &str {
        self.receipt.as_deref().unwrap_or(DEFAULT_RECEIPT)
    }
}

/// Status of a gateway order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order created, awaiting payment
    Created,
    /// Payment attempted
    Attempted,
    /// Payment captured
    Paid,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Created
    }
}

/// An order as returned by the payment gateway.
///
/// The gateway owns this entity; the service never mutates it. Under mock
/// mode an equivalently shaped record is synthesized locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Gateway order ID (`order_...`)
    pub id: String,

    /// Entity tag, always `"order"`
    pub entity: String,

    /// Total amount in the minor currency unit
    pub amount: u64,

    /// Amount paid so far
    pub amount_paid: u64,

    /// Amount still due
    pub amount_due: u64,

    /// ISO currency code
    pub currency: String,

    /// Receipt label
    #[serde(default)]
    pub receipt: Option<String>,

    /// Order status
    #[serde(default)]
    pub status: OrderStatus,

    /// Number of payment attempts
    #[serde(default)]
    pub attempts: u32,

    /// Free-form notes attached to the order
    #[serde(default)]
    pub notes: serde_json::Value,

    /// Creation time as a unix timestamp (seconds)
    pub created_at: i64,
}

impl Order {
    /// Check whether the order is fully paid
    pub fn is_paid(&self) -> bool {
        matches!(self.status, OrderStatus::Paid)
    }
}

/// Parameters for verifying a payment signature.
///
/// Transient; exists only for the duration of one verify request.
#[derive(Debug, Clone)]
pub struct VerificationParams {
    /// Gateway order ID
    pub order_id: String,
    /// Gateway payment ID
    pub payment_id: String,
    /// Signature submitted by the client
    pub signature: String,
}
