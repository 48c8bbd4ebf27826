//! # pay-core
//!
//! Core types and traits for the campus-pay payment service.
//!
//! This crate provides:
//! - `PaymentGateway` trait for payment providers (Razorpay, mock)
//! - `SubscriptionStore` trait for the external subscription record store
//! - `Order`, `OrderRequest`, and `VerificationParams` for the payment flow
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{OrderRequest, PaymentGateway, SubscriptionUpdate};
//!
//! // Create an order through whichever gateway was selected at startup
//! let order = gateway.create_order(&OrderRequest::new(5000)).await?;
//!
//! // After a verified payment, upgrade the school's subscription
//! let updated = store.update_subscription(&school_id, &SubscriptionUpdate::pro()).await?;
//! ```

pub mod error;
pub mod gateway;
pub mod order;
pub mod store;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use order::{
    Order, OrderRequest, OrderStatus, VerificationParams, DEFAULT_CURRENCY, DEFAULT_RECEIPT,
};
pub use store::{
    BoxedSubscriptionStore, SubscriptionStore, SubscriptionUpdate, ACTIVE_STATUS, PRO_PLAN,
};
