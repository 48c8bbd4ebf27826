//! # pay-razorpay
//!
//! Razorpay payment gateway for campus-pay.
//!
//! This crate provides two `PaymentGateway` implementations:
//!
//! 1. **RazorpayGateway** - Live Razorpay Orders API
//!    - Creates payment-capture-enabled orders
//!    - Verifies payment signatures (HMAC-SHA256, constant time)
//!
//! 2. **MockGateway** - Local synthesized orders
//!    - No network calls, no credentials
//!    - Signature verification skipped
//!    - Best for: development and CI without Razorpay keys
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_razorpay::RazorpayGateway;
//! use pay_core::{OrderRequest, PaymentGateway};
//!
//! // Create gateway from environment
//! let gateway = RazorpayGateway::from_env()?;
//!
//! // Create an order (amount in paise)
//! let order = gateway.create_order(&OrderRequest::new(10000)).await?;
//!
//! // Later, verify the submitted payment signature
//! gateway.verify_payment(&params).await?;
//! ```

pub mod config;
pub mod mock;
pub mod orders;
pub mod signature;

// Re-exports
pub use config::RazorpayConfig;
pub use mock::{MockGateway, MOCK_ORDER_PREFIX};
pub use orders::RazorpayGateway;
