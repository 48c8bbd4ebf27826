//! # pay-supabase
//!
//! Supabase record-store client for campus-pay.
//!
//! Implements `pay_core::SubscriptionStore` over the PostgREST API using the
//! service-role key. All persistent state lives in Supabase; this crate is a
//! thin table-scoped read/update layer.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_supabase::SupabaseClient;
//! use pay_core::{SubscriptionStore, SubscriptionUpdate};
//!
//! let store = SupabaseClient::from_env()?;
//!
//! if let Some(school_id) = store.school_for_admin("user_1").await? {
//!     store.update_subscription(&school_id, &SubscriptionUpdate::pro()).await?;
//! }
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::SupabaseClient;
pub use config::SupabaseConfig;
