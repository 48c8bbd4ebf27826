//! # Subscription Store Trait
//!
//! Seam for the external record store holding school subscriptions.
//! The service reads the school-admin mapping and writes the subscription
//! columns on the school record; it owns no persistent state itself.

use crate::error::PaymentResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Subscription plan tier applied after a verified payment
pub const PRO_PLAN: &str = "pro";

/// Subscription status applied after a verified payment
pub const ACTIVE_STATUS: &str = "active";

/// Columns written on the school record when a subscription is upgraded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionUpdate {
    pub subscription_plan: String,
    pub subscription_status: String,
    // TODO: compute subscription_expires_at once plan durations are settled
}

impl SubscriptionUpdate {
    /// The fixed upgrade written after a verified payment: "pro"/"active"
    pub fn pro() -> Self {
        Self {
            subscription_plan: PRO_PLAN.to_string(),
            subscription_status: ACTIVE_STATUS.to_string(),
        }
    }
}

/// Trait for the external subscription record store.
///
/// No locking or optimistic-concurrency check is layered over the
/// read-then-update sequence; concurrent upgrades for the same school are
/// last-write-wins.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// Resolve the school administered by `user_id`.
    ///
    /// Returns `None` when the user has no school-admin mapping. No
    /// fallback to any other admin role is attempted.
    async fn school_for_admin(&self, user_id: &str) -> PaymentResult<Option<String>>;

    /// Apply `update` to the school's subscription columns.
    ///
    /// Returns `false` when the update affected no record.
    async fn update_subscription(
        &self,
        school_id: &str,
        update: &SubscriptionUpdate,
    ) -> PaymentResult<bool>;
}

/// Type alias for a shared subscription store (dynamic dispatch)
pub type BoxedSubscriptionStore = Arc<dyn SubscriptionStore>;
