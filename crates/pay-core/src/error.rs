//! # Payment Error Types
//!
//! Typed error handling for the campus-pay service.
//! All gateway and store operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Payment signature did not verify.
    /// The display string is fixed; the raw verification detail never
    /// reaches the caller.
    #[error("Invalid Payment Signature")]
    SignatureVerification,

    /// Submitting user has no school-admin mapping
    #[error("User not found or not a school admin")]
    NotSchoolAdmin { user_id: String },

    /// Payment gateway API error
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with the gateway or store
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Record store API error
    #[error("Store error: {0}")]
    StoreError(String),

    /// Subscription update reported no affected row
    #[error("Failed to update subscription")]
    SubscriptionUpdateFailed { school_id: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::SignatureVerification => 400,
            PaymentError::NotSchoolAdmin { .. } => 404,
            // Gateway/store transport failures surface as generic internal
            // errors to the caller.
            PaymentError::ProviderError { .. } => 500,
            PaymentError::NetworkError(_) => 500,
            PaymentError::StoreError(_) => 500,
            PaymentError::SubscriptionUpdateFailed { .. } => 500,
            PaymentError::Serialization(_) => 500,
            PaymentError::Internal(_) => 500,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PaymentError::InvalidRequest("test".into()).status_code(),
            400
        );
        assert_eq!(PaymentError::SignatureVerification.status_code(), 400);
        assert_eq!(
            PaymentError::NotSchoolAdmin {
                user_id: "u1".into()
            }
            .status_code(),
            404
        );
        assert_eq!(
            PaymentError::ProviderError {
                provider: "razorpay".into(),
                message: "boom".into()
            }
            .status_code(),
            500
        );
        assert_eq!(
            PaymentError::SubscriptionUpdateFailed {
                school_id: "sch_1".into()
            }
            .status_code(),
            500
        );
    }

    #[test]
    fn test_fixed_client_messages() {
        // These strings are part of the API contract.
        assert_eq!(
            PaymentError::SignatureVerification.to_string(),
            "Invalid Payment Signature"
        );
        assert_eq!(
            PaymentError::NotSchoolAdmin {
                user_id: "u1".into()
            }
            .to_string(),
            "User not found or not a school admin"
        );
        assert_eq!(
            PaymentError::SubscriptionUpdateFailed {
                school_id: "sch_1".into()
            }
            .to_string(),
            "Failed to update subscription"
        );
    }
}
