//! # Razorpay Orders API
//!
//! Live `PaymentGateway` implementation over the Razorpay REST API.
//! Order creation posts to `/v1/orders`; signature verification is computed
//! locally from the key secret (see `signature`).

use crate::config::RazorpayConfig;
use crate::signature;
use async_trait::async_trait;
use pay_core::{
    Order, OrderRequest, PaymentError, PaymentGateway, PaymentResult, VerificationParams,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Razorpay payment gateway
///
/// Holds one long-lived HTTP client; constructed once at startup and shared
/// by all handlers.
pub struct RazorpayGateway {
    config: RazorpayConfig,
    client: Client,
}

impl RazorpayGateway {
    /// Create a new Razorpay gateway
    pub fn new(config: RazorpayConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = RazorpayConfig::from_env()?;
        Ok(Self::new(config))
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    #[instrument(skip(self, request), fields(amount = request.amount, currency = %request.currency))]
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<Order> {
        let body = RazorpayOrderBody {
            amount: request.amount,
            currency: request.currency.clone(),
            receipt: request.receipt_label().to_string(),
            // Auto capture
            payment_capture: 1,
        };

        debug!("Creating Razorpay order: {} {}", body.amount, body.currency);

        let url = format!("{}/v1/orders", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&body)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Razorpay API error: status={}, body={}", status, body);

            // Parse the Razorpay error envelope
            if let Ok(error_response) = serde_json::from_str::<RazorpayErrorResponse>(&body) {
                return Err(PaymentError::ProviderError {
                    provider: "razorpay".to_string(),
                    message: error_response.error.description,
                });
            }

            return Err(PaymentError::ProviderError {
                provider: "razorpay".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let order: Order = serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse Razorpay response: {}", e))
        })?;

        info!("Created Razorpay order: id={}, status={:?}", order.id, order.status);

        Ok(order)
    }

    #[instrument(skip(self, params), fields(order_id = %params.order_id, payment_id = %params.payment_id))]
    async fn verify_payment(&self, params: &VerificationParams) -> PaymentResult<()> {
        signature::verify(&self.config.key_secret, params)?;

        debug!("Payment signature verified");
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "razorpay"
    }
}

// =============================================================================
// Razorpay API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct RazorpayOrderBody {
    amount: u64,
    currency: String,
    receipt: String,
    payment_capture: u8,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorResponse {
    error: RazorpayError,
}

#[derive(Debug, Deserialize)]
struct RazorpayError {
    #[serde(default)]
    code: Option<String>,
    description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::OrderStatus;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> RazorpayGateway {
        let config = RazorpayConfig::new("rzp_test_abc123", "secret")
            .with_api_base_url(server.uri());
        RazorpayGateway::new(config)
    }

    #[tokio::test]
    async fn test_create_order_parses_gateway_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "order_Nabc123",
                "entity": "order",
                "amount": 5000,
                "amount_paid": 0,
                "amount_due": 5000,
                "currency": "INR",
                "receipt": "receipt_1",
                "status": "created",
                "attempts": 0,
                "notes": [],
                "created_at": 1700000000
            })))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let order = gateway
            .create_order(&OrderRequest::new(5000))
            .await
            .unwrap();

        assert_eq!(order.id, "order_Nabc123");
        assert_eq!(order.amount, 5000);
        assert_eq!(order.amount_due, 5000);
        assert_eq!(order.status, OrderStatus::Created);
    }

    #[tokio::test]
    async fn test_create_order_surfaces_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": "BAD_REQUEST_ERROR",
                    "description": "amount must be at least INR 1.00"
                }
            })))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let err = gateway
            .create_order(&OrderRequest::new(0))
            .await
            .unwrap_err();

        match err {
            PaymentError::ProviderError { provider, message } => {
                assert_eq!(provider, "razorpay");
                assert!(message.contains("amount must be at least"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_verify_payment_rejects_bad_signature() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        let err = gateway
            .verify_payment(&VerificationParams {
                order_id: "order_ABC".to_string(),
                payment_id: "pay_XYZ".to_string(),
                signature: "deadbeef".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::SignatureVerification));
    }

    #[tokio::test]
    async fn test_verify_payment_accepts_valid_signature() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        let sig = crate::signature::sign("secret", "order_ABC", "pay_XYZ");
        let result = gateway
            .verify_payment(&VerificationParams {
                order_id: "order_ABC".to_string(),
                payment_id: "pay_XYZ".to_string(),
                signature: sig,
            })
            .await;

        assert!(result.is_ok());
    }
}
