//! # Request Handlers
//!
//! Axum request handlers for the payment API: health check, order
//! creation, and payment verification.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pay_core::{
    Order, OrderRequest, PaymentError, PaymentGateway, SubscriptionStore, SubscriptionUpdate,
    VerificationParams,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create order request.
///
/// Amount is in the minor currency unit (100 paise = 1 INR). A negative or
/// fractional amount fails deserialization before reaching the handler.
#[derive(Debug, Deserialize)]
pub struct OrderCreateRequest {
    pub amount: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
}

fn default_currency() -> String {
    pay_core::DEFAULT_CURRENCY.to_string()
}

/// Payment verification request.
///
/// Field names follow the checkout callback payload the Razorpay client
/// SDK hands to the frontend.
#[derive(Debug, Deserialize)]
pub struct PaymentVerifyRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    pub user_id: String,
}

/// Verification success response
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub status: String,
    pub message: String,
}

impl VerifyResponse {
    fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: "Payment verified and subscription updated".to_string(),
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }
}

fn payment_error_to_response(err: PaymentError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "Payment Backend"
    }))
}

/// Create a gateway order.
///
/// Delegates to whichever gateway was selected at startup; under mock mode
/// the order is synthesized locally.
#[instrument(skip(state, request), fields(amount = request.amount, currency = %request.currency))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<OrderCreateRequest>,
) -> Result<Json<Order>, (StatusCode, Json<ErrorResponse>)> {
    let order_request = OrderRequest {
        amount: request.amount,
        currency: request.currency,
        receipt: request.receipt,
    };

    let order = state
        .gateway
        .create_order(&order_request)
        .await
        .map_err(|e| {
            error!("Failed to create order: {}", e);
            payment_error_to_response(e)
        })?;

    info!(
        "Created order: id={}, provider={}",
        order.id,
        state.gateway.provider_name()
    );

    Ok(Json(order))
}

/// Verify a payment signature and upgrade the submitting admin's school.
///
/// Linear sequence; every step either proceeds or aborts the request:
/// 1. verify the signature (skipped by the mock gateway)
/// 2. resolve the user's school via the school-admin mapping
/// 3. set the school's subscription to pro/active
///
/// The one mutation comes last, so no compensating action is needed.
/// Nothing serializes concurrent verifies for the same school; the update
/// is last-write-wins.
#[instrument(
    skip(state, request),
    fields(order_id = %request.razorpay_order_id, user_id = %request.user_id)
)]
pub async fn verify_payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentVerifyRequest>,
) -> Result<Json<VerifyResponse>, (StatusCode, Json<ErrorResponse>)> {
    let params = VerificationParams {
        order_id: request.razorpay_order_id,
        payment_id: request.razorpay_payment_id,
        signature: request.razorpay_signature,
    };

    state.gateway.verify_payment(&params).await.map_err(|e| {
        error!("Payment verification failed: {}", e);
        payment_error_to_response(e)
    })?;

    let school_id = state
        .store
        .school_for_admin(&request.user_id)
        .await
        .map_err(|e| {
            error!("School-admin lookup failed: {}", e);
            payment_error_to_response(e)
        })?
        .ok_or_else(|| {
            payment_error_to_response(PaymentError::NotSchoolAdmin {
                user_id: request.user_id.clone(),
            })
        })?;

    let updated = state
        .store
        .update_subscription(&school_id, &SubscriptionUpdate::pro())
        .await
        .map_err(|e| {
            error!("Subscription update failed: {}", e);
            payment_error_to_response(e)
        })?;

    if !updated {
        error!("Subscription update affected no record: school_id={}", school_id);
        return Err(payment_error_to_response(
            PaymentError::SubscriptionUpdateFailed { school_id },
        ));
    }

    info!("Subscription upgraded: school_id={}", school_id);

    Ok(Json(VerifyResponse::success()))
}
