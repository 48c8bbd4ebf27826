//! # Payment Signature Verification
//!
//! Razorpay signs a completed checkout as
//! `HMAC-SHA256(key_secret, "{order_id}|{payment_id}")`, hex-encoded.
//! The client submits that signature with the verify request and it is
//! recomputed and compared here in constant time.

use pay_core::{PaymentError, PaymentResult, VerificationParams};

/// Compute the expected signature for an order/payment id pair
pub fn sign(key_secret: &str, order_id: &str, payment_id: &str) -> String {
    let message = format!("{}|{}", order_id, payment_id);
    compute_hmac_sha256(key_secret, &message)
}

/// Verify a submitted payment signature.
///
/// Returns `PaymentError::SignatureVerification` on mismatch; the raw
/// comparison detail is never surfaced.
pub fn verify(key_secret: &str, params: &VerificationParams) -> PaymentResult<()> {
    let expected = sign(key_secret, &params.order_id, &params.payment_id);

    if !constant_time_compare(&params.signature, &expected) {
        return Err(PaymentError::SignatureVerification);
    }

    Ok(())
}

fn compute_hmac_sha256(secret: &str, message: &str) -> String {
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    type HmacSha256 = Hmac<Sha256>;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    let result = mac.finalize();
    hex::encode(result.into_bytes())
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}
