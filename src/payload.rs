use crate::domain::attempt::{CapturedResponse, VerificationPayload};
use crate::error::MissingFieldError;

pub fn build(captured: &CapturedResponse) -> Result<VerificationPayload, MissingFieldError> {
    let mut missing = Vec::new();
    if captured.payment_id.is_empty() {
        missing.push("razorpay_payment_id".to_string());
    }
    if captured.gateway_order_id.is_empty() {
        missing.push("razorpay_order_id".to_string());
    }
    if captured.signature.is_empty() {
        missing.push("razorpay_signature".to_string());
    }
    if !missing.is_empty() {
        return Err(MissingFieldError { missing });
    }

    Ok(VerificationPayload {
        razorpay_payment_id: captured.payment_id.clone(),
        razorpay_order_id: captured.gateway_order_id.clone(),
        razorpay_signature: captured.signature.clone(),
    })
}
