use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SUPPORTED_CURRENCY: &str = "INR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutState {
    Idle,
    ScriptLoading,
    Ready,
    CheckoutOpen,
    Captured,
    BuildingPayload,
    Verifying,
    Verified,
    VerificationFailed,
    Dismissed,
    ScriptLoadFailed,
    CheckoutOpenFailed,
}

impl CheckoutState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            CheckoutState::Verified
                | CheckoutState::VerificationFailed
                | CheckoutState::Dismissed
                | CheckoutState::ScriptLoadFailed
                | CheckoutState::CheckoutOpenFailed
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapturedResponse {
    #[serde(rename = "razorpay_payment_id", default)]
    pub payment_id: String,
    #[serde(rename = "razorpay_order_id", default)]
    pub gateway_order_id: String,
    #[serde(rename = "razorpay_signature", default)]
    pub signature: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationPayload {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    pub ok: bool,
    pub http_status: Option<u16>,
    pub body: Option<serde_json::Value>,
    pub transport_error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PaymentAttempt {
    pub attempt_id: Uuid,
    pub order_id: String,
    pub amount_minor: i64,
    pub currency: String,
    pub state: CheckoutState,
    pub captured_response: Option<CapturedResponse>,
    pub verification_payload: Option<VerificationPayload>,
    pub verification_result: Option<VerificationResult>,
}

impl PaymentAttempt {
    pub fn new(order_id: &str, amount_minor: i64, currency: &str) -> Self {
        Self {
            attempt_id: Uuid::new_v4(),
            order_id: order_id.to_string(),
            amount_minor,
            currency: currency.to_string(),
            state: CheckoutState::Idle,
            captured_response: None,
            verification_payload: None,
            verification_result: None,
        }
    }

    pub fn idle() -> Self {
        Self::new("", 0, SUPPORTED_CURRENCY)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderIntent {
    pub order_id: String,
    pub amount_minor: i64,
    pub currency: String,
}
