use crate::domain::attempt::{CapturedResponse, CheckoutState, PaymentAttempt};
use crate::error::WorkflowError;
use crate::trail::EventTrail;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

pub type DelayFn = Arc<dyn Fn(Duration) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

pub fn tokio_delay() -> DelayFn {
    Arc::new(|d| Box::pin(tokio::time::sleep(d)))
}

pub struct ResponseCapture {
    pub slow_mode: bool,
    pub step_delay_ms: u64,
    pub delay: DelayFn,
}

impl ResponseCapture {
    pub fn new(slow_mode: bool, step_delay_ms: u64) -> Self {
        Self {
            slow_mode,
            step_delay_ms,
            delay: tokio_delay(),
        }
    }

    // at most one capture per attempt; a second delivery never overwrites it
    pub fn capture(
        &self,
        attempt: &mut PaymentAttempt,
        trail: &EventTrail,
        response: CapturedResponse,
    ) -> Result<(), WorkflowError> {
        if attempt.captured_response.is_some() {
            trail.append("gateway delivered a second completion payload; keeping the first");
            return Err(WorkflowError::DuplicateCapture);
        }
        attempt.captured_response = Some(response);
        attempt.state = CheckoutState::Captured;
        trail.append("captured gateway response");
        Ok(())
    }

    pub async fn reveal(&self, response: &CapturedResponse, trail: &EventTrail) {
        if !self.slow_mode {
            return;
        }
        for (label, value) in reveal_steps(response) {
            trail.append(format!("{}: {}", label, value));
            (self.delay)(Duration::from_millis(self.step_delay_ms)).await;
        }
    }
}

pub fn reveal_steps(response: &CapturedResponse) -> Vec<(&'static str, String)> {
    let mut steps = Vec::new();
    if !response.payment_id.is_empty() {
        steps.push(("razorpay_payment_id", response.payment_id.clone()));
    }
    if !response.gateway_order_id.is_empty() {
        steps.push(("razorpay_order_id", response.gateway_order_id.clone()));
    }
    if !response.signature.is_empty() {
        steps.push(("razorpay_signature", response.signature.clone()));
    }
    steps
}
