use checkout_flow::capture::ResponseCapture;
use checkout_flow::domain::attempt::{CapturedResponse, CheckoutState, PaymentAttempt};
use checkout_flow::error::WorkflowError;
use checkout_flow::trail::EventTrail;

#[test]
fn second_delivery_never_overwrites_the_first() {
    let capture = ResponseCapture::new(false, 0);
    let trail = EventTrail::new();
    let mut attempt = PaymentAttempt::new("order_abc123", 9900, "INR");

    capture
        .capture(&mut attempt, &trail, response("pay_1"))
        .unwrap();
    assert_eq!(attempt.state, CheckoutState::Captured);

    let err = capture
        .capture(&mut attempt, &trail, response("pay_2"))
        .unwrap_err();
    assert!(matches!(err, WorkflowError::DuplicateCapture));
    assert_eq!(
        attempt.captured_response.as_ref().unwrap().payment_id,
        "pay_1"
    );
    assert!(trail.contains("second completion payload"));
}

fn response(payment_id: &str) -> CapturedResponse {
    CapturedResponse {
        payment_id: payment_id.to_string(),
        gateway_order_id: "order_abc123".to_string(),
        signature: "sig_xyz".to_string(),
        extra: serde_json::Map::new(),
    }
}
