use checkout_flow::capture::{DelayFn, ResponseCapture};
use checkout_flow::domain::attempt::{CapturedResponse, CheckoutState, OrderIntent};
use checkout_flow::loader::MockScriptLoader;
use checkout_flow::session::CheckoutSession;
use checkout_flow::surface::mock::{MockBehavior, MockSurface};
use checkout_flow::surface::Prefill;
use checkout_flow::verify::VerificationClient;
use httpmock::prelude::*;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[tokio::test]
async fn slow_mode_paces_field_reveal() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/verify");
            then.status(200).json_body(json!({"status": "ok"}));
        })
        .await;

    let mut session = slow_session(&server.url("/verify"), ResponseCapture::new(true, 100));

    let start = Instant::now();
    let state = session.open(order(), None).await.unwrap();

    assert_eq!(state, CheckoutState::Verified);
    // three present fields, 100ms suspension after each
    assert!(start.elapsed().as_millis() >= 300);

    let trail = session.trail.snapshot();
    let index_of = |needle: &str| {
        trail
            .iter()
            .position(|entry| entry.message.contains(needle))
            .unwrap()
    };
    let payment = index_of("razorpay_payment_id: pay_1");
    let order_id = index_of("razorpay_order_id: order_abc123");
    let signature = index_of("razorpay_signature: sig_xyz");
    let prepared = index_of("prepared verification payload");
    assert!(payment < order_id && order_id < signature && signature < prepared);

    // raw capture happens before any reveal entry
    assert!(index_of("captured gateway response") < payment);

    for pair in trail.windows(2) {
        assert!(pair[0].at <= pair[1].at);
    }
}

#[tokio::test]
async fn injected_delay_substitutes_real_sleeps() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/verify");
            then.status(200).json_body(json!({"status": "ok"}));
        })
        .await;

    let delays = Arc::new(AtomicUsize::new(0));
    let counter = delays.clone();
    let delay: DelayFn = Arc::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Box::pin(async {})
    });
    let capture = ResponseCapture {
        slow_mode: true,
        step_delay_ms: 10_000,
        delay,
    };

    let mut session = slow_session(&server.url("/verify"), capture);

    let start = Instant::now();
    let state = session.open(order(), None).await.unwrap();

    assert_eq!(state, CheckoutState::Verified);
    assert_eq!(delays.load(Ordering::SeqCst), 3);
    assert!(start.elapsed().as_secs() < 10);
}

#[tokio::test]
async fn slow_mode_reveals_only_present_fields() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/verify");
            then.status(200);
        })
        .await;

    let mut incomplete = gateway_response();
    incomplete.signature = String::new();

    let surface = Arc::new(MockSurface::new(MockBehavior::CompleteWith(incomplete)));
    let mut session = CheckoutSession::new(
        Arc::new(MockScriptLoader::new("ALWAYS_SUCCESS")),
        surface,
        ResponseCapture {
            slow_mode: true,
            step_delay_ms: 0,
            delay: Arc::new(|_| Box::pin(async {})),
        },
        VerificationClient::new(&server.url("/verify"), None),
        "rzp_test_key",
        "Demo Store",
        "#3399cc",
        Prefill::default(),
    );

    session.open(order(), None).await.unwrap();

    assert!(session.trail.contains("razorpay_payment_id: pay_1"));
    assert!(session.trail.contains("razorpay_order_id: order_abc123"));
    assert!(!session.trail.contains("razorpay_signature: "));
}

fn gateway_response() -> CapturedResponse {
    CapturedResponse {
        payment_id: "pay_1".to_string(),
        gateway_order_id: "order_abc123".to_string(),
        signature: "sig_xyz".to_string(),
        extra: serde_json::Map::new(),
    }
}

fn order() -> OrderIntent {
    OrderIntent {
        order_id: "order_abc123".to_string(),
        amount_minor: 9900,
        currency: "INR".to_string(),
    }
}

fn slow_session(verify_url: &str, capture: ResponseCapture) -> CheckoutSession {
    CheckoutSession::new(
        Arc::new(MockScriptLoader::new("ALWAYS_SUCCESS")),
        Arc::new(MockSurface::new(MockBehavior::CompleteWith(gateway_response()))),
        capture,
        VerificationClient::new(verify_url, None),
        "rzp_test_key",
        "Demo Store",
        "#3399cc",
        Prefill::default(),
    )
}
