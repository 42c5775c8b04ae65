use checkout_flow::capture::ResponseCapture;
use checkout_flow::config::WorkflowConfig;
use checkout_flow::domain::attempt::{CapturedResponse, OrderIntent};
use checkout_flow::loader::MockScriptLoader;
use checkout_flow::session::CheckoutSession;
use checkout_flow::surface::mock::{MockBehavior, MockSurface};
use checkout_flow::surface::Prefill;
use checkout_flow::verify::VerificationClient;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = WorkflowConfig::from_env();

    let response = CapturedResponse {
        payment_id: "pay_demo_1".to_string(),
        gateway_order_id: "order_demo_1".to_string(),
        signature: "sig_demo".to_string(),
        extra: serde_json::Map::new(),
    };
    let surface = Arc::new(MockSurface::new(MockBehavior::CompleteWith(response)));
    let loader = Arc::new(MockScriptLoader::new("ALWAYS_SUCCESS"));
    let verifier = VerificationClient::new(&cfg.verify_url, cfg.verify_timeout_ms);
    let capture = ResponseCapture::new(cfg.slow_mode, cfg.step_delay_ms);

    let mut session = CheckoutSession::new(
        loader,
        surface,
        capture,
        verifier,
        &cfg.gateway_key_id,
        &cfg.store_name,
        &cfg.theme_color,
        Prefill {
            name: cfg.customer_name.clone(),
            email: cfg.customer_email.clone(),
            contact: cfg.customer_contact.clone(),
        },
    );

    let order = OrderIntent {
        order_id: "order_demo_1".to_string(),
        amount_minor: 9900,
        currency: "INR".to_string(),
    };
    let state = session.open(order, None).await?;
    tracing::info!("attempt finished in state {:?}", state);

    for entry in session.trail.snapshot() {
        println!("{}  {}", entry.at.to_rfc3339(), entry.message);
    }
    if let Some(result) = &session.attempt.verification_result {
        println!("{}", serde_json::to_string_pretty(result)?);
    }
    Ok(())
}
