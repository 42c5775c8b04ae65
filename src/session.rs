use crate::capture::ResponseCapture;
use crate::domain::attempt::{
    CheckoutState, OrderIntent, PaymentAttempt, VerificationResult, SUPPORTED_CURRENCY,
};
use crate::error::WorkflowError;
use crate::loader::ScriptLoader;
use crate::payload;
use crate::surface::{CheckoutOptions, CheckoutSurface, Prefill, SurfaceOutcome, Theme};
use crate::trail::EventTrail;
use crate::verify::VerificationClient;
use std::sync::Arc;

// workflow failures land in a terminal state with the detail in the trail and
// verification_result; Err is reserved for caller misuse
pub struct CheckoutSession {
    pub script_loader: Arc<dyn ScriptLoader>,
    pub surface: Arc<dyn CheckoutSurface>,
    pub capture: ResponseCapture,
    pub verifier: VerificationClient,
    pub trail: EventTrail,
    pub gateway_key_id: String,
    pub store_name: String,
    pub theme_color: String,
    pub prefill: Prefill,
    pub attempt: PaymentAttempt,
}

impl CheckoutSession {
    pub fn new(
        script_loader: Arc<dyn ScriptLoader>,
        surface: Arc<dyn CheckoutSurface>,
        capture: ResponseCapture,
        verifier: VerificationClient,
        gateway_key_id: &str,
        store_name: &str,
        theme_color: &str,
        prefill: Prefill,
    ) -> Self {
        Self {
            script_loader,
            surface,
            capture,
            verifier,
            trail: EventTrail::new(),
            gateway_key_id: gateway_key_id.to_string(),
            store_name: store_name.to_string(),
            theme_color: theme_color.to_string(),
            prefill,
            attempt: PaymentAttempt::idle(),
        }
    }

    pub async fn open(
        &mut self,
        order: OrderIntent,
        auth_token: Option<&str>,
    ) -> Result<CheckoutState, WorkflowError> {
        if self.attempt.state != CheckoutState::Idle {
            if !self.attempt.state.is_terminal() {
                self.trail.append(format!(
                    "checkout rejected: attempt already in flight (state {:?})",
                    self.attempt.state
                ));
                return Err(WorkflowError::AttemptInFlight {
                    state: format!("{:?}", self.attempt.state),
                });
            }
            self.reset();
            self.trail.append("prior attempt reset");
        }

        if order.amount_minor <= 0 {
            self.trail
                .append("checkout rejected: amount_minor must be > 0");
            return Err(WorkflowError::InvalidOrder(
                "amount_minor must be > 0".to_string(),
            ));
        }
        if order.currency != SUPPORTED_CURRENCY {
            self.trail.append(format!(
                "checkout rejected: only {} is supported",
                SUPPORTED_CURRENCY
            ));
            return Err(WorkflowError::InvalidOrder(format!(
                "only {} is supported",
                SUPPORTED_CURRENCY
            )));
        }

        self.attempt = PaymentAttempt::new(&order.order_id, order.amount_minor, &order.currency);
        self.attempt.state = CheckoutState::ScriptLoading;
        self.trail.append("loading checkout script");

        if !self.script_loader.ensure_loaded().await {
            self.attempt.state = CheckoutState::ScriptLoadFailed;
            self.trail.append("checkout script failed to load");
            return Ok(self.attempt.state);
        }
        self.attempt.state = CheckoutState::Ready;
        self.trail.append("checkout script ready");

        let options = self.checkout_options();
        let receiver = match self.surface.open(options).await {
            Ok(rx) => rx,
            Err(e) => {
                self.attempt.state = CheckoutState::CheckoutOpenFailed;
                self.trail
                    .append(format!("checkout surface failed to open: {}", e));
                return Ok(self.attempt.state);
            }
        };
        self.attempt.state = CheckoutState::CheckoutOpen;
        self.trail
            .append(format!("checkout open for order {}", self.attempt.order_id));

        let response = match receiver.await {
            Ok(SurfaceOutcome::Completed(response)) => response,
            // a dropped sender means the surface went away without completing
            Ok(SurfaceOutcome::Dismissed) | Err(_) => {
                self.attempt.state = CheckoutState::Dismissed;
                self.trail.append("checkout dismissed before completion");
                return Ok(self.attempt.state);
            }
        };

        self.capture
            .capture(&mut self.attempt, &self.trail, response.clone())?;
        self.capture.reveal(&response, &self.trail).await;

        self.attempt.state = CheckoutState::BuildingPayload;
        let built = match payload::build(&response) {
            Ok(built) => built,
            Err(e) => {
                self.attempt.state = CheckoutState::VerificationFailed;
                self.trail.append(format!("payload build failed: {}", e));
                return Ok(self.attempt.state);
            }
        };
        self.attempt.verification_payload = Some(built.clone());
        self.trail.append("prepared verification payload");

        self.attempt.state = CheckoutState::Verifying;
        self.trail.append("verifying payment with server");
        let result = self.verifier.verify(&built, auth_token).await;
        self.record_verification(result);
        Ok(self.attempt.state)
    }

    pub async fn replay(&mut self, auth_token: Option<&str>) -> Option<VerificationResult> {
        let Some(captured) = self.attempt.captured_response.clone() else {
            self.trail
                .append("replay requested but no captured response exists");
            return None;
        };
        self.trail
            .append("replaying verification from last captured response");

        let built = match payload::build(&captured) {
            Ok(built) => built,
            Err(e) => {
                self.trail.append(format!("payload build failed: {}", e));
                return None;
            }
        };
        self.attempt.verification_payload = Some(built.clone());

        self.attempt.state = CheckoutState::Verifying;
        let result = self.verifier.verify(&built, auth_token).await;
        self.record_verification(result.clone());
        Some(result)
    }

    pub fn reset(&mut self) {
        self.attempt = PaymentAttempt::idle();
        self.trail.clear();
    }

    fn record_verification(&mut self, result: VerificationResult) {
        if result.ok {
            self.trail.append(format!(
                "verification succeeded: HTTP {}",
                result.http_status.unwrap_or_default()
            ));
            self.attempt.state = CheckoutState::Verified;
        } else if let Some(err) = &result.transport_error {
            self.trail.append(format!("network error: {}", err));
            self.attempt.state = CheckoutState::VerificationFailed;
        } else {
            self.trail.append(format!(
                "verification failed: HTTP {} {}",
                result.http_status.unwrap_or_default(),
                result
                    .body
                    .as_ref()
                    .map(|b| b.to_string())
                    .unwrap_or_default()
            ));
            self.attempt.state = CheckoutState::VerificationFailed;
        }
        self.attempt.verification_result = Some(result);
    }

    fn checkout_options(&self) -> CheckoutOptions {
        CheckoutOptions {
            key: self.gateway_key_id.clone(),
            amount: self.attempt.amount_minor,
            currency: self.attempt.currency.clone(),
            name: self.store_name.clone(),
            description: format!("Order {}", self.attempt.order_id),
            order_id: self.attempt.order_id.clone(),
            prefill: self.prefill.clone(),
            theme: Theme {
                color: self.theme_color.clone(),
            },
        }
    }
}
