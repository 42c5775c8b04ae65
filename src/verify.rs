use crate::domain::attempt::{VerificationPayload, VerificationResult};
use std::time::Duration;

#[derive(Clone)]
pub struct VerificationClient {
    pub verify_url: String,
    // None preserves the original unbounded wait
    pub timeout_ms: Option<u64>,
    pub client: reqwest::Client,
}

impl VerificationClient {
    pub fn new(verify_url: &str, timeout_ms: Option<u64>) -> Self {
        Self {
            verify_url: verify_url.to_string(),
            timeout_ms,
            client: reqwest::Client::new(),
        }
    }

    pub async fn verify(
        &self,
        payload: &VerificationPayload,
        auth_token: Option<&str>,
    ) -> VerificationResult {
        let mut req = self.client.post(&self.verify_url).json(payload);
        if let Some(token) = auth_token {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(ms) = self.timeout_ms {
            req = req.timeout(Duration::from_millis(ms));
        }

        match req.send().await {
            Ok(r) => {
                let status = r.status();
                let text = r.text().await.unwrap_or_default();
                let body = if text.is_empty() {
                    None
                } else {
                    Some(
                        serde_json::from_str(&text)
                            .unwrap_or(serde_json::Value::String(text)),
                    )
                };
                VerificationResult {
                    ok: status.is_success(),
                    http_status: Some(status.as_u16()),
                    body,
                    transport_error: None,
                }
            }
            Err(e) => VerificationResult {
                ok: false,
                http_status: None,
                body: None,
                transport_error: Some(e.to_string()),
            },
        }
    }
}
