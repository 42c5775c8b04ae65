#[derive(Clone)]
pub struct WorkflowConfig {
    pub verify_url: String,
    pub gateway_key_id: String,
    pub store_name: String,
    pub theme_color: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_contact: String,
    pub slow_mode: bool,
    pub step_delay_ms: u64,
    // unset preserves the original unbounded verification wait
    pub verify_timeout_ms: Option<u64>,
}

impl WorkflowConfig {
    pub fn from_env() -> Self {
        Self {
            verify_url: std::env::var("VERIFY_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api/payment/verify/".to_string()),
            gateway_key_id: std::env::var("RAZORPAY_KEY_ID").unwrap_or_default(),
            store_name: std::env::var("STORE_NAME").unwrap_or_else(|_| "Storefront".to_string()),
            theme_color: std::env::var("THEME_COLOR").unwrap_or_else(|_| "#3399cc".to_string()),
            customer_name: std::env::var("CUSTOMER_NAME").unwrap_or_default(),
            customer_email: std::env::var("CUSTOMER_EMAIL").unwrap_or_default(),
            customer_contact: std::env::var("CUSTOMER_CONTACT").unwrap_or_default(),
            slow_mode: std::env::var("SLOW_MODE")
                .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            step_delay_ms: std::env::var("STEP_DELAY_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(400),
            verify_timeout_ms: std::env::var("VERIFY_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok()),
        }
    }
}
