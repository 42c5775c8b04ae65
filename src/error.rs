use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("captured response missing required field(s): {}", missing.join(", "))]
pub struct MissingFieldError {
    pub missing: Vec<String>,
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("checkout already in flight (state {state})")]
    AttemptInFlight { state: String },
    #[error("gateway delivered a second completion payload")]
    DuplicateCapture,
    #[error("invalid order: {0}")]
    InvalidOrder(String),
}
