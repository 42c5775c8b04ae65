use crate::domain::attempt::CapturedResponse;
use anyhow::Result;
use serde::Serialize;
use tokio::sync::oneshot;

pub mod mock;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutOptions {
    pub key: String,
    pub amount: i64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: Prefill,
    pub theme: Theme,
}

// delivered at most once per opened surface; the oneshot sender enforces it
#[derive(Debug)]
pub enum SurfaceOutcome {
    Completed(CapturedResponse),
    Dismissed,
}

pub type SurfaceReceiver = oneshot::Receiver<SurfaceOutcome>;

#[async_trait::async_trait]
pub trait CheckoutSurface: Send + Sync {
    fn name(&self) -> &'static str;

    async fn open(&self, options: CheckoutOptions) -> Result<SurfaceReceiver>;
}
