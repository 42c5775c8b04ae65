use crate::domain::attempt::CapturedResponse;
use crate::surface::{CheckoutOptions, CheckoutSurface, SurfaceOutcome, SurfaceReceiver};
use anyhow::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub enum MockBehavior {
    CompleteWith(CapturedResponse),
    Dismiss,
    FailToOpen,
}

pub struct MockSurface {
    pub behavior: MockBehavior,
    opens: AtomicUsize,
    last_options: Mutex<Option<CheckoutOptions>>,
}

impl MockSurface {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            opens: AtomicUsize::new(0),
            last_options: Mutex::new(None),
        }
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn last_options(&self) -> Option<CheckoutOptions> {
        self.last_options
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait::async_trait]
impl CheckoutSurface for MockSurface {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn open(&self, options: CheckoutOptions) -> Result<SurfaceReceiver> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        *self
            .last_options
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = Some(options);

        let (tx, rx) = oneshot::channel();
        match &self.behavior {
            MockBehavior::FailToOpen => anyhow::bail!("mock surface refused to open"),
            MockBehavior::CompleteWith(response) => {
                let _ = tx.send(SurfaceOutcome::Completed(response.clone()));
            }
            MockBehavior::Dismiss => {
                let _ = tx.send(SurfaceOutcome::Dismissed);
            }
        }
        Ok(rx)
    }
}
