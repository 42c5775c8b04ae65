use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[async_trait::async_trait]
pub trait ScriptLoader: Send + Sync {
    async fn ensure_loaded(&self) -> bool;
}

pub struct MockScriptLoader {
    pub behavior: String,
    loaded: AtomicBool,
    injections: AtomicUsize,
}

impl MockScriptLoader {
    pub fn new(behavior: &str) -> Self {
        Self {
            behavior: behavior.to_string(),
            loaded: AtomicBool::new(false),
            injections: AtomicUsize::new(0),
        }
    }

    pub fn injections(&self) -> usize {
        self.injections.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ScriptLoader for MockScriptLoader {
    async fn ensure_loaded(&self) -> bool {
        if self.loaded.load(Ordering::SeqCst) {
            return true;
        }
        self.injections.fetch_add(1, Ordering::SeqCst);
        match self.behavior.as_str() {
            "ALWAYS_FAILURE" => false,
            _ => {
                self.loaded.store(true, Ordering::SeqCst);
                true
            }
        }
    }
}
