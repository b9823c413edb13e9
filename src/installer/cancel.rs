use std::sync::{Arc, Mutex};

/// The only mutable state shared between the presentation thread and the
/// orchestrator thread. The flag transitions false -> true exactly once per
/// process and is never reset; the mutex gives both sides a sequentially
/// consistent view, so a `request_cancel` is observed by the very next poll.
#[derive(Clone, Default)]
pub struct CancelGate {
    cancelled: Arc<Mutex<bool>>,
}

impl CancelGate {
    pub fn new() -> CancelGate {
        CancelGate::default()
    }

    pub fn request_cancel(&self) {
        *self.cancelled.lock().unwrap() = true;
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.lock().unwrap()
    }
}
