use plagcheck_core::detector::Detector;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct AppState {
    pub detector: Detector,
    pub allowed_extensions: Vec<String>,
    // Numbers uploads for the lifetime of the process; nothing is stored.
    next_document_id: AtomicU64,
}

impl AppState {
    pub fn new(detector: Detector) -> Self {
        let allowed_extensions = detector.config().get_allowed_extensions();
        Self {
            detector,
            allowed_extensions,
            next_document_id: AtomicU64::new(1),
        }
    }

    pub fn next_document_id(&self) -> u64 {
        self.next_document_id.fetch_add(1, Ordering::Relaxed)
    }
}
