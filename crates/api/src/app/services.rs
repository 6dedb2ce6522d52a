//! Per-process services shared by handlers via `Extension`.

use std::sync::Arc;

use dairysense_store::AnalyticsStore;

/// Everything a handler needs beyond the request itself.
///
/// Holds the store behind the trait so router tests can swap in the
/// in-memory double. No per-request state lives here.
pub struct AppServices {
    store: Arc<dyn AnalyticsStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn AnalyticsStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn AnalyticsStore {
        self.store.as_ref()
    }
}
