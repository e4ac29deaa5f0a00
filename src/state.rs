//! Shared application state for all routes.

use crate::session::SessionProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Source of per-request sessions. Built once at startup and injected here.
    pub sessions: Arc<dyn SessionProvider>,
}

impl AppState {
    pub fn new(sessions: impl SessionProvider + 'static) -> Self {
        Self {
            sessions: Arc::new(sessions),
        }
    }
}
