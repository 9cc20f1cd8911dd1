//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::RouteCatalog;
use crate::sessions::{BookingSessions, SessionConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Route reference data, read-only after startup
    pub catalog: Arc<RouteCatalog>,

    /// Live booking sessions
    pub sessions: Arc<BookingSessions>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: RouteCatalog, sessions: &SessionConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: Arc::new(BookingSessions::new(sessions)),
        }
    }
}
