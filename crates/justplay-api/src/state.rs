use std::sync::Arc;
use crate::config::Config;

/// Shared application state passed to all handlers
///
/// Holds only immutable configuration. Backend clients are built per request
/// so no connection or credential outlives its invocation.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
