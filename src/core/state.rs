// Application state (AppState) for the mock directory

use crate::stores::profile_store::ProfileStore;
use std::sync::Arc;

/// Shared state handed to every directory handler
#[derive(Clone, Default)]
pub struct AppState {
    /// In-memory user directory
    pub profiles: Arc<ProfileStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(ProfileStore::new()),
        }
    }
}
