use crate::models::profile::UserProfile;
use std::sync::{Mutex, PoisonError};

/// Process-local slot holding the last-fetched profile.
///
/// Only the editor and the session flows write it, and only after the
/// directory confirmed the data.
pub trait SessionCache: Send + Sync {
    fn save(&self, profile: &UserProfile);
    fn load(&self) -> Option<UserProfile>;
    fn clear(&self);
}

/// In-memory session cache
#[derive(Default)]
pub struct MemorySessionCache {
    current: Mutex<Option<UserProfile>>,
}

impl MemorySessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            current: Mutex::new(Some(profile)),
        }
    }
}

impl SessionCache for MemorySessionCache {
    fn save(&self, profile: &UserProfile) {
        let mut slot = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(profile.clone());
    }

    fn load(&self) -> Option<UserProfile> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}
