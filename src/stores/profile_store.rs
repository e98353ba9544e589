use crate::core::error::ApiError;
use crate::models::profile::{NewProfile, ProfileField, UserProfile};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory user directory backing the mock REST service
pub struct ProfileStore {
    profiles: DashMap<String, Arc<UserProfile>>,
    next_id: AtomicU64,
    /// Serializes renames so two of them cannot swap keys under each other
    rename_lock: Mutex<()>,
}

impl ProfileStore {
    /// Create a new ProfileStore instance
    pub fn new() -> Self {
        Self {
            profiles: DashMap::new(),
            next_id: AtomicU64::new(1),
            rename_lock: Mutex::new(()),
        }
    }

    /// Insert a new profile and return its assigned id.
    /// Fails if the username is already taken.
    pub fn create(&self, new: NewProfile) -> Result<UserProfile, ApiError> {
        match self.profiles.entry(new.username.clone()) {
            Entry::Occupied(_) => Err(ApiError::UserAlreadyExists),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let profile = UserProfile::from_new(id, new);
                slot.insert(Arc::new(profile.clone()));
                Ok(profile)
            }
        }
    }

    pub fn get(&self, username: &str) -> Option<Arc<UserProfile>> {
        self.profiles.get(username).map(|entry| Arc::clone(entry.value()))
    }

    /// All profiles ordered by id
    pub fn list(&self) -> Vec<UserProfile> {
        let mut all: Vec<UserProfile> = self
            .profiles
            .iter()
            .map(|entry| entry.value().as_ref().clone())
            .collect();
        all.sort_by_key(|profile| profile.id);
        all
    }

    /// Replace one field of an existing profile.
    /// A username change moves the profile to the new key.
    pub fn replace_field(
        &self,
        username: &str,
        field: ProfileField,
        value: &str,
    ) -> Result<UserProfile, ApiError> {
        if field == ProfileField::Username && value != username {
            return self.rename(username, value);
        }

        let mut entry = self.profiles.get_mut(username).ok_or(ApiError::UserNotFound)?;
        let updated = entry.with_field(field, value);
        *entry = Arc::new(updated.clone());
        Ok(updated)
    }

    fn rename(&self, from: &str, to: &str) -> Result<UserProfile, ApiError> {
        let _guard = self.rename_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let current = self.get(from).ok_or(ApiError::UserNotFound)?;
        let renamed = current.with_field(ProfileField::Username, to);

        match self.profiles.entry(to.to_string()) {
            Entry::Occupied(_) => return Err(ApiError::UserAlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(renamed.clone()));
            }
        }
        self.profiles.remove(from);

        Ok(renamed)
    }

    /// Remove a profile by username
    /// Returns the removed profile if it existed
    pub fn remove(&self, username: &str) -> Option<Arc<UserProfile>> {
        self.profiles.remove(username).map(|(_, profile)| profile)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}
