//! Recording in-memory directory for portal tests.

use crate::api::client::DirectoryClient;
use crate::core::error::DirectoryError;
use crate::models::profile::{NewProfile, PatchRequest, UserProfile};
use crate::stores::profile_store::ProfileStore;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch(String),
    Create(String),
    Patch(String, PatchRequest),
    Delete(String),
    List,
}

#[derive(Default)]
pub struct FakeDirectory {
    store: ProfileStore,
    calls: Mutex<Vec<Call>>,
    fail_fetch: Mutex<Option<DirectoryError>>,
    fail_patch: Mutex<Option<DirectoryError>>,
    fail_delete: Mutex<Option<DirectoryError>>,
    patch_gate: Mutex<Option<Arc<Notify>>>,
}

pub fn rejected(status: u16, message: &str) -> DirectoryError {
    DirectoryError::Rejected {
        status,
        message: message.to_string(),
    }
}

pub fn profile(username: &str) -> NewProfile {
    NewProfile {
        username: username.to_string(),
        email_address: format!("{}@example.com", username),
        street_address: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62701".to_string(),
    }
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a profile directly, bypassing call recording
    pub fn seed(&self, username: &str) -> UserProfile {
        self.store
            .create(profile(username))
            .expect("seeded usernames are unique")
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fail_fetch_with(&self, err: DirectoryError) {
        *self.fail_fetch.lock().unwrap() = Some(err);
    }

    pub fn fail_patch_with(&self, err: DirectoryError) {
        *self.fail_patch.lock().unwrap() = Some(err);
    }

    pub fn fail_delete_with(&self, err: DirectoryError) {
        *self.fail_delete.lock().unwrap() = Some(err);
    }

    /// Park every patch until the returned gate is notified
    pub fn hold_patches(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.patch_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn stored(&self, username: &str) -> Option<UserProfile> {
        self.store.get(username).map(|p| p.as_ref().clone())
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DirectoryClient for FakeDirectory {
    async fn fetch_by_username(&self, username: &str) -> Result<UserProfile, DirectoryError> {
        self.record(Call::Fetch(username.to_string()));
        if let Some(err) = self.fail_fetch.lock().unwrap().take() {
            return Err(err);
        }
        self.stored(username)
            .ok_or_else(|| rejected(404, "That user does not exist. Please try again."))
    }

    async fn create(&self, profile: &NewProfile) -> Result<(), DirectoryError> {
        self.record(Call::Create(profile.username.clone()));
        self.store
            .create(profile.clone())
            .map(|_| ())
            .map_err(|e| rejected(409, &e.to_string()))
    }

    async fn patch_field(&self, username: &str, patch: &PatchRequest) -> Result<String, DirectoryError> {
        self.record(Call::Patch(username.to_string(), patch.clone()));
        let gate = self.patch_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(err) = self.fail_patch.lock().unwrap().take() {
            return Err(err);
        }
        let updated = self
            .store
            .replace_field(username, patch.path, &patch.value)
            .map_err(|e| rejected(404, &e.to_string()))?;
        Ok(format!("{} updated for user: {}", patch.path, updated.username))
    }

    async fn delete_by_username(&self, username: &str) -> Result<(), DirectoryError> {
        self.record(Call::Delete(username.to_string()));
        if let Some(err) = self.fail_delete.lock().unwrap().take() {
            return Err(err);
        }
        self.store
            .remove(username)
            .map(|_| ())
            .ok_or_else(|| rejected(404, "That user does not exist. Please try again."))
    }

    async fn list_all(&self) -> Result<Vec<UserProfile>, DirectoryError> {
        self.record(Call::List);
        Ok(self.store.list())
    }
}
