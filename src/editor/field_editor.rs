use crate::api::client::DirectoryClient;
use crate::core::config::SessionConfig;
use crate::core::error::{EditorError, MountError};
use crate::editor::confirmation::Confirmation;
use crate::editor::saved_flags::SavedFlags;
use crate::editor::Intent;
use crate::models::profile::{PatchRequest, ProfileField, UserProfile};
use crate::portal::route::Route;
use crate::stores::cookie_store::CookieStore;
use crate::stores::session_cache::SessionCache;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Services the editor talks to
#[derive(Clone)]
pub struct Collaborators {
    pub directory: Arc<dyn DirectoryClient>,
    pub session: Arc<dyn SessionCache>,
    pub cookies: Arc<dyn CookieStore>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Editing { field: ProfileField, buffer: String },
    /// A patch is in flight; nothing else may start until it resolves
    Saving { field: ProfileField, buffer: String },
}

impl EditState {
    pub fn name(&self) -> &'static str {
        match self {
            EditState::Idle => "idle",
            EditState::Editing { .. } => "editing",
            EditState::Saving { .. } => "saving",
        }
    }

    pub fn active_field(&self) -> Option<ProfileField> {
        match self {
            EditState::Idle => None,
            EditState::Editing { field, .. } | EditState::Saving { field, .. } => Some(*field),
        }
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            EditState::Idle => None,
            EditState::Editing { buffer, .. } | EditState::Saving { buffer, .. } => Some(buffer.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { field: ProfileField },
    /// Trimmed draft equals the committed value; treated as a cancel
    Unchanged,
    /// Trimmed draft is empty; the field stays open
    EmptyValue,
    /// Directory rejected or could not be reached; the draft is kept
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed { message: String },
}

/// Result of a dispatched intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Save(SaveOutcome),
    Delete(DeleteOutcome),
    LoggedOut,
    Navigate(Route),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: ProfileField,
    pub label: &'static str,
    /// Draft while editing, committed value otherwise
    pub value: String,
    pub editing: bool,
    pub save_enabled: bool,
    pub saved: bool,
}

/// Snapshot the profile page renders from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub heading: String,
    pub fields: Vec<FieldView>,
    pub busy: bool,
    pub error: Option<String>,
    pub confirmation: Option<String>,
}

/// Field-level editor for the logged-in user's profile
pub struct ProfileEditor {
    collaborators: Collaborators,
    cookie_name: String,
    cookie_ttl_days: u32,
    profile: UserProfile,
    state: EditState,
    saved: SavedFlags,
    error: Option<String>,
    confirmation: Option<Confirmation>,
    closed: bool,
}

impl ProfileEditor {
    /// Enter the editor with the cached profile.
    ///
    /// Never touches the network; an empty session cache means the caller
    /// has to send the user to the login page.
    pub fn mount(collaborators: Collaborators, config: &SessionConfig) -> Result<Self, MountError> {
        let profile = collaborators.session.load().ok_or(MountError::NoSession)?;

        debug!(username = %profile.username, "Profile editor mounted");

        Ok(Self {
            collaborators,
            cookie_name: config.cookie_name.clone(),
            cookie_ttl_days: config.cookie_ttl_days,
            profile,
            state: EditState::Idle,
            saved: SavedFlags::new(config.saved_indicator()),
            error: None,
            confirmation: None,
            closed: false,
        })
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn is_saved(&mut self, field: ProfileField) -> bool {
        self.saved.is_saved(field)
    }

    /// Apply one intent. Intents are handled strictly one at a time.
    pub async fn dispatch(&mut self, intent: Intent) -> Result<Outcome, EditorError> {
        match intent {
            Intent::StartEdit(field) => self.start_edit(field).map(|_| Outcome::Updated),
            Intent::ChangeValue(text) => self.change_value(text).map(|_| Outcome::Updated),
            Intent::Cancel => self.cancel().map(|_| Outcome::Updated),
            Intent::Save => self.save().await.map(Outcome::Save),
            Intent::Delete => self.delete().await.map(Outcome::Delete),
            Intent::Logout => self.logout().map(|_| Outcome::LoggedOut),
            Intent::Acknowledge => self.acknowledge().map(Outcome::Navigate),
        }
    }

    fn ensure_interactive(&self) -> Result<(), EditorError> {
        if self.confirmation.is_some() {
            return Err(EditorError::AwaitingConfirmation);
        }
        if self.closed {
            return Err(EditorError::Closed);
        }
        Ok(())
    }

    /// Open `field` for editing. Any other open draft is discarded.
    pub fn start_edit(&mut self, field: ProfileField) -> Result<(), EditorError> {
        self.ensure_interactive()?;
        if let EditState::Saving { .. } = self.state {
            return Err(EditorError::refused(&Intent::StartEdit(field), &self.state));
        }

        if let Some(previous) = self.state.active_field() {
            if previous != field {
                debug!(discarded = %previous, field = %field, "Switching edited field");
            }
        }

        self.state = EditState::Editing {
            field,
            buffer: self.profile.get(field).to_string(),
        };
        self.error = None;
        Ok(())
    }

    pub fn change_value(&mut self, text: impl Into<String>) -> Result<(), EditorError> {
        self.ensure_interactive()?;
        match &mut self.state {
            EditState::Editing { buffer, .. } => {
                *buffer = text.into();
                Ok(())
            }
            other => Err(EditorError::refused(&Intent::ChangeValue(String::new()), other)),
        }
    }

    /// Drop the open draft. Cancelling while idle does nothing.
    pub fn cancel(&mut self) -> Result<(), EditorError> {
        self.ensure_interactive()?;
        if matches!(self.state, EditState::Saving { .. }) {
            return Err(EditorError::refused(&Intent::Cancel, &self.state));
        }
        self.state = EditState::Idle;
        Ok(())
    }

    /// Commit the open draft.
    ///
    /// Directory failures are reported through [`SaveOutcome::Failed`] and
    /// the stored error message, never as `Err`.
    pub async fn save(&mut self) -> Result<SaveOutcome, EditorError> {
        self.ensure_interactive()?;
        let (field, buffer) = match &self.state {
            EditState::Editing { field, buffer } => (*field, buffer.clone()),
            other => return Err(EditorError::refused(&Intent::Save, other)),
        };

        let next = buffer.trim().to_string();
        if next == self.profile.get(field) {
            self.state = EditState::Idle;
            return Ok(SaveOutcome::Unchanged);
        }
        if next.is_empty() {
            return Ok(SaveOutcome::EmptyValue);
        }

        self.state = EditState::Saving {
            field,
            buffer: buffer.clone(),
        };

        match self.commit(field, &next).await {
            Ok(fresh) => {
                info!(username = %fresh.username, field = %field, "Profile field saved");

                self.collaborators.session.save(&fresh);
                if field == ProfileField::Username {
                    // Hydration looks the user up by the remembered name
                    self.collaborators.cookies.set(
                        &self.cookie_name,
                        &fresh.username,
                        self.cookie_ttl_days,
                    );
                }
                self.profile = fresh;
                self.saved.mark(field);
                self.error = None;
                self.state = EditState::Idle;
                Ok(SaveOutcome::Saved { field })
            }
            Err(message) => {
                warn!(username = %self.profile.username, field = %field, error = %message, "Profile field save failed");

                self.error = Some(message.clone());
                self.state = EditState::Editing { field, buffer };
                Ok(SaveOutcome::Failed { message })
            }
        }
    }

    /// Patch, then re-fetch under the key the profile has after the patch
    async fn commit(&self, field: ProfileField, value: &str) -> Result<UserProfile, String> {
        let directory = &self.collaborators.directory;
        let username = self.profile.username.as_str();

        directory
            .patch_field(username, &PatchRequest::replace(field, value))
            .await
            .map_err(|e| e.to_string())?;

        let lookup = if field == ProfileField::Username { value } else { username };

        directory
            .fetch_by_username(lookup)
            .await
            .map_err(|e| e.to_string())
    }

    /// Delete the profile from the directory. Allowed in any edit state.
    pub async fn delete(&mut self) -> Result<DeleteOutcome, EditorError> {
        self.ensure_interactive()?;
        self.state = EditState::Idle;

        let username = self.profile.username.clone();
        match self.collaborators.directory.delete_by_username(&username).await {
            Ok(()) => {
                info!(username = %username, "Profile deleted");

                self.forget_session();
                self.error = None;
                self.confirmation = Some(Confirmation::profile_deleted());
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                warn!(username = %username, error = %e, "Profile delete failed");

                let message = e.to_string();
                self.error = Some(message.clone());
                Ok(DeleteOutcome::Failed { message })
            }
        }
    }

    /// Local only; the directory is not contacted
    pub fn logout(&mut self) -> Result<(), EditorError> {
        self.ensure_interactive()?;
        info!(username = %self.profile.username, "Logged out");

        self.state = EditState::Idle;
        self.forget_session();
        self.error = None;
        self.confirmation = Some(Confirmation::logged_out());
        Ok(())
    }

    /// Dismiss the pending confirmation and return where to navigate.
    /// The editor accepts no further intents afterwards.
    pub fn acknowledge(&mut self) -> Result<Route, EditorError> {
        let confirmation = self.confirmation.take().ok_or(EditorError::NoConfirmation)?;
        self.closed = true;
        Ok(confirmation.acknowledge())
    }

    fn forget_session(&self) {
        self.collaborators.session.clear();
        self.collaborators.cookies.delete(&self.cookie_name);
    }

    pub fn view(&mut self) -> ProfileView {
        let mut fields = Vec::with_capacity(ProfileField::ALL.len());

        for field in ProfileField::ALL {
            let committed = self.profile.get(field);
            let (value, editing, save_enabled) = match &self.state {
                EditState::Editing { field: open, buffer } if *open == field => {
                    let trimmed = buffer.trim();
                    let enabled = !trimmed.is_empty() && trimmed != committed;
                    (buffer.clone(), true, enabled)
                }
                EditState::Saving { field: open, buffer } if *open == field => {
                    (buffer.clone(), true, false)
                }
                _ => (committed.to_string(), false, false),
            };

            fields.push(FieldView {
                field,
                label: field.label(),
                value,
                editing,
                save_enabled,
                saved: self.saved.is_saved(field),
            });
        }

        ProfileView {
            heading: format!("Welcome, {}", self.profile.username),
            fields,
            busy: matches!(self.state, EditState::Saving { .. }),
            error: self.error.clone(),
            confirmation: self.confirmation.as_ref().map(|c| c.message().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{rejected, Call, FakeDirectory};
    use crate::core::error::DirectoryError;
    use crate::stores::cookie_store::MemoryCookieStore;
    use crate::stores::session_cache::MemorySessionCache;
    use std::time::Duration;

    struct Harness {
        directory: Arc<FakeDirectory>,
        session: Arc<MemorySessionCache>,
        cookies: Arc<MemoryCookieStore>,
    }

    impl Harness {
        /// Directory holding `username`, with that profile cached and remembered
        fn logged_in(username: &str) -> Self {
            let directory = Arc::new(FakeDirectory::new());
            let profile = directory.seed(username);
            let cookies = Arc::new(MemoryCookieStore::new());
            cookies.set("demoUser", username, 1);

            Self {
                directory,
                session: Arc::new(MemorySessionCache::with_profile(profile)),
                cookies,
            }
        }

        fn collaborators(&self) -> Collaborators {
            Collaborators {
                directory: self.directory.clone(),
                session: self.session.clone(),
                cookies: self.cookies.clone(),
            }
        }

        fn editor(&self) -> ProfileEditor {
            ProfileEditor::mount(self.collaborators(), &SessionConfig::default()).unwrap()
        }
    }

    #[test]
    fn test_mount_without_session_requires_login() {
        let harness = Harness::logged_in("alice");
        harness.session.clear();

        let result = ProfileEditor::mount(harness.collaborators(), &SessionConfig::default());
        assert!(matches!(result, Err(MountError::NoSession)));
        assert!(harness.directory.calls().is_empty());
    }

    #[test]
    fn test_start_edit_then_cancel_for_every_field() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();
        let before = editor.profile().clone();

        for field in ProfileField::ALL {
            editor.start_edit(field).unwrap();
            assert_eq!(
                editor.state(),
                &EditState::Editing { field, buffer: before.get(field).to_string() }
            );
            editor.cancel().unwrap();
            assert_eq!(editor.state(), &EditState::Idle);
        }

        assert_eq!(editor.profile(), &before);
        assert_eq!(harness.session.load(), Some(before));
        assert!(harness.directory.calls().is_empty());
    }

    #[test]
    fn test_switching_fields_discards_draft() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();

        editor.start_edit(ProfileField::City).unwrap();
        editor.change_value("Shelbyville").unwrap();
        editor.start_edit(ProfileField::State).unwrap();

        assert_eq!(
            editor.state(),
            &EditState::Editing { field: ProfileField::State, buffer: "IL".to_string() }
        );
        assert_eq!(editor.profile().city, "Springfield");
        assert!(harness.directory.calls().is_empty());
    }

    #[test]
    fn test_change_value_requires_open_field() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();

        let err = editor.change_value("x").unwrap_err();
        assert_eq!(
            err,
            EditorError::InvalidTransition { intent: "ChangeValue", state: "idle" }
        );
    }

    #[tokio::test]
    async fn test_save_unchanged_value_is_implicit_cancel() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();

        editor.start_edit(ProfileField::City).unwrap();
        editor.change_value("  Springfield  ").unwrap();

        assert_eq!(editor.save().await, Ok(SaveOutcome::Unchanged));
        assert_eq!(editor.state(), &EditState::Idle);
        assert!(harness.directory.calls().is_empty());
    }

    #[tokio::test]
    async fn test_save_empty_value_keeps_field_open() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();

        editor.start_edit(ProfileField::City).unwrap();
        editor.change_value("   ").unwrap();

        assert_eq!(editor.save().await, Ok(SaveOutcome::EmptyValue));
        assert_eq!(
            editor.state(),
            &EditState::Editing { field: ProfileField::City, buffer: "   ".to_string() }
        );
        assert!(harness.directory.calls().is_empty());
    }

    #[tokio::test]
    async fn test_save_from_idle_is_refused() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();

        assert_eq!(
            editor.save().await,
            Err(EditorError::InvalidTransition { intent: "Save", state: "idle" })
        );
    }

    #[tokio::test]
    async fn test_successful_save_patches_refetches_and_caches() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();

        editor.start_edit(ProfileField::City).unwrap();
        editor.change_value(" Shelbyville ").unwrap();

        assert_eq!(
            editor.save().await,
            Ok(SaveOutcome::Saved { field: ProfileField::City })
        );

        assert_eq!(
            harness.directory.calls(),
            vec![
                Call::Patch(
                    "alice".to_string(),
                    PatchRequest::replace(ProfileField::City, "Shelbyville")
                ),
                Call::Fetch("alice".to_string()),
            ]
        );

        let stored = harness.directory.stored("alice").unwrap();
        assert_eq!(harness.session.load(), Some(stored.clone()));
        assert_eq!(editor.profile(), &stored);
        assert_eq!(editor.state(), &EditState::Idle);
        assert!(editor.is_saved(ProfileField::City));
        assert!(!editor.is_saved(ProfileField::State));
        assert_eq!(harness.cookies.get("demoUser"), Some("alice".to_string()));
    }

    #[tokio::test]
    async fn test_rename_refetches_under_new_username() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();

        editor.start_edit(ProfileField::Username).unwrap();
        editor.change_value("alice2").unwrap();
        editor.save().await.unwrap();

        assert_eq!(
            harness.directory.calls(),
            vec![
                Call::Patch(
                    "alice".to_string(),
                    PatchRequest::replace(ProfileField::Username, "alice2")
                ),
                Call::Fetch("alice2".to_string()),
            ]
        );
        assert_eq!(editor.profile().username, "alice2");
        assert_eq!(harness.session.load().map(|p| p.username), Some("alice2".to_string()));
        assert_eq!(harness.cookies.get("demoUser"), Some("alice2".to_string()));

        // Later operations use the new key
        editor.start_edit(ProfileField::ZipCode).unwrap();
        editor.change_value("10001").unwrap();
        editor.save().await.unwrap();
        assert_eq!(
            harness.directory.calls()[2],
            Call::Patch("alice2".to_string(), PatchRequest::replace(ProfileField::ZipCode, "10001"))
        );
    }

    #[tokio::test]
    async fn test_failed_patch_restores_draft_and_keeps_cache() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();
        let cached = harness.session.load();
        harness.directory.fail_patch_with(rejected(500, "Server error occurred while updating user profile."));

        editor.start_edit(ProfileField::City).unwrap();
        editor.change_value("Shelbyville ").unwrap();

        assert_eq!(
            editor.save().await,
            Ok(SaveOutcome::Failed {
                message: "Server error occurred while updating user profile.".to_string()
            })
        );
        assert_eq!(
            editor.state(),
            &EditState::Editing { field: ProfileField::City, buffer: "Shelbyville ".to_string() }
        );
        assert_eq!(harness.session.load(), cached);
        assert_eq!(editor.error_message(), Some("Server error occurred while updating user profile."));
        assert!(!editor.is_saved(ProfileField::City));
        assert_eq!(harness.directory.calls().len(), 1);

        // Retry succeeds and clears the error
        assert_eq!(
            editor.save().await,
            Ok(SaveOutcome::Saved { field: ProfileField::City })
        );
        assert_eq!(editor.error_message(), None);
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_cache() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();
        let cached = harness.session.load();
        harness.directory.fail_fetch_with(DirectoryError::Transport("connection reset".to_string()));

        editor.start_edit(ProfileField::State).unwrap();
        editor.change_value("WI").unwrap();

        assert_eq!(
            editor.save().await,
            Ok(SaveOutcome::Failed { message: "connection reset".to_string() })
        );
        assert_eq!(harness.session.load(), cached);
        assert_eq!(editor.state().active_field(), Some(ProfileField::State));
    }

    #[tokio::test(start_paused = true)]
    async fn test_in_flight_save_blocks_other_edits() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();
        let _gate = harness.directory.hold_patches();

        editor.start_edit(ProfileField::City).unwrap();
        editor.change_value("Shelbyville").unwrap();

        // Abandon the save while the patch is still parked
        let pending = tokio::time::timeout(Duration::from_millis(50), editor.save()).await;
        assert!(pending.is_err());

        assert_eq!(
            editor.state(),
            &EditState::Saving { field: ProfileField::City, buffer: "Shelbyville".to_string() }
        );

        let view = editor.view();
        assert!(view.busy);
        let city = view.fields.iter().find(|f| f.field == ProfileField::City).unwrap();
        assert!(city.editing);
        assert!(!city.save_enabled);
        assert_eq!(city.value, "Shelbyville");

        let refused = |intent| EditorError::InvalidTransition { intent, state: "saving" };
        assert_eq!(editor.start_edit(ProfileField::State), Err(refused("StartEdit")));
        assert_eq!(editor.change_value("Ogdenville"), Err(refused("ChangeValue")));
        assert_eq!(editor.cancel(), Err(refused("Cancel")));
        assert_eq!(editor.save().await, Err(refused("Save")));

        assert_eq!(editor.delete().await, Ok(DeleteOutcome::Deleted));
        assert_eq!(editor.state(), &EditState::Idle);
        assert_eq!(
            harness.directory.calls(),
            vec![
                Call::Patch(
                    "alice".to_string(),
                    PatchRequest::replace(ProfileField::City, "Shelbyville")
                ),
                Call::Delete("alice".to_string()),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_saved_indicator_clears_after_window() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();

        editor.start_edit(ProfileField::ZipCode).unwrap();
        editor.change_value("10001").unwrap();
        editor.save().await.unwrap();
        assert!(editor.is_saved(ProfileField::ZipCode));

        tokio::time::sleep(Duration::from_millis(1990)).await;
        assert!(editor.is_saved(ProfileField::ZipCode));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!editor.is_saved(ProfileField::ZipCode));
    }

    #[tokio::test]
    async fn test_delete_clears_session_and_asks_for_confirmation() {
        let harness = Harness::logged_in("bob");
        let mut editor = harness.editor();
        editor.start_edit(ProfileField::City).unwrap();

        assert_eq!(editor.delete().await, Ok(DeleteOutcome::Deleted));

        assert_eq!(harness.directory.calls(), vec![Call::Delete("bob".to_string())]);
        assert!(harness.session.load().is_none());
        assert!(harness.cookies.get("demoUser").is_none());
        assert_eq!(editor.state(), &EditState::Idle);
        assert_eq!(editor.view().confirmation.as_deref(), Some("Profile deleted."));

        // Modal blocks everything but acknowledgment
        assert_eq!(
            editor.start_edit(ProfileField::City),
            Err(EditorError::AwaitingConfirmation)
        );
        assert_eq!(editor.acknowledge(), Ok(Route::Landing));
        assert_eq!(editor.start_edit(ProfileField::City), Err(EditorError::Closed));
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_session() {
        let harness = Harness::logged_in("bob");
        let mut editor = harness.editor();
        harness.directory.fail_delete_with(rejected(404, "That user does not exist. Please try again."));

        assert_eq!(
            editor.delete().await,
            Ok(DeleteOutcome::Failed {
                message: "That user does not exist. Please try again.".to_string()
            })
        );
        assert!(harness.session.load().is_some());
        assert_eq!(harness.cookies.get("demoUser"), Some("bob".to_string()));
        assert!(editor.confirmation().is_none());
        assert_eq!(editor.acknowledge(), Err(EditorError::NoConfirmation));
    }

    #[tokio::test]
    async fn test_logout_is_local() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();

        assert_eq!(editor.dispatch(Intent::Logout).await, Ok(Outcome::LoggedOut));
        assert!(harness.directory.calls().is_empty());
        assert!(harness.session.load().is_none());
        assert!(harness.cookies.get("demoUser").is_none());
        assert_eq!(
            editor.confirmation().map(|c| c.message()),
            Some("You've been logged out.")
        );

        assert_eq!(
            editor.dispatch(Intent::Acknowledge).await,
            Ok(Outcome::Navigate(Route::Landing))
        );
    }

    #[tokio::test]
    async fn test_dispatch_sequence_and_view() {
        let harness = Harness::logged_in("alice");
        let mut editor = harness.editor();

        editor.dispatch(Intent::StartEdit(ProfileField::EmailAddress)).await.unwrap();
        editor.dispatch(Intent::ChangeValue("   ".to_string())).await.unwrap();

        let view = editor.view();
        assert_eq!(view.heading, "Welcome, alice");
        assert_eq!(view.fields.len(), 6);
        let email = &view.fields[1];
        assert_eq!(email.label, "Email Address");
        assert!(email.editing);
        assert!(!email.save_enabled);
        assert!(!view.fields[0].editing);
        assert_eq!(view.fields[0].value, "alice");

        editor
            .dispatch(Intent::ChangeValue("new@example.com".to_string()))
            .await
            .unwrap();
        assert!(editor.view().fields[1].save_enabled);

        let outcome = editor.dispatch(Intent::Save).await.unwrap();
        assert_eq!(outcome, Outcome::Save(SaveOutcome::Saved { field: ProfileField::EmailAddress }));

        let view = editor.view();
        assert_eq!(view.fields[1].value, "new@example.com");
        assert!(view.fields[1].saved);
        assert!(!view.busy);
        assert_eq!(view.error, None);
    }
}
