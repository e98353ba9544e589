use crate::core::config::SessionConfig;
use crate::core::error::{MountError, SessionError};
use crate::editor::{Collaborators, ProfileEditor};
use crate::models::profile::{NewProfile, UserProfile};
use crate::portal::route::Route;
use tracing::{debug, info, warn};

/// Login, signup and session hydration from the remembered username
pub struct SessionFlow {
    collaborators: Collaborators,
    config: SessionConfig,
}

impl SessionFlow {
    pub fn new(collaborators: Collaborators, config: SessionConfig) -> Self {
        Self {
            collaborators,
            config,
        }
    }

    /// Rebuild the session cache from the remembered-username cookie.
    ///
    /// Returns the page to go to when a profile could be loaded. A stale
    /// cookie is ignored so the user can log in normally.
    pub async fn hydrate(&self) -> Option<Route> {
        let username = self.collaborators.cookies.get(&self.config.cookie_name)?;

        match self.collaborators.directory.fetch_by_username(&username).await {
            Ok(profile) => {
                debug!(username = %profile.username, "Session hydrated from cookie");
                self.collaborators.session.save(&profile);
                Some(Route::Profile)
            }
            Err(e) => {
                debug!(username = %username, error = %e, "Remembered user could not be loaded");
                None
            }
        }
    }

    /// Log in as an existing user
    pub async fn login(&self, username: &str) -> Result<UserProfile, SessionError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(SessionError::UsernameRequired);
        }

        let profile = self
            .collaborators
            .directory
            .fetch_by_username(username)
            .await
            .inspect_err(|e| warn!(username = %username, error = %e, "Login failed"))?;

        self.remember(&profile);
        info!(username = %profile.username, "Logged in");
        Ok(profile)
    }

    /// Create a user, then log in as it
    pub async fn signup(&self, mut new_profile: NewProfile) -> Result<UserProfile, SessionError> {
        new_profile.username = new_profile.username.trim().to_string();
        if new_profile.username.is_empty() {
            return Err(SessionError::UsernameRequired);
        }

        let directory = &self.collaborators.directory;
        directory
            .create(&new_profile)
            .await
            .inspect_err(|e| warn!(username = %new_profile.username, error = %e, "Signup failed"))?;

        let created = directory.fetch_by_username(&new_profile.username).await?;

        self.remember(&created);
        info!(user_id = created.id, username = %created.username, "Signed up");
        Ok(created)
    }

    /// Enter the profile editor, hydrating from the cookie first when the
    /// session cache is empty. `Err` carries the page to redirect to.
    pub async fn open_profile(&self) -> Result<ProfileEditor, Route> {
        match ProfileEditor::mount(self.collaborators.clone(), &self.config) {
            Ok(editor) => return Ok(editor),
            Err(MountError::NoSession) => {}
        }

        self.hydrate().await.ok_or(Route::Login)?;

        ProfileEditor::mount(self.collaborators.clone(), &self.config).map_err(|_| Route::Login)
    }

    fn remember(&self, profile: &UserProfile) {
        self.collaborators.cookies.set(
            &self.config.cookie_name,
            &profile.username,
            self.config.cookie_ttl_days,
        );
        self.collaborators.session.save(profile);
    }
}
