use crate::core::config::DirectoryConfig;
use crate::core::error::DirectoryError;
use crate::models::profile::{NewProfile, PatchRequest, UserProfile};
use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Remote profile store consumed by the portal
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    async fn fetch_by_username(&self, username: &str) -> Result<UserProfile, DirectoryError>;

    async fn create(&self, profile: &NewProfile) -> Result<(), DirectoryError>;

    /// Apply a single-field replace; returns the directory's confirmation text
    async fn patch_field(&self, username: &str, patch: &PatchRequest) -> Result<String, DirectoryError>;

    async fn delete_by_username(&self, username: &str) -> Result<(), DirectoryError>;

    async fn list_all(&self) -> Result<Vec<UserProfile>, DirectoryError>;
}

/// HTTP client for the user directory REST API
pub struct HttpDirectoryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDirectoryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DirectoryError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DirectoryError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(DirectoryError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DirectoryError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        Self::new(&config.base_url, config.request_timeout())
    }

    /// `{base}/{username}` with the username percent-encoded as one segment
    fn user_url(&self, username: &str) -> Result<Url, DirectoryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DirectoryError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(username);
        Ok(url)
    }

    /// `{base}/` for listing
    fn collection_url(&self) -> Result<Url, DirectoryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DirectoryError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("");
        Ok(url)
    }
}

/// Read the body as text and turn a non-success status into `Rejected`,
/// using the body as the message when there is one.
async fn checked_text(response: Response) -> Result<String, DirectoryError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let message = if text.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        } else {
            text
        };
        return Err(DirectoryError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    Ok(text)
}

async fn checked_json<T: DeserializeOwned>(response: Response) -> Result<T, DirectoryError> {
    let text = checked_text(response).await?;
    serde_json::from_str(&text).map_err(|e| DirectoryError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn fetch_by_username(&self, username: &str) -> Result<UserProfile, DirectoryError> {
        let url = self.user_url(username)?;
        debug!(url = %url, "Fetching profile");

        let response = self.client.get(url).send().await?;
        checked_json(response).await
    }

    async fn create(&self, profile: &NewProfile) -> Result<(), DirectoryError> {
        debug!(username = %profile.username, "Creating profile");

        let response = self
            .client
            .post(self.base_url.clone())
            .json(profile)
            .send()
            .await?;
        checked_text(response).await?;
        Ok(())
    }

    async fn patch_field(&self, username: &str, patch: &PatchRequest) -> Result<String, DirectoryError> {
        let url = self.user_url(username)?;
        debug!(url = %url, field = %patch.path, "Patching profile field");

        let response = self.client.patch(url).json(patch).send().await?;
        checked_text(response).await
    }

    async fn delete_by_username(&self, username: &str) -> Result<(), DirectoryError> {
        let url = self.user_url(username)?;
        debug!(url = %url, "Deleting profile");

        let response = self.client.delete(url).send().await?;
        checked_text(response).await?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<UserProfile>, DirectoryError> {
        let response = self.client.get(self.collection_url()?).send().await?;
        checked_json(response).await
    }
}
