// Centralized error handling for the portal and the mock directory

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::editor::field_editor::EditState;
use crate::editor::Intent;

/// Failure reported by the user directory client.
///
/// The display text is the human-readable message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected response from directory: {0}")]
    InvalidResponse(String),

    #[error("Invalid directory URL: {0}")]
    InvalidUrl(String),
}

impl DirectoryError {
    pub fn status(&self) -> Option<u16> {
        match self {
            DirectoryError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DirectoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DirectoryError::InvalidResponse(err.to_string())
        } else {
            DirectoryError::Transport(err.to_string())
        }
    }
}

/// An intent the profile editor refused in its current state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("{intent} is not allowed while {state}")]
    InvalidTransition { intent: &'static str, state: &'static str },

    #[error("Acknowledge the pending message first")]
    AwaitingConfirmation,

    #[error("Nothing to acknowledge")]
    NoConfirmation,

    #[error("The profile page has been closed")]
    Closed,
}

impl EditorError {
    pub(crate) fn refused(intent: &Intent, state: &EditState) -> Self {
        EditorError::InvalidTransition {
            intent: intent.name(),
            state: state.name(),
        }
    }
}

/// The profile editor cannot be entered
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("No profile in the session cache")]
    NoSession,
}

/// Login and signup failures shown on the login page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Username is required")]
    UsernameRequired,

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Errors returned by the mock directory handlers.
///
/// Bodies are plain text, matching what the portal client displays.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("That user does not exist. Please try again.")]
    UserNotFound,

    #[error("That user already exists. Try a different username.")]
    UserAlreadyExists,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::UserAlreadyExists => StatusCode::CONFLICT,
        };

        (status, self.to_string()).into_response()
    }
}
