//! Per-field profile editor.
//!
//! At most one field is open for editing at a time. Saving sends a single
//! field replace to the directory, re-fetches the profile and only then
//! overwrites the session cache.

pub mod confirmation;
pub mod field_editor;
pub mod saved_flags;

use crate::models::profile::ProfileField;

pub use confirmation::Confirmation;
pub use field_editor::{
    Collaborators, DeleteOutcome, EditState, FieldView, Outcome, ProfileEditor, ProfileView,
    SaveOutcome,
};
pub use saved_flags::SavedFlags;

/// A user action on the profile page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    StartEdit(ProfileField),
    ChangeValue(String),
    Cancel,
    Save,
    Delete,
    Logout,
    Acknowledge,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::StartEdit(_) => "StartEdit",
            Intent::ChangeValue(_) => "ChangeValue",
            Intent::Cancel => "Cancel",
            Intent::Save => "Save",
            Intent::Delete => "Delete",
            Intent::Logout => "Logout",
            Intent::Acknowledge => "Acknowledge",
        }
    }
}
