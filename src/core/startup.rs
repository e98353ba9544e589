use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use crate::core::state::AppState;
use crate::models::profile::NewProfile;
use crate::validation::profile::validate_new_profile;

/// Preload the directory from a JSON array of profiles.
/// Invalid or duplicate entries are skipped with a warning.
pub fn seed_directory(state: &AppState, path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read seed file: {}", path.display()))?;

    let profiles: Vec<NewProfile> = serde_json::from_str(&content)
        .context(format!("Failed to parse seed file: {}", path.display()))?;

    let total = profiles.len();
    let mut seeded = 0;

    for profile in profiles {
        let username = profile.username.clone();

        if let Err(e) = validate_new_profile(&profile) {
            warn!(username = %username, error = %e, "Invalid seed profile, skipping");
            continue;
        }

        match state.profiles.create(profile) {
            Ok(created) => {
                seeded += 1;
                info!(user_id = created.id, username = %created.username, "Seeded user");
            }
            Err(e) => {
                warn!(username = %username, error = %e, "Could not seed user, skipping");
            }
        }
    }

    info!(
        seeded = seeded,
        skipped = total - seeded,
        users = state.profiles.len(),
        "Directory seeded"
    );

    Ok(seeded)
}
