use crate::core::error::ApiError;
use crate::models::profile::{NewProfile, PatchRequest, ProfileField};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const MAX_USERNAME_LENGTH: usize = 32;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+(\.[a-zA-Z0-9._-]+)*\.[a-zA-Z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Raw patch body as received, before field and op are checked
#[derive(Debug, Deserialize)]
pub struct PatchBody {
    pub op: Option<String>,
    pub path: Option<String>,
    pub value: Option<String>,
}

/// Usernames are 1 to 32 ASCII letters or digits
pub fn validate_username(username: &str) -> Result<(), ApiError> {
    let valid = !username.is_empty()
        && username.len() <= MAX_USERNAME_LENGTH
        && username.chars().all(|c| c.is_ascii_alphanumeric());

    if !valid {
        return Err(ApiError::InvalidInput(
            "Username should be less than 32 characters and contain only letters and numbers."
                .to_string(),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ApiError> {
    if !email_regex().is_match(email) {
        return Err(ApiError::InvalidInput(
            "Invalid email format. Only letters, digits, and . _ - are allowed. \
             Email must include '@' and a valid domain."
                .to_string(),
        ));
    }
    Ok(())
}

/// Check a create payload: every field present and non-blank, valid
/// username and email.
pub fn validate_create_request(payload: &HashMap<String, String>) -> Result<NewProfile, ApiError> {
    for field in ProfileField::ALL {
        let name = field.as_str();
        match payload.get(name) {
            None => {
                return Err(ApiError::InvalidInput(format!("Missing required field: {}", name)));
            }
            Some(value) if value.trim().is_empty() => {
                return Err(ApiError::InvalidInput(format!("Field '{}' cannot be blank.", name)));
            }
            Some(_) => {}
        }
    }

    let take = |field: ProfileField| payload.get(field.as_str()).cloned().unwrap_or_default();
    let profile = NewProfile {
        username: take(ProfileField::Username),
        email_address: take(ProfileField::EmailAddress),
        street_address: take(ProfileField::StreetAddress),
        city: take(ProfileField::City),
        state: take(ProfileField::State),
        zip_code: take(ProfileField::ZipCode),
    };

    validate_new_profile(&profile)?;

    Ok(profile)
}

/// Every field non-blank, valid username and email
pub fn validate_new_profile(profile: &NewProfile) -> Result<(), ApiError> {
    for field in ProfileField::ALL {
        if profile.get(field).trim().is_empty() {
            return Err(ApiError::InvalidInput(format!(
                "Field '{}' cannot be blank.",
                field.as_str()
            )));
        }
    }

    validate_username(&profile.username)?;
    validate_email(&profile.email_address)
}

/// Check a patch payload: op must be `replace`, path an editable field,
/// value non-blank and valid for that field.
pub fn validate_patch_request(body: PatchBody) -> Result<PatchRequest, ApiError> {
    let op = body.op.unwrap_or_default();
    if !op.eq_ignore_ascii_case("replace") {
        return Err(ApiError::InvalidInput(format!(
            "Unsupported operation: '{}'. Only 'replace' is allowed.",
            op
        )));
    }

    let path = body.path.unwrap_or_default();
    let field: ProfileField = path.parse().map_err(|_| {
        let allowed: Vec<&str> = ProfileField::ALL.iter().map(|f| f.as_str()).collect();
        ApiError::InvalidInput(format!(
            "Field '{}' cannot be updated. Allowed fields: {}",
            path,
            allowed.join(", ")
        ))
    })?;

    let value = body.value.unwrap_or_default();
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput("Field value is required.".to_string()));
    }

    match field {
        ProfileField::Username => validate_username(&value)?,
        ProfileField::EmailAddress => validate_email(&value)?,
        _ => {}
    }

    Ok(PatchRequest::replace(field, value))
}
