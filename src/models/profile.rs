use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user record as stored by the directory
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Directory-assigned identifier, never edited
    pub id: u64,
    /// Unique username, also the lookup key for every directory call
    pub username: String,
    pub email_address: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Payload for creating a profile; the directory assigns the id
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub username: String,
    pub email_address: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl NewProfile {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Username => &self.username,
            ProfileField::EmailAddress => &self.email_address,
            ProfileField::StreetAddress => &self.street_address,
            ProfileField::City => &self.city,
            ProfileField::State => &self.state,
            ProfileField::ZipCode => &self.zip_code,
        }
    }
}

impl UserProfile {
    pub fn from_new(id: u64, new: NewProfile) -> Self {
        Self {
            id,
            username: new.username,
            email_address: new.email_address,
            street_address: new.street_address,
            city: new.city,
            state: new.state,
            zip_code: new.zip_code,
        }
    }

    /// Committed value of an editable field
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Username => &self.username,
            ProfileField::EmailAddress => &self.email_address,
            ProfileField::StreetAddress => &self.street_address,
            ProfileField::City => &self.city,
            ProfileField::State => &self.state,
            ProfileField::ZipCode => &self.zip_code,
        }
    }

    /// Copy of this profile with one field replaced
    pub fn with_field(&self, field: ProfileField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            ProfileField::Username => next.username = value,
            ProfileField::EmailAddress => next.email_address = value,
            ProfileField::StreetAddress => next.street_address = value,
            ProfileField::City => next.city = value,
            ProfileField::State => next.state = value,
            ProfileField::ZipCode => next.zip_code = value,
        }
        next
    }
}

/// The editable attributes of a profile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Username,
    EmailAddress,
    StreetAddress,
    City,
    State,
    ZipCode,
}

impl ProfileField {
    /// All editable fields in display order
    pub const ALL: [ProfileField; 6] = [
        ProfileField::Username,
        ProfileField::EmailAddress,
        ProfileField::StreetAddress,
        ProfileField::City,
        ProfileField::State,
        ProfileField::ZipCode,
    ];

    /// Name used on the wire (JSON keys and patch paths)
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Username => "username",
            ProfileField::EmailAddress => "emailAddress",
            ProfileField::StreetAddress => "streetAddress",
            ProfileField::City => "city",
            ProfileField::State => "state",
            ProfileField::ZipCode => "zipCode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Username => "Username",
            ProfileField::EmailAddress => "Email Address",
            ProfileField::StreetAddress => "Street Address",
            ProfileField::City => "City",
            ProfileField::State => "State",
            ProfileField::ZipCode => "Zip Code",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl FromStr for ProfileField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Replace,
}

/// Single-field replace sent to the directory
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchRequest {
    pub op: PatchOp,
    pub path: ProfileField,
    pub value: String,
}

impl PatchRequest {
    pub fn replace(field: ProfileField, value: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Replace,
            path: field,
            value: value.into(),
        }
    }
}
