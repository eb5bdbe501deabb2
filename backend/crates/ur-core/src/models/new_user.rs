//! Validated input for creating a user record.

use crate::{CoreError, Result as CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Message returned to clients when a required field is absent or empty.
pub const MISSING_NAME_OR_EMAIL: &str = "Missing name or email";

/// A name/email pair that passed presence validation.
///
/// Only emptiness is checked: no trimming, format, length or uniqueness
/// rules apply, so `" "` is a valid name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Validate a raw payload. Both fields must be present and non-empty.
    #[track_caller]
    pub fn new(name: Option<String>, email: Option<String>) -> CoreResult<Self> {
        let name = Self::require("name", name)?;
        let email = Self::require("email", email)?;

        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    #[track_caller]
    fn require(field: &'static str, value: Option<String>) -> CoreResult<String> {
        match value {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(CoreError::MissingField {
                field,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
