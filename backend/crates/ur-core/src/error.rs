use crate::MISSING_NAME_OR_EMAIL;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing name or email (field: {field}) {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Client-facing message, without the source location.
    pub fn message(&self) -> &'static str {
        match self {
            CoreError::MissingField { .. } => MISSING_NAME_OR_EMAIL,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
