use crate::ApiResult;

use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /api/submit`.
///
/// Both fields are optional here so that absent and `null` values reach
/// validation and get the same 400 as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitUserRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl SubmitUserRequest {
    /// Decode a raw request body regardless of its content type.
    ///
    /// Unparsable JSON and non-string fields are bad requests. Any JSON value
    /// other than an object carries no fields, so it decodes to an empty
    /// request and fails validation like a missing field.
    pub fn from_body(body: &[u8]) -> ApiResult<Self> {
        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
            _ => Ok(Self::default()),
        }
    }
}
