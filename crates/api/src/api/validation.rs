// Input validation for event APIs
//
// Client-facing messages are generic; details are logged at warn level only.

use super::common::ErrorResponse;
use axum::http::StatusCode;
use axum::Json;
use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use thiserror::Error;

/// Client-caused request failure, always surfaced as 400
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body is not well-formed JSON or does not match the expected shape
    #[error("Invalid request body")]
    InvalidBody,
    /// A required field is empty or absent
    #[error("Missing required fields")]
    MissingRequiredFields,
    /// Payload could not be re-serialized as a JSON document
    #[error("Invalid payload format")]
    InvalidPayload,
}

impl From<ValidationError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: ValidationError) -> Self {
        ErrorResponse::new(err.to_string()).into_response(StatusCode::BAD_REQUEST)
    }
}

/// Parse a request body as a JSON object regardless of its declared content type.
/// Arrays and scalars are rejected even when `T` could be built from them.
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ValidationError> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Rejected request body: {}", e);
        ValidationError::InvalidBody
    })?;
    if !value.is_object() {
        tracing::warn!("Rejected request body: expected a JSON object");
        return Err(ValidationError::InvalidBody);
    }
    serde_json::from_value(value).map_err(|e| {
        tracing::warn!("Rejected request body: {}", e);
        ValidationError::InvalidBody
    })
}

/// Deserialize an explicit JSON `null` as the type's default value
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Require the event's type, description and date to be non-empty
pub fn validate_required_fields(
    event_type: &str,
    description: &str,
    date: &str,
) -> Result<(), ValidationError> {
    if event_type.is_empty() || description.is_empty() || date.is_empty() {
        tracing::warn!(
            type_present = !event_type.is_empty(),
            description_present = !description.is_empty(),
            date_present = !date.is_empty(),
            "Rejected event with missing required fields"
        );
        return Err(ValidationError::MissingRequiredFields);
    }
    Ok(())
}

/// Re-serialize a payload into a canonical JSON document
pub fn canonical_payload(payload: &serde_json::Value) -> Result<serde_json::Value, ValidationError> {
    let bytes = serde_json::to_vec(payload).map_err(|e| {
        tracing::warn!("Payload could not be serialized: {}", e);
        ValidationError::InvalidPayload
    })?;
    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::warn!("Payload is not a valid JSON document: {}", e);
        ValidationError::InvalidPayload
    })
}
