use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GreenfieldError, Result};

/// Standard API response envelope
///
/// Provides a consistent response format for all API endpoints. The envelope
/// is a sum type rather than a struct with optional fields, so a response can
/// never carry both a payload and an error: `success` on the wire selects
/// which variant is populated.
///
/// Wire form: `{ "success": true, "data": … }` on success and
/// `{ "success": false, "error": … }` on failure; the inactive field is
/// omitted entirely, never serialized as `null`.
///
/// # Example
/// ```
/// use greenfield::ApiResponse;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Greeting {
///     message: String,
/// }
///
/// fn greet(name: &str) -> ApiResponse<Greeting> {
///     if name.is_empty() {
///         ApiResponse::error("Name must not be empty")
///     } else {
///         ApiResponse::success(Greeting { message: format!("Hello, {name}!") })
///     }
/// }
///
/// assert!(greet("Ada").is_success());
/// assert!(!greet("").is_success());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// Successful response carrying the payload.
    Success { data: T },
    /// Failed response carrying a human-readable description.
    Failure { error: String },
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Create an error response with a human-readable description
    pub fn error(message: impl Into<String>) -> Self {
        Self::Failure {
            error: message.into(),
        }
    }

    /// Whether this envelope is the success variant
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The payload, if this is a successful response
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// The error description, if this is a failed response
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }

    /// Unwrap the envelope into a plain `Result`
    pub fn into_result(self) -> std::result::Result<T, String> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { error } => Err(error),
        }
    }

    /// Reassemble an envelope from its wire fields, rejecting combinations
    /// that contradict the `success` flag.
    pub fn from_parts(success: bool, data: Option<T>, error: Option<String>) -> Result<Self> {
        match (success, data, error) {
            (true, Some(data), None) => Ok(Self::Success { data }),
            (false, None, Some(error)) => Ok(Self::Failure { error }),
            (true, _, Some(_)) => Err(inconsistent("successful envelope carries an error")),
            (true, None, None) => Err(inconsistent("successful envelope is missing its payload")),
            (false, Some(_), _) => Err(inconsistent("failed envelope carries a payload")),
            (false, None, None) => Err(inconsistent(
                "failed envelope is missing its error description",
            )),
        }
    }
}

fn inconsistent(message: &str) -> GreenfieldError {
    GreenfieldError::InconsistentEnvelope {
        message: message.to_string(),
    }
}

/// Borrowed wire form used for serialization.
#[derive(Serialize)]
struct WireRef<'a, T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Owned wire form used for deserialization.
#[derive(Deserialize)]
struct Wire<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let wire = match self {
            Self::Success { data } => WireRef {
                success: true,
                data: Some(data),
                error: None,
            },
            Self::Failure { error } => WireRef {
                success: false,
                data: None,
                error: Some(error),
            },
        };
        wire.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let wire = Wire::<T>::deserialize(deserializer)?;
        Self::from_parts(wire.success, wire.data, wire.error)
            .map_err(|err| D::Error::custom(err.to_string()))
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    // Both variants answer 200; failures report through the body.
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        message: String,
    }

    fn payload(message: &str) -> Payload {
        Payload {
            message: message.to_string(),
        }
    }

    #[test]
    fn test_success_serializes_without_error_field() {
        let response = ApiResponse::success(payload("hi"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "success": true, "data": { "message": "hi" } }));
    }

    #[test]
    fn test_failure_serializes_without_data_field() {
        let response: ApiResponse<Payload> = ApiResponse::error("boom");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "success": false, "error": "boom" }));
    }

    #[test]
    fn test_round_trip_preserves_active_variant() {
        let response = ApiResponse::success(payload("hi"));
        let text = serde_json::to_string(&response).unwrap();
        let parsed: ApiResponse<Payload> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, response);

        let response: ApiResponse<Payload> = ApiResponse::error("boom");
        let text = serde_json::to_string(&response).unwrap();
        let parsed: ApiResponse<Payload> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_deserialize_rejects_success_with_error() {
        let wire: Value = json!({ "success": true, "data": { "message": "hi" }, "error": "boom" });
        let result = serde_json::from_value::<ApiResponse<Payload>>(wire);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_failure_with_data() {
        let wire: Value = json!({ "success": false, "data": { "message": "hi" }, "error": "boom" });
        let result = serde_json::from_value::<ApiResponse<Payload>>(wire);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_empty_envelope() {
        assert!(serde_json::from_value::<ApiResponse<Payload>>(json!({ "success": true })).is_err());
        assert!(
            serde_json::from_value::<ApiResponse<Payload>>(json!({ "success": false })).is_err()
        );
    }

    #[test]
    fn test_accessors() {
        let response = ApiResponse::success(payload("hi"));
        assert!(response.is_success());
        assert_eq!(response.data().map(|p| p.message.as_str()), Some("hi"));
        assert_eq!(response.error_message(), None);
        assert_eq!(response.into_result(), Ok(payload("hi")));

        let response: ApiResponse<Payload> = ApiResponse::error("boom");
        assert!(!response.is_success());
        assert!(response.data().is_none());
        assert_eq!(response.error_message(), Some("boom"));
        assert_eq!(response.into_result(), Err("boom".to_string()));
    }
}
