//! Error types for the Assinaturas client.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! [`AssinaturasError`] distinguishes four inspectable kinds:
//!
//! - **Deserialization** ([`AssinaturasError::Deserialization`]): the wire
//!   data could not be mapped onto the expected typed shape
//! - **Invalid argument** ([`AssinaturasError::InvalidArgument`]): a caller
//!   precondition failed before any network call was attempted
//! - **API failure** ([`AssinaturasError::Api`]): the server answered with a
//!   non-success status and a structured (or raw) error body
//! - **Transport failure** ([`AssinaturasError::Transport`]): no response was
//!   obtained at all (connection, DNS, timeout)
//!
//! Callers branch on the error kind rather than on HTTP status codes or
//! message substrings. The client performs no local recovery: whether a
//! transport failure is worth retrying is the caller's decision.

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, AssinaturasError>;

/// Errors that can occur while talking to the Assinaturas API.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum AssinaturasError {
    /// Wire data could not be decoded into the expected shape.
    ///
    /// Raised for malformed JSON, a required field missing from a response,
    /// or an enum string outside the known member set. The message names the
    /// offending field and position as reported by the decoder; `context` is
    /// the target shape that failed to decode.
    #[error("failed to decode {context}: {message}")]
    Deserialization {
        /// Short name of the shape that was being decoded.
        context: String,
        /// Decoder diagnostic naming the offending field.
        message: String,
    },

    /// A caller precondition was violated before any network call.
    ///
    /// Typical causes: an empty resource code for an operation whose path
    /// requires one, or a base URL that does not parse. The request is never
    /// dispatched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The server answered with a non-success status.
    ///
    /// Carries the server's human-readable message verbatim (it may be
    /// localized), plus the machine code and field-level validation errors
    /// when the error body provided them. See [`ApiFailure`].
    #[error("API request failed with status {}: {}", .0.status, .0.message)]
    Api(ApiFailure),

    /// No response was obtained from the server.
    ///
    /// Wraps the underlying [`reqwest::Error`] for connection, DNS, TLS and
    /// timeout failures. There is no body to translate; callers commonly
    /// treat this kind as potentially retryable, unlike [`Api`](Self::Api).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Structured API-level failure.
///
/// Built from a non-success response by [`ApiFailure::from_response`]. When
/// the error body is not the expected JSON shape the raw body text becomes
/// the message, so a failure is never silently swallowed.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    /// HTTP status code of the failed response.
    pub status: u16,
    /// Server-provided message, verbatim. Raw body text when the body was
    /// not parseable.
    pub message: String,
    /// Machine-readable error code, when the server sent one.
    pub code: Option<String>,
    /// Field-level validation errors, when the server sent them.
    pub errors: Vec<FieldError>,
}

/// A single field-level validation error from the API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: String,
    /// Human-readable description of the problem.
    pub description: String,
}

/// Error body shape the API uses for non-success responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    code: Option<String>,
    errors: Option<Vec<FieldError>>,
}

impl ApiFailure {
    /// Translates a non-success response into a structured failure.
    ///
    /// Attempts to decode the body as `{ message, code?, errors? }`; any of
    /// the optional parts may be absent. A body that is not JSON, or not
    /// that shape, degrades to a failure carrying the raw status and the
    /// body text as the message.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(parsed) => Self {
                status,
                message: parsed.message,
                code: parsed.code,
                errors: parsed.errors.unwrap_or_default(),
            },
            Err(_) => Self {
                status,
                message: String::from_utf8_lossy(body).into_owned(),
                code: None,
                errors: Vec::new(),
            },
        }
    }
}

impl From<ApiFailure> for AssinaturasError {
    fn from(failure: ApiFailure) -> Self {
        Self::Api(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_body_is_decoded() {
        let body = br#"{"message":"Plano inexistente","code":"0304","errors":[{"field":"code","description":"obrigatorio"}]}"#;
        let failure = ApiFailure::from_response(404, body);

        assert_eq!(failure.status, 404);
        assert_eq!(failure.message, "Plano inexistente");
        assert_eq!(failure.code.as_deref(), Some("0304"));
        assert_eq!(failure.errors.len(), 1);
        assert_eq!(failure.errors[0].field, "code");
        assert_eq!(failure.errors[0].description, "obrigatorio");
    }

    #[test]
    fn optional_parts_may_be_absent() {
        let failure = ApiFailure::from_response(400, br#"{"message":"Requisicao invalida"}"#);

        assert_eq!(failure.message, "Requisicao invalida");
        assert!(failure.code.is_none());
        assert!(failure.errors.is_empty());
    }

    #[test]
    fn non_json_body_falls_back_to_raw_text() {
        let failure = ApiFailure::from_response(502, b"<html>Bad Gateway</html>");

        assert_eq!(failure.status, 502);
        assert_eq!(failure.message, "<html>Bad Gateway</html>");
        assert!(failure.code.is_none());
        assert!(failure.errors.is_empty());
    }

    #[test]
    fn unexpected_json_shape_falls_back_to_raw_text() {
        let failure = ApiFailure::from_response(500, br#"{"detail":"boom"}"#);

        assert_eq!(failure.message, r#"{"detail":"boom"}"#);
        assert!(failure.code.is_none());
    }

    #[test]
    fn api_error_display_includes_status_and_message() {
        let error = AssinaturasError::Api(ApiFailure::from_response(
            400,
            br#"{"message":"Cliente ja existe"}"#,
        ));
        assert_eq!(error.to_string(), "API request failed with status 400: Cliente ja existe");
    }

    #[test]
    fn invalid_argument_display() {
        let error = AssinaturasError::InvalidArgument("plan code must not be empty".to_owned());
        assert_eq!(error.to_string(), "invalid argument: plan code must not be empty");
    }

    #[test]
    fn server_message_is_preserved_verbatim() {
        // Localized operator-facing diagnostics must survive translation.
        let failure =
            ApiFailure::from_response(400, "{\"message\":\"Código já está ativo\"}".as_bytes());
        assert_eq!(failure.message, "Código já está ativo");
    }
}
