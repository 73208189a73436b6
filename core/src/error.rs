//! Error types for the upload client and dashboard.
//!
//! - [`FileValidationError`] - client-side archive checks (size, extension)
//! - [`ApiError`] - every failure an API call can surface
//!
//! Nothing in this crate panics on a failed call: operations return
//! [`ApiResult`] and the UI turns the error into a message string.

use thiserror::Error;

// =============================================================================
// File Validation Errors
// =============================================================================

/// Rejection reasons from [`crate::validation::validate_file`].
///
/// The `Display` strings are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileValidationError {
    /// File exceeds the upload size limit.
    #[error("Arquivo muito grande. Máximo 200MB.")]
    TooLarge { size: u64, max: u64 },

    /// Extension outside the allow-list.
    #[error("Tipo de arquivo não suportado. Use ZIP ou RAR.")]
    UnsupportedType { extension: String },
}

// =============================================================================
// API Errors
// =============================================================================

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced an HTTP response.
    #[error("Network error: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    /// Response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// A file was rejected before any request was sent.
    #[error("{file}: {source}")]
    Validation {
        file: String,
        #[source]
        source: FileValidationError,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(" ({d})")).unwrap_or_default()
}

fn error_message(body: &serde_json::Value) -> Option<String> {
    body.get("error")?.as_str().map(str::to_string)
}

fn validation_errors(body: &serde_json::Value) -> Option<String> {
    let errors: Vec<&str> = body
        .get("validacao")?
        .get("erros_validacao")?
        .as_array()?
        .iter()
        .filter_map(|e| e.as_str())
        .collect();

    (!errors.is_empty()).then(|| errors.join("; "))
}

impl ApiError {
    /// Builds a [`ApiError::Status`] from a failed response.
    ///
    /// The detail is the backend's `{"error": "..."}` message, or for a
    /// rejected upload the joined `validacao.erros_validacao` list.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| error_message(&v).or_else(|| validation_errors(&v)))
            .filter(|d| !d.trim().is_empty());

        ApiError::Status { status, detail }
    }

    /// HTTP status code, when the failure came from the backend.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
