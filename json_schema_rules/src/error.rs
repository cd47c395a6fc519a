use thiserror::Error;

/// Error type for schema rule application.
///
/// Rules themselves are total: a required name with no matching field, a
/// missing `properties` map or a disabled annotation toggle are all no-ops.
/// Errors only come from the input boundary (malformed schema shapes) and
/// from reading schema or settings files.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A schema value does not have the shape the keyword requires,
    /// e.g. `required` is not an array of strings.
    #[error("malformed schema at '{pointer}': {reason}")]
    MalformedSchema { pointer: String, reason: String },

    /// I/O error (e.g., reading a schema or settings file).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RuleError {
    pub(crate) fn malformed(pointer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSchema {
            pointer: pointer.into(),
            reason: reason.into(),
        }
    }
}
