use serde::{Deserialize, Serialize};

/// Something that went wrong in a host service.
///
/// All fields are free-form; severity in particular is not restricted to a
/// fixed set of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEvent {
    /// Human-readable description of the failure.
    pub message: String,

    /// Caller-defined classification.
    pub code: String,

    /// Caller-defined severity label.
    pub severity: String,

    /// Free-form context.
    pub additional_info: String,
}

impl ErrorEvent {
    /// Creates a new `ErrorEvent`.
    pub fn new(
        message: impl Into<String>,
        code: impl Into<String>,
        severity: impl Into<String>,
        additional_info: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            severity: severity.into(),
            additional_info: additional_info.into(),
        }
    }
}
