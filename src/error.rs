use std::collections::BTreeMap;

/// Per-field validation messages, keyed by JSON field name.
pub type FieldErrors = BTreeMap<String, String>;

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing input. `fields` is empty when the message alone
    /// says what was wrong.
    Validation {
        message: String,
        fields: FieldErrors,
    },
    NotFound(String),
    /// Anything the caller cannot fix. `source` is logged, never sent.
    Internal {
        message: String,
        source: Option<String>,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            fields: FieldErrors::new(),
        }
    }

    pub fn validation(fields: FieldErrors) -> Self {
        Self::Validation {
            message: VALIDATION_FAILED.to_string(),
            fields,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    pub fn internal_with_source(message: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(source.to_string()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::NotFound(message)
            | Self::Internal { message, .. } => message.as_str(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Internal {
                message,
                source: Some(source),
            } => write!(f, "{message}: {source}"),
            _ => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for AppError {}
