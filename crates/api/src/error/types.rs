//! Error type definitions for keystream and audio operations

use thiserror::Error as ThisError;

/// Primary error type for a5cipher operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Malformed caller input: key strings, bit values, configuration
    #[error("{context}: {message}")]
    Validation {
        context: &'static str,
        message: String,
    },

    /// Sample width other than 1 or 2 bytes
    #[error("Unsupported sample width: {width} bytes (expected 1 or 2)")]
    UnsupportedFormat {
        width: u16,
    },

    /// Failure from the audio container collaborator or the filesystem
    #[error("{context}: {message}")]
    Processing {
        context: &'static str,
        message: String,
    },
}

/// Result type for a5cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a Validation error
    pub fn validation(context: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a Processing error
    pub fn processing(context: &'static str, message: impl Into<String>) -> Self {
        Self::Processing {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Validation { message, .. } => Self::Validation { context, message },
            Self::Processing { message, .. } => Self::Processing { context, message },
            Self::UnsupportedFormat { width } => Self::UnsupportedFormat { width },
        }
    }

    /// Whether this error came from caller input validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
