use crate::models::{CheckRule, Symbology};

/// The single user-visible validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackingValidationError {
    /// No symbology accepted the code; `value` is the input as given
    #[error("The Tracking Code \"{value}\" is not valid")]
    InvalidTrackingNumber {
        /// Input exactly as the caller supplied it
        value: String,
    },
}

impl TrackingValidationError {
    /// The original, un-normalized input
    pub fn value(&self) -> &str {
        match self {
            TrackingValidationError::InvalidTrackingNumber { value } => value,
        }
    }
}

/// Why one symbology did not accept a code
///
/// Only surfaces through diagnostics; `validate` collapses every rejection
/// into [`TrackingValidationError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The code's structure does not fit the symbology
    #[error("shape does not match")]
    ShapeMismatch,

    /// Shape fits but no accepted rule reproduces the check digit
    #[error("declared check digit {declared} does not match computed {computed:?}")]
    ChecksumMismatch {
        /// Check digit written in the code
        declared: u32,
        /// Check digit each tried rule produced
        computed: Vec<(CheckRule, u32)>,
    },
}

/// Errors building a full code from a partial one
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    /// Wrong number of characters after whitespace removal
    #[error("{symbology} partial code must be {expected} characters, got {actual}")]
    InvalidLength {
        /// Target symbology
        symbology: Symbology,
        /// Accepted length(s)
        expected: String,
        /// Length received
        actual: usize,
    },

    /// A character outside the allowed class for its position
    #[error("{symbology} partial code has invalid character {found:?} at position {position}")]
    InvalidCharacter {
        /// Target symbology
        symbology: Symbology,
        /// Zero-based character index
        position: usize,
        /// Offending character
        found: char,
    },
}

/// Errors from the command-line helpers
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Code list could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Summary could not be serialized
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
