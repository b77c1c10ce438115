//! Platform error types.

/// Errors that can occur while building platform descriptors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// A platform specifier string could not be parsed.
    #[error("invalid platform specifier '{input}': {reason}")]
    InvalidSpecifier {
        /// The text that was being parsed.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl PlatformError {
    pub(crate) fn invalid_specifier(input: &str, reason: impl Into<String>) -> Self {
        PlatformError::InvalidSpecifier {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for platform operations.
pub type Result<T> = std::result::Result<T, PlatformError>;
