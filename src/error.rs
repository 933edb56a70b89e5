//! Error types for the meetnote library
//!
//! Parsing and rendering are total: malformed text degrades to empty or
//! partial output instead of failing. Errors only surface where callers hand
//! us configuration or ask us to convert a string into one of our enums.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum ConfigError {
    /// A keyword rule for a meeting-info field has no keywords
    #[error("Keyword set for field '{field}' is empty")]
    EmptyKeywords { field: String },

    /// Nested list indentation threshold must be positive
    #[error("Nested list indentation threshold must be greater than zero")]
    InvalidIndent,

    /// A transcript marker list is empty
    #[error("Marker list is empty: {0}")]
    EmptyMarkers(String),
}

impl ConfigError {
    /// Create an empty keyword set error
    pub fn empty_keywords(field: impl Into<String>) -> Self {
        Self::EmptyKeywords {
            field: field.into(),
        }
    }

    /// Create an empty marker list error
    pub fn empty_markers(which: impl Into<String>) -> Self {
        Self::EmptyMarkers(which.into())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors converting strings into library enums
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum ParseError {
    /// Not one of `sentiment` or `standard`
    #[error("Unknown transcript kind: {0}")]
    UnknownTranscriptKind(String),

    /// Not one of `positive`, `neutral`, `negative` or their tag forms
    #[error("Unknown sentiment: {0}")]
    UnknownSentiment(String),
}

impl ParseError {
    /// Create an unknown transcript kind error
    pub fn unknown_transcript_kind(kind: impl Into<String>) -> Self {
        Self::UnknownTranscriptKind(kind.into())
    }

    /// Create an unknown sentiment error
    pub fn unknown_sentiment(label: impl Into<String>) -> Self {
        Self::UnknownSentiment(label.into())
    }
}

/// Result type for string conversions
pub type ParseResult<T> = Result<T, ParseError>;

/// Main unified error type that can represent any meetnote error
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum MeetnoteError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Conversion error
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type for meetnote operations
pub type MeetnoteResult<T> = Result<T, MeetnoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_keywords_names_field() {
        let err = ConfigError::empty_keywords("date");
        assert!(err.to_string().contains("'date'"));
    }

    #[test]
    fn test_invalid_indent_message() {
        let err = ConfigError::InvalidIndent;
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_unknown_transcript_kind() {
        let err = ParseError::unknown_transcript_kind("fancy");
        assert!(err.to_string().contains("fancy"));
    }

    #[test]
    fn test_error_from_config_error_is_transparent() {
        let err: MeetnoteError = ConfigError::empty_markers("positive").into();
        assert_eq!(err.to_string(), "Marker list is empty: positive");
    }

    #[test]
    fn test_error_from_parse_error() {
        let err: MeetnoteError = ParseError::unknown_sentiment("meh").into();
        assert!(matches!(err, MeetnoteError::Parse(_)));
        assert!(err.to_string().contains("meh"));
    }
}
