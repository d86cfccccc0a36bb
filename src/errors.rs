//! Trellis error types.
//!
//! Syntactic failure is never an error value: it is a [`crate::ParseResult`]
//! with an error position. The types here cover the two cases that are
//! reported out of band: invalid parser configuration, caught once at
//! construction time, and the combined feedback of a failed parse when a
//! caller asks for it.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Invalid parser construction.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("the radix has to be between 2 and 36, but is: {0}")]
    #[diagnostic(code(trellis::config::radix))]
    InvalidRadix(u32),

    #[error("expected a literal as config, got empty string")]
    #[diagnostic(code(trellis::config::literal))]
    EmptyLiteral,

    #[error("expected {what} as config, got empty string")]
    #[diagnostic(code(trellis::config::delimiter))]
    EmptyDelimiter { what: &'static str },

    #[error("expected a regular expression as config, got empty string")]
    #[diagnostic(code(trellis::config::regexp))]
    EmptyRegexp,

    #[error("invalid regular expression `{pattern}`")]
    #[diagnostic(code(trellis::config::regexp))]
    InvalidRegexp {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("forward parser is already bound")]
    #[diagnostic(code(trellis::config::forward))]
    ForwardAlreadyBound,
}

/// All error feedback of a failed parse, joined into one diagnostic.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(trellis::parse))]
pub struct FeedbackError {
    pub message: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("parsing failed here")]
    pub span: Option<SourceSpan>,
}

/// Failure of the bundled settings grammar.
#[derive(Debug, Error, Diagnostic)]
pub enum SettingsError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] FeedbackError),
}

#[cfg(test)]
mod tests {
    use miette::Report;

    use super::*;

    #[test]
    fn test_feedback_error_renders_label() {
        let err = FeedbackError {
            message: "ERROR: literal 'x' expected.".to_string(),
            source_code: NamedSource::new("input", "abc".to_string()),
            span: Some(SourceSpan::from((1, 1))),
        };
        let output = format!("{:?}", Report::new(err));
        assert!(output.contains("literal 'x' expected"));
        assert!(output.contains("parsing failed here"));
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::InvalidRadix(37).to_string(),
            "the radix has to be between 2 and 36, but is: 37"
        );
        assert_eq!(
            ConfigError::EmptyDelimiter {
                what: "start of line comment"
            }
            .to_string(),
            "expected start of line comment as config, got empty string"
        );
    }
}
