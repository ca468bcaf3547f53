//! # Format Validators
//!
//! String-pattern checks applied to descriptive fields before they are
//! accepted into the document: contact e-mails, URLs, and MIME types listed
//! in `produces`/`consumes`.
//!
//! ## Usage
//!
//! ```rust
//! use openapi_paths::format::{validate_pattern, Pattern};
//!
//! assert!(validate_pattern("team@example.com", "email", Pattern::Email).is_ok());
//! assert!(validate_pattern("localhost", "url", Pattern::Uri).is_err());
//! ```

mod error;
mod mime;

pub use error::FormatError;
pub use mime::{is_vendor_type, to_mime_type, value_of, MediaType, MimeType};

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should be valid")
});

/// `<registered top-level type>/<subtype>`; parameters after `;` are stripped before matching.
static MIME_TYPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(application|audio|example|font|image|message|model|multipart|text|video)/[A-Za-z0-9!#$&^_.+-]+$",
    )
    .expect("MIME type regex should be valid")
});

/// Supported string patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Email,
    /// Absolute URI with a scheme
    Uri,
    MimeType,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Email => write!(f, "EMAIL"),
            Pattern::Uri => write!(f, "URI"),
            Pattern::MimeType => write!(f, "MIME_TYPE"),
        }
    }
}

impl Pattern {
    /// Whether `value` matches this pattern.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Pattern::Email => EMAIL_REGEX.is_match(value),
            Pattern::Uri => url::Url::parse(value).is_ok(),
            Pattern::MimeType => MIME_TYPE_REGEX.is_match(value),
        }
    }
}

/// Check `value` against `pattern`, naming `field` in the error.
pub fn validate_pattern(value: &str, field: &str, pattern: Pattern) -> Result<(), FormatError> {
    if value.is_empty() {
        return Err(FormatError::Empty {
            field: field.to_string(),
        });
    }
    if pattern.matches(value) {
        Ok(())
    } else {
        Err(FormatError::InvalidPattern {
            field: field.to_string(),
            pattern,
        })
    }
}

/// Like [`validate_pattern`], but an absent value passes.
pub fn validate_optional(
    value: Option<&str>,
    field: &str,
    pattern: Pattern,
) -> Result<(), FormatError> {
    match value {
        Some(v) => validate_pattern(v, field, pattern),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(Pattern::Email.matches("test@test.eu"));
        assert!(!Pattern::Email.matches("bademail"));
    }

    #[test]
    fn test_uri_requires_scheme() {
        assert!(Pattern::Uri.matches("http://test.eu"));
        assert!(Pattern::Uri.matches("https://example.com/terms?lang=en"));
        assert!(!Pattern::Uri.matches("localhost"));
    }

    #[test]
    fn test_error_names_field_and_pattern() {
        let err = validate_pattern("bademail", "email", Pattern::Email).unwrap_err();
        assert_eq!(err.to_string(), "email has to be valid EMAIL");

        let err = validate_pattern("localhost", "url", Pattern::Uri).unwrap_err();
        assert_eq!(err.to_string(), "url has to be valid URI");
    }

    #[test]
    fn test_empty_value_rejected() {
        let err = validate_pattern("", "url", Pattern::Uri).unwrap_err();
        assert!(matches!(err, FormatError::Empty { .. }));
    }

    #[test]
    fn test_optional_absent_passes() {
        assert!(validate_optional(None, "url", Pattern::Uri).is_ok());
    }
}
