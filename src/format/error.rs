use std::fmt;

use super::Pattern;

/// Errors raised by the format validators and the MIME type table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A required value was empty
    Empty {
        /// Name of the offending field
        field: String,
    },
    /// A value does not match the expected pattern
    InvalidPattern {
        /// Name of the offending field
        field: String,
        /// Pattern the value was checked against
        pattern: Pattern,
    },
    /// Not a well-known MIME type and not a vendor type
    UnsupportedMimeType {
        /// The rejected value
        value: String,
    },
    /// `*/*` was used where a concrete MIME type is required
    WildcardMimeType,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Empty { field } => write!(f, "Cannot be empty: {field}"),
            FormatError::InvalidPattern { field, pattern } => {
                write!(f, "{field} has to be valid {pattern}")
            }
            FormatError::UnsupportedMimeType { value } => {
                write!(f, "Unsupported MimeType \"{value}\"")
            }
            FormatError::WildcardMimeType => {
                write!(f, "Unsupported MimeType */*. Use specific MimeType instead")
            }
        }
    }
}

impl std::error::Error for FormatError {}
