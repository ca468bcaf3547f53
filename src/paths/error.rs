use std::fmt;

use crate::method::HttpMethod;

/// Errors raised while declaring paths and operations.
///
/// All of these are declaration-time contract violations: the call that
/// returned the error changed nothing, and every earlier successful
/// declaration stays committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathsError {
    /// A path, sub-path or reference is malformed.
    PathFormat(PathFormatError),
    /// The same path template was declared twice.
    DuplicatePath {
        /// The repeated template
        path: String,
    },
    /// The same method was declared twice for one effective path.
    DuplicateMethod {
        /// The repeated method
        method: HttpMethod,
    },
    /// Reference mode and concrete mode were mixed on one path item.
    ReferenceConflict(ReferenceConflict),
    /// A path item handed to `merge` is empty or carries `$ref` next to other fields.
    InvalidPathItemState,
    /// A parameterized segment would shadow an already registered concrete sibling.
    AmbiguousPath {
        /// Registered template whose concrete segment collides
        resource: String,
        /// Candidate template carrying the parameterized segment
        sub_resource: String,
    },
}

/// Malformed path or reference values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFormatError {
    /// Path or sub-path does not start with `/`.
    MissingLeadingSlash {
        /// The value as supplied
        actual: String,
    },
    /// `$ref` was supplied but empty.
    EmptyReference,
}

/// The ways reference mode and concrete mode can collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceConflict {
    /// `with_parameters` on an item already marked as a reference.
    ParametersOnReference,
    /// `with_operation` on an item already marked as a reference.
    OperationOnReference,
    /// `merge` into an item already marked as a reference.
    MergeIntoReference,
    /// `as_ref` on an item that already has operations or parameters.
    ReferenceOnConcreteItem,
    /// A path declared with both `$ref` and `parameters`.
    ParametersWithReference {
        path: String,
    },
    /// An operation declared for a path stored as a reference.
    OperationForReferencedPath {
        path: String,
    },
}

impl PathsError {
    /// Stable snake_case tag, used as a structured log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PathsError::PathFormat(_) => "path_format",
            PathsError::DuplicatePath { .. } => "duplicate_path",
            PathsError::DuplicateMethod { .. } => "duplicate_method",
            PathsError::ReferenceConflict(_) => "reference_conflict",
            PathsError::InvalidPathItemState => "invalid_path_item_state",
            PathsError::AmbiguousPath { .. } => "ambiguous_path",
        }
    }

    pub(crate) fn missing_slash(actual: &str) -> Self {
        PathsError::PathFormat(PathFormatError::MissingLeadingSlash {
            actual: actual.to_string(),
        })
    }
}

impl fmt::Display for PathFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathFormatError::MissingLeadingSlash { actual } => write!(
                f,
                "Path has to start with \"/\" symbol. Actual = \"{actual}\". Should be \"/{actual}\""
            ),
            PathFormatError::EmptyReference => write!(f, "$ref value cannot be empty."),
        }
    }
}

impl fmt::Display for ReferenceConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceConflict::ParametersOnReference => write!(
                f,
                "Unable to define parameters. Unsupported modification of path item object defined as $ref"
            ),
            ReferenceConflict::OperationOnReference => write!(
                f,
                "Unable to add operation. Unsupported modification of path item object defined as $ref"
            ),
            ReferenceConflict::MergeIntoReference => {
                write!(f, "Unsupported modification of path item object defined as $ref.")
            }
            ReferenceConflict::ReferenceOnConcreteItem => write!(
                f,
                "Unable to set as reference while operations or parameters are set."
            ),
            ReferenceConflict::ParametersWithReference { path } => write!(
                f,
                "Unable to set parameters for path item object when defined as $ref for path = \"{path}\""
            ),
            ReferenceConflict::OperationForReferencedPath { path } => write!(
                f,
                "Unable to add operation when resource \"{path}\" defined as $ref"
            ),
        }
    }
}

impl fmt::Display for PathsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathsError::PathFormat(inner) => inner.fmt(f),
            PathsError::DuplicatePath { path } => write!(f, "Duplicate mapping key \"{path}\""),
            PathsError::DuplicateMethod { method } => {
                write!(f, "Method \"{method}\" already defined")
            }
            PathsError::ReferenceConflict(inner) => inner.fmt(f),
            PathsError::InvalidPathItemState => write!(f, "Illegal state of path item object."),
            PathsError::AmbiguousPath {
                resource,
                sub_resource,
            } => write!(
                f,
                "Possible duplicate with resource = \"{resource}\" sub-resource = \"{sub_resource}\""
            ),
        }
    }
}

impl std::error::Error for PathsError {}

impl From<PathFormatError> for PathsError {
    fn from(err: PathFormatError) -> Self {
        PathsError::PathFormat(err)
    }
}

impl From<ReferenceConflict> for PathsError {
    fn from(err: ReferenceConflict) -> Self {
        PathsError::ReferenceConflict(err)
    }
}
