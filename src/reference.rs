//! Local `$ref` pointers into the document's reusable sections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `{"$ref": "..."}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub reference: String,
}

/// Section a local reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceType {
    #[default]
    Definitions,
    Responses,
    Parameters,
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceType::Definitions => write!(f, "definitions"),
            ReferenceType::Responses => write!(f, "responses"),
            ReferenceType::Parameters => write!(f, "parameters"),
        }
    }
}

/// Builds `#/<section>/<Name>` pointers.
///
/// The first character of the name is upper-cased so that `pet` and `Pet`
/// point at the same model.
///
/// ```
/// use openapi_paths::reference::{ReferenceBuilder, ReferenceType};
///
/// let pointer = ReferenceBuilder::new().with_value("pet").build();
/// assert_eq!(pointer, "#/definitions/Pet");
///
/// let pointer = ReferenceBuilder::new()
///     .with_type(ReferenceType::Responses)
///     .with_value("notFound")
///     .build();
/// assert_eq!(pointer, "#/responses/NotFound");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferenceBuilder {
    reference_type: ReferenceType,
    value: String,
}

impl ReferenceBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn with_type(mut self, reference_type: ReferenceType) -> Self {
        self.reference_type = reference_type;
        self
    }

    #[must_use]
    pub fn build(&self) -> String {
        format!("#/{}/{}", self.reference_type, upper_first(&self.value))
    }

    /// Same pointer wrapped in a [`Reference`] object.
    #[must_use]
    pub fn build_object(&self) -> Reference {
        Reference {
            reference: self.build(),
        }
    }
}

fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_section() {
        let pointer = ReferenceBuilder::new()
            .with_type(ReferenceType::Parameters)
            .with_value("limit")
            .build();
        assert_eq!(pointer, "#/parameters/Limit");
    }

    #[test]
    fn test_reference_object_serializes_dollar_ref() {
        let obj = ReferenceBuilder::new().with_value("Pet").build_object();
        assert_eq!(
            serde_json::to_value(obj).unwrap(),
            serde_json::json!({"$ref": "#/definitions/Pet"})
        );
    }
}
