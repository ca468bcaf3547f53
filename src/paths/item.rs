use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::{PathFormatError, PathsError, ReferenceConflict};
use crate::method::HttpMethod;
use crate::operation::Operation;
use crate::parameters::{NormalizedParameters, Parameter, ParameterNormalizer, ParametersBuilder};

/// Rendered content of one path template.
///
/// Well-formed values are either a pure reference (`$ref` only) or a set of
/// method-keyed operations with optional shared parameters. The struct can
/// also hold malformed combinations, because that is what arrives from
/// outside through [`PathItemBuilder::merge`], which rejects them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathItemObject {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<NormalizedParameters>,
    #[serde(flatten)]
    pub operations: BTreeMap<HttpMethod, Operation>,
}

impl PathItemObject {
    /// Item that only points at an external definition.
    pub fn reference(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// No `$ref`, no parameters, no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    /// Number of populated top-level keys in the rendered object.
    #[must_use]
    pub fn field_count(&self) -> usize {
        usize::from(self.reference.is_some())
            + usize::from(self.parameters.is_some())
            + self.operations.len()
    }

    fn is_malformed(&self) -> bool {
        self.is_empty() || (self.is_reference() && self.field_count() > 1)
    }
}

/// Accumulates and validates the structural content of one path template.
///
/// An item starts empty and then either collects operations/parameters or
/// becomes a reference; the two modes never mix. A single builder is meant to
/// be reused across templates through [`reset`](Self::reset).
///
/// # Example
///
/// ```rust
/// use openapi_paths::method::HttpMethod;
/// use openapi_paths::operation::Operation;
/// use openapi_paths::paths::PathItemBuilder;
///
/// let mut builder = PathItemBuilder::new();
/// let item = builder
///     .with_operation(HttpMethod::Get, Operation::new())?
///     .with_operation(HttpMethod::Post, Operation::new())?
///     .build();
/// assert_eq!(item.operations.len(), 2);
///
/// // A reference cannot be added once operations exist.
/// assert!(builder.as_ref("other.yaml").is_err());
/// # Ok::<(), openapi_paths::paths::PathsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PathItemBuilder<N: ParameterNormalizer = ParametersBuilder> {
    item: PathItemObject,
    parameters: Vec<Parameter>,
    normalizer: N,
}

impl PathItemBuilder<ParametersBuilder> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_normalizer(ParametersBuilder::new())
    }
}

impl Default for PathItemBuilder<ParametersBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: ParameterNormalizer> PathItemBuilder<N> {
    pub fn with_normalizer(normalizer: N) -> Self {
        Self {
            item: PathItemObject::default(),
            parameters: Vec::new(),
            normalizer,
        }
    }

    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }

    fn has_concrete_content(&self) -> bool {
        !self.item.operations.is_empty()
            || self.item.parameters.is_some()
            || !self.parameters.is_empty()
    }

    /// Set the parameters shared by every operation on this path.
    ///
    /// An empty list changes nothing.
    pub fn with_parameters(&mut self, parameters: &[Parameter]) -> Result<&mut Self, PathsError> {
        if self.item.is_reference() {
            return Err(ReferenceConflict::ParametersOnReference.into());
        }
        if !parameters.is_empty() {
            self.parameters = parameters.to_vec();
        }
        Ok(self)
    }

    /// Insert `operation` under `method`.
    pub fn with_operation(
        &mut self,
        method: HttpMethod,
        operation: Operation,
    ) -> Result<&mut Self, PathsError> {
        if self.item.is_reference() {
            return Err(ReferenceConflict::OperationOnReference.into());
        }
        if self.item.operations.contains_key(&method) {
            return Err(PathsError::DuplicateMethod { method });
        }
        self.item.operations.insert(method, operation);
        Ok(self)
    }

    /// Fold an already rendered item into this one.
    ///
    /// Populated keys of `other` overwrite the same keys here, operations
    /// included. `other` must be non-empty and must not carry `$ref` next to
    /// anything else.
    pub fn merge(&mut self, other: PathItemObject) -> Result<&mut Self, PathsError> {
        if self.item.is_reference() {
            return Err(ReferenceConflict::MergeIntoReference.into());
        }
        if other.is_malformed() {
            return Err(PathsError::InvalidPathItemState);
        }
        if other.is_reference() && self.has_concrete_content() {
            return Err(ReferenceConflict::ReferenceOnConcreteItem.into());
        }

        let PathItemObject {
            reference,
            parameters,
            operations,
        } = other;
        if reference.is_some() {
            self.item.reference = reference;
        }
        if parameters.is_some() {
            self.item.parameters = parameters;
        }
        self.item.operations.extend(operations);
        Ok(self)
    }

    /// Turn this item into a pointer to an external path item definition.
    #[allow(clippy::should_implement_trait)]
    pub fn as_ref(&mut self, reference: &str) -> Result<&mut Self, PathsError> {
        if !self.item.is_reference() && self.has_concrete_content() {
            return Err(ReferenceConflict::ReferenceOnConcreteItem.into());
        }
        if reference.is_empty() {
            return Err(PathFormatError::EmptyReference.into());
        }
        self.item.reference = Some(reference.to_string());
        Ok(self)
    }

    /// Render the item. Shared parameters are normalized only when present.
    pub fn build(&mut self) -> PathItemObject {
        if !self.parameters.is_empty() {
            let normalized = self.normalizer.from_parameters(&self.parameters).build();
            self.item.parameters = Some(normalized);
        }
        self.item.clone()
    }

    /// Forget everything, including the normalizer's state.
    pub fn reset(&mut self) -> &mut Self {
        self.item = PathItemObject::default();
        self.parameters.clear();
        self.normalizer.reset();
        self
    }
}
