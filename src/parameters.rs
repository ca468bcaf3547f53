//! Parameter declarations and the parameter list normalizer.
//!
//! A path item (or an operation) carries an ordered list of parameter
//! declarations. Before rendering, the list goes through a
//! [`ParameterNormalizer`], which produces either the array shape used inside
//! path items and operations, or the name-keyed shape used by the document's
//! global `parameters` section.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
    FormData,
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterLocation::Path => write!(f, "path"),
            ParameterLocation::Query => write!(f, "query"),
            ParameterLocation::Header => write!(f, "header"),
            ParameterLocation::Body => write!(f, "body"),
            ParameterLocation::FormData => write!(f, "formData"),
        }
    }
}

/// A single parameter declaration.
///
/// A parameter is identified by the pair `(name, in)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_empty_value: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl Parameter {
    /// Minimal declaration: name and location, everything else unset.
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: name.into(),
            location,
            description: None,
            required: None,
            param_type: None,
            format: None,
            deprecated: None,
            allow_empty_value: None,
            schema: None,
        }
    }

    fn identity(&self) -> (&str, ParameterLocation) {
        (self.name.as_str(), self.location)
    }
}

/// Rendered shape of a normalized parameter list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NormalizedParameters {
    /// Ordered list, used by path items and operations.
    Array(Vec<Parameter>),
    /// Name-keyed map, used by the document-level `parameters` section.
    Definition(IndexMap<String, Parameter>),
}

impl NormalizedParameters {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            NormalizedParameters::Array(list) => list.is_empty(),
            NormalizedParameters::Definition(map) => map.is_empty(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            NormalizedParameters::Array(list) => list.len(),
            NormalizedParameters::Definition(map) => map.len(),
        }
    }
}

/// Seam between the path item assembler and whatever normalizes its
/// parameter list.
pub trait ParameterNormalizer {
    /// Load a raw parameter list, replacing anything loaded before.
    fn from_parameters(&mut self, parameters: &[Parameter]) -> &mut Self;
    /// Render the loaded list.
    fn build(&mut self) -> NormalizedParameters;
    /// Drop all state so the normalizer can be reused.
    fn reset(&mut self) -> &mut Self;
}

/// Output shape selected on a [`ParametersBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParametersType {
    #[default]
    Array,
    Definition,
}

/// Default [`ParameterNormalizer`].
///
/// Keeps parameters in first-seen order and collapses repeated `(name, in)`
/// pairs: a later declaration replaces the earlier one in place.
#[derive(Debug, Clone, Default)]
pub struct ParametersBuilder {
    build_type: ParametersType,
    parameters: Vec<Parameter>,
}

impl ParametersBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render as a name-keyed map instead of a list.
    pub fn as_definition(&mut self) -> &mut Self {
        self.build_type = ParametersType::Definition;
        self
    }

    /// Append a single declaration.
    pub fn with_parameter(&mut self, parameter: Parameter) -> &mut Self {
        match self
            .parameters
            .iter_mut()
            .find(|p| p.identity() == parameter.identity())
        {
            Some(existing) => *existing = parameter,
            None => self.parameters.push(parameter),
        }
        self
    }

    #[must_use]
    pub fn build_type(&self) -> ParametersType {
        self.build_type
    }
}

impl ParameterNormalizer for ParametersBuilder {
    fn from_parameters(&mut self, parameters: &[Parameter]) -> &mut Self {
        self.parameters.clear();
        for parameter in parameters {
            self.with_parameter(parameter.clone());
        }
        self
    }

    fn build(&mut self) -> NormalizedParameters {
        match self.build_type {
            ParametersType::Array => NormalizedParameters::Array(self.parameters.clone()),
            ParametersType::Definition => NormalizedParameters::Definition(
                self.parameters
                    .iter()
                    .map(|p| (p.name.clone(), p.clone()))
                    .collect(),
            ),
        }
    }

    fn reset(&mut self) -> &mut Self {
        self.build_type = ParametersType::Array;
        self.parameters.clear();
        self
    }
}
