//! Top-level Swagger 2.0 document assembly.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::definition::Scheme;
use crate::format::{value_of, FormatError, MediaType};
use crate::info::{Info, InfoError};
use crate::paths::{PathsError, PathsObject};

pub const SWAGGER_VERSION: &str = "2.0";

/// Rendered document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerDocument {
    pub swagger: &'static str,
    pub info: Info,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<Scheme>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub produces: Vec<MediaType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub consumes: Vec<MediaType>,
    pub paths: PathsObject,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, Value>,
}

fn media_types<I, S>(values: I) -> Result<Vec<MediaType>, FormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values.into_iter().map(|v| value_of(v.as_ref())).collect()
}

/// Collects the document-level fields around an assembled `paths` section.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    info: Option<Info>,
    base_path: Option<String>,
    schemes: Vec<Scheme>,
    produces: Vec<MediaType>,
    consumes: Vec<MediaType>,
    paths: PathsObject,
    definitions: IndexMap<String, Value>,
}

impl DocumentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_info(&mut self, info: Info) -> &mut Self {
        self.info = Some(info);
        self
    }

    /// Prefix shared by every path. Must start with `/`.
    pub fn with_base_path(&mut self, base_path: &str) -> Result<&mut Self, PathsError> {
        if !base_path.starts_with('/') {
            return Err(PathsError::missing_slash(base_path));
        }
        self.base_path = Some(base_path.to_string());
        Ok(self)
    }

    pub fn with_schemes(&mut self, schemes: impl IntoIterator<Item = Scheme>) -> &mut Self {
        self.schemes = schemes.into_iter().collect();
        self
    }

    pub fn with_produces<I, S>(&mut self, values: I) -> Result<&mut Self, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.produces = media_types(values)?;
        Ok(self)
    }

    pub fn with_consumes<I, S>(&mut self, values: I) -> Result<&mut Self, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.consumes = media_types(values)?;
        Ok(self)
    }

    pub fn with_paths(&mut self, paths: PathsObject) -> &mut Self {
        self.paths = paths;
        self
    }

    /// Add a named schema under `definitions`, replacing one with the same name.
    pub fn with_definition(&mut self, name: impl Into<String>, schema: Value) -> &mut Self {
        self.definitions.insert(name.into(), schema);
        self
    }

    pub fn build(&self) -> Result<SwaggerDocument, InfoError> {
        let info = self.info.clone().ok_or(InfoError::MissingDefaults)?;
        Ok(SwaggerDocument {
            swagger: SWAGGER_VERSION,
            info,
            base_path: self.base_path.clone(),
            schemes: self.schemes.clone(),
            produces: self.produces.clone(),
            consumes: self.consumes.clone(),
            paths: self.paths.clone(),
            definitions: self.definitions.clone(),
        })
    }
}
