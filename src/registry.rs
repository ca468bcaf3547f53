//! Explicit API registry.
//!
//! Application bootstrap code constructs one [`ApiRegistry`], declares each
//! resource with [`ApiRegistry::api`], attaches operations through the
//! returned [`ResourceScope`], and finally renders the whole document.
//!
//! ```rust
//! use openapi_paths::method::HttpMethod;
//! use openapi_paths::operation::{OperationArgs, ResponseArgs};
//! use openapi_paths::paths::ApiArgs;
//! use openapi_paths::registry::ApiRegistry;
//!
//! let mut registry = ApiRegistry::new();
//! registry.info_mut().with_default_values("Pets", "1.0.0");
//! registry
//!     .api(ApiArgs::new("/pets"))?
//!     .operation(
//!         "list_pets",
//!         OperationArgs::new(HttpMethod::Get).with_response("200", ResponseArgs::default()),
//!     )?;
//!
//! let document = registry.document()?;
//! assert!(document.paths.contains_key("/pets"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::Context;
use std::fmt;

use crate::document::{DocumentBuilder, SwaggerDocument};
use crate::format::FormatError;
use crate::info::{InfoError, InfoObjectBuilder};
use crate::operation::{OperationArgs, OperationBuilder};
use crate::paths::{ApiArgs, OperationDeclaration, PathsBuilder, PathsError, PathsObject};

/// Any error a registration call can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    Paths(PathsError),
    Format(FormatError),
    Info(InfoError),
}

impl RegistryError {
    /// Stable snake_case tag, used as a structured log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryError::Paths(err) => err.kind(),
            RegistryError::Format(_) => "format",
            RegistryError::Info(_) => "info",
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Paths(err) => err.fmt(f),
            RegistryError::Format(err) => err.fmt(f),
            RegistryError::Info(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::Paths(err) => Some(err),
            RegistryError::Format(err) => Some(err),
            RegistryError::Info(err) => Some(err),
        }
    }
}

impl From<PathsError> for RegistryError {
    fn from(err: PathsError) -> Self {
        RegistryError::Paths(err)
    }
}

impl From<FormatError> for RegistryError {
    fn from(err: FormatError) -> Self {
        RegistryError::Format(err)
    }
}

impl From<InfoError> for RegistryError {
    fn from(err: InfoError) -> Self {
        RegistryError::Info(err)
    }
}

/// Owns everything declared for one API document.
#[derive(Debug, Default)]
pub struct ApiRegistry {
    paths: PathsBuilder,
    info: InfoObjectBuilder,
    document: DocumentBuilder,
}

impl ApiRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a resource and return a scope for its operations.
    pub fn api(&mut self, args: ApiArgs) -> Result<ResourceScope<'_>, RegistryError> {
        self.paths.declare_path(&args)?;
        Ok(ResourceScope {
            registry: self,
            resource: args.path,
        })
    }

    /// Register an already assembled operation.
    pub fn declare_operation(
        &mut self,
        declaration: OperationDeclaration,
    ) -> Result<&mut Self, RegistryError> {
        self.paths.declare_operation(declaration)?;
        Ok(self)
    }

    #[must_use]
    pub fn paths(&self) -> &PathsBuilder {
        &self.paths
    }

    pub fn info_mut(&mut self) -> &mut InfoObjectBuilder {
        &mut self.info
    }

    /// Document-level fields other than `info` and `paths`.
    pub fn document_mut(&mut self) -> &mut DocumentBuilder {
        &mut self.document
    }

    /// Render the `paths` section alone.
    #[must_use]
    pub fn build_paths(&self) -> PathsObject {
        self.paths.build()
    }

    /// Render the complete document.
    pub fn document(&self) -> anyhow::Result<SwaggerDocument> {
        let info = self.info.build().context("API info is incomplete")?;
        let mut builder = self.document.clone();
        builder.with_info(info).with_paths(self.paths.build());
        builder.build().context("Failed to assemble document")
    }

    /// Forget every declaration, for test isolation.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }
}

/// Handle returned by [`ApiRegistry::api`]; operations added through it
/// target the declared resource.
#[derive(Debug)]
pub struct ResourceScope<'a> {
    registry: &'a mut ApiRegistry,
    resource: String,
}

impl ResourceScope<'_> {
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Assemble and register one operation on this resource.
    pub fn operation(
        &mut self,
        operation_id: &str,
        args: OperationArgs,
    ) -> Result<&mut Self, RegistryError> {
        let declaration = OperationBuilder::for_resource(self.resource.as_str())
            .with_operation_id(operation_id)
            .with_arguments(args)
            .build()?;
        self.registry.declare_operation(declaration)?;
        Ok(self)
    }
}
