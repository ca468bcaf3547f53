//! # openapi-paths
//!
//! **openapi-paths** assembles the `paths` section of a Swagger 2.0 document
//! from explicit declarations, enforcing the structural rules of path items as
//! each declaration arrives.
//!
//! ## Overview
//!
//! Application bootstrap code declares resources and the operations on them,
//! in any order. Every declaration is validated synchronously: it either
//! commits completely or fails with a typed error and leaves earlier
//! declarations untouched. A final `build` renders what has accumulated.
//!
//! ## Architecture
//!
//! - **[`paths`]** - Path item assembly, the paths registry and the segment
//!   trie that rejects ambiguous templates
//! - **[`operation`]** - Assembly of a single operation from declarative arguments
//! - **[`parameters`]** - Parameter declarations and the list normalizer
//! - **[`registry`]** - [`ApiRegistry`], the explicit entry point tying paths,
//!   info and document together
//! - **[`manifest`]** - YAML/JSON/TOML manifests applied to a registry
//! - **[`document`]** / **[`info`]** - Top-level document and `info` section
//! - **[`format`]** - E-mail, URI and MIME type validators
//! - **[`definition`]** / **[`reference`]** / **[`method`]** - Constant tables,
//!   `$ref` strings and HTTP methods
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `openapi-paths` command line
//!
//! ### Declaration Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant App as Bootstrap code
//!     participant Reg as ApiRegistry
//!     participant Paths as PathsBuilder
//!     participant Trie as PathTrie
//!     participant Item as PathItemBuilder
//!
//!     App->>Reg: api(ApiArgs)
//!     Reg->>Paths: declare_path
//!     Paths->>Item: reset / with_parameters / as_ref / build
//!     Paths->>Trie: insert(path)
//!     App->>Reg: operation(id, OperationArgs)
//!     Reg->>Paths: declare_operation
//!     Paths->>Trie: check(effective path)
//!     Paths->>Item: reset / merge(existing) / with_operation / build
//!     Paths->>Trie: insert(effective path)
//!     App->>Reg: document()
//!     Reg->>Paths: build (empty items pruned)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use openapi_paths::method::HttpMethod;
//! use openapi_paths::operation::{OperationArgs, ResponseArgs};
//! use openapi_paths::paths::{ApiArgs, PathsError};
//! use openapi_paths::{ApiRegistry, RegistryError};
//!
//! let mut registry = ApiRegistry::new();
//! registry.info_mut().with_default_values("Pets", "1.0.0");
//!
//! registry
//!     .api(ApiArgs::new("/pets/extension"))?
//!     .operation("get_extension", OperationArgs::new(HttpMethod::Get))?;
//!
//! // `{id}` would shadow the concrete `extension` segment.
//! let err = registry
//!     .api(ApiArgs::new("/pets"))?
//!     .operation("get_pet", OperationArgs::new(HttpMethod::Get).with_path("/{id}"))
//!     .unwrap_err();
//! assert!(matches!(err, RegistryError::Paths(PathsError::AmbiguousPath { .. })));
//!
//! let document = registry.document()?;
//! assert_eq!(document.paths.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Ambiguity Detection
//!
//! The check is order-sensitive. A parameterized segment declared after a
//! concrete sibling is rejected; a concrete segment declared after a
//! parameterized sibling is accepted. See [`paths::PathTrie`].

pub mod cli;
pub mod definition;
pub mod document;
pub mod format;
pub mod info;
pub mod logging;
pub mod manifest;
pub mod method;
pub mod operation;
pub mod parameters;
pub mod paths;
pub mod reference;
pub mod registry;

pub use document::{DocumentBuilder, SwaggerDocument};
pub use method::HttpMethod;
pub use paths::{ApiArgs, OperationDeclaration, PathsBuilder, PathsError, PathsObject};
pub use registry::{ApiRegistry, RegistryError, ResourceScope};
