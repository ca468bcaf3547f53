//! # Paths
//!
//! Assembly of the `paths` section of a Swagger 2.0 document.
//!
//! - [`PathItemBuilder`] accumulates the content of a single path template
//!   and keeps reference items apart from concrete ones.
//! - [`PathsBuilder`] owns the template map. It validates templates, merges
//!   operations that target the same template, and rejects templates whose
//!   parameterized segments would shadow registered concrete ones.
//! - [`PathTrie`] is the segment index behind that last check.
//!
//! ## Usage
//!
//! ```rust
//! use openapi_paths::method::HttpMethod;
//! use openapi_paths::operation::Operation;
//! use openapi_paths::paths::{ApiArgs, OperationDeclaration, PathsBuilder};
//!
//! let mut paths = PathsBuilder::new();
//! paths.declare_path(&ApiArgs::new("/users"))?;
//! paths.declare_operation(OperationDeclaration::new("/users", HttpMethod::Get, Operation::new()))?;
//! paths.declare_operation(
//!     OperationDeclaration::new("/users", HttpMethod::Get, Operation::new()).with_path("/{id}"),
//! )?;
//!
//! let rendered = paths.build();
//! assert_eq!(rendered.keys().collect::<Vec<_>>(), ["/users", "/users/{id}"]);
//! # Ok::<(), openapi_paths::paths::PathsError>(())
//! ```

mod error;
mod item;
mod registry;
mod trie;


pub use error::{PathFormatError, PathsError, ReferenceConflict};
pub use item::{PathItemBuilder, PathItemObject};
pub use registry::{ApiArgs, OperationDeclaration, PathsBuilder, PathsObject};
pub use trie::{is_wildcard, PathTrie};
