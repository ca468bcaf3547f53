//! # CLI Module
//!
//! Command-line front end over [`crate::manifest`] and [`crate::registry`].
//!
//! ## Commands
//!
//! ### `build`
//!
//! Render the document described by a manifest:
//!
//! ```bash
//! openapi-paths build --manifest api.yaml --format yaml --output swagger.yaml
//! ```
//!
//! Options:
//! - `--manifest <FILE>` - Manifest to apply (required)
//! - `--format <json|yaml>` - Output serialization (default: json)
//! - `--output <FILE>` - Write here instead of stdout
//!
//! ### `check`
//!
//! Apply a manifest without rendering. Exits non-zero with the message of the
//! first rejected declaration:
//!
//! ```bash
//! openapi-paths check --manifest api.toml
//! ```
//!
//! Logging is configured through `OAPI_PATHS_LOG_LEVEL` and
//! `OAPI_PATHS_LOG_FORMAT`; `--verbose` forces debug level.

mod commands;


pub use commands::{render, run, run_cli, Cli, Commands, OutputFormat};
