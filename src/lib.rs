//! # restgen
//!
//! **restgen** is a specification-driven source and test generator: it reads
//! a directory of machine-readable JSON descriptions of HTTP API endpoints
//! (method, URL templates, path placeholders, query parameters, body
//! requirement) and deterministically emits one client-binding source file
//! and one test stub per endpoint, reproducing the endpoint's dotted
//! namespace as a directory hierarchy.
//!
//! ## Architecture
//!
//! Data flows strictly forward through small single-purpose modules:
//!
//! - **[`spec`]** - loading and normalization of JSON endpoint documents
//! - **[`namespace`]** - dotted qualified name → module path + method name
//! - **[`paths`]** - URL template resolution: literal vs placeholder
//!   segments, placeholder occurrence sets, canonical template selection
//! - **[`required`]** - required-argument analysis (intersection across
//!   path alternatives, plus `body` when mandatory)
//! - **[`registry`]** - the per-run parameter registry, keyed by fully
//!   qualified name, write-once per key
//! - **[`generator`]** - model construction, Askama template rendering, and
//!   artifact emission, plus the batch driver
//! - **[`cli`]** - the `restgen generate` command
//!
//! The generated code calls a pre-existing transport layer
//! (`perform_request(method, path, params, body)` and its argument helpers);
//! transport internals are outside this crate.
//!
//! ## Usage
//!
//! ```bash
//! restgen generate --input rest-api-spec --output out --force --verbose
//! ```
//!
//! ```rust,ignore
//! use restgen::generator::{generate_all, GenerateOptions};
//!
//! let report = generate_all(&GenerateOptions {
//!     input: "rest-api-spec".into(),
//!     output: "out".into(),
//!     force: true,
//!     verbose: false,
//! })?;
//! assert!(report.all_succeeded());
//! ```

pub mod cli;
pub mod error;
pub mod generator;
pub mod namespace;
pub mod paths;
pub mod registry;
pub mod required;
pub mod spec;

pub use error::GenError;
pub use spec::{load_spec, parse_spec, EndpointSpec, HttpMethod};
