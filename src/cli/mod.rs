//! # CLI Module
//!
//! Command-line interface for the restgen binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate source code and tests from the JSON API specification:
//!
//! ```bash
//! restgen generate --input rest-api-spec --output out
//! ```
//!
//! Options:
//! - `--input <DIR>` - Directory with JSON API specs (default: `rest-api-spec`)
//! - `--output <DIR>` - Destination root for generated files (default: `out`)
//! - `--force` - Overwrite existing artifacts instead of skipping them
//! - `--verbose` - Print per-file progress
//!
//! The exit code is 0 iff every endpoint in the batch succeeded; otherwise
//! the aggregate failure list is printed and the exit code is non-zero.

mod commands;


pub use commands::{run_cli, Cli, Commands};
