//! # Spec Module
//!
//! Loading and normalization of JSON endpoint descriptions.
//!
//! One document describes one endpoint: its single top-level key is the
//! dotted qualified name, and the value carries the URL template variants,
//! the HTTP method, the allowed query parameters, and the body requirement.
//! Both historical document shapes are accepted (bare template strings or
//! `{path, methods, parts}` objects; `params` as an object or a list).

mod load;
mod types;

pub use load::*;
pub use types::*;
