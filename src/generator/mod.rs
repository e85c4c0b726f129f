//! # Generator Module
//!
//! Turns loaded endpoint specs into generated artifacts.
//!
//! ## Architecture
//!
//! Generation is split into a pure model step, a pure rendering step, and an
//! I/O step, so "what gets generated" stays decoupled from "how it's written
//! to disk":
//!
//! ```text
//! EndpointSpec → GenerationModel → Askama templates → OutputArtifact → disk
//!    (model.rs)                      (templates.rs)                (emit.rs)
//! ```
//!
//! - **[`model`]** - namespace split, path resolution, required-argument
//!   analysis, conflict checks, parameter registration
//! - **[`templates`]** - Askama templates rendering one client-binding
//!   source file and one test stub per endpoint
//! - **[`emit`]** - idempotent directory creation and the `force` overwrite
//!   policy
//! - **[`batch`]** - the driver that enumerates spec files, fans out over
//!   endpoints, and aggregates per-endpoint outcomes
//!
//! ## Generated Structure
//!
//! ```text
//! out/
//! ├── api/<namespace>/<method>.rs          # client binding
//! └── test/
//!     ├── test_helper.rs                   # shared helper, copied once
//!     └── api/<namespace>/<method>_test.rs # test stub
//! ```

mod batch;
mod emit;
mod model;
mod templates;

pub use batch::*;
pub use emit::*;
pub use model::*;
pub use templates::*;
