//! # accessgridlib
//!
//! Renders per-resource, per-verb access checks (for example the result of a
//! Kubernetes RBAC "can-i" sweep) as an aligned terminal table, grouped by API
//! group and sorted for stable output.
//!
//! ## Overview
//!
//! The library does not perform any access checks itself. A caller hands it a
//! completed [`AccessResult`] and the ordered list of verbs that were checked;
//! the library turns that into a [`Table`] and writes it to a stream.
//!
//! - **Outcomes**: every (resource, verb) pair is [`Outcome::Allowed`],
//!   [`Outcome::Denied`], [`Outcome::Error`] or [`Outcome::NoData`]
//! - **Grouping**: resources are sorted by (group, resource) and introduced by
//!   one header row per group, the core group showing as `core`
//! - **Formats**: human glyphs (`✔`, `✖`, `ERR`) colorized on terminals, or
//!   the ASCII-safe `ascii-table` format (`yes`, `no`, `n/a`, `ERR`)
//! - **Alignment**: columns are padded on visible width, so color escapes
//!   never skew the layout
//!
//! ## Example
//!
//! ```rust
//! use accessgridlib::{AccessResult, Outcome, OutputFormat, TerminalDetection};
//!
//! let result = AccessResult::new()
//!     .with("pods", "get", Outcome::Allowed)
//!     .with("pods", "list", Outcome::Denied)
//!     .with("deployments.apps", "get", Outcome::Error);
//!
//! let table = result.table(&["get", "list"]);
//! let terminal = TerminalDetection::assume(false);
//!
//! let mut out: Vec<u8> = Vec::new();
//! table.render(&mut out, OutputFormat::AsciiTable, &terminal).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(
//!     text,
//!     "core:        GET  LIST\n\
//!      pods         yes  no\n\
//!      \n\
//!      apps:        GET  LIST\n\
//!      deployments  ERR  n/a\n"
//! );
//! ```

pub mod error;
pub mod options;
pub mod outcome;
pub mod output;
pub mod render;
pub mod resource;
pub mod result;
pub mod terminal;

pub use error::AccessGridError;
pub use options::{OutputFormat, RenderOptions};
pub use outcome::Outcome;
pub use output::{visible_width, AlignedWriter, Row, Table};
pub use render::{Cell, Env, Render};
pub use resource::{ResourceIdentity, CORE_GROUP_LABEL};
pub use result::{AccessResult, VerbOutcomes, STANDARD_VERBS};
pub use terminal::TerminalDetection;

/// Result type for accessgridlib operations
pub type Result<T> = std::result::Result<T, AccessGridError>;
