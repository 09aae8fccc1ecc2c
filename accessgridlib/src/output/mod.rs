//! Output: present access results as aligned tables.
//!
//! This module handles the last stage of the pipeline:
//!
//! - **Table**: ordered rows (group headers, spacers, data rows) built from
//!   an access result
//! - **AlignedWriter**: buffers rendered cells and pads every column to a
//!   common visible width before writing
//!
//! The table only holds typed cells and outcomes. Turning them into text
//! happens at render time, against an [`Env`](crate::render::Env).

pub mod align;
pub mod table;

pub use align::{visible_width, AlignedWriter};
pub use table::{Row, Table};
