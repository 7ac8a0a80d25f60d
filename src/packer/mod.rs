//! Line and batch packing.
//!
//! Wires the [`parser`](crate::parser), the [`selector`](crate::selector)
//! and the result formatter together, and reads batches from files or any
//! [`std::io::Read`] source.

mod config;
mod format;
mod runner;

pub use config::{PackerConfig, DEFAULT_CURRENCY};
pub use format::{format_positions, EMPTY_SELECTION};
pub use runner::{pack, pack_lines, pack_reader, pack_with, select_indices, select_indices_with};
