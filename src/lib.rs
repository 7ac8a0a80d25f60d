//! Line-oriented package packer.
//!
//! Each input line describes one package: a weight capacity followed by
//! candidate items, e.g.
//!
//! ```text
//! 81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76)
//! ```
//!
//! For every line the packer chooses the items with the highest total
//! price that fit under the capacity, preferring the lighter subset on a
//! price tie, and prints their positions (`4`), or `-` when nothing fits.
//!
//! - **Parser**: scans a line into a capacity and the items that pass the
//!   caller's [`LimitCheck`](parser::LimitCheck).
//! - **Selector**: depth-indexed backtracking search over the retained
//!   items.
//! - **Packer**: per-line and batch entry points, configuration, and the
//!   result formatter.
//!
//! # Examples
//!
//! ```
//! use knapsack_packer::packer::{pack_lines, PackerConfig};
//!
//! let input = "8 : (1,15.3,€34)\n75 : (1,85.31,€29) (2,14.55,€74) (7,60.02,€74)";
//! let out = pack_lines(input, &PackerConfig::default()).unwrap();
//! assert_eq!(out, "-\n2,7");
//! ```

pub mod error;
pub mod item;
pub mod packer;
pub mod parser;
pub mod selector;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{PackError, Result};
pub use item::Item;
