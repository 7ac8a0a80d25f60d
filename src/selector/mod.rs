//! Price-maximal, weight-minimal subset selection.
//!
//! Given the items retained by the parser and the package capacity, the
//! selector picks the subset with the highest total price that fits,
//! breaking price ties by lower total weight.

mod runner;
mod types;

pub use runner::SelectionRunner;
pub use types::Selection;
