//! Line grammar parser.
//!
//! Turns one `<capacity> : (<pos>,<weight>,€<price>) ...` line into a
//! capacity and the sequence of items that pass the caller's limits.
//! Limits are injected through the [`LimitCheck`] trait; the parser owns
//! no thresholds.

mod scanner;
mod types;

pub use scanner::{parse_line, scan_line};
pub use types::{FnLimits, LimitCheck, LineEvent, NoLimits, ParsedLine};
