//! Result line rendering.

use crate::item::Item;

/// Output for a package with nothing selected.
pub const EMPTY_SELECTION: &str = "-";

/// Joins the positions of `items` with commas, in the given order, or
/// returns [`EMPTY_SELECTION`] when there are none.
pub fn format_positions(items: &[Item]) -> String {
    if items.is_empty() {
        return EMPTY_SELECTION.to_string();
    }
    items
        .iter()
        .map(|item| item.position.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
