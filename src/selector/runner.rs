//! Depth-indexed backtracking search.
//!
//! # Algorithm
//!
//! 1. At depth `d`, starting from candidate index `next`, walk every item
//!    `i >= next` that still fits under the capacity.
//! 2. A candidate improves the level when its running price is strictly
//!    higher than the best seen at this level, or equal with a strictly
//!    lower running weight. The best starts at the sums inherited from the
//!    parent.
//! 3. On improvement, write the item into buffer slot `d` (push or
//!    overwrite) and recurse from `i + 1` at depth `d + 1`.
//! 4. Each level reports the deepest slot populated by its most recent
//!    improvement, or `None` when nothing improved.
//! 5. Slots past that depth are leftovers of a displaced branch and are
//!    truncated after the search.
//!
//! Non-improving extensions are pruned, so this is not an exhaustive
//! enumeration of all subsets.

use rust_decimal::Decimal;
use tracing::debug;

use super::types::Selection;
use crate::item::Item;

/// Runs the selection search for one package.
pub struct SelectionRunner;

impl SelectionRunner {
    /// Selects the subset of `items` with the highest total price whose
    /// total weight stays within `capacity`, preferring the lighter subset
    /// on a price tie.
    ///
    /// Returns an empty [`Selection`] when no item fits.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapsack_packer::item::Item;
    /// use knapsack_packer::selector::SelectionRunner;
    /// use rust_decimal::Decimal;
    ///
    /// let items = vec![
    ///     Item::new(1, Decimal::from(6), Decimal::from(10)),
    ///     Item::new(2, Decimal::from(5), Decimal::from(7)),
    ///     Item::new(3, Decimal::from(4), Decimal::from(6)),
    /// ];
    /// let selection = SelectionRunner::run(&items, Decimal::from(10));
    /// assert_eq!(selection.positions(), vec![1, 3]);
    /// ```
    pub fn run(items: &[Item], capacity: Decimal) -> Selection {
        let mut search = Search {
            items,
            capacity,
            buffer: Vec::new(),
        };
        let deepest = search.descend(0, 0, Decimal::ZERO, Decimal::ZERO);

        let mut chosen = search.buffer;
        if let Some(depth) = deepest {
            let expected = depth + 1;
            if expected < chosen.len() {
                debug!(
                    from = chosen.len(),
                    to = expected,
                    "shrinking selection to last valid depth"
                );
                chosen.truncate(expected);
            }
        }
        Selection::from_items(chosen)
    }
}

struct Search<'a> {
    items: &'a [Item],
    capacity: Decimal,
    buffer: Vec<Item>,
}

impl Search<'_> {
    fn descend(
        &mut self,
        next: usize,
        depth: usize,
        weight_sum: Decimal,
        price_sum: Decimal,
    ) -> Option<usize> {
        let mut best_weight = weight_sum;
        let mut best_price = price_sum;
        let mut deepest = None;

        for i in next..self.items.len() {
            let item = self.items[i];
            let (Some(weight), Some(price)) = (
                weight_sum.checked_add(item.weight),
                price_sum.checked_add(item.price),
            ) else {
                continue;
            };
            if weight > self.capacity {
                continue;
            }
            let improves = price > best_price || (price == best_price && weight < best_weight);
            if !improves {
                continue;
            }
            best_weight = weight;
            best_price = price;

            if self.buffer.len() == depth {
                debug!(
                    position = item.position,
                    depth,
                    price = %best_price,
                    "item added to selection"
                );
                self.buffer.push(item);
            } else {
                let old = std::mem::replace(&mut self.buffer[depth], item);
                debug!(
                    old = old.position,
                    new = item.position,
                    depth,
                    price = %best_price,
                    "selection slot replaced"
                );
            }

            let below = self.descend(i + 1, depth + 1, weight, price);
            deepest = Some(below.map_or(depth, |d| d.max(depth)));
        }

        deepest
    }
}
