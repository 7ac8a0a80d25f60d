//! Validation predicates and parse results.

use rust_decimal::Decimal;

use crate::item::Item;

/// The three externally supplied limit checks consulted while a line is
/// scanned.
///
/// The parser owns no thresholds; it only asks these questions:
///
/// - [`weight_ok`](LimitCheck::weight_ok) for the package capacity and
///   for every item weight,
/// - [`price_ok`](LimitCheck::price_ok) for every item price,
/// - [`count_ok`](LimitCheck::count_ok) with the number of items already
///   retained, before each record is considered.
///
/// # Examples
///
/// ```
/// use knapsack_packer::parser::{FnLimits, LimitCheck};
/// use rust_decimal::Decimal;
///
/// let limits = FnLimits::new(
///     |w: &Decimal| *w <= Decimal::from(50),
///     |_: &Decimal| true,
///     |count: usize| count < 3,
/// );
/// assert!(limits.weight_ok(&Decimal::from(50)));
/// assert!(!limits.count_ok(3));
/// ```
pub trait LimitCheck {
    /// Whether a weight (item or package) is within the maximum.
    fn weight_ok(&self, weight: &Decimal) -> bool;

    /// Whether an item price is within the maximum.
    fn price_ok(&self, price: &Decimal) -> bool;

    /// Whether another item may be retained when `count` are already held.
    fn count_ok(&self, count: usize) -> bool;
}

impl<T: LimitCheck + ?Sized> LimitCheck for &T {
    fn weight_ok(&self, weight: &Decimal) -> bool {
        (**self).weight_ok(weight)
    }

    fn price_ok(&self, price: &Decimal) -> bool {
        (**self).price_ok(price)
    }

    fn count_ok(&self, count: usize) -> bool {
        (**self).count_ok(count)
    }
}

/// [`LimitCheck`] built from three closures.
pub struct FnLimits<W, P, C> {
    weight: W,
    price: P,
    count: C,
}

impl<W, P, C> FnLimits<W, P, C>
where
    W: Fn(&Decimal) -> bool,
    P: Fn(&Decimal) -> bool,
    C: Fn(usize) -> bool,
{
    pub fn new(weight: W, price: P, count: C) -> Self {
        Self {
            weight,
            price,
            count,
        }
    }
}

impl<W, P, C> LimitCheck for FnLimits<W, P, C>
where
    W: Fn(&Decimal) -> bool,
    P: Fn(&Decimal) -> bool,
    C: Fn(usize) -> bool,
{
    fn weight_ok(&self, weight: &Decimal) -> bool {
        (self.weight)(weight)
    }

    fn price_ok(&self, price: &Decimal) -> bool {
        (self.price)(price)
    }

    fn count_ok(&self, count: usize) -> bool {
        (self.count)(count)
    }
}

/// Accepts everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLimits;

impl LimitCheck for NoLimits {
    fn weight_ok(&self, _weight: &Decimal) -> bool {
        true
    }

    fn price_ok(&self, _price: &Decimal) -> bool {
        true
    }

    fn count_ok(&self, _count: usize) -> bool {
        true
    }
}

/// Event emitted by the line scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEvent {
    /// The capacity token was read. Emitted once, before any record.
    Capacity(Decimal),

    /// A record was closed. Carries the capacity already read.
    Record { capacity: Decimal, item: Item },
}

/// One fully parsed and filtered input line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedLine {
    /// Maximum total weight of the package.
    pub capacity: Decimal,
    /// Retained items, in input order.
    pub items: Vec<Item>,
}
