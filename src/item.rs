//! The item record carried from the parser to the selector.

use rust_decimal::Decimal;

/// One `(position,weight,€price)` record.
///
/// `position` is the 1-based ordinal from the input line. It is not
/// renumbered when the parser drops items.
///
/// # Equality
///
/// Two items compare equal when their prices are equal; weight and
/// position are ignored. Code that needs to tell two chosen items apart
/// compares [`Item::position`] instead.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub position: usize,
    pub weight: Decimal,
    pub price: Decimal,
}

impl Item {
    pub fn new(position: usize, weight: Decimal, price: Decimal) -> Self {
        Self {
            position,
            weight,
            price,
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.price == other.price
    }
}

impl Eq for Item {}
