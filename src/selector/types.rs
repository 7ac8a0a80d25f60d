//! Selection result.

use rust_decimal::Decimal;

use crate::item::Item;

/// The subset chosen for one package, in the order the search picked it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// Chosen items, shallowest search depth first.
    pub items: Vec<Item>,
    /// Sum of the chosen weights.
    pub total_weight: Decimal,
    /// Sum of the chosen prices.
    pub total_price: Decimal,
}

impl Selection {
    pub(crate) fn from_items(items: Vec<Item>) -> Self {
        let total_weight = items.iter().map(|i| i.weight).sum();
        let total_price = items.iter().map(|i| i.price).sum();
        Self {
            items,
            total_weight,
            total_price,
        }
    }

    /// Input positions of the chosen items.
    pub fn positions(&self) -> Vec<usize> {
        self.items.iter().map(|i| i.position).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
