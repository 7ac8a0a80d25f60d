//! Packer configuration and default limits.

use rust_decimal::Decimal;

use crate::parser::LimitCheck;

/// Glyph that precedes every price unless configured otherwise.
pub const DEFAULT_CURRENCY: char = '€';

/// Configuration for packing a batch of lines.
///
/// Doubles as the default [`LimitCheck`]: weights and prices are accepted
/// up to and including their maximum, and another item may be retained
/// while fewer than `max_items` are held.
///
/// # Examples
///
/// ```
/// use knapsack_packer::packer::PackerConfig;
/// use rust_decimal::Decimal;
///
/// let config = PackerConfig::default()
///     .with_max_weight(Decimal::from(50))
///     .with_max_items(10)
///     .with_currency('$');
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_items, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackerConfig {
    /// Maximum package capacity and maximum item weight.
    pub max_weight: Decimal,

    /// Maximum item price.
    pub max_price: Decimal,

    /// Maximum number of retained items per line.
    pub max_items: usize,

    /// Glyph that precedes every price.
    pub currency: char,

    /// Whether to pack lines in parallel using rayon.
    ///
    /// Ignored unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            max_weight: Decimal::ONE_HUNDRED,
            max_price: Decimal::ONE_HUNDRED,
            max_items: 15,
            currency: DEFAULT_CURRENCY,
            parallel: false,
        }
    }
}

impl PackerConfig {
    /// Sets the maximum package capacity and item weight.
    pub fn with_max_weight(mut self, max: Decimal) -> Self {
        self.max_weight = max;
        self
    }

    /// Sets the maximum item price.
    pub fn with_max_price(mut self, max: Decimal) -> Self {
        self.max_price = max;
        self
    }

    /// Sets the maximum number of retained items per line.
    pub fn with_max_items(mut self, n: usize) -> Self {
        self.max_items = n;
        self
    }

    /// Sets the glyph that precedes every price.
    pub fn with_currency(mut self, currency: char) -> Self {
        self.currency = currency;
        self
    }

    /// Enables or disables parallel line packing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_weight <= Decimal::ZERO {
            return Err(format!("max_weight must be positive, got {}", self.max_weight));
        }
        if self.max_price <= Decimal::ZERO {
            return Err(format!("max_price must be positive, got {}", self.max_price));
        }
        if self.max_items == 0 {
            return Err("max_items must be at least 1".into());
        }
        if matches!(self.currency, ',' | '(' | ')' | ':') {
            return Err(format!(
                "currency '{}' collides with the line grammar",
                self.currency
            ));
        }
        Ok(())
    }
}

impl LimitCheck for PackerConfig {
    fn weight_ok(&self, weight: &Decimal) -> bool {
        *weight <= self.max_weight
    }

    fn price_ok(&self, price: &Decimal) -> bool {
        *price <= self.max_price
    }

    fn count_ok(&self, count: usize) -> bool {
        count < self.max_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PackerConfig::default();
        assert_eq!(config.max_weight, Decimal::from(100));
        assert_eq!(config.max_price, Decimal::from(100));
        assert_eq!(config.max_items, 15);
        assert_eq!(config.currency, DEFAULT_CURRENCY);
        assert_eq!(DEFAULT_CURRENCY, '€');
        assert!(!config.parallel);
    }

    #[test]
    fn test_config_builder() {
        let config = PackerConfig::default()
            .with_max_weight(Decimal::from(50))
            .with_max_price(Decimal::from(20))
            .with_max_items(3)
            .with_currency('$')
            .with_parallel(true);
        assert_eq!(config.max_weight, Decimal::from(50));
        assert_eq!(config.max_price, Decimal::from(20));
        assert_eq!(config.max_items, 3);
        assert_eq!(config.currency, '$');
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_ok() {
        assert!(PackerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_weight() {
        let config = PackerConfig::default().with_max_weight(Decimal::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_price() {
        let config = PackerConfig::default().with_max_price(Decimal::from(-1));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_items() {
        let config = PackerConfig::default().with_max_items(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_grammar_currency() {
        for glyph in [',', '(', ')', ':'] {
            let config = PackerConfig::default().with_currency(glyph);
            assert!(config.validate().is_err(), "{glyph:?} should be rejected");
        }
    }

    #[test]
    fn test_limits_are_inclusive() {
        let config = PackerConfig::default();
        assert!(config.weight_ok(&Decimal::from(100)));
        assert!(!config.weight_ok(&Decimal::new(10001, 2)));
        assert!(config.price_ok(&Decimal::from(100)));
        assert!(!config.price_ok(&Decimal::new(1001, 1)));
    }

    #[test]
    fn test_count_limit_is_exclusive() {
        let config = PackerConfig::default();
        assert!(config.count_ok(14));
        assert!(!config.count_ok(15));
    }
}
