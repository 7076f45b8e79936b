//! Quantity selector for the product detail page

use serde::Serialize;

/// Bounded quantity picker
///
/// The quantity always stays within `1..=stock`. Out-of-stock products have
/// no selector at all, see [`QuantitySelector::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantitySelector {
    quantity: u32,
    stock: u32,
}

impl QuantitySelector {
    /// Create a selector starting at 1, or `None` when nothing is in stock
    pub fn new(stock: u32) -> Option<Self> {
        (stock > 0).then_some(Self { quantity: 1, stock })
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn can_increase(&self) -> bool {
        self.quantity < self.stock
    }

    pub fn can_decrease(&self) -> bool {
        self.quantity > 1
    }

    /// Add one unit if stock allows
    pub fn increase(&mut self) -> u32 {
        if self.can_increase() {
            self.quantity += 1;
        }
        self.quantity
    }

    /// Remove one unit, never going below 1
    pub fn decrease(&mut self) -> u32 {
        if self.can_decrease() {
            self.quantity -= 1;
        }
        self.quantity
    }

    /// Apply a typed-in value
    ///
    /// Values that don't parse or fall outside `1..=stock` leave the
    /// quantity unchanged.
    pub fn set(&mut self, raw: &str) -> u32 {
        let parsed = raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|value| (1..=self.stock).contains(value));
        if let Some(value) = parsed {
            self.quantity = value;
        }
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_stock_has_no_selector() {
        assert!(QuantitySelector::new(0).is_none());
    }

    #[test]
    fn test_increase_stops_at_stock() {
        let mut selector = QuantitySelector::new(2).unwrap();
        assert_eq!(selector.increase(), 2);
        assert!(!selector.can_increase());
        assert_eq!(selector.increase(), 2);
    }

    #[test]
    fn test_decrease_stops_at_one() {
        let mut selector = QuantitySelector::new(5).unwrap();
        assert!(!selector.can_decrease());
        assert_eq!(selector.decrease(), 1);
        selector.increase();
        assert_eq!(selector.decrease(), 1);
    }

    #[test]
    fn test_set_ignores_out_of_range_and_garbage() {
        let mut selector = QuantitySelector::new(12).unwrap();
        assert_eq!(selector.set("7"), 7);
        assert_eq!(selector.set("0"), 7);
        assert_eq!(selector.set("13"), 7);
        assert_eq!(selector.set("seven"), 7);
        assert_eq!(selector.set(" 12 "), 12);
    }
}
