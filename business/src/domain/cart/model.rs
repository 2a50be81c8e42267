use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A SKU/quantity pair stored in a cart.
///
/// Field names follow the stored JSON shape (`{"Sku": .., "Quantity": ..}`)
/// so existing cart records stay readable. Lowercase and uppercase spellings
/// written by other clients are accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineItem {
    #[serde(alias = "sku", alias = "SKU")]
    pub sku: String,
    #[serde(alias = "quantity", alias = "QUANTITY")]
    pub quantity: i64,
}

impl LineItem {
    pub fn new(sku: impl Into<String>, quantity: i64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
        }
    }
}

/// Requested quantity change for a SKU. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDelta {
    pub sku: String,
    pub quantity: i64,
}

impl ItemDelta {
    pub fn new(sku: impl Into<String>, quantity: i64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    pub items: Vec<LineItem>,
}

impl Cart {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, sku: &str) -> Option<i64> {
        self.items
            .iter()
            .find(|item| item.sku == sku)
            .map(|item| item.quantity)
    }

    /// Adds each delta to the matching line, or appends a new line for an unseen SKU.
    ///
    /// Existing lines keep their position; new SKUs follow in delta order.
    /// Quantities are applied as given, including non-positive ones.
    pub fn merge(&mut self, deltas: &[ItemDelta]) {
        let mut positions: HashMap<String, usize> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.sku.clone(), index))
            .collect();

        for delta in deltas {
            match positions.get(&delta.sku).copied() {
                Some(index) => {
                    let item = &mut self.items[index];
                    item.quantity = item.quantity.saturating_add(delta.quantity);
                }
                None => {
                    positions.insert(delta.sku.clone(), self.items.len());
                    self.items.push(LineItem::new(delta.sku.clone(), delta.quantity));
                }
            }
        }
    }

    /// Decrements (or zeroes, with `remove_all`) every line named by a delta, then
    /// drops lines whose quantity is no longer positive.
    ///
    /// A SKU repeated in `deltas` uses its last occurrence. Deltas for SKUs that
    /// are not in the cart are ignored.
    pub fn subtract(&mut self, deltas: &[ItemDelta], remove_all: bool) {
        let removals: HashMap<&str, i64> = deltas
            .iter()
            .map(|delta| (delta.sku.as_str(), delta.quantity))
            .collect();

        for item in &mut self.items {
            if let Some(&quantity) = removals.get(item.sku.as_str()) {
                item.quantity = if remove_all {
                    0
                } else {
                    item.quantity.saturating_sub(quantity)
                };
            }
        }

        self.items.retain(|item| item.quantity > 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cart(items: &[(&str, i64)]) -> Cart {
        Cart::new(
            items
                .iter()
                .map(|(sku, quantity)| LineItem::new(*sku, *quantity))
                .collect(),
        )
    }

    fn deltas(items: &[(&str, i64)]) -> Vec<ItemDelta> {
        items
            .iter()
            .map(|(sku, quantity)| ItemDelta::new(*sku, *quantity))
            .collect()
    }

    #[test]
    fn should_increase_quantity_of_existing_sku() {
        let mut current = cart(&[("A", 2)]);

        current.merge(&deltas(&[("A", 3)]));

        assert_eq!(current, cart(&[("A", 5)]));
    }

    #[test]
    fn should_append_new_sku_after_existing_items() {
        let mut current = cart(&[("A", 2)]);

        current.merge(&deltas(&[("B", 1)]));

        assert_eq!(current, cart(&[("A", 2), ("B", 1)]));
    }

    #[test]
    fn should_keep_existing_order_and_append_new_skus_in_delta_order() {
        let mut current = cart(&[("A", 1), ("B", 1)]);

        current.merge(&deltas(&[("D", 4), ("B", 2), ("C", 3), ("A", 1)]));

        assert_eq!(current, cart(&[("A", 2), ("B", 3), ("D", 4), ("C", 3)]));
    }

    #[test]
    fn should_fold_repeated_new_sku_into_single_line() {
        let mut current = Cart::empty();

        current.merge(&deltas(&[("A", 2), ("A", 3)]));

        assert_eq!(current, cart(&[("A", 5)]));
    }

    #[test]
    fn should_match_sku_case_sensitively() {
        let mut current = cart(&[("sku-a", 1)]);

        current.merge(&deltas(&[("SKU-A", 1)]));

        assert_eq!(current, cart(&[("sku-a", 1), ("SKU-A", 1)]));
    }

    #[test]
    fn should_apply_non_positive_add_as_given() {
        let mut current = cart(&[("A", 2)]);

        current.merge(&deltas(&[("A", -1), ("B", 0)]));

        assert_eq!(current, cart(&[("A", 1), ("B", 0)]));
    }

    #[test]
    fn should_saturate_instead_of_overflowing() {
        let mut current = cart(&[("A", i64::MAX)]);

        current.merge(&deltas(&[("A", 1)]));

        assert_eq!(current.quantity_of("A"), Some(i64::MAX));
    }

    #[test]
    fn should_decrement_matching_item_only() {
        let mut current = cart(&[("A", 2), ("B", 2)]);

        current.subtract(&deltas(&[("A", 1)]), false);

        assert_eq!(current, cart(&[("A", 1), ("B", 2)]));
    }

    #[test]
    fn should_drop_item_driven_below_zero() {
        let mut current = cart(&[("A", 2)]);

        current.subtract(&deltas(&[("A", 10)]), false);

        assert!(current.is_empty());
    }

    #[test]
    fn should_remove_whole_line_when_remove_all_regardless_of_magnitude() {
        let mut current = cart(&[("A", 5), ("B", 1)]);

        current.subtract(&deltas(&[("A", 1)]), true);

        assert_eq!(current, cart(&[("B", 1)]));
    }

    #[test]
    fn should_ignore_removal_of_unknown_sku() {
        let mut current = cart(&[("A", 2)]);

        current.subtract(&deltas(&[("Z", 1)]), false);

        assert_eq!(current, cart(&[("A", 2)]));
    }

    #[test]
    fn should_use_last_delta_when_sku_repeated_in_removal() {
        let mut current = cart(&[("A", 5)]);

        current.subtract(&deltas(&[("A", 1), ("A", 3)]), false);

        assert_eq!(current, cart(&[("A", 2)]));
    }

    #[test]
    fn should_drop_stale_non_positive_lines_on_removal() {
        let mut current = cart(&[("A", 0), ("B", 2), ("C", -1)]);

        current.subtract(&[], false);

        assert_eq!(current, cart(&[("B", 2)]));
    }

    proptest! {
        #[test]
        fn split_adds_match_single_add(first in 0i64..1_000, second in 0i64..1_000) {
            let mut split = Cart::empty();
            split.merge(&deltas(&[("A", first)]));
            split.merge(&deltas(&[("A", second)]));

            let mut single = Cart::empty();
            single.merge(&deltas(&[("A", first + second)]));

            prop_assert_eq!(split, single);
        }

        #[test]
        fn removal_never_leaves_non_positive_lines(
            items in proptest::collection::vec(("[a-d]", 1i64..20), 0..8),
            removals in proptest::collection::vec(("[a-d]", 0i64..30), 0..8),
            remove_all in any::<bool>(),
        ) {
            let mut current = Cart::empty();
            current.merge(
                &items
                    .iter()
                    .map(|(sku, quantity)| ItemDelta::new(sku.clone(), *quantity))
                    .collect::<Vec<_>>(),
            );
            let removals: Vec<ItemDelta> = removals
                .into_iter()
                .map(|(sku, quantity)| ItemDelta::new(sku, quantity))
                .collect();

            current.subtract(&removals, remove_all);

            prop_assert!(current.items.iter().all(|item| item.quantity > 0));
        }
    }
}
