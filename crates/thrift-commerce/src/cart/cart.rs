//! Cart and line item types.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;

/// A line in the cart: a product snapshot plus quantity and the size the
/// shopper picked.
///
/// The product is captured at add time, so a catalog price change never
/// retroactively alters what an existing line costs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product snapshot, flattened into the persisted object.
    #[serde(flatten)]
    pub product: Product,
    /// Units of this line, always at least 1.
    pub quantity: i64,
    /// Size chosen at add time, when the piece comes in sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
}

impl LineItem {
    fn new(product: Product, selected_size: Option<String>) -> Self {
        Self {
            product,
            quantity: 1,
            selected_size,
        }
    }

    /// Identity of this line: product id plus chosen size.
    pub fn key(&self) -> (ProductId, Option<&str>) {
        (self.product.id, self.selected_size.as_deref())
    }

    /// Captured price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }

    fn matches(&self, id: ProductId, size: Option<&str>) -> bool {
        self.product.id == id && self.selected_size.as_deref() == size
    }
}

/// An ordered collection of line items, deduplicated by identity key.
///
/// Invariants: no two lines share a `(product id, size)` key, and every
/// quantity is at least 1. Lines keep their insertion order across
/// quantity updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

/// Treat blank sizes the same as no size at all.
fn normalize_size(size: Option<&str>) -> Option<&str> {
    size.filter(|s| !s.trim().is_empty())
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from persisted line items.
    ///
    /// Restores the invariants a snapshot may have lost: lines with a
    /// non-positive quantity are dropped, duplicate identity keys merge
    /// by summing quantities, and blank sizes collapse to none.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity < 1 {
                continue;
            }
            let size = normalize_size(item.selected_size.as_deref()).map(str::to_owned);
            match cart
                .items
                .iter_mut()
                .find(|line| line.matches(item.product.id, size.as_deref()))
            {
                Some(existing) => existing.quantity += item.quantity,
                None => cart.items.push(LineItem {
                    product: item.product,
                    quantity: item.quantity,
                    selected_size: size,
                }),
            }
        }
        cart
    }

    /// Add one unit of `product`, with an optional size.
    ///
    /// A line with the same `(id, size)` key merges by incrementing its
    /// quantity; otherwise a new line is appended with quantity 1.
    pub fn add(&mut self, product: &Product, size: Option<&str>) {
        let size = normalize_size(size);
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|line| line.matches(product.id, size))
        {
            existing.quantity += 1;
            return;
        }
        self.items
            .push(LineItem::new(product.clone(), size.map(str::to_owned)));
    }

    /// Remove the line matching `(id, size)`.
    ///
    /// Returns whether a line was removed; removing an absent key is a
    /// no-op, not an error.
    pub fn remove(&mut self, id: ProductId, size: Option<&str>) -> bool {
        let size = normalize_size(size);
        let len_before = self.items.len();
        self.items.retain(|line| !line.matches(id, size));
        self.items.len() < len_before
    }

    /// Set the quantity of the line matching `(id, size)` exactly.
    ///
    /// A quantity of zero or less removes the line instead. Returns
    /// whether anything changed; an absent key is a no-op.
    pub fn update_quantity(&mut self, id: ProductId, size: Option<&str>, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id, size);
        }
        let size = normalize_size(size);
        match self.items.iter_mut().find(|line| line.matches(id, size)) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line matching `(id, size)`.
    pub fn get(&self, id: ProductId, size: Option<&str>) -> Option<&LineItem> {
        let size = normalize_size(size);
        self.items.iter().find(|line| line.matches(id, size))
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Sum of captured `price * quantity` across all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: u32, price: i64) -> Product {
        Product::new(
            id,
            format!("Piece {id}"),
            "Shoes",
            Money::new(price),
            format!("/piece-{id}.jpg"),
        )
    }

    #[test]
    fn test_single_add() {
        let mut cart = Cart::new();
        cart.add(&product(1, 999), Some("M"));

        assert_eq!(cart.unique_item_count(), 1);
        let line = cart.get(ProductId::new(1), Some("M")).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.key(), (ProductId::new(1), Some("M")));
    }

    #[test]
    fn test_same_key_merges() {
        let mut cart = Cart::new();
        let p = product(1, 999);
        cart.add(&p, Some("M"));
        cart.add(&p, Some("M"));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_different_sizes_stay_distinct() {
        let mut cart = Cart::new();
        let p = product(1, 999);
        cart.add(&p, Some("M"));
        cart.add(&p, Some("L"));

        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_no_size_is_its_own_key() {
        let mut cart = Cart::new();
        let p = product(1, 999);
        cart.add(&p, None);
        cart.add(&p, Some("M"));
        cart.add(&p, None);

        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.get(ProductId::new(1), None).unwrap().quantity, 2);
    }

    #[test]
    fn test_blank_size_means_no_size() {
        let mut cart = Cart::new();
        let p = product(1, 999);
        cart.add(&p, Some(""));
        cart.add(&p, Some("   "));
        cart.add(&p, None);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut cart = Cart::new();
        cart.add(&product(1, 999), Some("M"));
        assert!(cart.update_quantity(ProductId::new(1), Some("M"), 5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_to_zero_removes() {
        let mut cart = Cart::new();
        cart.add(&product(1, 999), Some("M"));
        assert!(cart.update_quantity(ProductId::new(1), Some("M"), 0));

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_update_negative_removes() {
        let mut cart = Cart::new();
        cart.add(&product(1, 999), None);
        assert!(cart.update_quantity(ProductId::new(1), None, -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_absent_key_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 999), Some("M"));
        assert!(!cart.update_quantity(ProductId::new(2), Some("M"), 4));
        assert!(!cart.update_quantity(ProductId::new(1), Some("L"), 4));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_absent_key_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(&product(1, 999), Some("M"));
        let before = cart.clone();

        assert!(!cart.remove(ProductId::new(9), None));
        assert!(!cart.remove(ProductId::new(1), Some("L")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product(1, 999), None);
        cart.add(&product(2, 2499), Some("L"));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_total_uses_captured_price() {
        let mut cart = Cart::new();
        let mut p = product(1, 999);
        cart.add(&p, None);

        // A later catalog price change must not touch the line.
        p.price = Money::new(5000);
        assert_eq!(cart.total(), Money::new(999));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(&product(1, 999), Some("M"));
        cart.add(&product(2, 2499), None);
        cart.add(&product(3, 2999), Some("UK 43"));

        // Updating the first line must not reorder it.
        cart.update_quantity(ProductId::new(1), Some("M"), 7);
        let ids: Vec<u32> = cart.items().iter().map(|l| l.product.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_scenario_add_update_remove() {
        let mut cart = Cart::new();
        let p = product(1, 999);

        cart.add(&p, Some("M"));
        cart.add(&p, Some("M"));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(ProductId::new(1), Some("M")).unwrap().quantity, 2);
        assert_eq!(cart.total(), Money::new(1998));

        cart.update_quantity(ProductId::new(1), Some("M"), 1);
        assert_eq!(cart.total(), Money::new(999));

        cart.remove(ProductId::new(1), Some("M"));
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_from_items_drops_nonpositive_and_merges_duplicates() {
        let mut bad_quantity = LineItem::new(product(1, 999), None);
        bad_quantity.quantity = 0;
        let dup_a = LineItem::new(product(2, 2499), Some("L".into()));
        let mut dup_b = LineItem::new(product(2, 2499), Some("L".into()));
        dup_b.quantity = 3;

        let cart = Cart::from_items(vec![bad_quantity, dup_a, dup_b]);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(ProductId::new(2), Some("L")).unwrap().quantity, 4);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut cart = Cart::new();
        cart.add(
            &product(1, 999).with_description("Vintage piece.").with_sizes(["M", "L"]),
            Some("M"),
        );
        cart.add(&product(2, 2499), None);
        cart.update_quantity(ProductId::new(2), None, 3);

        let raw = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_persisted_layout() {
        let mut cart = Cart::new();
        cart.add(&product(1, 999), Some("M"));

        let raw = serde_json::to_string(&cart).unwrap();
        // The snapshot is a bare array of flattened line objects.
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"selectedSize\":\"M\""));
        assert!(raw.contains("\"quantity\":1"));
        assert!(raw.contains("\"price\":999"));
    }

    /// Tiny deterministic generator for the randomized-sequence check.
    struct XorShift(u64);

    impl XorShift {
        fn next(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }
    }

    #[test]
    fn test_total_matches_model_under_random_ops() {
        let sizes = [None, Some("M"), Some("L")];
        let prices = [999, 1999, 2499, 2999];
        let mut rng = XorShift(0x2f3a_5c71);
        let mut cart = Cart::new();

        for _ in 0..500 {
            let id = (rng.next() % 6 + 1) as u32;
            let size = sizes[(rng.next() % sizes.len() as u64) as usize];
            let price = prices[(id as usize - 1) % prices.len()];
            match rng.next() % 4 {
                0 | 1 => cart.add(&product(id, price), size),
                2 => {
                    cart.update_quantity(ProductId::new(id), size, (rng.next() % 5) as i64);
                }
                _ => {
                    cart.remove(ProductId::new(id), size);
                }
            }

            // Model: recompute both aggregates straight off the lines.
            let expected_total: i64 = cart
                .items()
                .iter()
                .map(|l| l.product.price.minor_units() * l.quantity)
                .sum();
            let expected_count: i64 = cart.items().iter().map(|l| l.quantity).sum();
            assert_eq!(cart.total(), Money::new(expected_total));
            assert_eq!(cart.item_count(), expected_count);
            assert!(cart.items().iter().all(|l| l.quantity >= 1));

            // No two lines may share an identity key.
            for (i, a) in cart.items().iter().enumerate() {
                for b in cart.items().iter().skip(i + 1) {
                    assert_ne!(a.key(), b.key());
                }
            }
        }
    }
}
