//! The cart mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::ids::ProductId;

/// Mapping from product to quantity.
///
/// No entry ever holds a zero quantity: removing an item deletes its key.
/// Zero entries arriving from storage or the server are dropped on
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<ProductId, u32>",
    into = "BTreeMap<ProductId, u32>"
)]
pub struct CartState {
    items: BTreeMap<ProductId, u32>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity for a product, if present.
    pub fn quantity(&self, product_id: &ProductId) -> Option<u32> {
        self.items.get(product_id).copied()
    }

    /// Whether the product is in the cart.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.contains_key(product_id)
    }

    /// Increment an existing entry or insert a new one.
    ///
    /// Returns the new quantity.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) -> Result<u32, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(0));
        }

        let current = self.items.get(&product_id).copied().unwrap_or(0);
        let new_quantity = current
            .checked_add(quantity)
            .ok_or_else(|| CartError::Overflow(product_id.to_string()))?;
        self.items.insert(product_id, new_quantity);
        Ok(new_quantity)
    }

    /// Set a quantity directly. Zero removes the entry.
    pub fn set(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.items.remove(&product_id);
        } else {
            self.items.insert(product_id, quantity);
        }
    }

    /// Remove an entry, returning its quantity.
    pub fn remove(&mut self, product_id: &ProductId) -> Option<u32> {
        self.items.remove(product_id)
    }

    /// Sum of all quantities.
    pub fn total_count(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate entries in product id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, u32)> {
        self.items.iter().map(|(id, &q)| (id, q))
    }
}

impl From<BTreeMap<ProductId, u32>> for CartState {
    fn from(mut items: BTreeMap<ProductId, u32>) -> Self {
        items.retain(|_, q| *q > 0);
        Self { items }
    }
}

impl From<CartState> for BTreeMap<ProductId, u32> {
    fn from(state: CartState) -> Self {
        state.items
    }
}

impl FromIterator<(ProductId, u32)> for CartState {
    fn from_iter<I: IntoIterator<Item = (ProductId, u32)>>(iter: I) -> Self {
        iter.into_iter().collect::<BTreeMap<_, _>>().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn test_add_inserts_then_increments() {
        let mut cart = CartState::new();
        assert_eq!(cart.add(pid("p1"), 2).unwrap(), 2);
        assert_eq!(cart.add(pid("p1"), 3).unwrap(), 5);
        assert_eq!(cart.total_count(), 5);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_zero_rejected() {
        let mut cart = CartState::new();
        assert!(matches!(
            cart.add(pid("p1"), 0),
            Err(CartError::InvalidQuantity(0))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_overflow() {
        let mut cart = CartState::new();
        cart.add(pid("p1"), u32::MAX).unwrap();
        assert!(matches!(cart.add(pid("p1"), 1), Err(CartError::Overflow(_))));
        assert_eq!(cart.quantity(&pid("p1")), Some(u32::MAX));
    }

    #[test]
    fn test_set_zero_removes() {
        let mut cart = CartState::new();
        cart.set(pid("p1"), 4);
        assert_eq!(cart.quantity(&pid("p1")), Some(4));

        cart.set(pid("p1"), 0);
        assert!(!cart.contains(&pid("p1")));
    }

    #[test]
    fn test_total_count_does_not_overflow() {
        let cart: CartState = [(pid("a"), u32::MAX), (pid("b"), u32::MAX)]
            .into_iter()
            .collect();
        assert_eq!(cart.total_count(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_deserialize_server_mapping() {
        let cart: CartState = serde_json::from_str(r#"{"p2": 4, "p3": 1}"#).unwrap();
        assert_eq!(cart.quantity(&pid("p2")), Some(4));
        assert_eq!(cart.total_count(), 5);
    }

    #[test]
    fn test_deserialize_drops_zero_entries() {
        let cart: CartState = serde_json::from_str(r#"{"p1": 0, "p2": 2}"#).unwrap();
        assert!(!cart.contains(&pid("p1")));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let result: Result<CartState, _> = serde_json::from_str(r#"{"p1": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_as_flat_mapping() {
        let cart: CartState = [(pid("b"), 1), (pid("a"), 2)].into_iter().collect();
        assert_eq!(serde_json::to_string(&cart).unwrap(), r#"{"a":2,"b":1}"#);
    }
}
