//! Typed cart actions.
//!
//! Markup never calls into the store directly; event handlers decode the
//! form or input that fired into a `CartCommand` and hand it to
//! `CartStore::dispatch`.

use crate::error::CartError;
use crate::ids::ProductId;

/// An action on the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// Add `quantity` units (confirmed by the server).
    Add { product_id: ProductId, quantity: u32 },
    /// Remove a product (confirmed by the server).
    Remove { product_id: ProductId },
    /// Set a quantity locally; zero or below removes.
    SetQuantity { product_id: ProductId, quantity: i64 },
    /// Replace local state with the server's cart.
    Sync,
    /// Push all local quantities to the server.
    Commit,
}

/// Prefix of per-row quantity inputs, e.g. `quantity_42`.
pub const QUANTITY_FIELD_PREFIX: &str = "quantity_";

impl CartCommand {
    /// Decode an add-to-cart form.
    ///
    /// `product_id` is required. `quantity` defaults to 1 when absent or
    /// unparseable, and must be positive otherwise.
    pub fn from_add_form<'a, I>(fields: I) -> Result<Self, CartError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut product_id = None;
        let mut quantity = None;

        for (name, value) in fields {
            match name {
                "product_id" => product_id = Some(value.trim()),
                "quantity" => quantity = Some(value.trim()),
                _ => {}
            }
        }

        let product_id = product_id
            .filter(|id| !id.is_empty())
            .ok_or(CartError::MissingField("product_id"))?;

        let quantity = match quantity.and_then(|q| q.parse::<i64>().ok()) {
            None => 1,
            Some(q) if q <= 0 => return Err(CartError::InvalidQuantity(q)),
            Some(q) => u32::try_from(q).map_err(|_| CartError::InvalidQuantity(q))?,
        };

        Ok(CartCommand::Add {
            product_id: ProductId::new(product_id),
            quantity,
        })
    }

    /// Decode a change on a `quantity_{id}` input.
    ///
    /// Returns `None` for inputs that are not quantity fields. An
    /// unparseable value reads as zero, which removes the row.
    pub fn from_quantity_input(name: &str, value: &str) -> Option<Self> {
        let id = name.strip_prefix(QUANTITY_FIELD_PREFIX)?;
        if id.is_empty() {
            return None;
        }
        let quantity = value.trim().parse::<i64>().unwrap_or(0);
        Some(CartCommand::SetQuantity {
            product_id: ProductId::new(id),
            quantity,
        })
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartCommand::Add { .. } => "add",
            CartCommand::Remove { .. } => "remove",
            CartCommand::SetQuantity { .. } => "set_quantity",
            CartCommand::Sync => "sync",
            CartCommand::Commit => "commit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_form_with_quantity() {
        let cmd = CartCommand::from_add_form([("product_id", "7"), ("quantity", "3")]).unwrap();
        assert_eq!(
            cmd,
            CartCommand::Add {
                product_id: ProductId::new("7"),
                quantity: 3
            }
        );
    }

    #[test]
    fn test_add_form_default_quantity() {
        let cmd = CartCommand::from_add_form([("product_id", "7")]).unwrap();
        assert!(matches!(cmd, CartCommand::Add { quantity: 1, .. }));

        let cmd = CartCommand::from_add_form([("product_id", "7"), ("quantity", "")]).unwrap();
        assert!(matches!(cmd, CartCommand::Add { quantity: 1, .. }));
    }

    #[test]
    fn test_add_form_missing_product() {
        let result = CartCommand::from_add_form([("quantity", "2")]);
        assert!(matches!(result, Err(CartError::MissingField("product_id"))));

        let result = CartCommand::from_add_form([("product_id", "  ")]);
        assert!(matches!(result, Err(CartError::MissingField("product_id"))));
    }

    #[test]
    fn test_add_form_rejects_non_positive() {
        let result = CartCommand::from_add_form([("product_id", "7"), ("quantity", "0")]);
        assert!(matches!(result, Err(CartError::InvalidQuantity(0))));

        let result = CartCommand::from_add_form([("product_id", "7"), ("quantity", "-2")]);
        assert!(matches!(result, Err(CartError::InvalidQuantity(-2))));
    }

    #[test]
    fn test_quantity_input() {
        let cmd = CartCommand::from_quantity_input("quantity_42", "5").unwrap();
        assert_eq!(
            cmd,
            CartCommand::SetQuantity {
                product_id: ProductId::new("42"),
                quantity: 5
            }
        );
    }

    #[test]
    fn test_quantity_input_garbage_removes() {
        let cmd = CartCommand::from_quantity_input("quantity_42", "x").unwrap();
        assert!(matches!(cmd, CartCommand::SetQuantity { quantity: 0, .. }));
    }

    #[test]
    fn test_non_quantity_input_ignored() {
        assert!(CartCommand::from_quantity_input("search", "5").is_none());
        assert!(CartCommand::from_quantity_input("quantity_", "5").is_none());
    }
}
