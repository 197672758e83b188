//! Endpoint paths and request bodies.

use std::borrow::Cow;

use artisan_commerce::cart::{CartState, QUANTITY_FIELD_PREFIX};
use artisan_commerce::ProductId;

pub const CART: &str = "/api/cart";
pub const ADD_TO_CART: &str = "/add_to_cart";
pub const UPDATE_CART: &str = "/update_cart";

/// `GET /remove_from_cart/{id}`.
pub fn remove_from_cart(product_id: &ProductId) -> String {
    format!("/remove_from_cart/{}", segment(product_id))
}

/// `POST /toggle_wishlist/{id}`.
pub fn toggle_wishlist(product_id: &ProductId) -> String {
    format!("/toggle_wishlist/{}", segment(product_id))
}

/// An id as one percent-encoded path segment.
fn segment(product_id: &ProductId) -> Cow<'_, str> {
    urlencoding::encode(product_id.as_str())
}

/// Join a base origin and a path without doubling the slash.
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Form fields for `POST /add_to_cart`.
pub fn add_form(product_id: &ProductId, quantity: u32) -> Vec<(String, String)> {
    vec![
        ("product_id".to_string(), product_id.to_string()),
        ("quantity".to_string(), quantity.to_string()),
    ]
}

/// Form fields for `POST /update_cart`: one `quantity_{id}` per row.
pub fn update_form(cart: &CartState) -> Vec<(String, String)> {
    cart.iter()
        .map(|(id, quantity)| (format!("{}{}", QUANTITY_FIELD_PREFIX, id), quantity.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let id = ProductId::new("42");
        assert_eq!(remove_from_cart(&id), "/remove_from_cart/42");
        assert_eq!(toggle_wishlist(&id), "/toggle_wishlist/42");
    }

    #[test]
    fn test_paths_encode_reserved_characters() {
        let id = ProductId::new("mug/blue?size=L#top");
        assert_eq!(
            remove_from_cart(&id),
            "/remove_from_cart/mug%2Fblue%3Fsize%3DL%23top"
        );
        assert_eq!(
            toggle_wishlist(&ProductId::new("linen napkins")),
            "/toggle_wishlist/linen%20napkins"
        );
        assert_eq!(toggle_wishlist(&ProductId::new("spoon-cherry_2.0~")), "/toggle_wishlist/spoon-cherry_2.0~");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("http://shop.test/", CART), "http://shop.test/api/cart");
        assert_eq!(join("http://shop.test", CART), "http://shop.test/api/cart");
        assert_eq!(join("", CART), "/api/cart");
    }

    #[test]
    fn test_add_form() {
        let form = add_form(&ProductId::new("7"), 3);
        assert_eq!(
            form,
            vec![
                ("product_id".to_string(), "7".to_string()),
                ("quantity".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_update_form() {
        let cart: CartState = [(ProductId::new("2"), 5), (ProductId::new("1"), 1)]
            .into_iter()
            .collect();
        assert_eq!(
            update_form(&cart),
            vec![
                ("quantity_1".to_string(), "1".to_string()),
                ("quantity_2".to_string(), "5".to_string()),
            ]
        );
    }
}
