//! Wishlist toggle responses.

use serde::{Deserialize, Serialize};

/// What a toggle did to the shopper's wishlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WishlistAction {
    Added,
    Removed,
}

impl WishlistAction {
    /// Message shown after the toggle.
    pub fn message(&self) -> &'static str {
        match self {
            WishlistAction::Added => "Added to wishlist",
            WishlistAction::Removed => "Removed from wishlist",
        }
    }
}

/// JSON body of `POST /toggle_wishlist/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistResponse {
    pub status: String,
    pub action: WishlistAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        let resp: WishlistResponse =
            serde_json::from_str(r#"{"status": "success", "action": "removed"}"#).unwrap();
        assert_eq!(resp.status, "success");
        assert_eq!(resp.action, WishlistAction::Removed);
    }

    #[test]
    fn test_unknown_action_rejected() {
        let result: Result<WishlistResponse, _> =
            serde_json::from_str(r#"{"status": "success", "action": "moved"}"#);
        assert!(result.is_err());
    }
}
