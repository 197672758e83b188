//! Category filter buttons over product cards.

/// Filter value that shows every card.
pub const ALL: &str = "all";

/// The active category filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    active: String,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            active: ALL.to_string(),
        }
    }
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, filter: impl Into<String>) {
        self.active = filter.into();
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Whether the button for `filter` is highlighted.
    pub fn is_active_button(&self, filter: &str) -> bool {
        self.active == filter
    }

    /// Whether a card with `category` is displayed.
    pub fn is_visible(&self, category: Option<&str>) -> bool {
        self.active == ALL || category == Some(self.active.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shows_everything() {
        let filter = ProductFilter::new();
        assert!(filter.is_visible(Some("pottery")));
        assert!(filter.is_visible(None));
        assert!(filter.is_active_button(ALL));
    }

    #[test]
    fn test_category_filter() {
        let mut filter = ProductFilter::new();
        filter.select("pottery");
        assert!(filter.is_visible(Some("pottery")));
        assert!(!filter.is_visible(Some("textiles")));
        assert!(!filter.is_visible(None));
        assert!(filter.is_active_button("pottery"));
        assert!(!filter.is_active_button(ALL));
    }
}
