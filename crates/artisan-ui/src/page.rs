//! Small page-wide helpers.

/// Value of `data-bs-toggle` that marks a tooltip trigger.
pub const TOOLTIP_TOGGLE: &str = "tooltip";

/// Element id an in-page anchor scrolls to, e.g. `#reviews` -> `reviews`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn is_tooltip_trigger(data_bs_toggle: Option<&str>) -> bool {
    data_bs_toggle == Some(TOOLTIP_TOGGLE)
}

/// Format cents as dollars, e.g. `1999` -> `$19.99`.
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#reviews"), Some("reviews"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/products#top"), None);
    }

    #[test]
    fn test_tooltip_trigger() {
        assert!(is_tooltip_trigger(Some("tooltip")));
        assert!(!is_tooltip_trigger(Some("modal")));
        assert!(!is_tooltip_trigger(None));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1999), "$19.99");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(0), "$0.00");
        assert_eq!(format_price(-250), "-$2.50");
    }
}
