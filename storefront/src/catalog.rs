//! Products and hero slides shown by the storefront.

use artisan_commerce::ProductId;
use artisan_ui::format_price;
use serde::{Deserialize, Serialize};

const EMBEDDED: &str = include_str!("../catalog.json");

/// Product as listed in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: u32,
    /// Extra photos shown as gallery thumbnails after the main image.
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl Product {
    pub fn price_display(&self) -> String {
        format_price(self.price_cents)
    }

    /// Every image of the detail page, main image first.
    pub fn images(&self) -> Vec<String> {
        self.image_url.iter().chain(&self.gallery).cloned().collect()
    }

    /// Whether the product shows up for a search query. The empty query
    /// matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}

/// One hero slide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slide {
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// The catalog compiled into the bundle.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        serde_json::from_str(EMBEDDED)
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct categories in listing order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for category in self.products.iter().filter_map(|p| p.category.as_ref()) {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }
        categories
    }

    /// Order total in cents for the given quantities. Unknown ids count as
    /// zero.
    pub fn total_cents<'a>(&self, items: impl IntoIterator<Item = (&'a ProductId, u32)>) -> i64 {
        items
            .into_iter()
            .filter_map(|(id, qty)| self.product(id).map(|p| p.price_cents * i64::from(qty)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.slides.is_empty());
        assert!(!catalog.products.is_empty());
        assert!(catalog.product(&ProductId::new("mug-speckled")).is_some());
    }

    #[test]
    fn test_categories_are_distinct() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.categories(), vec!["ceramics", "textiles", "woodwork"]);
    }

    #[test]
    fn test_matches() {
        let catalog = Catalog::embedded().unwrap();
        let mug = catalog.product(&ProductId::new("mug-speckled")).unwrap();
        assert!(mug.matches(""));
        assert!(mug.matches("STONEware"));
        assert!(mug.matches("350 ml"));
        assert!(!mug.matches("walnut"));

        let card = catalog.product(&ProductId::new("card-gift")).unwrap();
        assert!(!card.matches("glaze"));
    }

    #[test]
    fn test_images_put_main_image_first() {
        let catalog = Catalog::embedded().unwrap();
        let mug = catalog.product(&ProductId::new("mug-speckled")).unwrap();
        let images = mug.images();
        assert_eq!(images[0], "/static/img/products/mug-speckled.jpg");
        assert!(images.len() > 1);

        let bowl = catalog.product(&ProductId::new("bowl-nesting")).unwrap();
        assert_eq!(bowl.images().len(), 1);

        let card = catalog.product(&ProductId::new("card-gift")).unwrap();
        assert!(card.images().is_empty());
    }

    #[test]
    fn test_total_cents() {
        let catalog = Catalog::embedded().unwrap();
        let mug = ProductId::new("mug-speckled");
        let spoon = ProductId::new("spoon-cherry");
        let gone = ProductId::new("discontinued");
        let total = catalog.total_cents([(&mug, 2), (&spoon, 1), (&gone, 5)]);
        assert_eq!(total, 2 * 2800 + 1800);
        assert_eq!(format_price(total), "$74.00");
    }
}
