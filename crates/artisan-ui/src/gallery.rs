//! Product-detail image gallery: thumbnails that swap the main image.

/// How long the main image stays dimmed after a swap.
pub const GALLERY_FADE_MS: u64 = 200;

/// Opacity of the main image while dimmed.
pub const DIMMED_OPACITY: &str = "0.5";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageGallery {
    images: Vec<String>,
    active: usize,
    dimmed_until: Option<u64>,
}

impl ImageGallery {
    /// Gallery over `images`, the first one shown.
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
            active: 0,
            dimmed_until: None,
        }
    }

    /// Show thumbnail `index` as the main image and dim it until
    /// `now + GALLERY_FADE_MS`. Clicking the active thumbnail dims again.
    ///
    /// Returns `false` for an index past the last image.
    pub fn select(&mut self, index: usize, now: u64) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.active = index;
        self.dimmed_until = Some(now + GALLERY_FADE_MS);
        true
    }

    /// Lift the dimming once its time has passed. Returns whether it was
    /// lifted by this call.
    pub fn settle(&mut self, now: u64) -> bool {
        match self.dimmed_until {
            Some(until) if now >= until => {
                self.dimmed_until = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_dimmed(&self) -> bool {
        self.dimmed_until.is_some()
    }

    /// Source of `#mainImage`.
    pub fn main_image(&self) -> Option<&str> {
        self.images.get(self.active).map(String::as_str)
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Thumbnails are only worth showing with more than one image.
    pub fn has_thumbnails(&self) -> bool {
        self.images.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> ImageGallery {
        ImageGallery::new(["front.jpg", "side.jpg", "detail.jpg"])
    }

    #[test]
    fn test_starts_on_first_image() {
        let gallery = gallery();
        assert_eq!(gallery.main_image(), Some("front.jpg"));
        assert!(gallery.is_active(0));
        assert!(!gallery.is_dimmed());
        assert!(gallery.has_thumbnails());
    }

    #[test]
    fn test_select_swaps_and_moves_active() {
        let mut gallery = gallery();
        assert!(gallery.select(2, 1_000));
        assert_eq!(gallery.main_image(), Some("detail.jpg"));
        assert_eq!(gallery.active(), 2);
        assert!(!gallery.is_active(0));
        assert!(gallery.is_dimmed());
    }

    #[test]
    fn test_fade_lifts_after_delay() {
        let mut gallery = gallery();
        gallery.select(1, 1_000);

        assert!(!gallery.settle(1_000 + GALLERY_FADE_MS - 1));
        assert!(gallery.is_dimmed());

        assert!(gallery.settle(1_000 + GALLERY_FADE_MS));
        assert!(!gallery.is_dimmed());
        assert!(!gallery.settle(5_000));
    }

    #[test]
    fn test_reselect_restarts_fade() {
        let mut gallery = gallery();
        gallery.select(1, 1_000);
        gallery.select(1, 1_150);

        // The first deadline no longer lifts it.
        assert!(!gallery.settle(1_000 + GALLERY_FADE_MS));
        assert!(gallery.settle(1_150 + GALLERY_FADE_MS));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut gallery = gallery();
        assert!(!gallery.select(3, 1_000));
        assert_eq!(gallery.active(), 0);
        assert!(!gallery.is_dimmed());
    }

    #[test]
    fn test_single_or_no_image() {
        let single = ImageGallery::new(["only.jpg"]);
        assert!(!single.has_thumbnails());
        assert_eq!(single.main_image(), Some("only.jpg"));

        let empty = ImageGallery::new(Vec::<String>::new());
        assert_eq!(empty.main_image(), None);
    }
}
