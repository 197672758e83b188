//! Viewport-triggered behaviour: lazy images and fade-in cards.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use rand::Rng;

/// Images waiting for their real source.
///
/// An image is registered with its `data-src`; the first time it enters the
/// viewport the source is handed back and the image stops being observed.
#[derive(Debug, Default, Clone)]
pub struct LazyImages {
    pending: HashMap<String, String>,
}

impl LazyImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, id: impl Into<String>, data_src: impl Into<String>) {
        self.pending.insert(id.into(), data_src.into());
    }

    /// The source to swap in, exactly once per image.
    pub fn on_intersect(&mut self, id: &str) -> Option<String> {
        self.pending.remove(id)
    }

    pub fn is_observed(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Longest random stagger between cards.
pub const MAX_FADE_DELAY: Duration = Duration::from_millis(300);

/// Cards that have played their fade-in animation.
#[derive(Debug, Default, Clone)]
pub struct FadeIn {
    animated: HashSet<String>,
}

impl FadeIn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animation delay for a card entering the viewport for the first time.
    pub fn on_intersect(&mut self, id: &str) -> Option<Duration> {
        self.on_intersect_with(id, &mut rand::thread_rng())
    }

    pub fn on_intersect_with<R: Rng>(&mut self, id: &str, rng: &mut R) -> Option<Duration> {
        if !self.animated.insert(id.to_string()) {
            return None;
        }
        let millis = rng.gen_range(0..MAX_FADE_DELAY.as_millis() as u64);
        Some(Duration::from_millis(millis))
    }

    pub fn is_animated(&self, id: &str) -> bool {
        self.animated.contains(id)
    }
}
