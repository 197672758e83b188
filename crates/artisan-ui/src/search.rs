//! Search-as-you-type.

use artisan_core::SearchConfig;

/// Submits the search form once typing has been quiet for a while.
///
/// Each keystroke moves the deadline; a poll scheduled for an older
/// deadline finds nothing due and does nothing.
#[derive(Debug, Clone)]
pub struct SearchDebounce {
    debounce_ms: u64,
    min_length: usize,
    pending: Option<(String, u64)>,
}

impl SearchDebounce {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            debounce_ms: config.debounce_ms,
            min_length: config.min_length,
            pending: None,
        }
    }

    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    /// Record a keystroke. Returns the time at which to poll.
    pub fn input(&mut self, value: impl Into<String>, now: u64) -> u64 {
        let deadline = now.saturating_add(self.debounce_ms);
        self.pending = Some((value.into(), deadline));
        deadline
    }

    /// The query to submit, if the quiet period is over and it qualifies.
    pub fn poll(&mut self, now: u64) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => {}
            _ => return None,
        }
        let (value, _) = self.pending.take()?;
        self.qualifies(&value).then_some(value)
    }

    /// Clear button: drop any pending keystroke and submit an empty query.
    pub fn clear(&mut self) -> String {
        self.pending = None;
        String::new()
    }

    /// Empty queries reset the listing; others need `min_length` characters.
    pub fn qualifies(&self, value: &str) -> bool {
        value.is_empty() || value.chars().count() >= self.min_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debounce() -> SearchDebounce {
        SearchDebounce::new(&SearchConfig::default())
    }

    #[test]
    fn test_waits_for_quiet_period() {
        let mut search = debounce();
        search.input("vas", 0);
        assert_eq!(search.poll(499), None);
        assert_eq!(search.poll(500).as_deref(), Some("vas"));
        assert_eq!(search.poll(1000), None);
    }

    #[test]
    fn test_keystroke_moves_deadline() {
        let mut search = debounce();
        search.input("va", 0);
        search.input("vase", 300);
        assert_eq!(search.poll(500), None);
        assert_eq!(search.poll(800).as_deref(), Some("vase"));
    }

    #[test]
    fn test_short_query_not_submitted() {
        let mut search = debounce();
        search.input("ab", 0);
        assert_eq!(search.poll(500), None);
    }

    #[test]
    fn test_empty_query_submitted() {
        let mut search = debounce();
        search.input("", 0);
        assert_eq!(search.poll(500).as_deref(), Some(""));
    }

    #[test]
    fn test_clear_cancels_pending() {
        let mut search = debounce();
        search.input("bowl", 0);
        assert_eq!(search.clear(), "");
        assert_eq!(search.poll(500), None);
    }

    #[test]
    fn test_length_counts_characters() {
        let search = debounce();
        assert!(search.qualifies("déc"));
        assert!(!search.qualifies("dé"));
    }
}
