//! Ordering of overlapping cart requests.
//!
//! Every operation takes a ticket when it starts. When its response
//! arrives, the ticket decides whether the result may still be applied:
//!
//! - a sync snapshot is overtaken once a mutation *confirmed* after it was
//!   issued; failed requests never overtake anything;
//! - removes and local quantity sets *reset* a product; an add or remove
//!   older than the latest reset of its product is dropped;
//! - adds are deltas and commute with each other, so they never reset;
//! - local quantity sets are not on the server, so they are replayed on
//!   top of any snapshot issued before them.

use std::collections::HashMap;

use crate::ids::ProductId;

/// Position of an operation in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Ticket(u64);

#[derive(Debug, Default)]
pub(crate) struct Sequencer {
    issued: u64,
    confirmed_at: u64,
    synced_at: u64,
    resets: HashMap<ProductId, u64>,
    edits: HashMap<ProductId, (u64, u32)>,
}

impl Sequencer {
    fn next(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Ticket for a server snapshot fetch.
    pub(crate) fn issue_sync(&mut self) -> Ticket {
        Ticket(self.next())
    }

    /// Ticket for an operation that changes the cart.
    pub(crate) fn issue_mutation(&mut self) -> Ticket {
        Ticket(self.next())
    }

    /// Record that the server accepted a mutation.
    pub(crate) fn confirm_mutation(&mut self) {
        self.confirmed_at = self.next();
    }

    /// Whether a snapshot fetched under `ticket` still reflects every
    /// mutation the server confirmed so far.
    pub(crate) fn sync_is_current(&self, ticket: Ticket) -> bool {
        self.confirmed_at < ticket.0
    }

    /// Record that the snapshot fetched under `ticket` replaced local state,
    /// returning the local edits made after it was issued.
    pub(crate) fn mark_synced(&mut self, ticket: Ticket) -> Vec<(ProductId, u32)> {
        self.synced_at = self.synced_at.max(ticket.0);
        self.resets.clear();
        let mut replay: Vec<_> = self
            .edits
            .drain()
            .filter(|(_, (at, _))| *at > ticket.0)
            .map(|(id, (_, quantity))| (id, quantity))
            .collect();
        replay.sort();
        replay
    }

    /// Whether an operation issued under `ticket` started before the last
    /// applied snapshot was issued.
    pub(crate) fn predates_sync(&self, ticket: Ticket) -> bool {
        ticket.0 < self.synced_at
    }

    /// Whether a response for `product_id` issued under `ticket` has been
    /// overtaken by a later reset.
    pub(crate) fn is_stale(&self, product_id: &ProductId, ticket: Ticket) -> bool {
        self.resets
            .get(product_id)
            .is_some_and(|&reset| ticket.0 < reset)
    }

    /// Record a reset of `product_id` at `ticket`.
    pub(crate) fn mark_reset(&mut self, product_id: &ProductId, ticket: Ticket) {
        let entry = self.resets.entry(product_id.clone()).or_insert(0);
        *entry = (*entry).max(ticket.0);
        if self
            .edits
            .get(product_id)
            .is_some_and(|&(at, _)| at < ticket.0)
        {
            self.edits.remove(product_id);
        }
    }

    /// Record a local quantity set, which also resets the product.
    pub(crate) fn record_edit(&mut self, product_id: &ProductId, quantity: u32) {
        let ticket = self.issue_mutation();
        self.mark_reset(product_id, ticket);
        self.edits.insert(product_id.clone(), (ticket.0, quantity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn test_tickets_increase() {
        let mut seq = Sequencer::default();
        let a = seq.issue_sync();
        let b = seq.issue_mutation();
        assert!(a < b);
    }

    #[test]
    fn test_unconfirmed_mutation_keeps_sync_current() {
        let mut seq = Sequencer::default();
        let sync = seq.issue_sync();
        seq.issue_mutation();
        assert!(seq.sync_is_current(sync));
    }

    #[test]
    fn test_sync_overtaken_by_confirmed_mutation() {
        let mut seq = Sequencer::default();
        let sync = seq.issue_sync();
        seq.issue_mutation();
        seq.confirm_mutation();
        assert!(!seq.sync_is_current(sync));
    }

    #[test]
    fn test_sync_after_confirmation_is_current() {
        let mut seq = Sequencer::default();
        seq.issue_mutation();
        seq.confirm_mutation();
        let sync = seq.issue_sync();
        assert!(seq.sync_is_current(sync));
    }

    #[test]
    fn test_reset_makes_older_tickets_stale() {
        let mut seq = Sequencer::default();
        let add = seq.issue_mutation();
        let remove = seq.issue_mutation();
        seq.mark_reset(&pid("p1"), remove);

        assert!(seq.is_stale(&pid("p1"), add));
        assert!(!seq.is_stale(&pid("p2"), add));
        assert!(!seq.is_stale(&pid("p1"), remove));
    }

    #[test]
    fn test_reset_never_moves_backwards() {
        let mut seq = Sequencer::default();
        let old = seq.issue_mutation();
        let new = seq.issue_mutation();
        seq.mark_reset(&pid("p1"), new);
        seq.mark_reset(&pid("p1"), old);

        assert!(seq.is_stale(&pid("p1"), old));
    }

    #[test]
    fn test_sync_clears_resets_and_marks_older_tickets() {
        let mut seq = Sequencer::default();
        let add = seq.issue_mutation();
        let remove = seq.issue_mutation();
        seq.mark_reset(&pid("p1"), remove);
        let sync = seq.issue_sync();
        seq.mark_synced(sync);

        assert!(!seq.is_stale(&pid("p1"), add));
        assert!(seq.predates_sync(add));
        assert!(!seq.predates_sync(sync));
    }

    #[test]
    fn test_edits_after_sync_are_replayed() {
        let mut seq = Sequencer::default();
        seq.record_edit(&pid("old"), 2);
        let sync = seq.issue_sync();
        seq.record_edit(&pid("new"), 5);

        assert_eq!(seq.mark_synced(sync), vec![(pid("new"), 5)]);

        let later = seq.issue_sync();
        assert!(seq.mark_synced(later).is_empty());
    }

    #[test]
    fn test_remove_drops_older_edit() {
        let mut seq = Sequencer::default();
        let sync = seq.issue_sync();
        seq.record_edit(&pid("p1"), 3);
        let remove = seq.issue_mutation();
        seq.mark_reset(&pid("p1"), remove);

        assert!(seq.mark_synced(sync).is_empty());
    }
}
