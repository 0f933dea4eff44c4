//! Optimistic pending/confirmed ordering model
//!
//! A client dragging rows around holds a local candidate ordering while the
//! reorder call is in flight. The authoritative list can change underneath
//! it at any time (another tab, another user). `OrderSync` keeps the two as
//! distinct values and reconciles by identity-sequence equality: an echo of
//! the ordering the client already holds never clobbers a local edit, a
//! genuinely different server ordering always wins.
//!
//! This is last-writer-wins convergence, not conflict resolution. Two
//! clients reordering at once race per row and the later writes win.

/// Synchronized ordering state for one sibling set.
///
/// `Id` is the identity type of the ordered rows (a `Uuid` in practice;
/// generic so tests can use anything comparable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSync<Id> {
    confirmed: Vec<Id>,
    pending: Option<Vec<Id>>,
}

impl<Id: Clone + PartialEq> OrderSync<Id> {
    /// Start from a server-confirmed ordering with no local edit.
    pub fn new(confirmed: Vec<Id>) -> Self {
        Self {
            confirmed,
            pending: None,
        }
    }

    /// Install a local candidate ordering (e.g. mid-drag), replacing any
    /// previous pending edit.
    pub fn begin_local(&mut self, ordering: Vec<Id>) {
        self.pending = Some(ordering);
    }

    /// Whether a local edit is in flight.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed in the latest authoritative ordering.
    ///
    /// If it equals what we currently display (identity-sequence equality),
    /// it is an echo of our own write: keep local state as-is so the UI does
    /// not flicker. If it differs, the server wins: drop any pending edit
    /// and adopt the confirmed ordering. Returns `true` when the effective
    /// ordering changed.
    pub fn observe_confirmed(&mut self, ordering: Vec<Id>) -> bool {
        if self.effective() == ordering.as_slice() {
            // Echo update: record it as confirmed, keep displaying the same
            // sequence.
            self.confirmed = ordering;
            self.pending = None;
            return false;
        }

        self.confirmed = ordering;
        self.pending = None;
        true
    }

    /// The ordering to display: pending if a local edit is in flight,
    /// otherwise the last confirmed one.
    pub fn effective(&self) -> &[Id] {
        self.pending.as_deref().unwrap_or(&self.confirmed)
    }

    /// The last server-confirmed ordering.
    pub fn confirmed(&self) -> &[Id] {
        &self.confirmed
    }
}
