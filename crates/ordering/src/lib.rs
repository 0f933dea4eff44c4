//! Ordered-collection reconciliation for manually sorted lists
//!
//! Sketches and team members carry an integer `position` that defines their
//! display sequence. This crate holds the store-agnostic pieces of that
//! model:
//!
//! - [`plan_reorder`]: turns a requested full ordering into per-row position
//!   writes, validating that the request is an exact permutation of the
//!   current sibling set.
//! - [`OrderSync`]: the optimistic client model holding a confirmed ordering
//!   and an optional pending local edit.
//!
//! Append allocation lives with the store: each sibling set carries a
//! high-water counter that only grows, so a vacated position is never handed
//! out again. Positions are dense after a reorder but gaps open up after
//! deletions and are never compacted; only relative comparison matters.

pub mod sync;

pub use sync::OrderSync;

use uuid::Uuid;

/// Errors from reorder planning
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    #[error("reorder request has {requested} ids but the sibling set has {current}")]
    WrongLength { requested: usize, current: usize },

    #[error("reorder request contains duplicate id {0}")]
    DuplicateId(Uuid),

    #[error("reorder request contains unknown id {0}")]
    UnknownId(Uuid),
}

/// A single position write produced by [`plan_reorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionWrite {
    pub id: Uuid,
    pub position: i64,
}

/// Plan a full reorder of a sibling set.
///
/// `requested` must be an exact permutation of `current`; anything else
/// (wrong length, duplicates, ids not in the set) is rejected before any
/// write is issued, so a malformed request can never leave the store with
/// duplicate or stale positions. On success each row's new position is its
/// zero-based index in `requested`.
///
/// The caller applies the writes one row at a time with no cross-row
/// atomicity. A failure partway through leaves a mixed order; re-issuing the
/// same plan is safe because every write is idempotent.
pub fn plan_reorder(current: &[Uuid], requested: &[Uuid]) -> Result<Vec<PositionWrite>, ReorderError> {
    if requested.len() != current.len() {
        return Err(ReorderError::WrongLength {
            requested: requested.len(),
            current: current.len(),
        });
    }

    let current_set: std::collections::HashSet<Uuid> = current.iter().copied().collect();
    let mut seen = std::collections::HashSet::with_capacity(requested.len());
    for id in requested {
        if !current_set.contains(id) {
            return Err(ReorderError::UnknownId(*id));
        }
        if !seen.insert(*id) {
            return Err(ReorderError::DuplicateId(*id));
        }
    }
    // Equal length + no duplicates + every id known means exact permutation.

    Ok(requested
        .iter()
        .enumerate()
        .map(|(index, id)| PositionWrite {
            id: *id,
            position: index as i64,
        })
        .collect())
}
