//! In-memory identity registry for saved reviews.
//!
//! # Invariants
//! - Entries are added by `save` and removed by `delete`, nothing else.
//! - Read paths (`find_by_id`, `get_all`) never consult the registry, so a
//!   loaded review and a registered one may share an id.

use crate::model::review::{Review, ReviewId};
use std::collections::HashMap;

/// Map from persisted review id to the value that was saved under it.
///
/// Owned by the review repository; hand one in with
/// `SqliteReviewRepository::with_registry` and take it back with
/// `into_registry`.
#[derive(Debug, Clone, Default)]
pub struct ReviewRegistry {
    entries: HashMap<ReviewId, Review>,
}

impl ReviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `review` under `id`, returning the entry it replaced.
    pub fn insert(&mut self, id: ReviewId, review: Review) -> Option<Review> {
        self.entries.insert(id, review)
    }

    pub fn remove(&mut self, id: ReviewId) -> Option<Review> {
        self.entries.remove(&id)
    }

    pub fn get(&self, id: ReviewId) -> Option<&Review> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: ReviewId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> Vec<ReviewId> {
        let mut ids: Vec<ReviewId> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
