//! Keyed binary max-heap priority queue.
//!
//! [`PriorityQueue`] stores items in a flat `Vec` laid out as a complete
//! binary tree and keeps a `TaskId → position` index synchronized with
//! every swap, so keyed priority updates cost O(log n).
//!
//! The heap never reads item fields directly. Items expose their key and
//! priority through the [`Prioritized`] trait.
//!
//! # Complexity
//!
//! | Operation | Time |
//! |-----------|------|
//! | insert | O(log n) |
//! | extract_max | O(log n) |
//! | increase_key / decrease_key | O(log n) |
//! | peek / contains / is_empty | O(1) |
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6.5 (Priority Queues)

mod error;
mod heap;

pub use error::{KeyChange, QueueError};
pub use heap::PriorityQueue;

use crate::models::TaskId;

/// Ordering capability required by [`PriorityQueue`].
///
/// Higher priority values are extracted first. `set_priority` is only
/// called by the queue while it restores the heap property; callers
/// change priorities through `increase_key`/`decrease_key`.
pub trait Prioritized {
    /// Stable key used for keyed updates. Must be unique within a queue.
    fn id(&self) -> TaskId;

    /// Current priority.
    fn priority(&self) -> i32;

    /// Overwrites the priority. Invoked by the queue only.
    fn set_priority(&mut self, priority: i32);
}
