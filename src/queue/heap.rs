//! Array-backed max-heap with a synchronized id index.

use std::collections::HashMap;

use super::{KeyChange, Prioritized, QueueError};
use crate::models::TaskId;

/// A binary max-heap over [`Prioritized`] items, addressable by id.
///
/// # Invariants
///
/// - For every position `i > 0` with parent `p = (i-1)/2`:
///   `heap[p].priority() >= heap[i].priority()`
/// - `index[heap[i].id()] == i` for every position, and `index` holds
///   no other entries
///
/// Ties are broken by heap structure; equal priorities have no FIFO
/// or LIFO guarantee.
///
/// # Example
///
/// ```
/// use u_taskqueue::models::Task;
/// use u_taskqueue::queue::PriorityQueue;
///
/// let mut pq = PriorityQueue::new();
/// pq.insert(Task::new(1, 3)).unwrap();
/// pq.insert(Task::new(2, 2)).unwrap();
/// pq.increase_key(2, 4).unwrap();
///
/// let top = pq.extract_max().unwrap();
/// assert_eq!(top.task_id(), 2);
/// assert_eq!(top.priority(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<T>,
    index: HashMap<TaskId, usize>,
}

impl<T: Prioritized> PriorityQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a queue by inserting every item in order.
    ///
    /// Fails on the first duplicate id.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Result<Self, QueueError> {
        let mut queue = Self::new();
        for item in items {
            queue.insert(item)?;
        }
        Ok(queue)
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Highest-priority item, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Whether an item with this id is queued.
    #[inline]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.index.contains_key(&task_id)
    }

    /// Looks up a queued item by id.
    pub fn get(&self, task_id: TaskId) -> Option<&T> {
        self.index.get(&task_id).map(|&pos| &self.heap[pos])
    }

    /// Iterates over queued items in heap (not priority) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.iter()
    }

    /// Inserts an item and sifts it up.
    ///
    /// # Errors
    /// [`QueueError::DuplicateId`] if an item with the same id is queued.
    pub fn insert(&mut self, item: T) -> Result<(), QueueError> {
        let task_id = item.id();
        if self.index.contains_key(&task_id) {
            return Err(QueueError::DuplicateId { task_id });
        }

        let pos = self.heap.len();
        self.index.insert(task_id, pos);
        self.heap.push(item);
        self.sift_up(pos);
        Ok(())
    }

    /// Removes and returns the highest-priority item, or `None` if empty.
    pub fn extract_max(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }

        // Moves the last item into the root slot
        let max = self.heap.swap_remove(0);
        self.index.remove(&max.id());

        if let Some(root) = self.heap.first() {
            self.index.insert(root.id(), 0);
            self.sift_down(0);
        }
        Some(max)
    }

    /// Raises the priority of a queued item and sifts it up.
    ///
    /// # Errors
    /// - [`QueueError::NotFound`] if no item has this id.
    /// - [`QueueError::InvalidArgument`] unless `new_priority` is strictly
    ///   greater than the current priority.
    pub fn increase_key(&mut self, task_id: TaskId, new_priority: i32) -> Result<(), QueueError> {
        let pos = self.position(task_id)?;
        let current = self.heap[pos].priority();
        if new_priority <= current {
            return Err(QueueError::InvalidArgument {
                task_id,
                current,
                requested: new_priority,
                change: KeyChange::Increase,
            });
        }

        self.heap[pos].set_priority(new_priority);
        self.sift_up(pos);
        Ok(())
    }

    /// Lowers the priority of a queued item and sifts it down.
    ///
    /// # Errors
    /// - [`QueueError::NotFound`] if no item has this id.
    /// - [`QueueError::InvalidArgument`] unless `new_priority` is strictly
    ///   lower than the current priority.
    pub fn decrease_key(&mut self, task_id: TaskId, new_priority: i32) -> Result<(), QueueError> {
        let pos = self.position(task_id)?;
        let current = self.heap[pos].priority();
        if new_priority >= current {
            return Err(QueueError::InvalidArgument {
                task_id,
                current,
                requested: new_priority,
                change: KeyChange::Decrease,
            });
        }

        self.heap[pos].set_priority(new_priority);
        self.sift_down(pos);
        Ok(())
    }

    /// Removes every item, returning them in heap order.
    pub fn drain(&mut self) -> Vec<T> {
        self.index.clear();
        std::mem::take(&mut self.heap)
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    /// Consumes the queue, returning items by descending priority.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Some(item) = self.extract_max() {
            sorted.push(item);
        }
        sorted
    }

    /// Verifies the heap property and index consistency.
    ///
    /// O(n). Intended for tests and debug assertions.
    pub fn check_invariants(&self) -> bool {
        if self.index.len() != self.heap.len() {
            return false;
        }
        self.heap.iter().enumerate().all(|(i, item)| {
            let indexed = self.index.get(&item.id()) == Some(&i);
            let ordered = i == 0 || self.heap[(i - 1) / 2].priority() >= item.priority();
            indexed && ordered
        })
    }

    fn position(&self, task_id: TaskId) -> Result<usize, QueueError> {
        self.index
            .get(&task_id)
            .copied()
            .ok_or(QueueError::NotFound { task_id })
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos].priority() > self.heap[parent].priority() {
                self.swap_positions(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = 2 * pos + 2;
            let mut largest = pos;

            if left < len && self.heap[left].priority() > self.heap[largest].priority() {
                largest = left;
            }
            if right < len && self.heap[right].priority() > self.heap[largest].priority() {
                largest = right;
            }

            if largest == pos {
                break;
            }

            self.swap_positions(pos, largest);
            pos = largest;
        }
    }

    /// Swaps two slots and rewrites both index entries.
    fn swap_positions(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.index.insert(self.heap[a].id(), a);
        self.index.insert(self.heap[b].id(), b);
    }
}

impl<T: Prioritized> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
