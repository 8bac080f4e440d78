//! `BoundedQueue`: a FIFO that refuses to grow past its capacity.

use std::collections::VecDeque;

/// Capacity-limited FIFO used for dispenser mini-queues.
///
/// [`push`][Self::push] hands the item back instead of overflowing, so the
/// length can never exceed the capacity given to [`new`][Self::new].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedQueue<T> {
    items:    VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self { items: VecDeque::new(), capacity }
    }

    /// Append `item` at the back, or return it if the queue is full.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push_back(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }
}
