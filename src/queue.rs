use crate::describe::Describe;
use crate::error::Result;
use crate::sequence::{typed_sequence, TypedItems};
use crate::streamable::Drainable;

/// FIFO queue guarded by a runtime [`TypeCheck`](crate::TypeCheck).
///
/// Backed by a ring buffer, so `enqueue` and `dequeue` are O(1) amortized.
/// Iterating a queue walks from the newest element to the oldest, which is
/// the reverse of `dequeue` order.
pub struct Queue<T> {
    inner: TypedItems<T>,
}

typed_sequence!(Queue);

impl<T: Describe> Queue<T> {
    /// Appends to the tail. A rejected element leaves the queue untouched.
    pub fn enqueue(&mut self, element: T) -> Result<()> {
        self.inner.push_back(element)
    }
}

impl<T> Queue<T> {
    pub fn dequeue(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.inner.front()
    }
}

impl<T> Drainable for Queue<T> {
    type Item = T;

    fn take_next(&mut self) -> Option<T> {
        self.dequeue()
    }

    fn remaining(&self) -> usize {
        self.size()
    }
}
