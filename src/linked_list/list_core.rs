use super::node::Node;
use crate::error::{CollectionError, Result};
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::iter::FusedIterator;

/// Head pointer plus length. Every positional list operation lives here;
/// list variants only decide where `add` puts a value.
///
/// `size` always equals the number of nodes reachable from `head`.
pub struct ListCore<T> {
    head: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> ListCore<T> {
    pub fn new() -> Self {
        ListCore { head: None, size: 0 }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn peek_first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn add_first(&mut self, value: T) {
        let node = Node::with_next(value, self.head.take());
        self.head = Some(Box::new(node));
        self.size += 1;
    }

    pub fn remove_first(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.size -= 1;
            node.value
        })
    }

    /// O(n): walks to the tail before linking.
    pub fn add_last(&mut self, value: T) {
        let node = Box::new(Node::new(value));
        match self.size.checked_sub(1).and_then(|last| self.node_at_mut(last)) {
            Some(tail) => tail.next = Some(node),
            None => self.head = Some(node),
        }
        self.size += 1;
    }

    /// O(n): stops at the second-to-last node.
    pub fn remove_last(&mut self) -> Option<T> {
        let last = self.size.checked_sub(1)?;
        self.remove_at(last).ok()
    }

    /// Inserts so the value ends up at `index`. Valid for `0..=size`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.size {
            return Err(CollectionError::out_of_bounds(index, self.size));
        }
        if index == 0 {
            self.add_first(value);
            return Ok(());
        }

        let size = self.size;
        let prev = self
            .node_at_mut(index - 1)
            .ok_or_else(|| CollectionError::out_of_bounds(index, size))?;
        let node = Node::with_next(value, prev.next.take());
        prev.next = Some(Box::new(node));
        self.size += 1;
        Ok(())
    }

    /// Removes the value at `index`. Valid for `0..size`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let size = self.size;
        if index >= size {
            return Err(CollectionError::out_of_bounds(index, size));
        }
        if index == 0 {
            return self
                .remove_first()
                .ok_or_else(|| CollectionError::out_of_bounds(index, size));
        }

        let prev = self
            .node_at_mut(index - 1)
            .ok_or_else(|| CollectionError::out_of_bounds(index, size))?;
        let mut removed = prev
            .next
            .take()
            .ok_or_else(|| CollectionError::out_of_bounds(index, size))?;
        prev.next = removed.next.take();
        self.size -= 1;
        Ok(removed.value)
    }

    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.size = 0;
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.size,
        }
    }

    /// Writes every value on its own line, head first.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: Display,
    {
        for value in self.iter() {
            writeln!(out, "{value}")?;
        }
        Ok(())
    }

    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut cursor = self.head.as_deref_mut();
        for _ in 0..index {
            cursor = cursor?.next.as_deref_mut();
        }
        cursor
    }
}

impl<T> Default for ListCore<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Iterative drop keeps long lists from overflowing the stack.
impl<T> Drop for ListCore<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for ListCore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// ============================================================================
// Iterators
// ============================================================================

/// Borrowing head-to-tail traversal.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ListCore<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming traversal, head first.
pub struct IntoIter<T> {
    core: ListCore<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(core: ListCore<T>) -> Self {
        IntoIter { core }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.core.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.core.size();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
