//! Destructive, pull-based views over a queue or stack.
//!
//! A [`Streamable`] borrows its container; every pull on the
//! [`ItemStream`] it creates removes one element (FIFO for a queue, LIFO for
//! a stack) and yields its string form. When the container runs dry the
//! stream ends, once, and stays ended. `ItemStream::into_stream` adapts the
//! same pulls to `futures::Stream`.

use crate::queue::Queue;
use crate::stack::Stack;
use futures::stream;
use std::fmt::Display;
use std::iter::FusedIterator;

/// A container that can hand out its elements one at a time in its own
/// removal order.
pub trait Drainable {
    type Item;

    fn take_next(&mut self) -> Option<Self::Item>;

    fn remaining(&self) -> usize;
}

pub struct Streamable<'a, S> {
    inner: &'a mut S,
}

pub type StreamableQueue<'a, T> = Streamable<'a, Queue<T>>;
pub type StreamableStack<'a, T> = Streamable<'a, Stack<T>>;

impl<'a, S: Drainable> Streamable<'a, S> {
    pub fn new(inner: &'a mut S) -> Self {
        Streamable { inner }
    }

    /// Every call gets a fresh stream over whatever is left in the container.
    pub fn create_stream(&mut self) -> ItemStream<'_, S> {
        ItemStream {
            source: &mut *self.inner,
            finished: false,
        }
    }

    pub fn get_ref(&self) -> &S {
        &*self.inner
    }

    pub fn into_inner(self) -> &'a mut S {
        self.inner
    }
}

pub struct ItemStream<'s, S> {
    source: &'s mut S,
    finished: bool,
}

impl<'s, S> ItemStream<'s, S>
where
    S: Drainable,
    S::Item: Display,
{
    /// Async view for `futures` consumers. Production stays synchronous, so
    /// every poll is immediately ready.
    pub fn into_stream(self) -> stream::Iter<Self> {
        stream::iter(self)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn pull(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        match self.source.take_next() {
            Some(item) => Some(item.to_string()),
            None => {
                self.finished = true;
                None
            }
        }
    }
}

impl<S> Iterator for ItemStream<'_, S>
where
    S: Drainable,
    S::Item: Display,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished { 0 } else { self.source.remaining() };
        (remaining, Some(remaining))
    }
}

impl<S> FusedIterator for ItemStream<'_, S>
where
    S: Drainable,
    S::Item: Display,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streamable_queue_drains_fifo() {
        let mut queue = Queue::from_items(vec![1, 2, 3]).unwrap();
        let mut streamable = StreamableQueue::new(&mut queue);
        let drained: Vec<String> = streamable.create_stream().collect();
        assert_eq!(drained, vec!["1", "2", "3"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_streamable_stack_drains_lifo() {
        let mut stack = Stack::from_items(vec![1, 2, 3]).unwrap();
        let mut streamable = StreamableStack::new(&mut stack);
        let drained: Vec<String> = streamable.create_stream().collect();
        assert_eq!(drained, vec!["3", "2", "1"]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_empty_container_ends_immediately() {
        let mut stack: Stack<i32> = Stack::new();
        let mut streamable = Streamable::new(&mut stack);
        let mut stream = streamable.create_stream();
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn test_stream_is_not_restartable_once_drained() {
        let mut queue = Queue::from_items(vec![7]).unwrap();
        let mut streamable = Streamable::new(&mut queue);
        assert_eq!(streamable.create_stream().count(), 1);
        assert_eq!(streamable.create_stream().next(), None);
    }

    #[test]
    fn test_stopping_early_leaves_rest_in_place() {
        let mut queue = Queue::from_items(vec![1, 2, 3, 4]).unwrap();
        let mut streamable = Streamable::new(&mut queue);
        let first_two: Vec<String> = streamable.create_stream().take(2).collect();
        assert_eq!(first_two, vec!["1", "2"]);
        assert_eq!(streamable.get_ref().size(), 2);
        let rest = streamable.into_inner();
        assert_eq!(rest.get_items(), vec![3, 4]);
    }

    #[test]
    fn test_size_hint_tracks_container() {
        let mut stack = Stack::from_items(vec![1, 2]).unwrap();
        let mut streamable = Streamable::new(&mut stack);
        let mut stream = streamable.create_stream();
        assert_eq!(stream.size_hint(), (2, Some(2)));
        stream.next();
        assert_eq!(stream.size_hint(), (1, Some(1)));
        stream.next();
        stream.next();
        assert_eq!(stream.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_is_finished_after_end() {
        let mut queue = Queue::from_items(vec![1]).unwrap();
        let mut streamable = Streamable::new(&mut queue);
        let mut stream = streamable.create_stream();
        assert!(!stream.is_finished());
        assert_eq!(stream.next().as_deref(), Some("1"));
        assert_eq!(stream.next(), None);
        assert!(stream.is_finished());
    }

    mod async_consumers {
        use super::super::*;
        use futures::StreamExt;

        #[tokio::test]
        async fn test_async_consumer_sees_end_once() {
            let mut queue = Queue::from_items(vec![1, 2, 3]).unwrap();
            let mut streamable = Streamable::new(&mut queue);
            let mut stream = streamable.create_stream().into_stream();

            let mut chunks = Vec::new();
            while let Some(chunk) = stream.next().await {
                chunks.push(chunk);
            }

            assert_eq!(chunks, vec!["1", "2", "3"]);
            assert_eq!(stream.next().await, None);
        }

        #[tokio::test]
        async fn test_async_empty_stack_emits_nothing() {
            let mut stack: Stack<i32> = Stack::from_items(Vec::new()).unwrap();
            let mut streamable = Streamable::new(&mut stack);
            let collected: Vec<String> = streamable.create_stream().into_stream().collect().await;
            assert!(collected.is_empty());
        }

        #[tokio::test]
        async fn test_async_stack_order() {
            let mut stack = Stack::from_items(vec![1, 2, 3]).unwrap();
            let mut streamable = StreamableStack::new(&mut stack);
            let collected: Vec<String> = streamable.create_stream().into_stream().collect().await;
            assert_eq!(collected, vec!["3", "2", "1"]);
        }
    }
}
