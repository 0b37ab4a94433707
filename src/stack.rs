use crate::describe::Describe;
use crate::error::Result;
use crate::sequence::{typed_sequence, TypedItems};
use crate::streamable::Drainable;

/// LIFO stack guarded by a runtime [`TypeCheck`](crate::TypeCheck).
///
/// The top is the tail of the backing order. Iteration runs top to bottom,
/// the same order `pop` would produce.
pub struct Stack<T> {
    inner: TypedItems<T>,
}

typed_sequence!(Stack);

impl<T: Describe> Stack<T> {
    /// Places `element` on top. A rejected element leaves the stack untouched.
    pub fn push(&mut self, element: T) -> Result<()> {
        self.inner.push_back(element)
    }
}

impl<T> Stack<T> {
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_back()
    }

    pub fn peek(&self) -> Option<&T> {
        self.inner.back()
    }
}

impl<T> Drainable for Stack<T> {
    type Item = T;

    fn take_next(&mut self) -> Option<T> {
        self.pop()
    }

    fn remaining(&self) -> usize {
        self.size()
    }
}
