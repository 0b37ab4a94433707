//! Storage and operations shared by `Queue` and `Stack`.
//!
//! Both keep their elements in insertion order inside a `VecDeque`, so the
//! only difference between them is which end `dequeue`/`pop` take from.

use crate::describe::{Describe, TypeCheck};
use crate::error::{Result, Stage};
use itertools::Itertools;
use serde::ser::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::{vec_deque, VecDeque};
use std::fmt::{self, Display};
use std::iter::{FusedIterator, Rev};

pub(crate) struct TypedItems<T> {
    items: VecDeque<T>,
    check: TypeCheck<T>,
}

impl<T> TypedItems<T> {
    pub(crate) fn empty(check: TypeCheck<T>) -> Self {
        TypedItems {
            items: VecDeque::new(),
            check,
        }
    }

    pub(crate) fn check(&self) -> &TypeCheck<T> {
        &self.check
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub(crate) fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub(crate) fn reverse(&mut self) {
        self.items.make_contiguous().reverse();
    }

    /// Newest element first.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter().rev(),
        }
    }
}

impl<T: Describe> TypedItems<T> {
    pub(crate) fn with_items<I>(items: I, check: TypeCheck<T>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let items: VecDeque<T> = items.into_iter().collect();
        check.validate_all(&items, Stage::Initialization)?;
        Ok(TypedItems { items, check })
    }

    pub(crate) fn push_back(&mut self, element: T) -> Result<()> {
        self.check.validate(&element, Stage::Insert)?;
        self.items.push_back(element);
        Ok(())
    }

    /// All-or-nothing: nothing is appended unless every element passes.
    pub(crate) fn extend_checked<I>(&mut self, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let batch: Vec<T> = elements.into_iter().collect();
        self.check.validate_all(&batch, Stage::Batch)?;
        self.items.extend(batch);
        Ok(())
    }
}

impl<T: Clone> TypedItems<T> {
    pub(crate) fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: Describe + Clone> TypedItems<T> {
    pub(crate) fn copy(&self) -> Result<Self> {
        Self::with_items(self.items.iter().cloned(), self.check.clone())
    }
}

impl<T: PartialEq> TypedItems<T> {
    pub(crate) fn contains(&self, element: &T) -> bool {
        self.items.iter().any(|item| same_value(item, element))
    }

    /// Keeps the first occurrence of every distinct value, in original order.
    ///
    /// `T` is only `PartialEq`, so survivors are scanned linearly: O(n²).
    pub(crate) fn dedup(&mut self) {
        let mut kept: Vec<T> = Vec::with_capacity(self.items.len());
        for item in self.items.drain(..) {
            if !kept.iter().any(|seen| same_value(seen, &item)) {
                kept.push(item);
            }
        }
        self.items = kept.into();
    }
}

impl<T: PartialOrd> TypedItems<T> {
    /// Stable sort. Values that cannot be ordered even against themselves
    /// (NaN) tie with each other and stay at the tail in either direction,
    /// so the comparison is a total order.
    pub(crate) fn sort(&mut self, ascending: bool) {
        self.items.make_contiguous().sort_by(|a, b| {
            match (is_unordered(a), is_unordered(b)) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => {
                    let ordering = a.partial_cmp(b).unwrap_or(Ordering::Equal);
                    if ascending {
                        ordering
                    } else {
                        ordering.reverse()
                    }
                }
            }
        });
    }
}

fn is_unordered<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_none()
}

impl<T: Display> Display for TypedItems<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.items.iter().format(", "))
    }
}

impl<T: fmt::Debug> fmt::Debug for TypedItems<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedItems")
            .field("items", &self.items)
            .field("expected", &self.check.expected())
            .finish()
    }
}

impl<T: Serialize> Serialize for TypedItems<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

/// Value equality that also treats self-unequal values (NaN) as one value,
/// matching how a set would hold them.
fn same_value<T: PartialEq>(a: &T, b: &T) -> bool {
    #[allow(clippy::eq_op)]
    let unordered = a != a && b != b;
    a == b || unordered
}

// ============================================================================
// Iteration: newest element first
// ============================================================================

pub struct Iter<'a, T> {
    inner: Rev<vec_deque::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// ============================================================================
// Shared public surface for Queue and Stack
// ============================================================================

macro_rules! typed_sequence {
    ($name:ident) => {
        impl<T: $crate::describe::Describe + 'static> $name<T> {
            /// Empty container guarded by the numeric check.
            pub fn new() -> Self {
                Self::with_type_check($crate::describe::TypeCheck::numeric())
            }

            /// Builds from `items`, guarded by the numeric check.
            pub fn from_items<I>(items: I) -> $crate::error::Result<Self>
            where
                I: IntoIterator<Item = T>,
            {
                Self::with_items(items, $crate::describe::TypeCheck::numeric())
            }
        }

        impl<T: $crate::describe::Describe> $name<T> {
            pub fn with_type_check(check: $crate::describe::TypeCheck<T>) -> Self {
                $name {
                    inner: $crate::sequence::TypedItems::empty(check),
                }
            }

            /// Fails without building anything if any item is rejected.
            pub fn with_items<I>(items: I, check: $crate::describe::TypeCheck<T>) -> $crate::error::Result<Self>
            where
                I: IntoIterator<Item = T>,
            {
                Ok($name {
                    inner: $crate::sequence::TypedItems::with_items(items, check)?,
                })
            }

            /// Appends every element, or none of them if any is rejected.
            pub fn from_array<I>(&mut self, elements: I) -> $crate::error::Result<()>
            where
                I: IntoIterator<Item = T>,
            {
                self.inner.extend_checked(elements)
            }
        }

        impl<T> $name<T> {
            pub fn is_empty(&self) -> bool {
                self.inner.is_empty()
            }

            pub fn size(&self) -> usize {
                self.inner.len()
            }

            /// Removes every element; the type check stays in place.
            pub fn clear(&mut self) {
                self.inner.clear();
            }

            pub fn reverse(&mut self) {
                self.inner.reverse();
            }

            pub fn type_check(&self) -> &$crate::describe::TypeCheck<T> {
                self.inner.check()
            }

            /// Walks from the most recently inserted element back to the oldest.
            pub fn iter(&self) -> $crate::sequence::Iter<'_, T> {
                self.inner.iter()
            }
        }

        impl<T: Clone> $name<T> {
            /// Snapshot in insertion order.
            pub fn get_items(&self) -> Vec<T> {
                self.inner.to_vec()
            }

            pub fn to_array(&self) -> Vec<T> {
                self.inner.to_vec()
            }
        }

        impl<T: $crate::describe::Describe + Clone> $name<T> {
            /// Independent container with the same items and type check.
            pub fn copy(&self) -> $crate::error::Result<Self> {
                Ok($name {
                    inner: self.inner.copy()?,
                })
            }
        }

        impl<T: PartialEq> $name<T> {
            pub fn contains(&self, element: &T) -> bool {
                self.inner.contains(element)
            }

            /// Drops repeated values, keeping the first occurrence of each.
            pub fn migrate_to_set(&mut self) {
                self.inner.dedup();
            }
        }

        impl<T: PartialOrd> $name<T> {
            pub fn sort(&mut self, ascending: bool) {
                self.inner.sort(ascending);
            }
        }

        impl $name<serde_json::Value> {
            /// Parses a JSON array and validates it with the numeric check.
            pub fn from_json(text: &str) -> $crate::error::Result<Self> {
                let items: Vec<serde_json::Value> = serde_json::from_str(text)?;
                Self::from_items(items)
            }
        }

        impl<T: $crate::describe::Describe + 'static> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: $crate::describe::Describe + 'static> TryFrom<Vec<T>> for $name<T> {
            type Error = $crate::error::CollectionError;

            fn try_from(items: Vec<T>) -> $crate::error::Result<Self> {
                Self::from_items(items)
            }
        }

        impl<T: std::fmt::Display> std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.inner, f)
            }
        }

        impl<T: std::fmt::Debug> std::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.inner).finish()
            }
        }

        impl<T: serde::Serialize> serde::Serialize for $name<T> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.inner, serializer)
            }
        }

        impl<'a, T> IntoIterator for &'a $name<T> {
            type Item = &'a T;
            type IntoIter = $crate::sequence::Iter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }
    };
}

pub(crate) use typed_sequence;
