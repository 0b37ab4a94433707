//! Singly linked lists.
//!
//! [`LinkedList`] carries the shared contract. A variant supplies `add` and
//! hands out its [`ListCore`]; everything else comes from provided methods, so
//! callers generic over `L: LinkedList<T>` get static dispatch.

mod list_core;
mod node;

pub use self::list_core::{IntoIter, Iter, ListCore};
pub use self::node::Node;

use crate::error::Result;
use std::fmt::{self, Display};
use std::io::{self, Write};

pub trait LinkedList<T> {
    /// Variant-specific insertion.
    fn add(&mut self, value: T);

    fn core(&self) -> &ListCore<T>;

    fn core_mut(&mut self) -> &mut ListCore<T>;

    fn remove_first(&mut self) -> Option<T> {
        self.core_mut().remove_first()
    }

    fn add_last(&mut self, value: T) {
        self.core_mut().add_last(value)
    }

    fn remove_last(&mut self) -> Option<T> {
        self.core_mut().remove_last()
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        self.core_mut().insert_at(index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        self.core_mut().remove_at(index)
    }

    fn clear(&mut self) {
        self.core_mut().clear()
    }

    fn size(&self) -> usize {
        self.core().size()
    }

    fn is_empty(&self) -> bool {
        self.core().is_empty()
    }

    fn peek_first(&self) -> Option<&T> {
        self.core().peek_first()
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.core().index_of(value)
    }

    fn iter(&self) -> Iter<'_, T> {
        self.core().iter()
    }

    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: Display,
    {
        self.core().write_to(out)
    }

    /// Prints every value to stdout, head first.
    fn display(&self)
    where
        T: Display,
    {
        for value in self.iter() {
            println!("{value}");
        }
    }
}

macro_rules! list_variant {
    ($(#[$meta:meta])* $name:ident, |$list:ident, $value:ident| $add:expr) => {
        $(#[$meta])*
        pub struct $name<T> {
            core: ListCore<T>,
        }

        impl<T> $name<T> {
            pub fn new() -> Self {
                $name { core: ListCore::new() }
            }
        }

        impl<T> LinkedList<T> for $name<T> {
            fn add(&mut self, $value: T) {
                let $list = &mut self.core;
                $add
            }

            fn core(&self) -> &ListCore<T> {
                &self.core
            }

            fn core_mut(&mut self) -> &mut ListCore<T> {
                &mut self.core
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: fmt::Debug> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&self.core, f)
            }
        }

        impl<T> FromIterator<T> for $name<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                let mut list = Self::new();
                list.extend(iter);
                list
            }
        }

        impl<T> Extend<T> for $name<T> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                for value in iter {
                    self.add(value);
                }
            }
        }

        impl<'a, T> IntoIterator for &'a $name<T> {
            type Item = &'a T;
            type IntoIter = Iter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.core.iter()
            }
        }

        impl<T> IntoIterator for $name<T> {
            type Item = T;
            type IntoIter = IntoIter<T>;

            fn into_iter(self) -> Self::IntoIter {
                IntoIter::new(self.core)
            }
        }
    };
}

list_variant!(
    /// `add` pushes onto the head, so iteration runs newest first.
    PrependList,
    |core, value| core.add_first(value)
);

list_variant!(
    /// `add` appends at the tail, so iteration follows insertion order.
    AppendList,
    |core, value| core.add_last(value)
);
