//! # Linear Collections
//!
//! Generic linear containers with array-style conveniences:
//!
//! - [`Queue`] (FIFO) and [`Stack`] (LIFO), each guarded by a runtime
//!   [`TypeCheck`] and offering sort, reverse, dedup, copy and iteration
//! - [`StreamableQueue`] / [`StreamableStack`], destructive pull-based views
//!   that drain a container one string at a time
//! - [`LinkedList`], a singly linked list contract with [`PrependList`] and
//!   [`AppendList`] variants
//! - [`ContainerConfig`], a TOML/JSON description used to build containers
//!   from files
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enum
//! - `serde` / `serde_json` / `toml` - serialization and config files
//! - `itertools` - string joining
//! - `futures` - async view of streams

pub mod config;
pub mod describe;
pub mod error;
pub mod linked_list;
pub mod queue;
mod sequence;
pub mod stack;
pub mod streamable;

pub use config::{Container, ContainerConfig, ContainerKind, ElementType};
pub use describe::{Describe, TypeCheck};
pub use error::{CollectionError, Result, Stage};
pub use linked_list::{AppendList, LinkedList, ListCore, Node, PrependList};
pub use queue::Queue;
pub use sequence::Iter;
pub use stack::Stack;
pub use streamable::{Drainable, ItemStream, Streamable, StreamableQueue, StreamableStack};
