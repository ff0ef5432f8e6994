//! In-memory ordered index implemented using [red-black][rbtree] tree.
//!
//! - Each entry in [RbTree] instance correspond to a {Key, Value} pair.
//! - Ordering is decided by a comparator supplied at construction.
//! - CRUD operations, via insert(), search(), delete() api.
//! - Full table scan in sort order, breadth-first walk over nodes.
//! - Diagnostics, via black_height() and validate() api.
//! - Not thread safe, callers shall serialize mutations and reads.
//!
//! ```
//! use rbtree_index::RbTree;
//!
//! let mut index = RbTree::new("myinstance", |a: &i64, b: &i64| a.cmp(b));
//! index.insert(10, "ten").unwrap();
//! index.insert(20, "twenty").unwrap();
//! assert_eq!(index.search(&10), Some("ten"));
//!
//! assert_eq!(index.delete(&10), Some("ten"));
//! assert_eq!(index.search(&10), None);
//! assert!(index.validate().is_ok());
//! ```
//!
//! [rbtree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

mod depth;
mod error;
mod rbtree;

pub use crate::depth::Depth;
pub use crate::error::{Error, Result};
pub use crate::rbtree::{Iter, Node, RbTree, Stats, BLACK_HEIGHT_MISMATCH};
