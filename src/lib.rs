//! Arena-based AVL search tree with parent links.
//!
//! A generic binary-search-tree toolkit plus a self-balancing (AVL) layer on
//! top of it. Instead of raw pointers, all node "pointers" are `Option<u32>`
//! indices into a [`Vec`]-backed arena, so subtrees are relinked by moving
//! indices and node identity survives rotations.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] / [`KvNode`] traits, plain [`BstNode`] |
//! | [`util`] | Unbalanced base-tree primitives: find, in-order stepping, raw insert, detach, position swap |
//! | [`avl`] | Balanced node, rotation/rebalance engine, [`AvlMap`] |
//! | [`equal_paths`] | Equal-leaf-depth traversal utility |
//!
//! # Example
//!
//! ```
//! use avl_forest::AvlMap;
//!
//! let mut map = AvlMap::<i32, &str>::new();
//! map.set(10, "a");
//! map.set(20, "b");
//! map.set(30, "c");
//! assert_eq!(map.get(&20), Some(&"b"));
//! assert!(map.del(&10));
//! assert!(!map.del(&10));
//! map.assert_valid().unwrap();
//! ```

pub mod avl;
pub mod equal_paths;
pub mod error;
pub mod types;
pub mod util;

pub use avl::{AvlMap, AvlNode, AvlNodeLike};
pub use equal_paths::equal_paths;
pub use error::KeyError;
pub use types::{BstNode, Comparator, KvNode, Node};
pub use util::{first, last, next, prev, swap};
