//! Self-balancing (AVL) search tree layered on the base primitives in
//! [`crate::util`].

pub mod map;
pub mod types;
pub mod util;

pub use map::AvlMap;
pub use types::{AvlNode, AvlNodeLike};
pub use util::{
    assert_avl_tree, balance_of, height, insert_left, insert_right, node_swap, print, rebalance,
    remove, rotate_left, rotate_right,
};
