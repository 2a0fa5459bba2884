//! Equal-leaf-depth check.
//!
//! A small traversal utility over plain [`Node`] links, independent of the
//! AVL machinery: it answers whether every leaf of a binary tree lies at the
//! same depth.

use crate::types::Node;

/// True when all leaves of the tree rooted at `root` are equidistant from
/// the root. The empty tree qualifies vacuously.
pub fn equal_paths<N: Node>(arena: &[N], root: Option<u32>) -> bool {
    let mut leaf_depth = None;
    depth_check(arena, root, 0, &mut leaf_depth)
}

fn depth_check<N: Node>(
    arena: &[N],
    node: Option<u32>,
    depth: usize,
    leaf_depth: &mut Option<usize>,
) -> bool {
    let Some(i) = node else {
        return true;
    };
    let l = arena[i as usize].l();
    let r = arena[i as usize].r();

    if l.is_none() && r.is_none() {
        // First leaf fixes the required depth; every later leaf must match.
        return match *leaf_depth {
            None => {
                *leaf_depth = Some(depth);
                true
            }
            Some(d) => d == depth,
        };
    }

    depth_check(arena, l, depth + 1, leaf_depth) && depth_check(arena, r, depth + 1, leaf_depth)
}
