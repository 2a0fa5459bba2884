//! AVL engine: insertion, removal, rotation, and rebalancing.
//!
//! All functions operate on a caller-owned arena and thread the tree root
//! through explicitly, returning the (possibly changed) root. Balance is
//! recomputed on demand by full recursive height traversal rather than
//! maintained incrementally; the stored balance factor on each node is
//! refreshed by rotations and exchanged by [`node_swap`], and checked
//! against the recursive definition by [`assert_avl_tree`].

use std::fmt::Debug;

use crate::util::{self, first, get_l, get_p, get_r, next, set_l, set_p, set_r, swap};

use super::types::AvlNodeLike;

#[inline]
fn bf<K, V, N>(arena: &[N], i: u32) -> i8
where
    N: AvlNodeLike<K, V>,
{
    arena[i as usize].bf()
}

#[inline]
fn set_bf<K, V, N>(arena: &mut [N], i: u32, v: i8)
where
    N: AvlNodeLike<K, V>,
{
    arena[i as usize].set_bf(v);
}

/// Height of the subtree rooted at `node`, by full recursive traversal.
/// The empty subtree has height 0.
pub fn height<K, V, N>(arena: &[N], node: Option<u32>) -> usize
where
    N: AvlNodeLike<K, V>,
{
    let Some(i) = node else {
        return 0;
    };
    let l = height(arena, get_l(arena, i));
    let r = height(arena, get_r(arena, i));
    1 + l.max(r)
}

/// Live balance factor of `node`: `height(left) - height(right)`, zero for
/// the empty subtree.
pub fn balance_of<K, V, N>(arena: &[N], node: Option<u32>) -> i8
where
    N: AvlNodeLike<K, V>,
{
    let Some(i) = node else {
        return 0;
    };
    let l = height(arena, get_l(arena, i)) as i32;
    let r = height(arena, get_r(arena, i)) as i32;
    (l - r) as i8
}

/// Left rotation: promotes `old_root`'s right child into `old_root`'s
/// position. Returns the (possibly new) tree root.
pub fn rotate_left<K, V, N>(arena: &mut [N], mut root: u32, old_root: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let new_root = get_r(arena, old_root).expect("left rotation requires a right child");

    // The promoted node's inner subtree crosses over to the demoted side.
    let inner = get_l(arena, new_root);
    set_r(arena, old_root, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(old_root));
    }

    let parent = get_p(arena, old_root);
    set_p(arena, new_root, parent);
    match parent {
        None => root = new_root,
        Some(parent) => {
            if get_l(arena, parent) == Some(old_root) {
                set_l(arena, parent, Some(new_root));
            } else {
                set_r(arena, parent, Some(new_root));
            }
        }
    }

    set_l(arena, new_root, Some(old_root));
    set_p(arena, old_root, Some(new_root));

    let b = balance_of(arena, Some(old_root));
    set_bf(arena, old_root, b);
    let b = balance_of(arena, Some(new_root));
    set_bf(arena, new_root, b);

    root
}

/// Right rotation, the mirror of [`rotate_left`]: promotes `old_root`'s
/// left child. Returns the (possibly new) tree root.
pub fn rotate_right<K, V, N>(arena: &mut [N], mut root: u32, old_root: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let new_root = get_l(arena, old_root).expect("right rotation requires a left child");

    let inner = get_r(arena, new_root);
    set_l(arena, old_root, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(old_root));
    }

    let parent = get_p(arena, old_root);
    set_p(arena, new_root, parent);
    match parent {
        None => root = new_root,
        Some(parent) => {
            if get_l(arena, parent) == Some(old_root) {
                set_l(arena, parent, Some(new_root));
            } else {
                set_r(arena, parent, Some(new_root));
            }
        }
    }

    set_r(arena, new_root, Some(old_root));
    set_p(arena, old_root, Some(new_root));

    let b = balance_of(arena, Some(old_root));
    set_bf(arena, old_root, b);
    let b = balance_of(arena, Some(new_root));
    set_bf(arena, new_root, b);

    root
}

/// Inspects `cur`'s live balance and applies zero, one, or two rotations to
/// restore `|balance| <= 1` at that level. No-op when `cur` is `None`.
/// Returns the (possibly new) tree root.
pub fn rebalance<K, V, N>(arena: &mut [N], mut root: u32, cur: Option<u32>) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let Some(cur) = cur else {
        return root;
    };

    let balance = balance_of(arena, Some(cur));
    // Refresh the stored factor at every visited level; rotations below
    // overwrite it again for the nodes they move.
    set_bf(arena, cur, balance);
    if balance > 1 {
        // Left-heavy. A left-leaning-right child makes it the left-right
        // case: straighten the child first.
        let l = get_l(arena, cur).expect("left-heavy node has a left child");
        if balance_of(arena, Some(l)) < 0 {
            root = rotate_left(arena, root, l);
        }
        root = rotate_right(arena, root, cur);
    } else if balance < -1 {
        let r = get_r(arena, cur).expect("right-heavy node has a right child");
        if balance_of(arena, Some(r)) > 0 {
            root = rotate_right(arena, root, r);
        }
        root = rotate_left(arena, root, cur);
    }

    root
}

/// Rebalances every level from `start` up to the root. The parent is
/// re-fetched after each rebalance call, since a rotation changes which node
/// is "the parent" of the level just fixed.
fn retrace<K, V, N>(arena: &mut [N], mut root: u32, start: Option<u32>) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let mut cur = start;
    while let Some(i) = cur {
        root = rebalance(arena, root, Some(i));
        cur = get_p(arena, i);
    }
    root
}

/// Attaches a detached `node` (balance 0) as the left child of `parent`,
/// then rebalances every ancestor. Returns the new root.
pub fn insert_left<K, V, N>(arena: &mut [N], root: u32, node: u32, parent: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    set_bf(arena, node, 0);
    util::attach_left(arena, node, parent);
    retrace(arena, root, Some(parent))
}

/// Attaches a detached `node` (balance 0) as the right child of `parent`,
/// then rebalances every ancestor. Returns the new root.
pub fn insert_right<K, V, N>(arena: &mut [N], root: u32, node: u32, parent: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    set_bf(arena, node, 0);
    util::attach_right(arena, node, parent);
    retrace(arena, root, Some(parent))
}

/// Exchanges two nodes' tree positions and their balance factors. Both
/// nodes keep their own key and value. Returns the new root.
pub fn node_swap<K, V, N>(arena: &mut [N], root: u32, a: u32, b: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let root = swap(arena, root, a, b);
    let tmp = bf(arena, a);
    set_bf(arena, a, bf(arena, b));
    set_bf(arena, b, tmp);
    root
}

/// Removes `node` from the tree rooted at `root` and restores the AVL
/// invariant. A node with two children first exchanges positions with its
/// in-order predecessor via [`node_swap`], after which it has at most a
/// left child and can be spliced out. `node` is left fully detached; the
/// caller owns its reclamation. Returns the new root.
pub fn remove<K, V, N>(arena: &mut [N], mut root: u32, node: u32) -> Option<u32>
where
    N: AvlNodeLike<K, V>,
{
    if get_l(arena, node).is_some() && get_r(arena, node).is_some() {
        let pred = util::prev(arena, node).expect("two-child node has a predecessor");
        root = node_swap(arena, root, node, pred);
    }

    // Rebalancing starts at the parent the surviving child (if any) is
    // spliced onto.
    let start = get_p(arena, node);
    let root = util::detach(arena, Some(root), node);

    root.map(|r| retrace(arena, r, start))
}

/// Verifies structural and AVL invariants of the whole tree: the root has no
/// parent, parent/child links are mutually consistent, each stored balance
/// factor equals the recursive `height(left) - height(right)` and stays
/// within `[-1, 1]`, and the in-order key sequence never decreases under the
/// comparator.
pub fn assert_avl_tree<K, V, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    N: AvlNodeLike<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p().is_some() {
        return Err("root has parent".to_string());
    }

    fn validate_links_and_bf<K, V, N>(arena: &[N], node: u32) -> Result<(), String>
    where
        N: AvlNodeLike<K, V>,
    {
        let l = get_l(arena, node);
        let r = get_r(arena, node);

        if let Some(l) = l {
            if get_p(arena, l) != Some(node) {
                return Err("broken parent link on left child".to_string());
            }
            validate_links_and_bf(arena, l)?;
        }
        if let Some(r) = r {
            if get_p(arena, r) != Some(node) {
                return Err("broken parent link on right child".to_string());
            }
            validate_links_and_bf(arena, r)?;
        }

        let expected_bf = balance_of(arena, Some(node));
        let actual_bf = arena[node as usize].bf();
        if actual_bf != expected_bf {
            return Err(format!(
                "balance factor mismatch: expected {expected_bf}, got {actual_bf}"
            ));
        }
        if !(-1..=1).contains(&actual_bf) {
            return Err("AVL balance violated".to_string());
        }

        Ok(())
    }

    validate_links_and_bf(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            let cmp = comparator(arena[prev as usize].key(), arena[i as usize].key());
            if cmp > 0 {
                return Err("node order violated".to_string());
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<K, V, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
    N: AvlNodeLike<K, V>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, V, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, V, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [bf={}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.bf(),
                n.key(),
                n.value()
            )
        }
    }
}
