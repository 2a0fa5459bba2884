//! Base search-tree primitives.
//!
//! Plain ordered-tree operations over any [`Node`]: lookup, in-order
//! stepping, raw (non-rebalancing) insertion, and detaching of nodes with at
//! most one child. Balancing layers such as [`crate::avl`] build on these.
//!
//! Key-based helpers accept a `key_of` accessor closure so callers can use
//! any arena-backed node layout.

pub mod swap;

use crate::types::Node;

pub use swap::swap;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node in the tree, the start of the in-order sequence.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        let mut c = r;
        while let Some(l) = get_l(arena, c) {
            c = l;
        }
        return Some(c);
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor: the rightmost node of the left subtree, or the
/// nearest ancestor of which `curr` lies in the right subtree.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        let mut c = l;
        while let Some(r) = get_r(arena, c) {
            c = r;
        }
        return Some(c);
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Finds a node by key.
pub fn find<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, key_of(&arena[i as usize]));
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Finds node by key, or the next lower node if the exact key does not exist.
pub fn find_or_next_lower<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut result: Option<u32> = None;
    while let Some(i) = curr {
        let cmp = comparator(key_of(&arena[i as usize]), key);
        if cmp == 0 {
            return Some(i);
        }
        if cmp > 0 {
            curr = get_l(arena, i);
        } else {
            result = Some(i);
            curr = get_r(arena, i);
        }
    }
    result
}

/// Attaches a detached `node` as the left child of `parent`.
/// `parent`'s left slot must be empty.
pub fn attach_left<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    debug_assert!(get_l(arena, parent).is_none());
    set_l(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
}

/// Attaches a detached `node` as the right child of `parent`.
/// `parent`'s right slot must be empty.
pub fn attach_right<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    debug_assert!(get_r(arena, parent).is_none());
    set_r(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
}

/// Raw BST insert with no rebalancing: descends comparing keys and attaches
/// `node` at the first empty slot. Equal keys descend right. Returns the
/// root (which only changes when the tree was empty).
pub fn insert<N, K, F, C>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        return Some(node);
    };

    loop {
        let cmp = {
            let key = key_of(&arena[node as usize]);
            comparator(key, key_of(&arena[curr as usize]))
        };

        let child = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };

        match child {
            Some(c) => curr = c,
            None => {
                if cmp < 0 {
                    attach_left(arena, node, curr);
                } else {
                    attach_right(arena, node, curr);
                }
                return root;
            }
        }
    }
}

/// Detaches a node with at most one child, splicing the surviving child (if
/// any) into its place. The node keeps its key/value but loses all links.
/// Returns the new root.
pub fn detach<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let p = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    debug_assert!(l.is_none() || r.is_none(), "detach requires <= 1 child");
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);

    let c = l.or(r);
    if let Some(c) = c {
        set_p(arena, c, p);
    }
    let Some(p) = p else {
        return c;
    };
    if get_l(arena, p) == Some(node) {
        set_l(arena, p, c);
    } else {
        set_r(arena, p, c);
    }
    root
}
