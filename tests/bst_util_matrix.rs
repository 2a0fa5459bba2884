use avl_forest::types::BstNode;
use avl_forest::util::{detach, find, find_or_next_lower, first, insert, last, next, prev, size, swap};

fn comparator(a: &i32, b: &i32) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

fn key_of<V>(n: &BstNode<i32, V>) -> &i32 {
    &n.k
}

fn build(keys: &[i32]) -> (Vec<BstNode<i32, ()>>, Option<u32>) {
    let mut arena = Vec::new();
    let mut root = None;
    for &k in keys {
        arena.push(BstNode::new(k, ()));
        let idx = (arena.len() - 1) as u32;
        root = insert(&mut arena, root, idx, key_of, comparator);
    }
    (arena, root)
}

fn in_order(arena: &[BstNode<i32, ()>], root: Option<u32>) -> Vec<i32> {
    let mut keys = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        keys.push(arena[i as usize].k);
        curr = next(arena, i);
    }
    keys
}

#[test]
fn raw_insert_orders_keys_matrix() {
    let (arena, root) = build(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
    assert_eq!(in_order(&arena, root), vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
    assert_eq!(size(&arena, root), 9);

    // Raw inserts never rebalance: the root stays where it landed.
    assert_eq!(arena[root.unwrap() as usize].k, 8);
}

#[test]
fn find_and_bounds_matrix() {
    let (arena, root) = build(&[8, 3, 10, 1, 6]);

    let hit = find(&arena, root, &6, key_of, comparator).unwrap();
    assert_eq!(arena[hit as usize].k, 6);
    assert_eq!(find(&arena, root, &7, key_of, comparator), None);

    let lower = find_or_next_lower(&arena, root, &7, key_of, comparator).unwrap();
    assert_eq!(arena[lower as usize].k, 6);
    assert_eq!(find_or_next_lower(&arena, root, &0, key_of, comparator), None);
}

#[test]
fn in_order_stepping_matrix() {
    let (arena, root) = build(&[8, 3, 10, 1, 6]);

    let f = first(&arena, root).unwrap();
    assert_eq!(arena[f as usize].k, 1);
    let l = last(&arena, root).unwrap();
    assert_eq!(arena[l as usize].k, 10);

    assert_eq!(prev(&arena, f), None);
    assert_eq!(next(&arena, l), None);

    // prev of 8 is the rightmost node of its left subtree.
    let r = root.unwrap();
    let p = prev(&arena, r).unwrap();
    assert_eq!(arena[p as usize].k, 6);

    // next of 6 climbs back up to the root.
    assert_eq!(next(&arena, p), Some(r));
}

#[test]
fn detach_leaf_and_single_child_matrix() {
    let (mut arena, root) = build(&[8, 3, 10, 1]);

    // One-child node: 3's left child 1 splices into 8's left slot.
    let three = find(&arena, root, &3, key_of, comparator).unwrap();
    let root = detach(&mut arena, root, three);
    assert_eq!(in_order(&arena, root), vec![1, 8, 10]);
    assert_eq!(arena[three as usize].p, None);
    assert_eq!(arena[three as usize].l, None);

    let one = find(&arena, root, &1, key_of, comparator).unwrap();
    assert_eq!(arena[one as usize].p, root);

    // Leaf.
    let root = detach(&mut arena, root, one);
    assert_eq!(in_order(&arena, root), vec![8, 10]);
}

#[test]
fn detach_root_matrix() {
    let (mut arena, root) = build(&[8, 10]);
    let r = root.unwrap();

    let root = detach(&mut arena, root, r);
    let new_root = root.unwrap();
    assert_eq!(arena[new_root as usize].k, 10);
    assert_eq!(arena[new_root as usize].p, None);

    let root = detach(&mut arena, root, new_root);
    assert_eq!(root, None);
}

#[test]
fn swap_distant_nodes_matrix() {
    let (mut arena, root) = build(&[8, 3, 10, 1, 6]);
    let a = find(&arena, root, &1, key_of, comparator).unwrap();
    let b = find(&arena, root, &10, key_of, comparator).unwrap();

    let eight = root.unwrap();
    let three = find(&arena, root, &3, key_of, comparator).unwrap();
    let root = swap(&mut arena, eight, a, b);

    // Positions exchanged, payloads untouched: the in-order walk now visits
    // the keys in the swapped arrangement and the root is unchanged.
    assert_eq!(root, eight);
    assert_eq!(in_order(&arena, Some(root)), vec![10, 3, 6, 8, 1]);
    assert_eq!(arena[b as usize].p, Some(three));
    assert_eq!(arena[three as usize].l, Some(b));
    assert_eq!(arena[a as usize].p, Some(eight));
    assert_eq!(arena[eight as usize].r, Some(a));
}

#[test]
fn swap_adjacent_parent_child_matrix() {
    let (mut arena, root) = build(&[8, 3, 1, 6]);
    let parent = find(&arena, root, &3, key_of, comparator).unwrap();
    let child = find(&arena, root, &1, key_of, comparator).unwrap();

    let root = swap(&mut arena, root.unwrap(), parent, child);

    assert_eq!(arena[child as usize].l, Some(parent));
    assert_eq!(arena[parent as usize].p, Some(child));
    assert_eq!(in_order(&arena, Some(root)), vec![3, 1, 6, 8]);
}

#[test]
fn swap_root_with_child_matrix() {
    let (mut arena, root) = build(&[8, 3]);
    let r = root.unwrap();
    let c = find(&arena, root, &3, key_of, comparator).unwrap();

    let root = swap(&mut arena, r, r, c);
    assert_eq!(root, c);
    assert_eq!(arena[c as usize].p, None);
    assert_eq!(arena[c as usize].l, Some(r));
    assert_eq!(arena[r as usize].p, Some(c));
}
