use avl_forest::equal_paths;
use avl_forest::types::{BstNode, Node};

fn node(k: i32) -> BstNode<i32, ()> {
    BstNode::new(k, ())
}

fn link_l(arena: &mut [BstNode<i32, ()>], parent: u32, child: u32) {
    arena[parent as usize].set_l(Some(child));
    arena[child as usize].set_p(Some(parent));
}

fn link_r(arena: &mut [BstNode<i32, ()>], parent: u32, child: u32) {
    arena[parent as usize].set_r(Some(child));
    arena[child as usize].set_p(Some(parent));
}

#[test]
fn empty_tree_matrix() {
    let arena: Vec<BstNode<i32, ()>> = Vec::new();
    assert!(equal_paths(&arena, None));
}

#[test]
fn single_node_matrix() {
    let arena = vec![node(1)];
    assert!(equal_paths(&arena, Some(0)));
}

#[test]
fn perfect_tree_matrix() {
    //       2
    //      / \
    //     1   3
    let mut arena = vec![node(2), node(1), node(3)];
    link_l(&mut arena, 0, 1);
    link_r(&mut arena, 0, 2);
    assert!(equal_paths(&arena, Some(0)));
}

#[test]
fn chain_has_single_leaf_matrix() {
    // A pure chain has exactly one leaf, so all leaf depths agree.
    let mut arena = vec![node(3), node(2), node(1)];
    link_l(&mut arena, 0, 1);
    link_l(&mut arena, 1, 2);
    assert!(equal_paths(&arena, Some(0)));
}

#[test]
fn uneven_leaf_depths_matrix() {
    //       2
    //      / \
    //     1   3
    //          \
    //           4
    let mut arena = vec![node(2), node(1), node(3), node(4)];
    link_l(&mut arena, 0, 1);
    link_r(&mut arena, 0, 2);
    link_r(&mut arena, 2, 3);
    assert!(!equal_paths(&arena, Some(0)));
}

#[test]
fn inner_imbalance_matrix() {
    // Leaves at depths 2 and 1 under opposite sides.
    //       4
    //      / \
    //     2   5
    //    /
    //   1
    let mut arena = vec![node(4), node(2), node(5), node(1)];
    link_l(&mut arena, 0, 1);
    link_r(&mut arena, 0, 2);
    link_l(&mut arena, 1, 3);
    assert!(!equal_paths(&arena, Some(0)));
}
