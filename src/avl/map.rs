use std::fmt::Debug;

use crate::error::KeyError;
use crate::util::{find_or_next_lower, first, last, next, prev};

use super::types::AvlNode;
use super::util::{self, assert_avl_tree, print};

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Self-balancing ordered map backed by an arena of [`AvlNode`]s.
///
/// Node "pointers" are `Option<u32>` indices into the arena; indices stay
/// stable across rotations, so a returned index remains valid until the node
/// is deleted. Removed slots are recycled through a free list.
pub struct AvlMap<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<AvlNode<K, V>>,
    root: Option<u32>,
    free: Vec<u32>,
    comparator: C,
    length: usize,
}

impl<K, V> AvlMap<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for AvlMap<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            free: Vec::new(),
            comparator,
            length: 0,
        }
    }

    fn alloc(&mut self, node: AvlNode<K, V>) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.arena[idx as usize] = node;
                idx
            }
            None => {
                self.arena.push(node);
                (self.arena.len() - 1) as u32
            }
        }
    }

    /// Inserts with overwrite-or-create semantics: an existing equal key has
    /// its value replaced in place with no structural or balance change; a
    /// new key is attached as a fresh node and every ancestor is rebalanced.
    /// Returns the index of the affected node.
    pub fn set(&mut self, k: K, v: V) -> u32 {
        let Some(root) = self.root else {
            let idx = self.alloc(AvlNode::new(k, v));
            self.root = Some(idx);
            self.length = 1;
            return idx;
        };

        let mut curr = root;
        loop {
            let cmp = (self.comparator)(&k, &self.arena[curr as usize].k);
            if cmp == 0 {
                self.arena[curr as usize].v = v;
                return curr;
            }
            let child = if cmp < 0 {
                self.arena[curr as usize].l
            } else {
                self.arena[curr as usize].r
            };
            match child {
                Some(c) => curr = c,
                None => {
                    let idx = self.alloc(AvlNode::new(k, v));
                    self.root = Some(if cmp < 0 {
                        util::insert_left(&mut self.arena, root, idx, curr)
                    } else {
                        util::insert_right(&mut self.arena, root, idx, curr)
                    });
                    self.length += 1;
                    return idx;
                }
            }
        }
    }

    /// Removes the entry for `key`. Returns `false` (and changes nothing)
    /// when the key is absent.
    pub fn del(&mut self, key: &K) -> bool {
        let Some(node) = self.find(key) else {
            return false;
        };
        let root = self.root.expect("found node implies non-empty tree");
        self.root = util::remove(&mut self.arena, root, node);
        self.free.push(node);
        self.length -= 1;
        true
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let cmp = (self.comparator)(key, &self.arena[i as usize].k);
            if cmp == 0 {
                return Some(i);
            }
            curr = if cmp < 0 {
                self.arena[i as usize].l
            } else {
                self.arena[i as usize].r
            };
        }
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| &self.arena[i as usize].v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.find(key).map(|i| &mut self.arena[i as usize].v)
    }

    pub fn has(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Lookup that demands presence.
    pub fn require(&self, key: &K) -> Result<&V, KeyError> {
        self.get(key).ok_or(KeyError)
    }

    /// Finds the node for `key`, or the node with the nearest lower key.
    pub fn get_or_next_lower(&self, key: &K) -> Option<u32> {
        find_or_next_lower(&self.arena, self.root, key, |n| &n.k, &self.comparator)
    }

    pub fn size(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.length = 0;
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn node(&self, idx: u32) -> &AvlNode<K, V> {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.arena[idx as usize].k
    }

    pub fn value(&self, idx: u32) -> &V {
        &self.arena[idx as usize].v
    }

    pub fn value_mut_by_index(&mut self, idx: u32) -> &mut V {
        &mut self.arena[idx as usize].v
    }

    /// Index of the smallest key.
    pub fn first(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    /// Index of the largest key.
    pub fn last(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    /// In-order successor of the node at `idx`.
    pub fn next(&self, idx: u32) -> Option<u32> {
        next(&self.arena, idx)
    }

    /// In-order predecessor of the node at `idx`.
    pub fn prev(&self, idx: u32) -> Option<u32> {
        prev(&self.arena, idx)
    }

    /// Height of the tree; the empty tree has height 0.
    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    /// Verifies every structural and AVL invariant; intended for tests.
    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl_tree(&self.arena, self.root, &self.comparator)
    }
}

impl<K, V, C> AvlMap<K, V, C>
where
    K: Debug,
    V: Debug,
    C: Fn(&K, &K) -> i32,
{
    /// Debug dump of the tree structure.
    pub fn to_string_tree(&self) -> String {
        print(&self.arena, self.root, "")
    }
}
