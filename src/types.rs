//! Node trait definitions.
//!
//! Every tree "pointer" is an `Option<u32>` index into a [`Vec`]-backed
//! arena owned by the caller. Tree-manipulation functions take the arena
//! together with node indices; no node ever owns another node directly, so
//! relinking a subtree moves an index instead of duplicating anything.

/// Structural links of a binary-tree node: parent (`p`), left child (`l`),
/// right child (`r`). A node whose `p` is `None` is the root.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Comparator used by map-like tree structures.
///
/// Returns a negative number when `a < b`, zero when equal, positive when
/// `a > b`.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Key/value node interface used by map-like structures.
///
/// Keys are opaque to the tree machinery; ordering comes entirely from the
/// comparator a structure was built with.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn set_value(&mut self, value: V);
}

/// Plain key/value node with no balance bookkeeping.
///
/// The base unit consumed by the unbalanced primitives in [`crate::util`]
/// and by [`crate::equal_paths`].
#[derive(Clone, Debug)]
pub struct BstNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
}

impl<K, V> BstNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
        }
    }
}

impl<K, V> Node for BstNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K, V> KvNode<K, V> for BstNode<K, V> {
    fn key(&self) -> &K {
        &self.k
    }

    fn value(&self) -> &V {
        &self.v
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.v
    }

    fn set_value(&mut self, value: V) {
        self.v = value;
    }
}
