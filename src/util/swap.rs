use crate::types::Node;

use super::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Exchanges two nodes' tree positions.
///
/// Parent, child, and root links swap; both nodes keep their own key and
/// value. Handles the adjacent case where one node is the other's child.
/// Returns the new root.
pub fn swap<N: Node>(arena: &mut [N], mut root: u32, a: u32, b: u32) -> u32 {
    if a == b {
        return root;
    }

    let ap = get_p(arena, a);
    let al = get_l(arena, a);
    let ar = get_r(arena, a);

    let bp = get_p(arena, b);
    let bl = get_l(arena, b);
    let br = get_r(arena, b);

    // `b`'s former children become `a`'s. When a child slot pointed at `a`
    // itself the two nodes are adjacent and the slot must point back at `b`.
    if bl == Some(a) {
        set_l(arena, a, Some(b));
        set_p(arena, b, Some(a));
    } else {
        set_l(arena, a, bl);
        if let Some(bl) = bl {
            set_p(arena, bl, Some(a));
        }
    }

    if br == Some(a) {
        set_r(arena, a, Some(b));
        set_p(arena, b, Some(a));
    } else {
        set_r(arena, a, br);
        if let Some(br) = br {
            set_p(arena, br, Some(a));
        }
    }

    // And `a`'s former children become `b`'s, mirrored.
    if al == Some(b) {
        set_l(arena, b, Some(a));
        set_p(arena, a, Some(b));
    } else {
        set_l(arena, b, al);
        if let Some(al) = al {
            set_p(arena, al, Some(b));
        }
    }

    if ar == Some(b) {
        set_r(arena, b, Some(a));
        set_p(arena, a, Some(b));
    } else {
        set_r(arena, b, ar);
        if let Some(ar) = ar {
            set_p(arena, ar, Some(b));
        }
    }

    // Finally each node takes over the other's parent slot (or the root).
    if ap.is_none() {
        root = b;
        set_p(arena, b, None);
    } else if ap != Some(b) {
        set_p(arena, b, ap);
        if let Some(ap) = ap {
            if get_l(arena, ap) == Some(a) {
                set_l(arena, ap, Some(b));
            } else {
                set_r(arena, ap, Some(b));
            }
        }
    }

    if bp.is_none() {
        root = a;
        set_p(arena, a, None);
    } else if bp != Some(a) {
        set_p(arena, a, bp);
        if let Some(bp) = bp {
            if get_l(arena, bp) == Some(b) {
                set_l(arena, bp, Some(a));
            } else {
                set_r(arena, bp, Some(a));
            }
        }
    }

    root
}
