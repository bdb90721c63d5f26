//! Nodes and the comparator-free half of the algorithms: rebalancing,
//! navigation to the extremes, and joining trees that are already known
//! to be in order.

use std::sync::Arc;

use crate::error::invariant_violation;

/// Sibling heights may differ by at most this much.
pub(crate) const TOLERANCE: usize = 2;

pub(crate) enum Tree<T> {
    Empty,
    Node(Arc<Node<T>>),
}

pub(crate) struct Node<T> {
    pub(crate) left: Tree<T>,
    pub(crate) value: T,
    pub(crate) right: Tree<T>,
    pub(crate) height: usize,
}

use Tree::{Empty, Node as Br};

impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Br(node) => Br(Arc::clone(node)),
        }
    }
}

impl<T> Tree<T> {
    pub(crate) fn height(&self) -> usize {
        match self {
            Empty => 0,
            Br(node) => node.height,
        }
    }
    pub(crate) fn is_empty(&self) -> bool { matches!(self, Empty) }

    /// Identity, not equality: two trees are the same if they are both
    /// empty or share the root allocation.
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Empty, Empty) => true,
            (Br(x), Br(y)) => Arc::ptr_eq(x, y),
            _ => false,
        }
    }

    pub(crate) fn min_elt(&self) -> Option<&T> {
        let mut node = match self {
            Empty => return None,
            Br(node) => node,
        };
        while let Br(left) = &node.left {
            node = left;
        }
        Some(&node.value)
    }
    pub(crate) fn max_elt(&self) -> Option<&T> {
        let mut node = match self {
            Empty => return None,
            Br(node) => node,
        };
        while let Br(right) = &node.right {
            node = right;
        }
        Some(&node.value)
    }
}

/// Builds a node without rebalancing; the caller guarantees that the
/// heights of `l` and `r` are within the tolerance.
pub(crate) fn create<T>(l: Tree<T>, v: T, r: Tree<T>) -> Tree<T> {
    let height = 1 + l.height().max(r.height());
    Br(Arc::new(Node { left: l, value: v, right: r, height }))
}

pub(crate) fn singleton<T>(v: T) -> Tree<T> {
    Br(Arc::new(Node { left: Empty, value: v, right: Empty, height: 1 }))
}

/// Like [`create`], but fixes up a height difference of at most
/// `TOLERANCE + 1` with a single or double rotation.
pub(crate) fn bal<T: Clone>(l: Tree<T>, v: T, r: Tree<T>) -> Tree<T> {
    let (hl, hr) = (l.height(), r.height());
    if hl > hr + TOLERANCE {
        let Br(ln) = &l else { invariant_violation("bal") };
        if ln.left.height() >= ln.right.height() {
            let new_r = create(ln.right.clone(), v, r);
            create(ln.left.clone(), ln.value.clone(), new_r)
        } else {
            let Br(lrn) = &ln.right else { invariant_violation("bal") };
            let new_l =
                create(ln.left.clone(), ln.value.clone(), lrn.left.clone());
            let new_r = create(lrn.right.clone(), v, r);
            create(new_l, lrn.value.clone(), new_r)
        }
    } else if hr > hl + TOLERANCE {
        let Br(rn) = &r else { invariant_violation("bal") };
        if rn.right.height() >= rn.left.height() {
            let new_l = create(l, v, rn.left.clone());
            create(new_l, rn.value.clone(), rn.right.clone())
        } else {
            let Br(rln) = &rn.left else { invariant_violation("bal") };
            let new_l = create(l, v, rln.left.clone());
            let new_r =
                create(rln.right.clone(), rn.value.clone(), rn.right.clone());
            create(new_l, rln.value.clone(), new_r)
        }
    } else {
        create(l, v, r)
    }
}

/// `v` must be less than every element of `t`.
pub(crate) fn add_min_element<T: Clone>(v: T, t: &Tree<T>) -> Tree<T> {
    match t {
        Empty => singleton(v),
        Br(n) => bal(
            add_min_element(v, &n.left),
            n.value.clone(),
            n.right.clone(),
        ),
    }
}

/// `v` must be greater than every element of `t`.
pub(crate) fn add_max_element<T: Clone>(v: T, t: &Tree<T>) -> Tree<T> {
    match t {
        Empty => singleton(v),
        Br(n) => bal(
            n.left.clone(),
            n.value.clone(),
            add_max_element(v, &n.right),
        ),
    }
}

/// Balanced concatenation around a pivot, for `l < v < r` with arbitrary
/// heights. Descends the taller side until the heights are close enough
/// for [`create`], rebalancing on the way back up.
pub(crate) fn join<T: Clone>(l: &Tree<T>, v: T, r: &Tree<T>) -> Tree<T> {
    match (l, r) {
        (Empty, _) => add_min_element(v, r),
        (_, Empty) => add_max_element(v, l),
        (Br(ln), Br(rn)) => {
            if ln.height > rn.height + TOLERANCE {
                let new_r = join(&ln.right, v, r);
                bal(ln.left.clone(), ln.value.clone(), new_r)
            } else if rn.height > ln.height + TOLERANCE {
                let new_l = join(l, v, &rn.left);
                bal(new_l, rn.value.clone(), rn.right.clone())
            } else {
                create(l.clone(), v, r.clone())
            }
        }
    }
}

/// Removes the leftmost node. Panics on the empty tree; callers check.
pub(crate) fn remove_min_elt<T: Clone>(t: &Tree<T>) -> Tree<T> {
    match t {
        Empty => invariant_violation("remove_min_elt"),
        Br(n) if n.left.is_empty() => n.right.clone(),
        Br(n) => bal(remove_min_elt(&n.left), n.value.clone(), n.right.clone()),
    }
}

/// Glues two siblings of a removed node back together. Their heights are
/// within the tolerance, so a single [`bal`] suffices.
pub(crate) fn merge<T: Clone>(t1: &Tree<T>, t2: &Tree<T>) -> Tree<T> {
    match (t1, t2) {
        (Empty, _) => t2.clone(),
        (_, Empty) => t1.clone(),
        (_, Br(n2)) => {
            let min = leftmost(n2).clone();
            bal(t1.clone(), min, remove_min_elt(t2))
        }
    }
}

/// Concatenation for `t1 < t2` with arbitrary heights.
pub(crate) fn concat<T: Clone>(t1: &Tree<T>, t2: &Tree<T>) -> Tree<T> {
    match (t1, t2) {
        (Empty, _) => t2.clone(),
        (_, Empty) => t1.clone(),
        (_, Br(n2)) => {
            let min = leftmost(n2).clone();
            join(t1, min, &remove_min_elt(t2))
        }
    }
}

fn leftmost<T>(mut node: &Arc<Node<T>>) -> &T {
    while let Br(left) = &node.left {
        node = left;
    }
    &node.value
}
