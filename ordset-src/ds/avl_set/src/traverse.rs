use total_order::TotalOrder;

use crate::{
    algebra::union,
    point::add,
    tree::{concat, join, Tree},
};

use Tree::{Empty, Node as Br};

pub(crate) fn for_each<T>(t: &Tree<T>, f: &mut impl FnMut(&T)) {
    let mut t = t;
    while let Br(n) = t {
        for_each(&n.left, f);
        f(&n.value);
        t = &n.right;
    }
}

pub(crate) fn fold<T, B>(
    t: &Tree<T>,
    init: B,
    f: &mut impl FnMut(B, &T) -> B,
) -> B {
    let (mut t, mut acc) = (t, init);
    while let Br(n) = t {
        acc = fold(&n.left, acc, f);
        acc = f(acc, &n.value);
        t = &n.right;
    }
    acc
}

// Both check the node itself before its subtrees, not in ascending order.
pub(crate) fn for_all<T>(t: &Tree<T>, p: &mut impl FnMut(&T) -> bool) -> bool {
    let mut t = t;
    while let Br(n) = t {
        if !(p(&n.value) && for_all(&n.left, p)) {
            return false;
        }
        t = &n.right;
    }
    true
}

pub(crate) fn exists<T>(t: &Tree<T>, p: &mut impl FnMut(&T) -> bool) -> bool {
    let mut t = t;
    while let Br(n) = t {
        if p(&n.value) || exists(&n.left, p) {
            return true;
        }
        t = &n.right;
    }
    false
}

/// Returns `t` itself if nothing was dropped.
pub(crate) fn filter<T: Clone>(
    t: &Tree<T>,
    p: &mut impl FnMut(&T) -> bool,
) -> Tree<T> {
    let Br(n) = t else { return Empty };
    let l = filter(&n.left, p);
    let keep = p(&n.value);
    let r = filter(&n.right, p);
    if !keep {
        concat(&l, &r)
    } else if l.ptr_eq(&n.left) && r.ptr_eq(&n.right) {
        t.clone()
    } else {
        join(&l, n.value.clone(), &r)
    }
}

pub(crate) fn partition<T: Clone>(
    t: &Tree<T>,
    p: &mut impl FnMut(&T) -> bool,
) -> (Tree<T>, Tree<T>) {
    let Br(n) = t else { return (Empty, Empty) };
    let (lt, lf) = partition(&n.left, p);
    let keep = p(&n.value);
    let (rt, rf) = partition(&n.right, p);
    if keep {
        (join(&lt, n.value.clone(), &rt), concat(&lf, &rf))
    } else {
        (concat(&lt, &rt), join(&lf, n.value.clone(), &rf))
    }
}

/// Applies `f` in ascending order. As long as the images stay strictly
/// ascending the shape is kept; wherever they do not, the pieces are
/// merged with [`union`] instead.
pub(crate) fn map<O: TotalOrder>(
    order: &O,
    t: &Tree<O::Elt>,
    f: &mut impl FnMut(&O::Elt) -> O::Elt,
) -> Tree<O::Elt>
where
    O::Elt: Clone,
{
    let Br(n) = t else { return Empty };
    let l = map(order, &n.left, f);
    let v = f(&n.value);
    let r = map(order, &n.right, f);
    let below = l.max_elt().map_or(true, |max| order.lt(max, &v));
    let above = r.min_elt().map_or(true, |min| order.lt(&v, min));
    if below && above {
        join(&l, v, &r)
    } else {
        union(order, &l, &add(order, v, &r))
    }
}

pub(crate) fn elements<T: Clone>(t: &Tree<T>) -> Vec<T> {
    let mut res = Vec::new();
    for_each(t, &mut |x: &T| res.push(x.clone()));
    res
}

pub(crate) fn cardinal<T>(t: &Tree<T>) -> usize {
    match t {
        Empty => 0,
        Br(n) => cardinal(&n.left) + 1 + cardinal(&n.right),
    }
}
