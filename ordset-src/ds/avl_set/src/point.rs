use std::cmp::Ordering::{Equal, Greater, Less};

use total_order::TotalOrder;

use crate::tree::{bal, join, merge, singleton, Tree};

use Tree::{Empty, Node as Br};

pub(crate) fn mem<O: TotalOrder>(
    order: &O,
    x: &O::Elt,
    mut t: &Tree<O::Elt>,
) -> bool {
    while let Br(n) = t {
        t = match order.compare(x, &n.value) {
            Equal => return true,
            Less => &n.left,
            Greater => &n.right,
        };
    }
    false
}

pub(crate) fn find<'a, O: TotalOrder>(
    order: &O,
    x: &O::Elt,
    mut t: &'a Tree<O::Elt>,
) -> Option<&'a O::Elt> {
    while let Br(n) = t {
        t = match order.compare(x, &n.value) {
            Equal => return Some(&n.value),
            Less => &n.left,
            Greater => &n.right,
        };
    }
    None
}

/// Returns `t` itself, not a copy, if `x` is already present.
pub(crate) fn add<O: TotalOrder>(
    order: &O,
    x: O::Elt,
    t: &Tree<O::Elt>,
) -> Tree<O::Elt>
where
    O::Elt: Clone,
{
    let Br(n) = t else { return singleton(x) };
    match order.compare(&x, &n.value) {
        Equal => t.clone(),
        Less => {
            let ll = add(order, x, &n.left);
            if ll.ptr_eq(&n.left) {
                t.clone()
            } else {
                bal(ll, n.value.clone(), n.right.clone())
            }
        }
        Greater => {
            let rr = add(order, x, &n.right);
            if rr.ptr_eq(&n.right) {
                t.clone()
            } else {
                bal(n.left.clone(), n.value.clone(), rr)
            }
        }
    }
}

/// Returns `t` itself, not a copy, if `x` is absent.
pub(crate) fn remove<O: TotalOrder>(
    order: &O,
    x: &O::Elt,
    t: &Tree<O::Elt>,
) -> Tree<O::Elt>
where
    O::Elt: Clone,
{
    let Br(n) = t else { return Empty };
    match order.compare(x, &n.value) {
        Equal => merge(&n.left, &n.right),
        Less => {
            let ll = remove(order, x, &n.left);
            if ll.ptr_eq(&n.left) {
                t.clone()
            } else {
                bal(ll, n.value.clone(), n.right.clone())
            }
        }
        Greater => {
            let rr = remove(order, x, &n.right);
            if rr.ptr_eq(&n.right) {
                t.clone()
            } else {
                bal(n.left.clone(), n.value.clone(), rr)
            }
        }
    }
}

/// Splits into the elements less than `x`, whether `x` is present, and
/// the elements greater than `x`.
pub(crate) fn split<O: TotalOrder>(
    order: &O,
    x: &O::Elt,
    t: &Tree<O::Elt>,
) -> (Tree<O::Elt>, bool, Tree<O::Elt>)
where
    O::Elt: Clone,
{
    let Br(n) = t else { return (Empty, false, Empty) };
    match order.compare(x, &n.value) {
        Equal => (n.left.clone(), true, n.right.clone()),
        Less => {
            let (ll, present, rl) = split(order, x, &n.left);
            (ll, present, join(&rl, n.value.clone(), &n.right))
        }
        Greater => {
            let (lr, present, rr) = split(order, x, &n.right);
            (join(&n.left, n.value.clone(), &lr), present, rr)
        }
    }
}

// `pred` is monotone over the ascending order: false on some prefix, true
// on the rest. The lowest true element is the last one seen on the way
// down where `pred` held.
pub(crate) fn find_first<T>(
    mut pred: impl FnMut(&T) -> bool,
    mut t: &Tree<T>,
) -> Option<&T> {
    let mut found = None;
    while let Br(n) = t {
        if pred(&n.value) {
            found = Some(&n.value);
            t = &n.left;
        } else {
            t = &n.right;
        }
    }
    found
}

// Mirror image: `pred` is true on some prefix, false on the rest.
pub(crate) fn find_last<T>(
    mut pred: impl FnMut(&T) -> bool,
    mut t: &Tree<T>,
) -> Option<&T> {
    let mut found = None;
    while let Br(n) = t {
        if pred(&n.value) {
            found = Some(&n.value);
            t = &n.right;
        } else {
            t = &n.left;
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use total_order::{Natural, Reversed};

    use super::*;
    use crate::debug::{check_shape, check_shape_by};

    const NAT: Natural<i32> = Natural::new();

    fn build(xs: impl IntoIterator<Item = i32>) -> Tree<i32> {
        xs.into_iter().fold(Empty, |t, x| add(&NAT, x, &t))
    }

    #[test]
    fn add_then_mem() {
        let t = build([5, 3, 8, 1, 4]);
        check_shape(&t);
        for x in [1, 3, 4, 5, 8] {
            assert!(mem(&NAT, &x, &t));
        }
        for x in [0, 2, 6, 7, 9] {
            assert!(!mem(&NAT, &x, &t));
        }
    }

    #[test]
    fn add_existing_shares() {
        let t = build(0..100);
        for x in [0, 42, 99] {
            assert!(add(&NAT, x, &t).ptr_eq(&t));
        }
        assert!(!add(&NAT, 100, &t).ptr_eq(&t));
    }

    #[test]
    fn remove_absent_shares() {
        let t = build((0..100).map(|x| 2 * x));
        for x in [-1, 1, 51, 199, 1000] {
            assert!(remove(&NAT, &x, &t).ptr_eq(&t));
        }
        assert!(remove(&NAT, &0, &Empty).is_empty());
    }

    #[test]
    fn remove_everything() {
        let mut t = build(0..64);
        for x in (0..64).rev().step_by(3).chain(0..64) {
            t = remove(&NAT, &x, &t);
            check_shape(&t);
            assert!(!mem(&NAT, &x, &t));
        }
        assert!(t.is_empty());
    }

    #[test]
    fn find_returns_stored_value() {
        // elements compare by their first component only
        let by_key = total_order::ByKey::new(|&(k, _): &(i32, char)| k);
        let t = [(1, 'a'), (2, 'b'), (1, 'z')]
            .into_iter()
            .fold(Empty, |t, x| add(&by_key, x, &t));
        assert_eq!(find(&by_key, &(1, '?'), &t), Some(&(1, 'a')));
        assert_eq!(find(&by_key, &(3, '?'), &t), None);
    }

    #[test]
    fn split_pieces() {
        let t = build((0..50).map(|x| 2 * x));
        let (l, present, r) = split(&NAT, &40, &t);
        assert!(present);
        check_shape(&l);
        check_shape(&r);
        assert_eq!(l.max_elt(), Some(&38));
        assert_eq!(r.min_elt(), Some(&42));

        let (l, present, r) = split(&NAT, &41, &t);
        assert!(!present);
        assert_eq!(l.max_elt(), Some(&40));
        assert_eq!(r.min_elt(), Some(&42));

        let (l, present, r) = split(&NAT, &-1, &t);
        assert!(!present);
        assert!(l.is_empty());
        assert_eq!(r.min_elt(), Some(&0));
        check_shape(&r);
    }

    #[test]
    fn monotone_searches() {
        let t = build((0..30).map(|x| 3 * x));
        assert_eq!(find_first(|&x| x >= 10, &t), Some(&12));
        assert_eq!(find_first(|&x| x >= 0, &t), Some(&0));
        assert_eq!(find_first(|&x| x > 87, &t), None);
        assert_eq!(find_last(|&x| x <= 10, &t), Some(&9));
        assert_eq!(find_last(|&x| x <= 1000, &t), Some(&87));
        assert_eq!(find_last(|&x| x < 0, &t), None);
        assert_eq!(find_first(|_: &i32| true, &Empty), None);
    }

    #[test]
    fn reversed_order() {
        let rev = Reversed(NAT);
        let t = [1, 2, 3, 4, 5, 6]
            .into_iter()
            .fold(Empty, |t, x| add(&rev, x, &t));
        check_shape_by(&rev, &t);
        assert_eq!(t.min_elt(), Some(&6));
        assert_eq!(t.max_elt(), Some(&1));
        assert!(mem(&rev, &4, &t));
    }
}
