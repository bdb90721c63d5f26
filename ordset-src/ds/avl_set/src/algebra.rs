//! Divide and conquer on the root of one operand, splitting the other
//! around it. With $`m \le n`$ elements this costs
//! $`O(m\log(n/m+1))`$ comparisons.

use std::cmp::Ordering::{Equal, Greater, Less};

use total_order::TotalOrder;

use crate::{
    point::{add, split},
    tree::{concat, create, join, Tree},
};

use Tree::{Empty, Node as Br};

pub(crate) fn union<O: TotalOrder>(
    order: &O,
    s1: &Tree<O::Elt>,
    s2: &Tree<O::Elt>,
) -> Tree<O::Elt>
where
    O::Elt: Clone,
{
    let (n1, n2) = match (s1, s2) {
        (Empty, _) => return s2.clone(),
        (_, Empty) => return s1.clone(),
        (Br(n1), Br(n2)) => (n1, n2),
    };
    // the taller tree supplies the pivot; ties go to `s1`
    if n1.height >= n2.height {
        if n2.height == 1 {
            return add(order, n2.value.clone(), s1);
        }
        let (l2, _, r2) = split(order, &n1.value, s2);
        let l = union(order, &n1.left, &l2);
        let r = union(order, &n1.right, &r2);
        join(&l, n1.value.clone(), &r)
    } else {
        if n1.height == 1 {
            return add(order, n1.value.clone(), s2);
        }
        let (l1, _, r1) = split(order, &n2.value, s1);
        let l = union(order, &l1, &n2.left);
        let r = union(order, &r1, &n2.right);
        join(&l, n2.value.clone(), &r)
    }
}

pub(crate) fn inter<O: TotalOrder>(
    order: &O,
    s1: &Tree<O::Elt>,
    s2: &Tree<O::Elt>,
) -> Tree<O::Elt>
where
    O::Elt: Clone,
{
    let (Br(n1), Br(_)) = (s1, s2) else { return Empty };
    let (l2, present, r2) = split(order, &n1.value, s2);
    let l = inter(order, &n1.left, &l2);
    let r = inter(order, &n1.right, &r2);
    if present {
        join(&l, n1.value.clone(), &r)
    } else {
        concat(&l, &r)
    }
}

pub(crate) fn diff<O: TotalOrder>(
    order: &O,
    s1: &Tree<O::Elt>,
    s2: &Tree<O::Elt>,
) -> Tree<O::Elt>
where
    O::Elt: Clone,
{
    let n1 = match (s1, s2) {
        (Empty, _) => return Empty,
        (_, Empty) => return s1.clone(),
        (Br(n1), _) => n1,
    };
    let (l2, present, r2) = split(order, &n1.value, s2);
    let l = diff(order, &n1.left, &l2);
    let r = diff(order, &n1.right, &r2);
    if present {
        concat(&l, &r)
    } else {
        join(&l, n1.value.clone(), &r)
    }
}

/// Whether every element of `s1` is in `s2`.
///
/// When the roots differ, the half of `s1` on the far side of its root
/// is checked against `s2` as a whole, and the near half (root included)
/// against the matching child of `s2`.
pub(crate) fn subset<O: TotalOrder>(
    order: &O,
    mut s1: &Tree<O::Elt>,
    mut s2: &Tree<O::Elt>,
) -> bool
where
    O::Elt: Clone,
{
    loop {
        let (n1, n2) = match (s1, s2) {
            (Empty, _) => return true,
            (_, Empty) => return false,
            (Br(n1), Br(n2)) => (n1, n2),
        };
        match order.compare(&n1.value, &n2.value) {
            Equal => {
                if !subset(order, &n1.left, &n2.left) {
                    return false;
                }
                (s1, s2) = (&n1.right, &n2.right);
            }
            Less => {
                let near = create(n1.left.clone(), n1.value.clone(), Empty);
                if !subset(order, &near, &n2.left) {
                    return false;
                }
                s1 = &n1.right;
            }
            Greater => {
                let near = create(Empty, n1.value.clone(), n1.right.clone());
                if !subset(order, &near, &n2.right) {
                    return false;
                }
                s1 = &n1.left;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use total_order::Natural;

    use super::*;
    use crate::{bulk::of_list, debug::check_shape, traverse::elements};

    const NAT: Natural<i32> = Natural::new();

    fn set(xs: &[i32]) -> Tree<i32> { of_list(&NAT, xs.to_vec()) }

    #[test]
    fn small_examples() {
        let u = union(&NAT, &set(&[1, 2, 3]), &set(&[3, 4, 5]));
        assert_eq!(elements(&u), [1, 2, 3, 4, 5]);
        let i = inter(&NAT, &set(&[1, 2, 3]), &set(&[2, 3, 4]));
        assert_eq!(elements(&i), [2, 3]);
        let d = diff(&NAT, &set(&[1, 2, 3]), &set(&[2]));
        assert_eq!(elements(&d), [1, 3]);
        for t in [&u, &i, &d] {
            check_shape(t);
        }
    }

    #[test]
    fn with_empty() {
        let s = set(&[1, 5, 9, 13, 17, 21]);
        let e = Empty;
        assert!(union(&NAT, &s, &e).ptr_eq(&s));
        assert!(union(&NAT, &e, &s).ptr_eq(&s));
        assert!(inter(&NAT, &s, &e).is_empty());
        assert!(inter(&NAT, &e, &s).is_empty());
        assert!(diff(&NAT, &s, &e).ptr_eq(&s));
        assert!(diff(&NAT, &e, &s).is_empty());
        assert!(subset(&NAT, &e, &s));
        assert!(subset(&NAT, &e, &e));
        assert!(!subset(&NAT, &s, &e));
    }

    #[test]
    fn lopsided_union() {
        let big: Vec<_> = (0..1000).map(|x| 2 * x).collect();
        let small = [-3, 7, 500, 1998, 5000];
        let u = union(&NAT, &set(&big), &set(&small));
        check_shape(&u);
        let mut expected = big.clone();
        expected.extend(small);
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(elements(&u), expected);

        let u = union(&NAT, &set(&small), &set(&big));
        assert_eq!(elements(&u), expected);
    }

    #[test]
    fn subset_cases() {
        let evens = set(&(0..40).map(|x| 2 * x).collect::<Vec<_>>());
        let fours = set(&(0..20).map(|x| 4 * x).collect::<Vec<_>>());
        assert!(subset(&NAT, &fours, &evens));
        assert!(!subset(&NAT, &evens, &fours));
        assert!(subset(&NAT, &evens, &evens));
        assert!(!subset(&NAT, &set(&[0, 2, 3]), &evens));
        assert!(!subset(&NAT, &set(&[78, 80]), &evens));
        assert!(subset(&NAT, &set(&[78]), &evens));
    }
}
