use std::{cmp::Ordering, iter::FusedIterator};

use total_order::TotalOrder;

use crate::tree::{Node, Tree};

use Tree::Node as Br;

/// Ascending iterator over a set.
///
/// Holds only the left spine still to be visited (each entry stands for
/// its value followed by its right subtree), so it never holds more than
/// the tree's height in references.
pub struct Iter<'a, T> {
    spine: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(t: &'a Tree<T>) -> Self {
        let mut iter = Self { spine: Vec::with_capacity(t.height()) };
        iter.descend(t);
        iter
    }

    fn descend(&mut self, mut t: &'a Tree<T>) {
        while let Br(n) = t {
            self.spine.push(n);
            t = &n.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let node = self.spine.pop()?;
        self.descend(&node.right);
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self { Self { spine: self.spine.clone() } }
}

/// Lexicographic comparison of the ascending sequences, stopping at the
/// first difference. A proper prefix is smaller.
pub(crate) fn compare<O: TotalOrder>(
    order: &O,
    s1: &Tree<O::Elt>,
    s2: &Tree<O::Elt>,
) -> Ordering {
    if s1.ptr_eq(s2) {
        return Ordering::Equal;
    }
    let (mut e1, mut e2) = (Iter::new(s1), Iter::new(s2));
    loop {
        match (e1.next(), e2.next()) {
            (None, None) => return Ordering::Equal,
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (Some(x1), Some(x2)) => match order.compare(x1, x2) {
                Ordering::Equal => {}
                c => return c,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use total_order::{FnOrder, Natural};

    use super::*;
    use crate::bulk::of_list;

    const NAT: Natural<i32> = Natural::new();

    #[test]
    fn ascending() {
        let t = of_list(&NAT, vec![9, 2, 7, 4, 5, 6, 3, 8, 1, 0]);
        assert!(Iter::new(&t).copied().eq(0..10));
        let empty = Tree::<i32>::Empty;
        assert_eq!(Iter::new(&empty).next(), None);

        let mut it = Iter::new(&t);
        assert_eq!(it.nth(3), Some(&3));
        let rest = it.clone();
        assert_eq!(it.count(), 6);
        assert_eq!(rest.last(), Some(&9));
    }

    #[test]
    fn spine_stays_short() {
        let t = of_list(&NAT, (0..1 << 12).collect());
        let mut it = Iter::new(&t);
        let cap = it.spine.len();
        assert!(cap <= t.height());
        while it.next().is_some() {
            assert!(it.spine.len() <= t.height());
        }
    }

    #[test]
    fn lexicographic() {
        let s = |xs: &[i32]| of_list(&NAT, xs.to_vec());
        assert_eq!(compare(&NAT, &s(&[1, 2]), &s(&[1, 2])), Ordering::Equal);
        assert_eq!(compare(&NAT, &s(&[1, 2]), &s(&[1, 3])), Ordering::Less);
        assert_eq!(compare(&NAT, &s(&[1, 2]), &s(&[1])), Ordering::Greater);
        assert_eq!(compare(&NAT, &s(&[]), &s(&[0])), Ordering::Less);
        assert_eq!(compare(&NAT, &s(&[5]), &s(&[1, 2, 3])), Ordering::Greater);
    }

    #[test]
    fn stops_at_first_difference() {
        let calls = Cell::new(0);
        let counting = FnOrder::new(|x: &i32, y: &i32| {
            calls.set(calls.get() + 1);
            x.cmp(y)
        });
        let s1 = of_list(&NAT, (0..1000).collect());
        let s2 =
            of_list(&NAT, (0..1000).map(|x| x + (x >= 3) as i32).collect());
        assert_eq!(compare(&counting, &s1, &s2), Ordering::Less);
        assert_eq!(calls.get(), 4);

        calls.set(0);
        assert_eq!(compare(&counting, &s1, &s1.clone()), Ordering::Equal);
        assert_eq!(calls.get(), 0);
    }
}
