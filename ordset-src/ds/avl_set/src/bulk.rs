use std::cmp::Ordering::Equal;

use total_order::TotalOrder;

use crate::{
    error::invariant_violation,
    point::add,
    tree::{create, singleton, Tree},
};

use Tree::Empty;

/// Builds a set from arbitrary input, dropping later duplicates.
///
/// Up to four elements are simply inserted one by one. Longer input is
/// sorted and deduplicated, then laid out in a single left-to-right pass
/// as a tree of minimum height.
pub(crate) fn of_list<O: TotalOrder>(
    order: &O,
    mut xs: Vec<O::Elt>,
) -> Tree<O::Elt>
where
    O::Elt: Clone,
{
    if xs.len() <= 4 {
        return xs.into_iter().fold(Empty, |t, x| add(order, x, &t));
    }
    xs.sort_by(|x, y| order.compare(x, y));
    xs.dedup_by(|later, earlier| order.compare(earlier, later) == Equal);
    let len = xs.len();
    of_sorted(len, &mut xs.into_iter())
}

/// Consumes exactly `n` elements of a strictly ascending sequence.
pub(crate) fn of_sorted<T>(
    n: usize,
    iter: &mut impl Iterator<Item = T>,
) -> Tree<T> {
    match n {
        0 => Empty,
        1 => singleton(pop(iter)),
        2 => {
            let x0 = pop(iter);
            let x1 = pop(iter);
            create(singleton(x0), x1, Empty)
        }
        3 => {
            let x0 = pop(iter);
            let x1 = pop(iter);
            let x2 = pop(iter);
            create(singleton(x0), x1, singleton(x2))
        }
        _ => {
            let nl = n / 2;
            let l = of_sorted(nl, iter);
            let v = pop(iter);
            let r = of_sorted(n - nl - 1, iter);
            create(l, v, r)
        }
    }
}

fn pop<T>(iter: &mut impl Iterator<Item = T>) -> T {
    iter.next().unwrap_or_else(|| invariant_violation("of_sorted"))
}
