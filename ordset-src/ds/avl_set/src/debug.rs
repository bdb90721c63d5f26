use std::fmt::{Debug, Write};

use crate::tree::Tree;

use Tree::{Empty, Node as Br};

#[derive(Clone, Copy, Eq, PartialEq)]
enum Kind {
    Root,
    Upper,
    Lower,
}
use Kind::*;

/// Draws the tree sideways: larger elements above, each node followed by
/// its height.
///
/// ```text
/// ┌── 6 (1)
/// 4 (3)
/// │   ┌── 3 (1)
/// └── 2 (2)
///     └── 1 (1)
/// ```
pub(crate) fn render<T: Debug>(t: &Tree<T>) -> String {
    fn dfs<T: Debug>(t: &Tree<T>, path: &mut Vec<Kind>, out: &mut String) {
        let Br(n) = t else { return };
        path.push(Upper);
        dfs(&n.right, path, out);
        path.pop();

        let len = path.len();
        for j in 1..len {
            out.push_str(match (path[j], path.get(j + 1)) {
                (Upper, None) => "┌── ",
                (Lower, None) => "└── ",
                (k0, Some(&k1)) if k0 == k1 => "    ",
                _ => "│   ",
            });
        }
        let _ = writeln!(out, "{:?} ({})", n.value, n.height);

        path.push(Lower);
        dfs(&n.left, path, out);
        path.pop();
    }

    let mut out = String::new();
    if let Empty = t {
        out.push_str("(empty)\n");
    }
    dfs(t, &mut vec![Root], &mut out);
    out
}

pub(crate) fn visualize<T: Debug>(t: &Tree<T>) {
    for line in render(t).lines() {
        log::debug!("{line}");
    }
}

/// Checks strict ascending order under `order`, the height cache, and the
/// balance tolerance at every node.
#[cfg(test)]
pub(crate) fn check_shape_by<O: total_order::TotalOrder>(
    order: &O,
    t: &Tree<O::Elt>,
) {
    use crate::tree::TOLERANCE;

    fn dfs<T>(t: &Tree<T>) -> usize {
        let Br(n) = t else { return 0 };
        let (hl, hr) = (dfs(&n.left), dfs(&n.right));
        assert!(hl.abs_diff(hr) <= TOLERANCE, "unbalanced: {hl} vs {hr}");
        assert_eq!(n.height, 1 + hl.max(hr), "stale height");
        n.height
    }
    dfs(t);

    let xs: Vec<_> = crate::iter::Iter::new(t).collect();
    for w in xs.windows(2) {
        assert!(order.lt(w[0], w[1]), "not strictly ascending");
    }
}

#[cfg(test)]
pub(crate) fn check_shape<T: Ord>(t: &Tree<T>) {
    check_shape_by(&total_order::Natural::new(), t);
}
