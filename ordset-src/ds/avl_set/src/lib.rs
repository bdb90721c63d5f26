//! Persistent ordered sets.
//!
//! An [`AvlSet`] is an immutable height-balanced search tree whose sibling
//! heights differ by at most two. Every update returns a new set sharing
//! all untouched subtrees with the old one, so keeping old versions around
//! is cheap and cloning a set is $`O(1)`$.
//!
//! The ordering is a value implementing [`TotalOrder`], held by the set.
//!
//! ```
//! use avl_set::{AvlSet, Natural};
//!
//! let s: AvlSet<Natural<i32>> = [5, 3, 8, 1, 4].into_iter().collect();
//! assert_eq!(s.elements(), [1, 3, 4, 5, 8]);
//! assert!(s.mem(&3));
//! assert!(!s.mem(&9));
//!
//! let t = s.add(3);
//! assert!(t.ptr_eq(&s));
//! let u = s.union(&AvlSet::of_list(vec![9, 2]));
//! assert_eq!(u.cardinal(), 7);
//! assert_eq!(s.cardinal(), 5);
//! ```

mod algebra;
mod bulk;
mod debug;
mod error;
mod iter;
mod point;
mod traverse;
mod tree;

use std::{cmp::Ordering, fmt};

pub use error::NotFound;
pub use iter::Iter;
pub use total_order::{ByKey, FnOrder, Natural, Reversed, TotalOrder};

use tree::Tree;

pub struct AvlSet<O: TotalOrder> {
    root: Tree<O::Elt>,
    order: O,
}

impl<O: TotalOrder> AvlSet<O> {
    pub fn new() -> Self
    where
        O: Default,
    {
        Self::with_order(O::default())
    }
    pub fn with_order(order: O) -> Self { Self { root: Tree::Empty, order } }
    pub fn order(&self) -> &O { &self.order }

    pub fn is_empty(&self) -> bool { self.root.is_empty() }
    pub fn mem(&self, x: &O::Elt) -> bool {
        point::mem(&self.order, x, &self.root)
    }

    /// The stored element equivalent to `x`, which need not be `x` itself
    /// under a coarser order.
    pub fn find(&self, x: &O::Elt) -> Result<&O::Elt, NotFound> {
        self.find_opt(x).ok_or(NotFound)
    }
    pub fn find_opt(&self, x: &O::Elt) -> Option<&O::Elt> {
        point::find(&self.order, x, &self.root)
    }

    /// The smallest element satisfying `pred`.
    ///
    /// `pred` must be monotone: false on a (possibly empty) prefix of the
    /// ascending sequence and true on the rest. This is not checked; the
    /// search takes $`O(\log n)`$ calls.
    ///
    /// ```
    /// use avl_set::{AvlSet, Natural};
    ///
    /// let s: AvlSet<Natural<i32>> = AvlSet::of_list(vec![10, 20, 30]);
    /// assert_eq!(s.find_first(|&x| x > 15), Ok(&20));
    /// assert!(s.find_first(|&x| x > 30).is_err());
    /// ```
    pub fn find_first(
        &self,
        pred: impl FnMut(&O::Elt) -> bool,
    ) -> Result<&O::Elt, NotFound> {
        self.find_first_opt(pred).ok_or(NotFound)
    }
    pub fn find_first_opt(
        &self,
        pred: impl FnMut(&O::Elt) -> bool,
    ) -> Option<&O::Elt> {
        point::find_first(pred, &self.root)
    }

    /// The largest element satisfying `pred`, which must be true on a
    /// prefix and false on the rest.
    pub fn find_last(
        &self,
        pred: impl FnMut(&O::Elt) -> bool,
    ) -> Result<&O::Elt, NotFound> {
        self.find_last_opt(pred).ok_or(NotFound)
    }
    pub fn find_last_opt(
        &self,
        pred: impl FnMut(&O::Elt) -> bool,
    ) -> Option<&O::Elt> {
        point::find_last(pred, &self.root)
    }

    pub fn min_elt(&self) -> Result<&O::Elt, NotFound> {
        self.min_elt_opt().ok_or(NotFound)
    }
    pub fn min_elt_opt(&self) -> Option<&O::Elt> { self.root.min_elt() }
    pub fn max_elt(&self) -> Result<&O::Elt, NotFound> {
        self.max_elt_opt().ok_or(NotFound)
    }
    pub fn max_elt_opt(&self) -> Option<&O::Elt> { self.root.max_elt() }

    /// Some element; currently always the smallest.
    pub fn choose(&self) -> Result<&O::Elt, NotFound> { self.min_elt() }
    pub fn choose_opt(&self) -> Option<&O::Elt> { self.min_elt_opt() }

    /// Lexicographic comparison of the ascending sequences, under the
    /// order of `self`.
    pub fn compare(&self, other: &Self) -> Ordering {
        iter::compare(&self.order, &self.root, &other.root)
    }
    pub fn equal(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn iter(&self) -> Iter<'_, O::Elt> { Iter::new(&self.root) }
    pub fn for_each(&self, mut f: impl FnMut(&O::Elt)) {
        traverse::for_each(&self.root, &mut f);
    }
    /// Folds in ascending order.
    pub fn fold<B>(&self, init: B, mut f: impl FnMut(B, &O::Elt) -> B) -> B {
        traverse::fold(&self.root, init, &mut f)
    }
    /// Stops at the first element failing `pred`. Elements are not
    /// visited in ascending order.
    pub fn for_all(&self, mut pred: impl FnMut(&O::Elt) -> bool) -> bool {
        traverse::for_all(&self.root, &mut pred)
    }
    /// Stops at the first element satisfying `pred`. Elements are not
    /// visited in ascending order.
    pub fn exists(&self, mut pred: impl FnMut(&O::Elt) -> bool) -> bool {
        traverse::exists(&self.root, &mut pred)
    }
    /// Counts the elements in $`O(n)`$ time.
    pub fn cardinal(&self) -> usize { traverse::cardinal(&self.root) }

    /// Whether the two sets share their root, i.e. one was returned
    /// unchanged by an operation on the other.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.root.ptr_eq(&other.root)
    }

    /// Logs the tree shape at `debug` level.
    pub fn visualize(&self)
    where
        O::Elt: fmt::Debug,
    {
        debug::visualize(&self.root);
    }
}

impl<O: TotalOrder + Clone> AvlSet<O>
where
    O::Elt: Clone,
{
    pub fn singleton(x: O::Elt) -> Self
    where
        O: Default,
    {
        Self { root: tree::singleton(x), order: O::default() }
    }

    /// Builds a set from arbitrary input; of several equivalent elements
    /// the first one is kept.
    pub fn of_list(xs: Vec<O::Elt>) -> Self
    where
        O: Default,
    {
        Self::of_list_with(O::default(), xs)
    }
    pub fn of_list_with(order: O, xs: Vec<O::Elt>) -> Self {
        Self { root: bulk::of_list(&order, xs), order }
    }

    fn with_root(&self, root: Tree<O::Elt>) -> Self {
        Self { root, order: self.order.clone() }
    }

    /// Returns a set sharing the root of `self` if `x` is already present.
    pub fn add(&self, x: O::Elt) -> Self {
        self.with_root(point::add(&self.order, x, &self.root))
    }
    /// Returns a set sharing the root of `self` if `x` is absent.
    pub fn remove(&self, x: &O::Elt) -> Self {
        self.with_root(point::remove(&self.order, x, &self.root))
    }

    pub fn union(&self, other: &Self) -> Self {
        self.with_root(algebra::union(&self.order, &self.root, &other.root))
    }
    pub fn inter(&self, other: &Self) -> Self {
        self.with_root(algebra::inter(&self.order, &self.root, &other.root))
    }
    pub fn diff(&self, other: &Self) -> Self {
        self.with_root(algebra::diff(&self.order, &self.root, &other.root))
    }
    pub fn subset(&self, other: &Self) -> bool {
        algebra::subset(&self.order, &self.root, &other.root)
    }

    /// The elements less than `x`, whether `x` is present, and the
    /// elements greater than `x`.
    pub fn split(&self, x: &O::Elt) -> (Self, bool, Self) {
        let (l, present, r) = point::split(&self.order, x, &self.root);
        (self.with_root(l), present, self.with_root(r))
    }

    /// Returns a set sharing the root of `self` if every element is kept.
    pub fn filter(&self, mut pred: impl FnMut(&O::Elt) -> bool) -> Self {
        self.with_root(traverse::filter(&self.root, &mut pred))
    }
    /// The elements satisfying `pred`, and the rest.
    pub fn partition(
        &self,
        mut pred: impl FnMut(&O::Elt) -> bool,
    ) -> (Self, Self) {
        let (t, f) = traverse::partition(&self.root, &mut pred);
        (self.with_root(t), self.with_root(f))
    }
    /// Applies `f` to every element in ascending order. `f` need not be
    /// monotone, and images that collide are merged.
    pub fn map(&self, mut f: impl FnMut(&O::Elt) -> O::Elt) -> Self {
        self.with_root(traverse::map(&self.order, &self.root, &mut f))
    }

    pub fn elements(&self) -> Vec<O::Elt> { traverse::elements(&self.root) }
}

impl<O: TotalOrder + Clone> Clone for AvlSet<O> {
    fn clone(&self) -> Self {
        Self { root: self.root.clone(), order: self.order.clone() }
    }
}

impl<O: TotalOrder + Default> Default for AvlSet<O> {
    fn default() -> Self { Self::new() }
}

impl<O: TotalOrder> fmt::Debug for AvlSet<O>
where
    O::Elt: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

impl<O: TotalOrder> PartialEq for AvlSet<O> {
    fn eq(&self, other: &Self) -> bool { self.equal(other) }
}
impl<O: TotalOrder> Eq for AvlSet<O> {}

impl<O: TotalOrder> PartialOrd for AvlSet<O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}
impl<O: TotalOrder> Ord for AvlSet<O> {
    fn cmp(&self, other: &Self) -> Ordering { self.compare(other) }
}

impl<'a, O: TotalOrder> IntoIterator for &'a AvlSet<O> {
    type Item = &'a O::Elt;
    type IntoIter = Iter<'a, O::Elt>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T: Ord + Clone> FromIterator<T> for AvlSet<Natural<T>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of_list(iter.into_iter().collect())
    }
}
