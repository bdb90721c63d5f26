//! Comparators that are passed around as values.
//!
//! A container that needs an ordering holds one of these instead of
//! relying on [`Ord`], so two containers over the same element type may
//! carry different orderings.

use std::{cmp::Ordering, fmt, marker::PhantomData};

/// A total order over `Self::Elt`.
///
/// `compare` must be consistent: reflexive, antisymmetric and transitive
/// for every pair of values ever handed to it. Containers rely on this and
/// do not check it.
pub trait TotalOrder {
    type Elt;
    fn compare(&self, lhs: &Self::Elt, rhs: &Self::Elt) -> Ordering;

    fn lt(&self, lhs: &Self::Elt, rhs: &Self::Elt) -> bool {
        self.compare(lhs, rhs) == Ordering::Less
    }
    fn equiv(&self, lhs: &Self::Elt, rhs: &Self::Elt) -> bool {
        self.compare(lhs, rhs) == Ordering::Equal
    }
}

impl<O: TotalOrder + ?Sized> TotalOrder for &O {
    type Elt = O::Elt;
    fn compare(&self, lhs: &Self::Elt, rhs: &Self::Elt) -> Ordering {
        (**self).compare(lhs, rhs)
    }
}

/// The order given by [`Ord`].
pub struct Natural<T>(PhantomData<fn(&T, &T) -> Ordering>);

/// The opposite of the inner order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<O>(pub O);

/// Compares by a key projected out of each element.
pub struct ByKey<T, K, F> {
    key: F,
    _marker: PhantomData<fn(&T) -> K>,
}

/// An arbitrary comparison closure.
pub struct FnOrder<T, F> {
    cmp: F,
    _marker: PhantomData<fn(&T, &T)>,
}

impl<T> Natural<T> {
    pub const fn new() -> Self { Self(PhantomData) }
}

impl<T> Clone for Natural<T> {
    fn clone(&self) -> Self { *self }
}
impl<T> Copy for Natural<T> {}
impl<T> Default for Natural<T> {
    fn default() -> Self { Self::new() }
}
impl<T> fmt::Debug for Natural<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Natural")
    }
}

impl<T: Ord> TotalOrder for Natural<T> {
    type Elt = T;
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering { lhs.cmp(rhs) }
}

impl<O: TotalOrder> TotalOrder for Reversed<O> {
    type Elt = O::Elt;
    fn compare(&self, lhs: &Self::Elt, rhs: &Self::Elt) -> Ordering {
        self.0.compare(rhs, lhs)
    }
}

impl<T, K: Ord, F: Fn(&T) -> K> ByKey<T, K, F> {
    pub fn new(key: F) -> Self { Self { key, _marker: PhantomData } }
}

impl<T, K, F: Clone> Clone for ByKey<T, K, F> {
    fn clone(&self) -> Self {
        Self { key: self.key.clone(), _marker: PhantomData }
    }
}

impl<T, K: Ord, F: Fn(&T) -> K> TotalOrder for ByKey<T, K, F> {
    type Elt = T;
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.key)(lhs).cmp(&(self.key)(rhs))
    }
}

impl<T, F: Fn(&T, &T) -> Ordering> FnOrder<T, F> {
    pub fn new(cmp: F) -> Self { Self { cmp, _marker: PhantomData } }
}

impl<T, F: Clone> Clone for FnOrder<T, F> {
    fn clone(&self) -> Self {
        Self { cmp: self.cmp.clone(), _marker: PhantomData }
    }
}

impl<T, F: Fn(&T, &T) -> Ordering> TotalOrder for FnOrder<T, F> {
    type Elt = T;
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering { (self.cmp)(lhs, rhs) }
}

/// Declares zero-sized comparators from comparison closures.
///
/// ```
/// use total_order::{def_total_order, TotalOrder};
///
/// def_total_order! {
///     ByLen = (String, |x: &String, y: &String| x.len().cmp(&y.len())),
/// }
///
/// let by_len = ByLen::new();
/// assert!(by_len.lt(&"ab".to_owned(), &"abc".to_owned()));
/// ```
#[macro_export]
macro_rules! def_total_order {
    ( $vis:vis $name:ident = ($ty:ty, $cmp:expr $(,)?) ) => {
        #[derive(Clone, Copy, Debug, Default)]
        $vis struct $name;
        impl $name {
            #[allow(dead_code)]
            $vis fn new() -> Self { Self }
        }
        impl $crate::TotalOrder for $name {
            type Elt = $ty;
            fn compare(
                &self,
                lhs: &Self::Elt,
                rhs: &Self::Elt,
            ) -> std::cmp::Ordering {
                ($cmp)(lhs, rhs)
            }
        }
    };
    ( $($vis:vis $name:ident = ($($impl:tt)*)),* $(,)? ) => { $(
        $crate::def_total_order! { $vis $name = ($($impl)*) }
    )* };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_and_reversed() {
        let nat = Natural::<i32>::new();
        assert_eq!(nat.compare(&1, &2), Ordering::Less);
        assert_eq!(nat.compare(&2, &2), Ordering::Equal);
        assert!(nat.lt(&-1, &0));

        let rev = Reversed(nat);
        assert_eq!(rev.compare(&1, &2), Ordering::Greater);
        assert!(rev.equiv(&3, &3));
        assert_eq!(Reversed(rev).compare(&1, &2), Ordering::Less);
    }

    #[test]
    fn by_key() {
        let abs = ByKey::new(|x: &i32| x.abs());
        assert_eq!(abs.compare(&-3, &2), Ordering::Greater);
        assert!(abs.equiv(&-2, &2));
    }

    #[test]
    fn fn_order() {
        let mod3 = FnOrder::new(|x: &u32, y: &u32| (x % 3).cmp(&(y % 3)));
        assert!(mod3.lt(&3, &1));
        assert!(mod3.equiv(&4, &7));
        let by_ref = &mod3;
        assert_eq!(by_ref.compare(&2, &0), Ordering::Greater);
    }

    #[test]
    fn declared() {
        def_total_order! {
            Desc = (i64, |x: &i64, y: &i64| y.cmp(x)),
            Parity = (u8, |x: &u8, y: &u8| (x & 1).cmp(&(y & 1))),
        }

        let desc = Desc::new();
        assert_eq!(desc.compare(&1, &2), Ordering::Greater);
        let parity = Parity::new();
        assert!(parity.equiv(&2, &4));
        assert!(parity.lt(&4, &5));
    }
}
