use thiserror::Error;

/// Returned when a query has no qualifying element.
///
/// The `_opt` variant of every query returns [`None`] instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("no element satisfies the query")]
pub struct NotFound;

/// Aborts on a state that proves the tree was already malformed.
///
/// Never part of the public contract; reaching it is a bug in this crate.
#[cold]
#[track_caller]
pub(crate) fn invariant_violation(site: &'static str) -> ! {
    log::error!("avl_set: invariant violated in `{site}`");
    panic!("avl_set: invariant violated in `{site}`")
}
