//! Persistent ordered sets.
//!
//! - [`ops`]: comparators, passed to containers as values.
//! - [`ds`]: the containers themselves.

#[doc(inline)]
pub use ds;
#[doc(inline)]
pub use ops;
