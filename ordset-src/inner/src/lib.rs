/// Re-exports each member crate of a category, both as a module and
/// flattened, so that rustdoc shows the items inline.
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $($lib:ident),* $(,)? ) => { $(
        #[doc(inline)]
        pub use $lib::{self, *};
    )* };
}
