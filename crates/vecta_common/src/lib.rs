//! Common building blocks for vecta: the growable [`DynArr`](collections::DynArr) and the raw buffer it owns.

#[doc(hidden)]
pub use vecta_base::count_exprs;

pub mod collections;
pub mod prelude;
