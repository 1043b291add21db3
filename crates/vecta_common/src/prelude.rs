pub use crate::collections::{DynArr, DynArrError, CapacityReserve, reserve};
pub use crate::dynarr;
