mod raw_buf;
mod dynarr;

use core::{alloc::Layout, fmt};

pub use raw_buf::RawBuf;
pub use dynarr::*;

//--------------------------------------------------------------

macro_rules! impl_slice_partial_eq_generic {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty $(where $ty:ty: $bound:ident)?) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs  where
            T : PartialEq<U>,
            $($ty: $bound)?
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
            #[inline]
            fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
        }
    };
}
use impl_slice_partial_eq_generic;

//--------------------------------------------------------------

/// Errors reported by the fallible collection operations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DynArrError {
    /// A checked access was made at or past the logical length.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the array at the time of the access.
        len: usize,
    },
    /// The requested capacity does not fit in `isize::MAX` bytes.
    CapacityOverflow,
    /// The allocator refused to provide memory for the given layout.
    AllocError(Layout),
}

impl fmt::Display for DynArrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => write!(f, "index out of range: the len is {len} but the index is {index}"),
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocError(layout) => write!(f, "memory allocation of {} bytes failed", layout.size()),
        }
    }
}

impl std::error::Error for DynArrError {}

//--------------------------------------------------------------

/// A trait used to define a strategy to reserve additional memory for containers.
pub trait ReserveStrategy {
    /// Calculate the new capacity for a container.
    ///
    /// `cur_capacity` represents the current capacity of the container.
    ///
    /// `min_capacity` represents the minimum required capacity to be able to resize.
    ///
    /// Returns `Err(())` if the capacity were to overflow
    fn calculate(cur_capacity: usize, min_capacity: usize) -> Result<usize, ()>;
}

/// A reserve strategy that will try to either return double the current capacity, or the minimum required capacity, whichever is bigger.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleOrMinReserveStrategy;

impl ReserveStrategy for DoubleOrMinReserveStrategy {
    fn calculate(cur_capacity: usize, min_capacity: usize) -> Result<usize, ()> {
        let double_cap = cur_capacity.checked_mul(2).ok_or(())?;
        let new_cap = if double_cap > min_capacity { double_cap } else { min_capacity };
        if new_cap <= isize::MAX as usize {
            Ok(new_cap)
        } else {
            Err(())
        }
    }
}

/// A reserve strategy that will return a power of 2 capacity
#[derive(Clone, Copy, Debug, Default)]
pub struct Pow2ReserveStrategy;

impl ReserveStrategy for Pow2ReserveStrategy {
    fn calculate(_cur_capacity: usize, min_capacity: usize) -> Result<usize, ()> {
        match min_capacity.checked_next_power_of_two() {
            Some(new_cap) if new_cap <= isize::MAX as usize => Ok(new_cap),
            _ => Err(()),
        }
    }
}

/// A reserve stategy that grows the capacity by 1.5
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreeHalvesReserveStrategy;

impl ReserveStrategy for ThreeHalvesReserveStrategy {
    fn calculate(cur_capacity: usize, min_capacity: usize) -> Result<usize, ()> {
        // 1.5 * 1 rounds back down to 1, so never start below 2
        let mut cap = cur_capacity.max(2);
        while cap < min_capacity {
            cap = (cap << 1) - (cap >> 1);
            if cap > isize::MAX as usize {
                return Err(());
            }
        }
        Ok(cap)
    }
}

//--------------------------------------------------------------

/// Tag requesting "`n` reserved, empty slots" when building a [`DynArr`].
///
/// Both "reserve `n`" and "fill `n`" take a single count, this wrapper keeps the two apart:
///
/// ```
/// use vecta_common::collections::{reserve, DynArr};
///
/// let arr: DynArr<u32> = reserve(16).into();
/// assert_eq!(arr.len(), 0);
/// assert_eq!(arr.capacity(), 16);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CapacityReserve(usize);

impl CapacityReserve {
    pub const fn new(capacity: usize) -> Self {
        Self(capacity)
    }

    pub const fn capacity(self) -> usize {
        self.0
    }
}

/// Create a [`CapacityReserve`] tag for `capacity` slots.
pub const fn reserve(capacity: usize) -> CapacityReserve {
    CapacityReserve(capacity)
}

//--------------------------------------------------------------

cfg_if::cfg_if! {
    if #[cfg(feature = "growth_logging")] {
        const LOG_CAT: vecta_logging::LogCategory = vecta_logging::LogCategory::new_with_sub("Collections", "DynArr");

        fn log_growth<T>(old_cap: usize, new_cap: usize) {
            vecta_logging::log_verbose!(LOG_CAT, "reallocating [{}] buffer: {} -> {} slots", core::any::type_name::<T>(), old_cap, new_cap);
        }
    } else {
        #[inline(always)]
        fn log_growth<T>(_old_cap: usize, _new_cap: usize) {}
    }
}
