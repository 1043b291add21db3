use std::{
    alloc::{self, Layout},
    fmt,
    marker::PhantomData,
    mem::{self, align_of, size_of},
    ptr::{self, NonNull},
    slice,
};

use super::DynArrError;

/// Owner of exactly one heap block of `len` element slots.
///
/// Every slot always holds a valid `T`: a fresh buffer is filled with `T::default()`, and the slots are only ever
/// overwritten or swapped, never moved out of.
/// This type has no notion of a logical length or of growth, the owning container decides which slots are meaningful
/// and replaces the whole buffer when it needs a larger one.
///
/// - A buffer of 0 slots does not allocate and points at `NonNull::dangling()`.
/// - Zero-sized types never allocate, whatever the slot count.
/// - When dropped, all slots are dropped and the block is returned to the global allocator.
pub struct RawBuf<T> {
    ptr:      NonNull<T>,
    len:      usize,
    _phantom: PhantomData<T>,
}

// SAFETY: `RawBuf` uniquely owns its slots, like a `Box<[T]>`
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// Create a buffer without any slots, this does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self { ptr: NonNull::dangling(), len: 0, _phantom: PhantomData }
    }

    /// Get the number of slots in the buffer.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get a pointer to the first slot.
    ///
    /// The pointer is dangling (but non-null and aligned) when the buffer has no slots.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Get a mutable pointer to the first slot.
    ///
    /// The pointer is dangling (but non-null and aligned) when the buffer has no slots.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` points to `len` initialized slots, or is dangling with `len == 0`
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `ptr` points to `len` initialized slots, or is dangling with `len == 0`
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Exchange the blocks owned by `self` and `other`, no slot is touched.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other)
    }

    /// Layout of a block of `len` slots, `None` if nothing needs to be allocated for it.
    fn block_layout(len: usize) -> Result<Option<Layout>, DynArrError> {
        let layout = Layout::array::<T>(len).map_err(|_| DynArrError::CapacityOverflow)?;
        Ok(if layout.size() == 0 { None } else { Some(layout) })
    }
}

impl<T: Default> RawBuf<T> {
    /// Create a buffer of `len` default-valued slots.
    ///
    /// # Panics
    ///
    /// Panics if the block would exceed `isize::MAX` bytes.
    ///
    /// # Aborts
    ///
    /// Aborts on OOM.
    #[must_use]
    pub fn new_len(len: usize) -> Self {
        match Self::try_new_len(len) {
            Ok(buf) => buf,
            Err(err) => handle_error(err),
        }
    }

    /// Try to create a buffer of `len` default-valued slots.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrError::CapacityOverflow`] if the block would exceed `isize::MAX` bytes,
    /// or [`DynArrError::AllocError`] if the allocator reports a failure.
    pub fn try_new_len(len: usize) -> Result<Self, DynArrError> {
        if len == 0 {
            return Ok(Self::new());
        }

        let layout = Self::block_layout(len)?;
        let ptr = match layout {
            Some(layout) => {
                // SAFETY: `layout` has a non-zero size
                let raw = unsafe { alloc::alloc(layout) }.cast::<T>();
                NonNull::new(raw).ok_or(DynArrError::AllocError(layout))?
            },
            None => NonNull::dangling(),
        };

        // If `T::default()` panics, drop what was already written and release the block.
        let mut written = scopeguard::guard(0usize, |written| unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), written));
            if let Some(layout) = layout {
                alloc::dealloc(ptr.as_ptr().cast(), layout);
            }
        });
        while *written < len {
            // SAFETY: `*written < len`, so the slot lies inside the block
            unsafe { ptr.as_ptr().add(*written).write(T::default()) };
            *written += 1;
        }
        scopeguard::ScopeGuard::into_inner(written);

        Ok(Self { ptr, len, _phantom: PhantomData })
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RawBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuf")
            .field("len", &self.len)
            .field("slots", &self.as_slice())
            .finish()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }

        let ptr = self.ptr;
        let size = size_of::<T>() * self.len;
        // The block is released even if dropping one of the slots panics
        let _dealloc = scopeguard::guard((), |_| {
            if size != 0 {
                // SAFETY: the same size and alignment were validated by `Layout::array` when the block was allocated
                unsafe { alloc::dealloc(ptr.as_ptr().cast(), Layout::from_size_align_unchecked(size, align_of::<T>())) };
            }
        });

        // SAFETY: all `len` slots are initialized
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), self.len)) };
    }
}

/// Central function for allocation error handling
#[cold]
#[track_caller]
pub(super) fn handle_error(err: DynArrError) -> ! {
    match err {
        DynArrError::AllocError(layout) => alloc::handle_alloc_error(layout),
        err => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[derive(Default)]
    struct DropCounter(Option<Rc<Cell<usize>>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            if let Some(count) = &self.0 {
                count.set(count.get() + 1);
            }
        }
    }

    #[test]
    fn raw_buf_empty() {
        let buf = RawBuf::<u64>::new();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert!(!buf.as_ptr().is_null());
        assert!(buf.as_slice().is_empty());

        let buf = RawBuf::<u64>::new_len(0);
        assert!(buf.is_empty());
    }

    #[test]
    fn raw_buf_default_slots() {
        let buf = RawBuf::<String>::new_len(4);
        assert_eq!(buf.len(), 4);
        assert!(buf.as_slice().iter().all(String::is_empty));
    }

    #[test]
    fn raw_buf_swap() {
        let mut a = RawBuf::<u32>::new_len(2);
        let mut b = RawBuf::<u32>::new_len(5);
        a.as_mut_slice()[0] = 7;
        let a_ptr = a.as_ptr();

        a.swap(&mut b);
        assert_eq!(a.len(), 5);
        assert_eq!(b.len(), 2);
        assert_eq!(b.as_ptr(), a_ptr);
        assert_eq!(b.as_slice(), &[7, 0]);
    }

    #[test]
    fn raw_buf_zero_sized() {
        let buf = RawBuf::<()>::new_len(1000);
        assert_eq!(buf.len(), 1000);
        assert_eq!(buf.as_slice().len(), 1000);
    }

    #[test]
    fn raw_buf_drops_every_slot() {
        let count = Rc::new(Cell::new(0));
        {
            let mut buf = RawBuf::<DropCounter>::new_len(3);
            for slot in buf.as_mut_slice() {
                *slot = DropCounter(Some(count.clone()));
            }
        }
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn raw_buf_capacity_overflow() {
        assert_eq!(RawBuf::<u64>::try_new_len(usize::MAX).err(), Some(DynArrError::CapacityOverflow));
    }
}
