use core::{
    fmt, hash::Hash, marker::PhantomData, mem, ops::{self, Index, IndexMut}, slice::{self, SliceIndex}
};

use super::{
    impl_slice_partial_eq_generic, log_growth, raw_buf::handle_error,
    CapacityReserve, DoubleOrMinReserveStrategy, DynArrError, RawBuf, ReserveStrategy,
};

mod into_iter;

pub use into_iter::IntoIter;

/// A contiguous growable array type, also known as a dynamic array, or DynArr.
///
/// Dynamic arrays have *O*(1) indexing, amortized *O*(1) push (to the end), and *O*(1) pop (from the back).
///
/// _Note: It was decided to not name this `Vec` as in the standard library, as this is easily confusable with a math vector_
///
/// # Examples
///
/// ```
/// use vecta_common::{dynarr, collections::DynArr};
///
/// let mut arr = DynArr::new();
/// arr.push_back(1);
/// arr.push_back(2);
///
/// assert_eq!(arr.len(), 2);
/// assert_eq!(arr[0], 1);
///
/// arr[0] = 7;
/// assert_eq!(arr[0], 7);
///
/// arr.extend([1, 2, 3]);
/// assert_eq!(arr, [7, 2, 1, 2, 3]);
/// assert_eq!(arr, dynarr![7, 2, 1, 2, 3]);
/// ```
///
/// # Capacity and reallocation
///
/// The capacity of a dynamic array is the number of slots in the buffer it owns, the *length* is the number of those
/// slots that hold actual elements.
/// When an operation needs more room than the capacity provides, a new buffer is allocated according to the reserve
/// strategy `R`, the elements are moved over, and the old buffer is released.
/// With the default [`DoubleOrMinReserveStrategy`] the capacity at least doubles, which keeps [`push_back`] amortized *O*(1):
/// pushing 1, 2, 3 onto an empty array reallocates to a capacity of 1, 2 and then 4.
///
/// `DynArr` never shrinks on its own. [`clear`], [`truncate`], [`pop_back`] and [`erase`] only shorten the length,
/// so filling the array back up to its previous length does not allocate.
///
/// # Slots
///
/// Every slot of the buffer always holds a valid `T`, which is why allocating operations require `T: Default`.
/// Slots past the length may still hold elements that were popped, erased or truncated, those are never observable
/// through the array and are dropped when overwritten, or when the buffer is released.
///
/// ```text
///           buf      len
///         +--------+--------+
///         |   ...  |    2   |
///         +--------+--------+
///             |
///             v
///         +--------+--------+
///     ptr | 0x1234 |    4   | capacity
///         +--------+--------+
///             |
///             v
///   Heap  +--------+--------+--------+--------+
///         |   'a'  |   'b'  |  stale | default|
///         +--------+--------+--------+--------+
/// ```
///
/// # Indexing
///
/// There are three tiers of element access:
/// - [`at`] and [`at_mut`] return [`DynArrError::IndexOutOfRange`] for an index past the length.
/// - `arr[i]` panics for an index past the length, in both debug and release builds.
/// - [`get_unchecked`] and [`get_unchecked_mut`] only check the index with a debug assertion, calling them with an
///   out of range index is undefined behavior.
///
/// [`push_back`]: DynArr::push_back
/// [`clear`]: DynArr::clear
/// [`truncate`]: DynArr::truncate
/// [`pop_back`]: DynArr::pop_back
/// [`erase`]: DynArr::erase
/// [`at`]: DynArr::at
/// [`at_mut`]: DynArr::at_mut
/// [`get_unchecked`]: DynArr::get_unchecked
/// [`get_unchecked_mut`]: DynArr::get_unchecked_mut
pub struct DynArr<T, R: ReserveStrategy = DoubleOrMinReserveStrategy> {
    buf: RawBuf<T>,
    len: usize,
    _phantom: PhantomData<R>,
}

static_assertions::assert_impl_all!(DynArr<u32>: Send, Sync, Default, Clone);
static_assertions::assert_not_impl_any!(DynArr<std::rc::Rc<u32>>: Send, Sync);
static_assertions::const_assert_eq!(mem::size_of::<DynArr<u32>>(), 3 * mem::size_of::<usize>());

impl<T> DynArr<T> {
    /// Constructs a new, empty `DynArr<T>`.
    ///
    /// The dynamic array will not allocate until elements are pushed onto it.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_strategy()
    }
}

impl<T: Default> DynArr<T> {
    /// Constructs a new `DynArr<T>` with exactly `capacity` slots and a length of 0.
    ///
    /// If `capacity` is 0, the dynamic array will not allocate.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_buf(RawBuf::new_len(capacity), 0)
    }

    /// Tries to construct a new `DynArr<T>` with exactly `capacity` slots and a length of 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity exceeds `isize::MAX` _bytes_, or if the allocator reports a failure.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, DynArrError> {
        Ok(Self::from_buf(RawBuf::try_new_len(capacity)?, 0))
    }

    /// Constructs a `DynArr<T>` of `len` default values, its capacity is exactly `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecta_common::collections::DynArr;
    ///
    /// let arr = DynArr::<u8>::with_len(3);
    /// assert_eq!(arr, [0, 0, 0]);
    /// assert_eq!(arr.capacity(), 3);
    /// ```
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self::from_buf(RawBuf::new_len(len), len)
    }
}

impl<T: Clone + Default> DynArr<T> {
    /// Constructs a `DynArr<T>` of `len` copies of `value`, its capacity is exactly `len`.
    ///
    /// `value` is cloned into all but the last slot, and moved into the last one.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecta_common::collections::DynArr;
    ///
    /// let arr = DynArr::with_fill(3, "hi".to_string());
    /// assert_eq!(arr, ["hi", "hi", "hi"]);
    /// ```
    #[must_use]
    pub fn with_fill(len: usize, value: T) -> Self {
        let mut arr = Self::with_len(len);
        arr.buf.as_mut_slice().fill(value);
        arr
    }

    /// Constructs a `DynArr<T>` by cloning every element of `items` in order, its capacity is exactly `items.len()`.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        Self::cloned_from(items)
    }
}

impl<T, R: ReserveStrategy> DynArr<T, R> {
    /// Constructs a new, empty `DynArr<T, R>` for any reserve strategy.
    ///
    /// The dynamic array will not allocate until elements are pushed onto it.
    #[inline]
    #[must_use]
    pub const fn with_strategy() -> Self {
        Self { buf: RawBuf::new(), len: 0, _phantom: PhantomData }
    }

    const fn from_buf(buf: RawBuf<T>, len: usize) -> Self {
        Self { buf, len, _phantom: PhantomData }
    }

    /// Returns the number of elements in the dynamic array, also referred to as its 'length'.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the total number of elements the dynamic array can hold without reallocating.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the dynamic array contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf.as_mut_slice()[..len]
    }

    /// Returns a raw pointer to the buffer.
    ///
    /// The pointer is valid until the dynamic array reallocates or is dropped, it is dangling for a capacity of 0.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecta_common::{dynarr, collections::DynArrError};
    ///
    /// let arr = dynarr![1, 2, 3];
    /// assert_eq!(arr.at(2), Ok(&3));
    /// assert_eq!(arr.at(3), Err(DynArrError::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, DynArrError> {
        let len = self.len;
        self.as_slice().get(index).ok_or(DynArrError::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrError::IndexOutOfRange`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DynArrError> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(DynArrError::IndexOutOfRange { index, len })
    }

    /// Returns a reference to the element at `index`, without bounds checking in release builds.
    ///
    /// # Safety
    ///
    /// `index` must be smaller than [`len`](DynArr::len), this is only checked by a debug assertion.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index (is {index}) should be < len (is {})", self.len);
        &*self.buf.as_ptr().add(index)
    }

    /// Returns a mutable reference to the element at `index`, without bounds checking in release builds.
    ///
    /// # Safety
    ///
    /// `index` must be smaller than [`len`](DynArr::len), this is only checked by a debug assertion.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index (is {index}) should be < len (is {})", self.len);
        &mut *self.buf.as_mut_ptr().add(index)
    }

    /// Clears the dynamic array, setting its length to 0.
    ///
    /// Note that this method has no effect on the allocated capacity of the dynamic array,
    /// and the elements stay in their slots until they are overwritten or the buffer is released.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shortens the dynamic array to `len` elements, does nothing if `len` is greater or equal to the current length.
    ///
    /// The capacity is left untouched.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// Removes the last element, without returning it.
    ///
    /// The vacated slot is not reset.
    ///
    /// # Panics
    ///
    /// Panics if the dynamic array is empty.
    #[track_caller]
    pub fn pop_back(&mut self) {
        #[cold]
        #[track_caller]
        fn assert_failed() -> ! {
            panic!("pop_back on an empty DynArr");
        }

        if self.len == 0 {
            assert_failed();
        }
        self.len -= 1;
    }

    /// Removes the element at `index`, shifting all elements after it one slot to the front.
    ///
    /// Returns `index`, which now refers to the element that followed the erased one, or is equal to the length if the
    /// last element was erased.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecta_common::dynarr;
    ///
    /// let mut arr = dynarr![1, 2, 3];
    /// assert_eq!(arr.erase(1), 1);
    /// assert_eq!(arr, [1, 3]);
    /// ```
    ///
    /// # Time complexity
    ///
    /// Takes *O*(`len - index`) time.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        #[cold]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!("erase index (is {index}) should be < len (is {len})");
        }

        let len = self.len;
        if index >= len {
            assert_failed(index, len);
        }

        // Moves the erased element to the back, behind the elements that shift to the front
        self.buf.as_mut_slice()[index..len].rotate_left(1);
        self.len = len - 1;
        index
    }

    /// Exchanges the buffers, capacities and lengths of `self` and `other` in *O*(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other)
    }

    /// Moves the contents out of `self` into a new dynamic array.
    ///
    /// `self` is left empty with a capacity of 0, ownership of the buffer is transferred without touching any element.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecta_common::dynarr;
    ///
    /// let mut src = dynarr![1, 2, 3];
    /// let dst = src.take();
    /// assert_eq!(dst, [1, 2, 3]);
    /// assert!(src.is_empty());
    /// assert_eq!(src.capacity(), 0);
    /// ```
    #[must_use = "use `clear` to only drop the elements"]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::with_strategy())
    }
}

impl<T: Default, R: ReserveStrategy> DynArr<T, R> {
    /// Resizes the dynamic array so that its length is equal to `new_len`.
    ///
    /// - If `new_len` fits the current capacity, the newly exposed slots are reset to `T::default()`.
    /// - If `new_len` exceeds the capacity, the buffer grows according to the reserve strategy,
    ///   [`DoubleOrMinReserveStrategy`] picks `max(new_len, 2 * capacity)` slots.
    /// - If `new_len` is smaller than the length, the dynamic array is truncated and the capacity is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecta_common::dynarr;
    ///
    /// let mut arr = dynarr![1, 2, 3];
    /// arr.resize(5);
    /// assert_eq!(arr, [1, 2, 3, 0, 0]);
    /// assert_eq!(arr.capacity(), 6);
    ///
    /// arr.resize(1);
    /// assert_eq!(arr, [1]);
    /// assert_eq!(arr.capacity(), 6);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        let len = self.len;
        if new_len > self.capacity() {
            // The slots of a fresh buffer past the moved elements are already default
            self.grow_amortized(new_len);
        } else if new_len > len {
            self.buf.as_mut_slice()[len..new_len].fill_with(T::default);
        }
        self.len = new_len;
    }

    /// Makes sure the dynamic array has room for at least `new_capacity` elements.
    ///
    /// If `new_capacity` is greater than the current capacity, the buffer is reallocated to hold exactly `new_capacity`
    /// slots, otherwise this does nothing. The length is never changed.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecta_common::dynarr;
    ///
    /// let mut arr = dynarr![1];
    /// arr.reserve(10);
    /// assert_eq!(arr.capacity(), 10);
    ///
    /// arr.reserve(5);
    /// assert_eq!(arr.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            handle_error(err);
        }
    }

    /// The same as [`reserve`](DynArr::reserve), but returns on errors instead of panicking or aborting.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity exceeds `isize::MAX` _bytes_, or if the allocator reports a failure.
    /// The dynamic array is left unchanged in that case.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), DynArrError> {
        if new_capacity > self.capacity() {
            self.realloc(new_capacity)
        } else {
            Ok(())
        }
    }

    /// Makes sure the dynamic array has room for at least `additional` more elements, growing according to the reserve strategy.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    pub fn reserve_additional(&mut self, additional: usize) {
        let required = match self.len.checked_add(additional) {
            Some(required) => required,
            None => handle_error(DynArrError::CapacityOverflow),
        };
        if required > self.capacity() {
            self.grow_amortized(required);
        }
    }

    /// Appends an element to the back of the dynamic array.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    ///
    /// # Time complexity
    ///
    /// Takes amortized *O*(1) time.
    /// If the length would exceed the capacity, *O*(*len*) time is taken to move the elements to a larger buffer.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        let len = self.len;
        if len == self.capacity() {
            self.grow_amortized(len + 1);
        }
        self.buf.as_mut_slice()[len] = value;
        self.len = len + 1;
    }

    /// Alias of [`push_back`](DynArr::push_back).
    #[inline]
    pub fn push(&mut self, value: T) {
        self.push_back(value)
    }

    /// Removes the last element and returns it, or [`None`] if the dynamic array is empty.
    ///
    /// The vacated slot is reset to `T::default()`.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(mem::take(&mut self.buf.as_mut_slice()[self.len]))
        }
    }

    /// Inserts an element at position `index`, shifting all elements after it one slot to the back.
    ///
    /// Inserting at `index == len` is equivalent to [`push_back`](DynArr::push_back).
    /// Returns a reference to the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecta_common::dynarr;
    ///
    /// let mut arr = dynarr![1, 2, 3];
    /// *arr.insert(1, 4) += 1;
    /// assert_eq!(arr, [1, 5, 2, 3]);
    /// arr.insert(4, 6);
    /// assert_eq!(arr, [1, 5, 2, 3, 6]);
    /// ```
    ///
    /// # Time complexity
    ///
    /// Takes *O*(`len - index`) time.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        #[cold]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }

        // Offsets stay valid across the reallocation, pointers would not
        let len = self.len;
        if index > len {
            assert_failed(index, len);
        }

        self.push_back(value);
        // Move the new element from the back into place, shifting the tail back to front
        let slots = &mut self.buf.as_mut_slice()[index..=len];
        slots.rotate_right(1);
        &mut slots[0]
    }

    /// Removes and returns the element at `index`, shifting all elements after it one slot to the front.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.erase(index);
        mem::take(&mut self.buf.as_mut_slice()[self.len])
    }

    fn grow_amortized(&mut self, min_capacity: usize) {
        let res = match R::calculate(self.capacity(), min_capacity) {
            Ok(new_capacity) => self.realloc(new_capacity),
            Err(()) => Err(DynArrError::CapacityOverflow),
        };
        if let Err(err) = res {
            handle_error(err);
        }
    }

    /// Moves the elements into a fresh buffer of `new_capacity` slots, the old buffer is released afterwards.
    fn realloc(&mut self, new_capacity: usize) -> Result<(), DynArrError> {
        debug_assert!(new_capacity >= self.len);

        let len = self.len;
        let mut new_buf = RawBuf::try_new_len(new_capacity)?;
        new_buf.as_mut_slice()[..len].swap_with_slice(&mut self.buf.as_mut_slice()[..len]);

        log_growth::<T>(self.capacity(), new_capacity);
        self.buf.swap(&mut new_buf);
        Ok(())
    }

    fn cloned_from(items: &[T]) -> Self where
        T: Clone
    {
        let mut buf = RawBuf::new_len(items.len());
        buf.as_mut_slice().clone_from_slice(items);
        Self::from_buf(buf, items.len())
    }
}

impl<T: Clone + Default, R: ReserveStrategy> DynArr<T, R> {
    /// Replaces the contents of `self` with a copy of `other`.
    ///
    /// The copy is built first and then swapped in, so `self` is left unchanged if cloning an element panics.
    pub fn assign(&mut self, other: &Self) {
        let mut tmp = other.clone();
        self.swap(&mut tmp);
    }

    /// Clones and appends all elements in a slice to the dynamic array, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecta_common::dynarr;
    ///
    /// let mut arr = dynarr![1];
    /// arr.extend_from_slice(&[2, 3, 4]);
    /// assert_eq!(arr, [1, 2, 3, 4]);
    /// ```
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.reserve_additional(other.len());
        let len = self.len;
        self.buf.as_mut_slice()[len..len + other.len()].clone_from_slice(other);
        self.len = len + other.len();
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T, R: ReserveStrategy> ops::Deref for DynArr<T, R> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, R: ReserveStrategy> ops::DerefMut for DynArr<T, R> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: Clone + Default, R: ReserveStrategy> Clone for DynArr<T, R> {
    /// Creates a dynamic array with the same elements, cloned in index order.
    ///
    /// The capacity of the clone is exactly the length of `self`.
    fn clone(&self) -> Self {
        Self::cloned_from(self.as_slice())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source)
    }
}

impl<T: Hash, R: ReserveStrategy> Hash for DynArr<T, R> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        Hash::hash(&**self, state)
    }
}

impl<T, I: SliceIndex<[T]>, R: ReserveStrategy> Index<I> for DynArr<T, R> {
    type Output = I::Output;

    #[inline]
    #[track_caller]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&**self, index)
    }
}

impl<T, I: SliceIndex<[T]>, R: ReserveStrategy> IndexMut<I> for DynArr<T, R> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut **self, index)
    }
}

impl<T: Default, R: ReserveStrategy> FromIterator<T> for DynArr<T, R> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::with_strategy();
        arr.extend(iter);
        arr
    }
}

impl<T: Default, R: ReserveStrategy> IntoIterator for DynArr<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of the dynamic array (from start to end).
    /// The dynamic array cannot be used after calling this.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buf, self.len)
    }
}

impl<'a, T, R: ReserveStrategy> IntoIterator for &'a DynArr<T, R> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, R: ReserveStrategy> IntoIterator for &'a mut DynArr<T, R> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Default, R: ReserveStrategy> Extend<T> for DynArr<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve_additional(lower);
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<'a, T: Copy + Default + 'a, R: ReserveStrategy> Extend<&'a T> for DynArr<T, R> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl_slice_partial_eq_generic!([R0: ReserveStrategy, R1: ReserveStrategy] DynArr<T, R0>, DynArr<U, R1>);
impl_slice_partial_eq_generic!([R: ReserveStrategy] DynArr<T, R>, &[U]);
impl_slice_partial_eq_generic!([R: ReserveStrategy] DynArr<T, R>, &mut [U]);
impl_slice_partial_eq_generic!([R: ReserveStrategy] &[T], DynArr<U, R>);
impl_slice_partial_eq_generic!([R: ReserveStrategy] &mut [T], DynArr<U, R>);
impl_slice_partial_eq_generic!([R: ReserveStrategy] DynArr<T, R>, [U]);
impl_slice_partial_eq_generic!([R: ReserveStrategy] [T], DynArr<U, R>);
impl_slice_partial_eq_generic!([R: ReserveStrategy, const N: usize] DynArr<T, R>, [U; N]);
impl_slice_partial_eq_generic!([R: ReserveStrategy, const N: usize] [T; N], DynArr<U, R>);

impl<T, R0, R1> PartialOrd<DynArr<T, R1>> for DynArr<T, R0> where
    T: PartialOrd,
    R0: ReserveStrategy,
    R1: ReserveStrategy
{
    /// Compares lexicographically, a dynamic array that is a prefix of the other is less.
    #[inline]
    fn partial_cmp(&self, other: &DynArr<T, R1>) -> Option<core::cmp::Ordering> {
        PartialOrd::partial_cmp(&**self, &**other)
    }
}

impl<T: Eq, R: ReserveStrategy> Eq for DynArr<T, R> {}

impl<T: Ord, R: ReserveStrategy> Ord for DynArr<T, R> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        Ord::cmp(&**self, &**other)
    }
}

impl<T, R: ReserveStrategy> Default for DynArr<T, R> {
    /// Creates an empty `DynArr<T, R>`.
    ///
    /// The dynamic array will not allocate until elements are pushed onto it.
    fn default() -> Self {
        Self::with_strategy()
    }
}

impl<T: fmt::Debug, R: ReserveStrategy> fmt::Debug for DynArr<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T, R: ReserveStrategy> AsRef<[T]> for DynArr<T, R> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, R: ReserveStrategy> AsMut<[T]> for DynArr<T, R> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Default, R: ReserveStrategy> From<CapacityReserve> for DynArr<T, R> {
    /// Creates an empty dynamic array with exactly the reserved capacity.
    fn from(reserve: CapacityReserve) -> Self {
        Self::from_buf(RawBuf::new_len(reserve.capacity()), 0)
    }
}

impl<T: Clone + Default, R: ReserveStrategy> From<&[T]> for DynArr<T, R> {
    /// Allocate a `DynArr<T>` and fill it by cloning `s`'s items.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecta_common::{dynarr, collections::DynArr};
    ///
    /// assert_eq!(DynArr::<i32>::from(&[1, 2, 3][..]), dynarr![1, 2, 3]);
    /// ```
    fn from(s: &[T]) -> Self {
        Self::cloned_from(s)
    }
}

impl<T: Clone + Default, R: ReserveStrategy, const N: usize> From<&[T; N]> for DynArr<T, R> {
    fn from(s: &[T; N]) -> Self {
        Self::cloned_from(s.as_slice())
    }
}

impl<T: Default, R: ReserveStrategy, const N: usize> From<[T; N]> for DynArr<T, R> {
    /// Allocate a `DynArr<T>` and move the array's items into it.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecta_common::{dynarr, collections::DynArr};
    ///
    /// assert_eq!(DynArr::<i32>::from([1, 2, 3]), dynarr![1, 2, 3]);
    /// ```
    fn from(value: [T; N]) -> Self {
        let mut buf = RawBuf::new_len(N);
        for (slot, elem) in buf.as_mut_slice().iter_mut().zip(value) {
            *slot = elem;
        }
        Self::from_buf(buf, N)
    }
}

impl<T: Default, R: ReserveStrategy, const N: usize> TryFrom<DynArr<T, R>> for [T; N] {
    type Error = DynArr<T, R>;

    /// Gets the entire contents of the `DynArr<T>` as an array, if its length exactly matches that of the requested array.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecta_common::dynarr;
    ///
    /// let arr: Result<[i32; 3], _> = dynarr![1, 2, 3].try_into();
    /// assert_eq!(arr, Ok([1, 2, 3]));
    ///
    /// let arr: Result<[i32; 2], _> = dynarr![1, 2, 3].try_into();
    /// assert_eq!(arr, Err(dynarr![1, 2, 3]));
    /// ```
    fn try_from(mut arr: DynArr<T, R>) -> Result<Self, Self::Error> {
        if arr.len() != N {
            return Err(arr);
        }
        let slots = arr.as_mut_slice();
        Ok(core::array::from_fn(|idx| mem::take(&mut slots[idx])))
    }
}

/// Creates a [`DynArr`] containing the arguments.
///
/// - `dynarr![]` creates an empty dynamic array.
/// - `dynarr![a, b, c]` creates a dynamic array with exactly these elements, and a capacity equal to their count.
/// - `dynarr![value; n]` creates a dynamic array with `n` copies of `value`.
///
/// ```
/// use vecta_common::dynarr;
///
/// let arr = dynarr![1, 2, 3];
/// assert_eq!(arr.capacity(), 3);
///
/// let arr = dynarr![0u8; 4];
/// assert_eq!(arr, [0, 0, 0, 0]);
/// ```
///
/// [`DynArr`]: crate::collections::DynArr
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::collections::DynArr::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::collections::DynArr::with_fill($n, $elem)
    };
    ($($val:expr),+ $(,)?) => {
        {
            let mut arr = $crate::collections::DynArr::with_capacity($crate::count_exprs!($($val),*));
            $(
                arr.push_back($val);
            )+
            arr
        }
    };
}
