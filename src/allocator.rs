use std::{fmt, marker::PhantomData, mem, ptr::NonNull};

use crate::{
  block::RawBlock,
  error::OutOfMemory,
  heap::{Heap, LibcHeap},
  limit,
};

/// Prints a block's size and address.
pub fn print_alloc<T, H: Heap>(block: &RawBlock<T, H>) {
  println!(
    "Allocated {} x {} bytes ({} total), address = {:?}",
    block.len(),
    mem::size_of::<T>(),
    block.len().saturating_mul(mem::size_of::<T>()),
    block.as_ptr(),
  );
}

/// Stateless allocation strategy for elements of type `T`.
///
/// Every instance is zero-sized and interchangeable with every other instance
/// over the same heap: a block allocated through one may be deallocated
/// through any other, including one obtained by [`rebind`](Allocator::rebind)
/// back to `T`.
pub struct Allocator<T, H: Heap = LibcHeap> {
  _marker: PhantomData<fn() -> (T, H)>,
}

impl<T, H: Heap> Allocator<T, H> {
  pub const fn new() -> Self {
    Self {
      _marker: PhantomData,
    }
  }

  /// Builds the allocator for `T` out of one for any other element type.
  pub fn from_alloc<U>(_other: Allocator<U, H>) -> Self {
    Self::new()
  }

  /// Same strategy, parameterized by `U`.
  pub fn rebind<U>(self) -> Allocator<U, H> {
    Allocator::from_alloc(self)
  }

  /// Largest `n` that [`allocate`](Allocator::allocate) will pass to the heap.
  pub const fn max_count(&self) -> usize {
    limit::max_count::<T>()
  }

  /// Requests uninitialized storage for `n` elements.
  ///
  /// Fails with [`OutOfMemory`] before touching the heap when `n` exceeds
  /// [`max_count`](Allocator::max_count), and when the heap returns null.
  /// Alignment is whatever `malloc` gives; over-aligned `T` is not handled.
  pub fn allocate(
    &self,
    n: usize,
  ) -> Result<RawBlock<T, H>, OutOfMemory> {
    let bytes = limit::byte_size::<T>(n).ok_or(OutOfMemory::new::<T>(n))?;

    // malloc(0) may return null; ask for one byte so the block is freeable.
    let ptr = H::malloc(bytes.max(1)).cast::<T>();

    match NonNull::new(ptr) {
      Some(ptr) => Ok(unsafe { RawBlock::from_raw_parts(ptr, n) }),
      None => Err(OutOfMemory::new::<T>(n)),
    }
  }

  /// Returns the block to the heap. Live elements inside it are not dropped.
  pub fn deallocate(
    &self,
    block: RawBlock<T, H>,
  ) {
    let (ptr, n) = block.into_raw();
    unsafe { self.deallocate_raw(ptr, n) }
  }

  /// Frees a pointer taken out of a block with
  /// [`RawBlock::into_raw`]. `_n` is not used.
  ///
  /// # Safety
  ///
  /// `ptr` must come from `allocate` on an `Allocator<T, H>` and must not have
  /// been freed already.
  pub unsafe fn deallocate_raw(
    &self,
    ptr: NonNull<T>,
    _n: usize,
  ) {
    unsafe { H::free(ptr.as_ptr().cast::<u8>()) }
  }

  /// Moves `value` into the slot at `p`.
  ///
  /// # Safety
  ///
  /// `p` must be valid for writes of one `T`, aligned for `T`, and must not
  /// hold a live value (it would be overwritten without being dropped).
  pub unsafe fn construct(
    &self,
    p: NonNull<T>,
    value: T,
  ) {
    debug_assert!(p.as_ptr().is_aligned(), "misaligned slot for construct");
    unsafe { p.write(value) }
  }

  /// Runs `init` and constructs its result at `p`.
  ///
  /// # Safety
  ///
  /// Same as [`construct`](Allocator::construct).
  pub unsafe fn construct_with<F>(
    &self,
    p: NonNull<T>,
    init: F,
  ) where
    F: FnOnce() -> T,
  {
    unsafe { self.construct(p, init()) }
  }

  /// Runs a fallible `init`; on error nothing is written and the error is
  /// returned as is.
  ///
  /// # Safety
  ///
  /// Same as [`construct`](Allocator::construct).
  pub unsafe fn try_construct_with<E, F>(
    &self,
    p: NonNull<T>,
    init: F,
  ) -> Result<(), E>
  where
    F: FnOnce() -> Result<T, E>,
  {
    let value = init()?;
    unsafe { self.construct(p, value) };
    Ok(())
  }

  /// Drops the value at `p` in place. The memory stays allocated.
  ///
  /// # Safety
  ///
  /// `p` must point to a live `T`, which is dead afterwards.
  pub unsafe fn destroy(
    &self,
    p: NonNull<T>,
  ) {
    unsafe { p.drop_in_place() }
  }
}

impl<T, H: Heap> Clone for Allocator<T, H> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T, H: Heap> Copy for Allocator<T, H> {}

impl<T, H: Heap> Default for Allocator<T, H> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, H: Heap> fmt::Debug for Allocator<T, H> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    write!(f, "Allocator<{}>", std::any::type_name::<T>())
  }
}

impl<T, U, H: Heap> PartialEq<Allocator<U, H>> for Allocator<T, H> {
  fn eq(
    &self,
    _other: &Allocator<U, H>,
  ) -> bool {
    true
  }
}

impl<T, H: Heap> Eq for Allocator<T, H> {}

/// Maps an allocation strategy onto another element type.
pub trait Rebind<U> {
  type Other;
}

impl<T, U, H: Heap> Rebind<U> for Allocator<T, H> {
  type Other = Allocator<U, H>;
}

/// `A` rebound to element type `U`.
///
/// ```rust
/// use tallocator::{Allocator, RebindAlloc};
///
/// struct Node(u32);
///
/// let nodes: RebindAlloc<Allocator<u32>, Node> = Allocator::<Node>::new();
/// assert_eq!(nodes.max_count(), Allocator::<Node>::new().max_count());
/// ```
pub type RebindAlloc<A, U> = <A as Rebind<U>>::Other;
