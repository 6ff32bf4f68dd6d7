use std::{fmt, marker::PhantomData, mem, ptr::NonNull};

use crate::heap::{Heap, LibcHeap};

/// Owned, uninitialized storage for `len` slots of `T`, obtained from heap `H`.
///
/// A block is move-only. It is consumed by
/// [`Allocator::deallocate`](crate::Allocator::deallocate), or handed off with
/// [`into_raw`](RawBlock::into_raw) when something else takes over its
/// lifetime. Dropping it any other way leaks the memory; debug builds report
/// that on stderr.
///
/// The block does not know which slots hold live values.
#[must_use = "dropping a RawBlock leaks its memory; pass it to `deallocate`"]
pub struct RawBlock<T, H: Heap = LibcHeap> {
  ptr: NonNull<T>,
  len: usize,
  _heap: PhantomData<H>,
}

unsafe impl<T: Send, H: Heap> Send for RawBlock<T, H> {}

impl<T, H: Heap> RawBlock<T, H> {
  /// Adopts storage previously released with [`into_raw`](RawBlock::into_raw).
  ///
  /// # Safety
  ///
  /// `ptr` must have been returned by `malloc` of `H`, sized for at least
  /// `len` elements of `T`, and owned by no other block.
  pub unsafe fn from_raw_parts(
    ptr: NonNull<T>,
    len: usize,
  ) -> Self {
    Self {
      ptr,
      len,
      _heap: PhantomData,
    }
  }

  /// Number of element slots.
  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn as_ptr(&self) -> *mut T {
    self.ptr.as_ptr()
  }

  pub fn as_non_null(&self) -> NonNull<T> {
    self.ptr
  }

  /// Pointer to slot `index`, or `None` when out of bounds.
  pub fn slot(
    &self,
    index: usize,
  ) -> Option<NonNull<T>> {
    if index >= self.len {
      return None;
    }

    Some(unsafe { self.ptr.add(index) })
  }

  /// Gives up ownership without freeing.
  pub fn into_raw(self) -> (NonNull<T>, usize) {
    let raw = (self.ptr, self.len);
    mem::forget(self);
    raw
  }
}

impl<T, H: Heap> fmt::Debug for RawBlock<T, H> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_struct("RawBlock")
      .field("ptr", &self.ptr)
      .field("len", &self.len)
      .finish()
  }
}

impl<T, H: Heap> Drop for RawBlock<T, H> {
  fn drop(&mut self) {
    #[cfg(debug_assertions)]
    eprintln!(
      "RawBlock leaked: {} x {} bytes at {:?} dropped without deallocate",
      self.len,
      mem::size_of::<T>(),
      self.ptr,
    );
  }
}
