use std::mem;

use thiserror::Error;

/// The only failure an allocation reports.
///
/// Raised both when `count * elem_size` would exceed the addressable limit
/// (no heap call is made) and when the heap returns null.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("out of memory: cannot allocate {count} elements of {elem_size} bytes")]
pub struct OutOfMemory {
  /// Number of elements requested.
  pub count: usize,
  /// `size_of::<T>()` of the requested element type.
  pub elem_size: usize,
}

impl OutOfMemory {
  pub(crate) const fn new<T>(count: usize) -> Self {
    Self {
      count,
      elem_size: mem::size_of::<T>(),
    }
  }
}
