use std::mem;

/// Largest number of bytes a single allocation may span.
///
/// Rust objects are limited to `isize::MAX` bytes, so this is the bound used
/// instead of `usize::MAX`.
pub const MAX_ADDRESSABLE: usize = isize::MAX as usize;

/// Largest element count that can be requested for `T` without the byte
/// size overflowing [`MAX_ADDRESSABLE`].
///
/// # Examples
///
/// ```rust
/// use tallocator::limit::{max_count, MAX_ADDRESSABLE};
///
/// assert_eq!(max_count::<u8>(), MAX_ADDRESSABLE);
/// assert_eq!(max_count::<u64>(), MAX_ADDRESSABLE / 8);
/// assert_eq!(max_count::<()>(), usize::MAX);
/// ```
pub const fn max_count<T>() -> usize {
  match mem::size_of::<T>() {
    0 => usize::MAX,
    size => MAX_ADDRESSABLE / size,
  }
}

/// Byte size of `n` elements of `T`, or `None` past [`max_count`].
pub const fn byte_size<T>(n: usize) -> Option<usize> {
  if n > max_count::<T>() {
    return None;
  }

  Some(n * mem::size_of::<T>())
}
