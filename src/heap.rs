use libc::c_void;

/// Process-wide source of raw memory.
///
/// # Safety
///
/// `malloc` must return either null or a pointer to at least `bytes` writable
/// bytes, aligned as the platform's C `malloc` aligns them, that stays valid
/// until passed to `free` of the same implementation.
pub unsafe trait Heap {
  fn malloc(bytes: usize) -> *mut u8;

  /// # Safety
  ///
  /// `ptr` must come from `malloc` of this heap and not be freed already.
  unsafe fn free(ptr: *mut u8);
}

/// The C library heap (`malloc(3)` / `free(3)`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LibcHeap;

unsafe impl Heap for LibcHeap {
  fn malloc(bytes: usize) -> *mut u8 {
    unsafe { libc::malloc(bytes) as *mut u8 }
  }

  unsafe fn free(ptr: *mut u8) {
    unsafe { libc::free(ptr as *mut c_void) }
  }
}
