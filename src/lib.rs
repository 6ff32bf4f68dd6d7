//! # tallocator - A Typed malloc-backed Allocator Strategy
//!
//! This crate provides [`Allocator<T>`], a stateless allocation strategy for
//! generic containers. It asks the C library heap (`malloc`/`free`) for raw
//! storage sized for `n` elements of `T` and offers in-place construction and
//! destruction on top of it.
//!
//! ## Overview
//!
//! ```text
//!   Allocator<T>                      RawBlock<T> (n = 5)
//!   ┌──────────────┐  allocate(5)   ┌──────┬──────┬──────┬──────┬──────┐
//!   │ zero-sized   │ ─────────────► │ T ?  │ T ?  │ T ?  │ T ?  │ T ?  │
//!   │ no state     │                └──────┴──────┴──────┴──────┴──────┘
//!   └──────────────┘                   ▲
//!          │ construct(slot, value)    │ destroy(slot) drops in place,
//!          └───────────────────────────┘ the memory stays allocated
//!
//!   deallocate(block) hands the whole block back to free(3).
//! ```
//!
//! The allocator never tracks which slots are live. That bookkeeping belongs
//! to the container using it.
//!
//! ## Crate Structure
//!
//! ```text
//!   tallocator
//!   ├── allocator  - Allocator<T, H>, Rebind, RebindAlloc
//!   ├── block      - RawBlock<T, H>, the owned storage handle
//!   ├── error      - OutOfMemory
//!   ├── heap       - Heap trait and LibcHeap
//!   └── limit      - Overflow guard (max_count, byte_size)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use tallocator::{Allocator, OutOfMemory};
//!
//! fn main() -> Result<(), OutOfMemory> {
//!     let alloc = Allocator::<i32>::new();
//!     let block = alloc.allocate(5)?;
//!
//!     if let Some(slot) = block.slot(0) {
//!         unsafe {
//!             alloc.construct(slot, 42);
//!             assert_eq!(slot.read(), 42);
//!             alloc.destroy(slot);
//!         }
//!     }
//!
//!     alloc.deallocate(block);
//!     Ok(())
//! }
//! ```
//!
//! ## Overflow Guard
//!
//! Before calling `malloc`, the element count is checked against
//! `MAX_ADDRESSABLE / size_of::<T>()`:
//!
//! ```text
//!   n ≤ max_count::<T>()  ──►  malloc(n * size_of::<T>())
//!   n > max_count::<T>()  ──►  Err(OutOfMemory), malloc is never called
//! ```
//!
//! A null return from `malloc` produces the same [`OutOfMemory`] error.
//!
//! ## Rebinding
//!
//! Node-based containers receive an `Allocator<T>` but need storage for their
//! own node type. [`Allocator::rebind`] and [`RebindAlloc`] give them the same
//! strategy for any other type:
//!
//! ```rust
//! use tallocator::{Allocator, RebindAlloc};
//!
//! struct Node<T> {
//!     value: T,
//!     next: Option<Box<Node<T>>>,
//! }
//!
//! let values = Allocator::<u8>::new();
//! let nodes: RebindAlloc<Allocator<u8>, Node<u8>> = values.rebind();
//! assert_eq!(nodes, values);
//! ```
//!
//! ## Limitations
//!
//! - **No pooling**: every `allocate` is one `malloc`, every `deallocate` one `free`
//! - **malloc alignment only**: types aligned beyond `max_align_t` are not supported
//! - **Unix-style libc**: requires `libc`'s `malloc`/`free`
//!
//! ## Safety
//!
//! `allocate` and `deallocate` are safe: a [`RawBlock`] can only be freed by
//! an allocator over the heap it came from, exactly once. Constructing,
//! destroying and reading elements go through raw pointers and are `unsafe`.

mod allocator;
mod block;
mod error;
mod heap;
pub mod limit;

pub use allocator::{Allocator, Rebind, RebindAlloc, print_alloc};
pub use block::RawBlock;
pub use error::OutOfMemory;
pub use heap::{Heap, LibcHeap};
