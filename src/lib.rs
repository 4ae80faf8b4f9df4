#![no_std]

//! Growable vector and string buffers with explicit capacity control.
//!
//! This crate provides two sibling containers that manage a contiguous,
//! reallocatable memory region whose logical length grows and shrinks
//! independently of its allocated capacity:
//!
//! - [`GrowVec`]: a type-erased vector of fixed-size byte elements. The
//!   element size is fixed at construction and every element crosses the
//!   API as a `&[u8]` slice of exactly that many bytes.
//! - [`GrowStr`]: a growable text buffer that keeps its contents
//!   null-terminated whenever an allocation exists, so they are always
//!   viewable as a bounded C-style string.
//!
//! Both share one capacity growth policy: amortized doubling on growth,
//! exact-fit reallocation on shrink and on bulk requests that exceed a
//! single doubling step. Pushing `k` elements one at a time costs
//! `O(log k)` reallocations.
//!
//! All operations are bounds-checked. Positional misuse returns a typed
//! [`BufferError`] and never changes the buffer; absent values are `None`.
//!
//! # Capacity and length
//!
//! `capacity` is the number of element slots currently backed by allocated
//! memory, `len` the number of logically valid elements. `len <= capacity`
//! holds after every operation. A capacity of 0 means no allocation exists
//! at all; for [`GrowStr`] this makes "empty but allocated" (`capacity >
//! 0`, `len == 0`) distinguishable from "never allocated".
//!
//! # Examples
//!
//! A vector of 4-byte elements. Byte-wise ordering is meaningful here
//! because the values are stored big-endian:
//!
//! ```
//! use growbuf::{GrowVec, SortOrder};
//!
//! let mut v = GrowVec::new(4).unwrap();
//! for value in [9u32, 8, 7, 6] {
//!     v.push(&value.to_be_bytes()).unwrap();
//! }
//! assert_eq!(v.len(), 4);
//! assert_eq!(v.at(0), Some(&9u32.to_be_bytes()[..]));
//!
//! v.sort(SortOrder::Ascending);
//! let sorted: Vec<u32> = v
//!     .iter()
//!     .map(|e| u32::from_be_bytes(e.try_into().unwrap()))
//!     .collect();
//! assert_eq!(sorted, [6, 7, 8, 9]);
//! ```
//!
//! A text buffer with bounded append and consuming merge:
//!
//! ```
//! use growbuf::GrowStr;
//!
//! let mut s = GrowStr::from("First");
//! s.append_bounded("Second string", 3);
//! assert_eq!(s, "FirstSec");
//!
//! let tail = GrowStr::from("tail");
//! s.merge(tail, "--");
//! assert_eq!(s, "FirstSec--tail");
//! // `tail` has been consumed; using it again is a compile error.
//! ```
//!
//! # `no_std` compatibility
//!
//! The crate is `no_std` and only requires `alloc`. Enable the `std`
//! feature to forward it to dependencies. The `trace` feature (implies
//! `std`) prints buffer state to stderr before and after mutating
//! operations; it is purely diagnostic and compiled out by default.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
mod growth;
mod iter;
mod text;
mod trace;
mod vec;

pub use error::BufferError;
pub use iter::{GrowStrBytes, GrowVecIter};
pub use text::GrowStr;
pub use vec::{GrowVec, SortOrder};
