#![no_std]

//! A [trait](Queue) and an implementation of non-blocking [FIFO queues](https://en.wikipedia.org/wiki/Queue_(abstract_data_type)) whose memory usage is proportional to the number of items they currently hold, not to the largest number of items they ever held.
//!
//! ## Queue Implementation
//!
//! There is one implementation:
//!
//! - [`Elastic`], which stores its items in a ring of bounded-capacity chunks and releases the storage of each chunk the moment its last item has been dequeued. Reclamation is an O(1) side effect of dequeueing; there is no separate collection pass. It is gated behind the `std` or `alloc` feature, the prior of which is enabled by default.
//!
//! A degenerate configuration, [`Elastic::double_buffered`], pins the ring at exactly two chunks of unbounded capacity which are cleared and swapped in alternation.
//!
//! A possible future extension is a bounded variant which caps the total number of chunks and reports a full queue instead of growing the ring.
//!
//! ## Features
//!
//! The `std` and `alloc` features control functionality that relies on the standard library or dynamic memory allocation respectively.

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

use thiserror::Error;

#[cfg(any(feature = "std", feature = "alloc"))]
mod elastic;
#[cfg(any(feature = "std", feature = "alloc"))]
pub use elastic::{Elastic, DEFAULT_CHUNK_CAPACITY};

/// The error returned when calling [`peek`](Queue::peek) or [`dequeue`](Queue::dequeue) on an empty queue.
///
/// The item type of a queue is unconstrained, so there is no sentinel value that could stand in for a missing item. Callers are expected to check [`len`](Queue::len) (or [`is_empty`](Queue::is_empty)) before peeking or dequeueing, just as they would check a capacity before writing into a bounded buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("called peek or dequeue on a queue of length zero")]
pub struct EmptyQueue;

/// A first-in-first-out queue.
///
/// [`enqueue`](Queue::enqueue) always succeeds; [`dequeue`](Queue::dequeue) and [`peek`](Queue::peek) fail with [`EmptyQueue`] when the queue holds no items, without mutating the queue.
///
/// Queues implementing this trait are synchronous and single-owner: no method blocks, suspends, or tolerates concurrent access. Callers that share a queue across threads must serialize access externally.
pub trait Queue {
    /// The type of items to manage in the queue.
    type Item;

    /// Returns the number of items currently in the queue.
    fn len(&self) -> usize;

    /// Returns whether the queue is empty. Must return `true` if and only if `self.len()` returns `0`.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enqueues an item.
    fn enqueue(&mut self, item: Self::Item);

    /// Dequeues the next item.
    ///
    /// Fails with [`EmptyQueue`] if the queue is empty at the time of calling.
    fn dequeue(&mut self) -> Result<Self::Item, EmptyQueue>;

    /// Returns a reference to the item the next call to [`dequeue`](Queue::dequeue) would remove. Repeated calls without an intervening mutation return the same item.
    ///
    /// Fails with [`EmptyQueue`] if the queue is empty at the time of calling.
    fn peek(&self) -> Result<&Self::Item, EmptyQueue>;
}
