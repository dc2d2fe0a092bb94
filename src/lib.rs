//! Ring buffer backed FIFO queues.
//!
//! The queues in this crate store their elements in a fixed-length slot array
//! and track the live range with wraparound index arithmetic, so neither
//! enqueueing nor dequeueing ever shifts elements. Two construction modes
//! share the same algorithm and differ only in what happens when an offer
//! finds the storage full: a bounded queue rejects the element, an unbounded
//! queue doubles its storage and accepts it.
//!
//! ```
//! use ring_queue_rs::{QueueReader, QueueWriter, RingQueue};
//!
//! let mut queue = RingQueue::unbounded(2);
//! for value in 1..=4 {
//!   queue.offer(value).unwrap();
//! }
//! assert_eq!(queue.poll().unwrap(), 1);
//! assert_eq!(queue.peek().unwrap(), &2);
//! ```
#![no_std]

extern crate alloc;

pub mod collections;

pub use collections::{
  DEFAULT_CAPACITY, OfferOutcome, OverflowPolicy, QueueBase, QueueError, QueueReader, QueueSize, QueueWriter,
  RingQueue, RingStorage,
};
