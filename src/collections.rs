pub mod queue;

pub use queue::{
  DEFAULT_CAPACITY, OfferOutcome, OverflowPolicy, QueueBase, QueueError, QueueReader, QueueSize, QueueWriter,
  RingQueue, RingStorage,
};
