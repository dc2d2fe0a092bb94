
use log::trace;

use crate::collections::queue::{
  offer_outcome::OfferOutcome,
  overflow_policy::OverflowPolicy,
  queue_error::QueueError,
  queue_size::QueueSize,
  ring::ring_storage::RingStorage,
  traits::{QueueBase, QueueReader, QueueWriter},
};

/// Capacity substituted when a constructor receives a capacity of 0.
pub const DEFAULT_CAPACITY: usize = 2;

/// FIFO queue backed by [`RingStorage`].
///
/// The overflow policy is fixed at construction and consulted only when an
/// offer finds the storage full: [`OverflowPolicy::Reject`] refuses the
/// element, [`OverflowPolicy::Grow`] doubles the storage and accepts it.
/// Every other code path is shared between the two modes.
#[derive(Debug, Clone)]
pub struct RingQueue<E> {
  storage: RingStorage<E>,
  policy:  OverflowPolicy,
}

impl<E> RingQueue<E> {
  fn with_policy(capacity: usize, policy: OverflowPolicy) -> Self {
    let capacity = if capacity == 0 { DEFAULT_CAPACITY } else { capacity };
    Self { storage: RingStorage::with_capacity(capacity), policy }
  }

  /// Creates a queue that rejects offers once `capacity` elements are stored.
  ///
  /// A `capacity` of 0 selects [`DEFAULT_CAPACITY`].
  #[must_use]
  pub fn bounded(capacity: usize) -> Self {
    Self::with_policy(capacity, OverflowPolicy::Reject)
  }

  /// Creates a queue that doubles its storage whenever an offer finds it full.
  ///
  /// An `initial_capacity` of 0 selects [`DEFAULT_CAPACITY`].
  #[must_use]
  pub fn unbounded(initial_capacity: usize) -> Self {
    Self::with_policy(initial_capacity, OverflowPolicy::Grow)
  }

  /// Returns the overflow policy fixed at construction.
  #[must_use]
  pub const fn overflow_policy(&self) -> OverflowPolicy {
    self.policy
  }

  fn handle_full_queue(&mut self, element: E) -> Result<OfferOutcome, QueueError<E>> {
    match self.policy {
      | OverflowPolicy::Reject => Err(QueueError::Full(element)),
      | OverflowPolicy::Grow => {
        let old_capacity = self.storage.capacity();
        let capacity = self.storage.grow();
        trace!("ring queue grew from {old_capacity} to {capacity} slots");
        self.storage.push_back(element);
        Ok(OfferOutcome::GrewTo { capacity })
      },
    }
  }
}

impl<E> Default for RingQueue<E> {
  fn default() -> Self {
    Self::unbounded(DEFAULT_CAPACITY)
  }
}

impl<E> QueueBase<E> for RingQueue<E> {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.storage.len())
  }

  fn capacity(&self) -> QueueSize {
    if self.policy.is_growable() {
      QueueSize::limitless()
    } else {
      QueueSize::limited(self.storage.capacity())
    }
  }
}

impl<E> QueueWriter<E> for RingQueue<E> {
  fn offer(&mut self, element: E) -> Result<OfferOutcome, QueueError<E>> {
    if self.storage.is_full() {
      return self.handle_full_queue(element);
    }
    self.storage.push_back(element);
    Ok(OfferOutcome::Enqueued)
  }
}

impl<E> QueueReader<E> for RingQueue<E> {
  fn poll(&mut self) -> Result<E, QueueError<E>> {
    self.storage.pop_front().ok_or(QueueError::Empty)
  }

  fn peek(&self) -> Result<&E, QueueError<E>> {
    self.storage.peek_front().ok_or(QueueError::Empty)
  }
}
