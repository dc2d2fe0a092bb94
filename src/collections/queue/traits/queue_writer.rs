use crate::collections::queue::{offer_outcome::OfferOutcome, queue_error::QueueError, traits::queue_base::QueueBase};

/// Trait providing write operations to the queue.
pub trait QueueWriter<E>: QueueBase<E> {
  /// Adds an element to the end of the queue.
  ///
  /// # Errors
  ///
  /// Returns `QueueError::Full` when the queue is at capacity and its policy
  /// rejects the element. The rejected element travels back inside the error.
  fn offer(&mut self, element: E) -> Result<OfferOutcome, QueueError<E>>;
}
