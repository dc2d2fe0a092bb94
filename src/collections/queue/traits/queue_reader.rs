use crate::collections::queue::{queue_error::QueueError, traits::queue_base::QueueBase};

/// Trait providing read operations from the queue.
pub trait QueueReader<E>: QueueBase<E> {
  /// Removes and returns the element at the front of the queue.
  ///
  /// # Errors
  ///
  /// Returns `QueueError::Empty` when the queue holds no elements.
  fn poll(&mut self) -> Result<E, QueueError<E>>;

  /// Returns a reference to the element at the front of the queue without removing it.
  ///
  /// # Errors
  ///
  /// Returns `QueueError::Empty` when the queue holds no elements.
  fn peek(&self) -> Result<&E, QueueError<E>>;
}
