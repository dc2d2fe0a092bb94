use thiserror::Error;

/// Errors that occur during queue operations.
///
/// Either condition leaves the queue untouched; the caller may retry once the
/// queue's size changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError<E> {
  /// The queue is full and cannot accept more elements. Contains the element
  /// that was attempted to be added.
  #[error("queue is full and cannot accept more elements")]
  Full(E),
  /// The queue has no elements to consume.
  #[error("cannot take element from empty queue")]
  Empty,
}

impl<E> QueueError<E> {
  /// Extracts the payload carried by variants that preserve the element on failure.
  #[must_use]
  pub fn into_item(self) -> Option<E> {
    match self {
      | Self::Full(item) => Some(item),
      | Self::Empty => None,
    }
  }
}
