/// Outcome produced by a successful queue offer operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferOutcome {
  /// The element was enqueued without any side effects.
  Enqueued,
  /// The underlying storage grew to the specified capacity before the element was enqueued.
  GrewTo {
    /// New capacity after the storage has grown.
    capacity: usize,
  },
}

impl From<&OfferOutcome> for &'static str {
  fn from(outcome: &OfferOutcome) -> Self {
    match outcome {
      | OfferOutcome::Enqueued => "enqueue",
      | OfferOutcome::GrewTo { .. } => "grow",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn offer_outcome_enqueued_variant() {
    let outcome = OfferOutcome::Enqueued;
    assert_eq!(outcome, OfferOutcome::Enqueued);
    let desc: &str = (&outcome).into();
    assert_eq!(desc, "enqueue");
  }

  #[test]
  fn offer_outcome_grew_to_variant() {
    let outcome = OfferOutcome::GrewTo { capacity: 8 };
    if let OfferOutcome::GrewTo { capacity } = outcome {
      assert_eq!(capacity, 8);
    } else {
      panic!("Expected GrewTo variant");
    }
    let desc: &str = (&outcome).into();
    assert_eq!(desc, "grow");
  }

  #[test]
  fn offer_outcome_partial_eq() {
    assert_eq!(OfferOutcome::GrewTo { capacity: 4 }, OfferOutcome::GrewTo { capacity: 4 });
    assert_ne!(OfferOutcome::GrewTo { capacity: 4 }, OfferOutcome::GrewTo { capacity: 8 });
    assert_ne!(OfferOutcome::Enqueued, OfferOutcome::GrewTo { capacity: 4 });
  }
}
