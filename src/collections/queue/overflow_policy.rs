/// Policy describing how a queue handles an offer that finds the storage full.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
  /// Reject the offered element and report the queue as full.
  Reject,
  /// Grow the underlying storage capacity.
  #[default]
  Grow,
}

impl OverflowPolicy {
  /// Indicates whether the policy allows the storage to change capacity.
  #[must_use]
  pub const fn is_growable(&self) -> bool {
    matches!(self, Self::Grow)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn overflow_policy_default_is_grow() {
    assert_eq!(OverflowPolicy::default(), OverflowPolicy::Grow);
  }

  #[test]
  fn overflow_policy_growable_flag() {
    assert!(OverflowPolicy::Grow.is_growable());
    assert!(!OverflowPolicy::Reject.is_growable());
  }
}
