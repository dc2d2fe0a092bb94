use super::QueueSize;

#[test]
fn queue_size_limited_holds_value() {
  let size = QueueSize::limited(7);

  assert!(!size.is_limitless());
  assert_eq!(size.to_usize(), 7);

  match size {
    | QueueSize::Limited(value) => assert_eq!(value, 7),
    | QueueSize::Limitless => panic!("expected limited variant"),
  }
}

#[test]
fn queue_size_limitless_maps_to_max() {
  let size = QueueSize::limitless();

  assert!(size.is_limitless());
  assert_eq!(size.to_usize(), usize::MAX);
}

#[test]
fn queue_size_equality() {
  assert_eq!(QueueSize::limited(0), QueueSize::Limited(0));
  assert_ne!(QueueSize::limited(1), QueueSize::Limited(2));
  assert_ne!(QueueSize::limitless(), QueueSize::Limited(usize::MAX));
}
