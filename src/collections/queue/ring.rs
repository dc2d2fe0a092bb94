mod ring_queue;
mod ring_storage;

pub use ring_queue::{DEFAULT_CAPACITY, RingQueue};
pub use ring_storage::RingStorage;
