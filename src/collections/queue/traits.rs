mod queue_base;
mod queue_reader;
mod queue_writer;

pub use queue_base::QueueBase;
pub use queue_reader::QueueReader;
pub use queue_writer::QueueWriter;
