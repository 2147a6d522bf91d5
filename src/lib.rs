pub mod queue;

pub use queue::{Cursor, CursorMut, Queue, QueueError};
