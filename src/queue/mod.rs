mod cursor;
mod error;
mod linked_queue;

pub use cursor::{Cursor, CursorMut};
pub use error::{QueueError, Result};
pub use linked_queue::{IntoIter, Iter, IterMut, Queue};
