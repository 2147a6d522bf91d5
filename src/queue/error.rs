use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueueError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is empty")]
    EmptyContainer,

    #[error("index {index} out of bounds for queue of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// A cursor was moved before the head and then dereferenced.
    #[error("cursor position {position} is before the front of the queue")]
    BeforeFront { position: isize },
}

#[cfg(test)]
mod test {
    use super::QueueError;

    #[test]
    fn test_error_messages() {
        assert_eq!(QueueError::EmptyContainer.to_string(), "queue is empty");
        assert_eq!(
            QueueError::IndexOutOfRange { index: 2, size: 2 }.to_string(),
            "index 2 out of bounds for queue of size 2"
        );
        assert_eq!(
            QueueError::BeforeFront { position: -1 }.to_string(),
            "cursor position -1 is before the front of the queue"
        );
    }
}
