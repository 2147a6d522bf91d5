use super::error::{QueueError, Result};
use super::linked_queue::Queue;

use std::fmt;
use std::ptr;

// Positions are signed: a cursor may step before the head, and only
// dereferencing it there is an error.
fn to_index(position: isize) -> Result<usize> {
    usize::try_from(position).map_err(|_| QueueError::BeforeFront { position })
}

fn end_position<T>(queue: &Queue<T>) -> isize {
    queue.size() as isize
}

// ------------------------------------------
// begin: Cursor

/// Read-only cursor over a [`Queue`].
///
/// Two cursors are equal when they borrow the same queue instance and sit at
/// the same position. Queues with equal contents do not make cursors equal.
pub struct Cursor<'a, T> {
    queue: &'a Queue<T>,
    position: isize,
}

impl<'a, T> Cursor<'a, T> {
    pub fn new(queue: &'a Queue<T>) -> Self {
        Self::at(queue, 0)
    }

    pub fn at(queue: &'a Queue<T>, position: isize) -> Self {
        Self { queue, position }
    }

    pub fn position(&self) -> isize {
        self.position
    }

    pub fn is_end(&self) -> bool {
        self.position == end_position(self.queue)
    }

    /// Dereferences the cursor, walking the queue from its head.
    pub fn get(&self) -> Result<&'a T> {
        self.queue.get(to_index(self.position)?)
    }

    pub fn move_next(&mut self) -> &mut Self {
        self.position += 1;
        self
    }

    pub fn move_prev(&mut self) -> &mut Self {
        self.position -= 1;
        self
    }

    /// Advances the cursor and returns its previous state.
    pub fn post_next(&mut self) -> Self {
        let prior = *self;
        self.position += 1;
        prior
    }

    /// Steps the cursor back and returns its previous state.
    pub fn post_prev(&mut self) -> Self {
        let prior = *self;
        self.position -= 1;
        prior
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.queue, other.queue) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("queue", &(self.queue as *const Queue<T>))
            .field("position", &self.position)
            .finish()
    }
}

// end: Cursor
// ------------------------------------------

// ------------------------------------------
// begin: CursorMut

/// Cursor with write access to the elements of a [`Queue`].
///
/// The queue stays mutably borrowed for the cursor's lifetime, so its
/// structure cannot change underneath the cursor.
pub struct CursorMut<'a, T> {
    queue: &'a mut Queue<T>,
    position: isize,
}

impl<'a, T> CursorMut<'a, T> {
    pub fn new(queue: &'a mut Queue<T>) -> Self {
        Self::at(queue, 0)
    }

    pub fn at(queue: &'a mut Queue<T>, position: isize) -> Self {
        Self { queue, position }
    }

    pub fn position(&self) -> isize {
        self.position
    }

    pub fn is_end(&self) -> bool {
        self.position == end_position(&*self.queue)
    }

    pub fn get(&self) -> Result<&T> {
        self.queue.get(to_index(self.position)?)
    }

    pub fn get_mut(&mut self) -> Result<&mut T> {
        self.queue.get_mut(to_index(self.position)?)
    }

    pub fn move_next(&mut self) -> &mut Self {
        self.position += 1;
        self
    }

    pub fn move_prev(&mut self) -> &mut Self {
        self.position -= 1;
        self
    }

    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::at(&*self.queue, self.position)
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(&*self.queue, &*other.queue) && self.position == other.position
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("queue", &(&*self.queue as *const Queue<T>))
            .field("position", &self.position)
            .finish()
    }
}

// end: CursorMut
// ------------------------------------------

#[cfg(test)]
mod test {
    use super::{Cursor, CursorMut};
    use crate::queue::{Queue, QueueError};

    #[test]
    fn test_cursor_walk() {
        let queue = Queue::from(['x', 'y', 'z']);
        let end = queue.cend();

        let mut visited = Vec::new();
        let mut cursor = queue.cbegin();
        while cursor != end {
            visited.push(*cursor.get().unwrap());
            cursor.move_next();
        }
        assert_eq!(visited, ['x', 'y', 'z']);
        assert!(cursor.is_end());
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.get(), Err(QueueError::IndexOutOfRange { index: 3, size: 3 }));
    }

    #[test]
    fn test_cursor_empty_queue() {
        let queue = <Queue<i32>>::new();
        assert_eq!(queue.cbegin(), queue.cend());
        assert!(queue.cbegin().is_end());
        assert_eq!(queue.cbegin().get(), Err(QueueError::EmptyContainer));
    }

    #[test]
    fn test_cursor_post_increment() {
        let queue = Queue::from([1, 2, 3]);
        let mut cursor = queue.cbegin();

        let prior = cursor.post_next();
        assert_eq!(prior.get(), Ok(&1));
        assert_eq!(cursor.get(), Ok(&2));

        let prior = cursor.post_prev();
        assert_eq!(prior.position(), 1);
        assert_eq!(cursor.position(), 0);

        cursor.move_next().move_next();
        assert_eq!(cursor.get(), Ok(&3));
    }

    #[test]
    fn test_cursor_before_front() {
        let queue = Queue::from([1]);
        let mut cursor = queue.cbegin();
        cursor.move_prev();
        assert_eq!(cursor.position(), -1);
        assert_eq!(cursor.get(), Err(QueueError::BeforeFront { position: -1 }));

        cursor.move_next();
        assert_eq!(cursor.get(), Ok(&1));
    }

    #[test]
    fn test_cursor_equality_is_identity() {
        let a = Queue::from([1, 2]);
        let b = a.clone();
        assert_eq!(a, b);

        assert_eq!(Cursor::new(&a), a.cbegin());
        assert_eq!(Cursor::at(&a, 2), a.cend());
        assert_ne!(a.cbegin(), b.cbegin());
        assert_ne!(a.cbegin(), a.cend());
    }

    #[test]
    fn test_cursor_mut_walk() {
        let mut queue = Queue::from([1, 2, 3]);

        let mut cursor = queue.begin();
        while !cursor.is_end() {
            *cursor.get_mut().unwrap() *= 10;
            cursor.move_next();
        }
        cursor.move_prev();
        assert_eq!(cursor.get(), Ok(&30));
        assert_eq!(cursor.as_cursor().position(), 2);

        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
    }

    #[test]
    fn test_cursor_mut_end() {
        let mut queue = Queue::from(["a", "b"]);
        let mut cursor = queue.end();
        assert_eq!(cursor.position(), 2);
        assert_eq!(
            cursor.get_mut(),
            Err(QueueError::IndexOutOfRange { index: 2, size: 2 })
        );

        cursor.move_prev().move_prev().move_prev();
        assert_eq!(cursor.get_mut(), Err(QueueError::BeforeFront { position: -1 }));
    }

    #[test]
    fn test_cursor_mut_equality() {
        let mut a = Queue::from([0]);
        let mut b = Queue::from([0]);

        let first = CursorMut::new(&mut a);
        let second = CursorMut::new(&mut b);
        assert_ne!(first, second);
        assert_ne!(first.as_cursor(), second.as_cursor());
        assert_eq!(first.as_cursor().position(), second.position());
    }
}
