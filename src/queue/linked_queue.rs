use super::cursor::{Cursor, CursorMut};
use super::error::{QueueError, Result};

use std::fmt;
use std::io::{self, Write};
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use tracing::{debug, trace};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    elem: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn boxed(elem: T) -> Box<Self> {
        Box::new(Self { elem, next: None })
    }
}

// Singly-linked FIFO queue.
// Neither the tail nor the length is cached: push, size and indexing walk from head.
pub struct Queue<T> {
    head: Link<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes reachable from head.
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            size += 1;
            node = n.next.as_deref();
        }
        size
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.elem)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.elem)
    }

    /// Appends `elem` as the new tail.
    pub fn push(&mut self, elem: T) {
        let mut link = &mut self.head;
        let mut depth = 0_usize;
        while let Some(node) = link {
            link = &mut node.next;
            depth += 1;
        }
        *link = Some(Node::boxed(elem));
        trace!(depth, "appended element at tail");
    }

    /// Removes the head element without returning it.
    ///
    /// Fails with [`QueueError::EmptyContainer`] when there is nothing to remove.
    pub fn pop(&mut self) -> Result<()> {
        match self.pop_front() {
            Some(_) => Ok(()),
            None => {
                debug!("pop on empty queue");
                Err(QueueError::EmptyContainer)
            }
        }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            node.elem
        })
    }

    /// Returns a copy of the head element.
    pub fn top(&self) -> Result<T>
    where
        T: Clone,
    {
        self.front().cloned().ok_or(QueueError::EmptyContainer)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let mut node = self.head.as_deref().ok_or(QueueError::EmptyContainer)?;
        for walked in 0..index {
            node = node.next.as_deref().ok_or(QueueError::IndexOutOfRange {
                index,
                size: walked + 1,
            })?;
        }
        Ok(&node.elem)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let mut node = self
            .head
            .as_deref_mut()
            .ok_or(QueueError::EmptyContainer)?;
        for walked in 0..index {
            node = node
                .next
                .as_deref_mut()
                .ok_or(QueueError::IndexOutOfRange {
                    index,
                    size: walked + 1,
                })?;
        }
        Ok(&mut node.elem)
    }

    pub fn clear(&mut self) {
        // unlink node by node so a long chain never drops recursively
        let mut link = self.head.take();
        let mut released = 0_usize;
        while let Some(mut node) = link {
            link = node.next.take();
            released += 1;
        }
        if released > 0 {
            trace!(released, "released queue chain");
        }
    }

    pub fn begin(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }

    pub fn end(&mut self) -> CursorMut<'_, T> {
        let size = self.size() as isize;
        CursorMut::at(self, size)
    }

    pub fn cbegin(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    pub fn cend(&self) -> Cursor<'_, T> {
        Cursor::at(self, self.size() as isize)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }
}

impl<T> Queue<T>
where
    T: fmt::Display,
{
    /// Writes the elements to stdout, space separated, followed by a newline.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        let end = self.cend();
        let mut cursor = self.cbegin();
        while cursor != end {
            if cursor.position() > 0 {
                out.write_all(b" ")?;
            }
            let elem = cursor
                .get()
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
            write!(out, "{}", elem)?;
            cursor.move_next();
        }
        writeln!(out)
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for elem in iter {
                write!(f, " {}", elem)?;
            }
        }
        Ok(())
    }
}

impl<T> Index<usize> for Queue<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for Queue<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        for elem in iter {
            link = &mut link.insert(Node::boxed(elem)).next;
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

// ------------------------------------------
// begin: IntoIter

pub struct IntoIter<T>(Queue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// end: IntoIter
// ------------------------------------------

// ------------------------------------------
// begin: IterMut

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.elem
        })
    }
}

impl<'a, T> IntoIterator for &'a mut Queue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

// end: IterMut
// ------------------------------------------

// ------------------------------------------
// begin: Iter

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.elem
        })
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

// end: Iter
// ------------------------------------------
