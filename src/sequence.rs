use std::ops::Index;

use tracing::{debug, trace};

use crate::{Container, Cursor, Error, Result};

/// Owning, growable, insertion-ordered container.
///
/// When `T` is a handle (`&X`, `Rc<X>`, ...) the container owns the handles
/// only, never what they point to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceContainer<T> {
    items: Vec<T>,
}

impl<T> SequenceContainer<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Appends `element` at the end of the sequence.
    pub fn add(&mut self, element: T) {
        if self.items.len() == self.items.capacity() {
            trace!(len = self.items.len(), "growing sequence storage");
        }
        self.items.push(element);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bounds-checked access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= self.len()`.
    pub fn element_at(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or_else(|| {
            debug!(index, len = self.items.len(), "element access out of range");
            Error::out_of_range(index, self.items.len())
        })
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for SequenceContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for SequenceContainer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.element_at(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for SequenceContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl<T> Extend<T> for SequenceContainer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T> Container for SequenceContainer<T> {
    type Item = T;
    type Cursor<'a> = SequenceCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SequenceCursor::new(&self.items)
    }
}

/// Index-based cursor over a borrowed slice.
#[derive(Debug, Clone)]
pub struct SequenceCursor<'a, T> {
    items: &'a [T],
    position: Option<usize>,
}

impl<'a, T> SequenceCursor<'a, T> {
    #[must_use]
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            position: None,
        }
    }

    fn settle(&mut self, position: usize) {
        self.position = (position < self.items.len()).then_some(position);
    }
}

impl<'a, T> Cursor for SequenceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn first(&mut self) {
        self.settle(0);
    }

    #[inline]
    fn next(&mut self) {
        if let Some(position) = self.position {
            self.settle(position + 1);
        }
    }

    #[inline]
    fn is_done(&self) -> bool {
        self.position.is_none()
    }

    fn current(&self) -> Self::Item {
        let Some(position) = self.position else {
            panic!("SequenceCursor::current called on a done cursor");
        };
        &self.items[position]
    }
}
