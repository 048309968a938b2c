//! Exposes a foreign container through the [`Cursor`] protocol.
//!
//! Any container that can be iterated by shared reference (`&C:
//! IntoIterator`) can be adapted: `LinkedList`, `VecDeque`, `BTreeSet`,
//! slices, or third party collections. The adapter borrows the container and
//! drives its native iterator, so elements are never copied and the container
//! is never mutated. The borrow also guarantees the container outlives the
//! adapter.
//!
//! ```rust
//! use std::collections::LinkedList;
//!
//! use decorated_cursor::{CursorExt, ForeignAdapter};
//!
//! let list: LinkedList<i32> = [3, -1, 4, -1, 5].into_iter().collect();
//! let mut positive = Vec::new();
//! ForeignAdapter::new(&list)
//!     .filter(|value| **value > 0)
//!     .for_each(|value| positive.push(*value));
//!
//! assert_eq!(positive, [3, 4, 5]);
//! ```

use std::fmt;

use crate::Cursor;

pub struct ForeignAdapter<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    container: &'a C,
    native: Option<<&'a C as IntoIterator>::IntoIter>,
    head: Option<<&'a C as IntoIterator>::Item>,
}

impl<'a, C> ForeignAdapter<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    /// Creates an unpositioned adapter over `container`.
    #[must_use]
    pub fn new(container: &'a C) -> Self {
        Self {
            container,
            native: None,
            head: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn container(&self) -> &'a C {
        self.container
    }
}

impl<'a, C> Cursor for ForeignAdapter<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::Item: Clone,
{
    type Item = <&'a C as IntoIterator>::Item;

    fn first(&mut self) {
        let mut native = self.container.into_iter();
        self.head = native.next();
        self.native = Some(native);
    }

    fn next(&mut self) {
        if self.head.is_none() {
            return;
        }

        self.head = self.native.as_mut().and_then(Iterator::next);
        if self.head.is_none() {
            // Native iterators are not required to be fused.
            self.native = None;
        }
    }

    #[inline]
    fn is_done(&self) -> bool {
        self.head.is_none()
    }

    fn current(&self) -> Self::Item {
        match &self.head {
            Some(item) => item.clone(),
            None => panic!("ForeignAdapter::current called on a done cursor"),
        }
    }
}

impl<'a, C> fmt::Debug for ForeignAdapter<'a, C>
where
    C: ?Sized + fmt::Debug,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignAdapter")
            .field("container", &self.container)
            .field("head", &self.head)
            .finish_non_exhaustive()
    }
}
