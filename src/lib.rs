pub mod adapter;
pub mod decorator;
pub mod error;
pub mod sequence;

use tracing::trace;

pub use adapter::ForeignAdapter;
pub use decorator::{Decorator, Filter};
pub use error::{Error, Result};
pub use sequence::{SequenceContainer, SequenceCursor};

/// Minimal cursor protocol over a sequence of `Self::Item`.
///
/// A cursor is unpositioned until [`Cursor::first`] is called: `is_done`
/// reports `true` and `next` does nothing. Once the cursor has passed the
/// last element, `next` keeps being a no-op.
pub trait Cursor {
    type Item;

    /// Moves to the first element, or to the done state if there is none.
    fn first(&mut self);

    /// Moves one element forward. Does nothing once the cursor is done.
    fn next(&mut self);

    fn is_done(&self) -> bool;

    /// Returns the element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is done.
    fn current(&self) -> Self::Item;

    #[inline]
    fn get(&self) -> Option<Self::Item> {
        if self.is_done() {
            None
        } else {
            Some(self.current())
        }
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Done`] if the cursor is done.
    #[inline]
    fn try_current(&self) -> Result<Self::Item> {
        self.get().ok_or(Error::Done)
    }
}

impl<C> Cursor for Box<C>
where
    C: ?Sized + Cursor,
{
    type Item = C::Item;

    #[inline]
    fn first(&mut self) {
        (**self).first()
    }

    #[inline]
    fn next(&mut self) {
        (**self).next()
    }

    #[inline]
    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    #[inline]
    fn current(&self) -> Self::Item {
        (**self).current()
    }
}

pub type BoxCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

/// Anything that can hand out independent cursors over its elements.
pub trait Container {
    type Item;
    type Cursor<'a>: Cursor<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Returns a fresh, unpositioned cursor. Cursors obtained from the same
    /// container do not interfere with each other.
    fn cursor(&self) -> Self::Cursor<'_>;
}

pub trait CursorExt: Cursor {
    fn decorate(self) -> Decorator<Self>
    where
        Self: Sized;

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool;

    fn boxed<'a>(self) -> BoxCursor<'a, Self::Item>
    where
        Self: Sized + 'a;

    fn for_each<F>(&mut self, f: F) -> usize
    where
        F: FnMut(Self::Item);
}

impl<C> CursorExt for C
where
    C: ?Sized + Cursor,
{
    fn decorate(self) -> Decorator<Self>
    where
        Self: Sized,
    {
        Decorator::new(self)
    }

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn boxed<'a>(self) -> BoxCursor<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    fn for_each<F>(&mut self, f: F) -> usize
    where
        F: FnMut(Self::Item),
    {
        crate::for_each(self, f)
    }
}

/// Walks `cursor` from its first element and applies `op` to every element
/// it yields. Returns the number of elements visited.
///
/// No filtering happens here: whatever decorators wrap `cursor` decide what
/// is visited.
pub fn for_each<C, F>(cursor: &mut C, mut op: F) -> usize
where
    C: ?Sized + Cursor,
    F: FnMut(C::Item),
{
    let mut visited = 0;
    cursor.first();
    while !cursor.is_done() {
        op(cursor.current());
        cursor.next();
        visited += 1;
    }

    trace!(visited, "traversal finished");
    visited
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use crate::{Container, Cursor, CursorExt, Error, SequenceContainer};

    /// Cursor over a fixed slice that records how often it was advanced and
    /// when it gets dropped.
    struct ProbeCursor<'a> {
        items: &'a [u32],
        pos: usize,
        steps: Rc<Cell<usize>>,
        drops: Rc<Cell<usize>>,
    }

    impl<'a> ProbeCursor<'a> {
        fn new(items: &'a [u32], steps: Rc<Cell<usize>>, drops: Rc<Cell<usize>>) -> Self {
            Self {
                items,
                pos: items.len(),
                steps,
                drops,
            }
        }
    }

    impl Drop for ProbeCursor<'_> {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    impl<'a> Cursor for ProbeCursor<'a> {
        type Item = &'a u32;

        fn first(&mut self) {
            self.pos = 0;
        }

        fn next(&mut self) {
            if self.pos < self.items.len() {
                self.steps.set(self.steps.get() + 1);
                self.pos += 1;
            }
        }

        fn is_done(&self) -> bool {
            self.pos >= self.items.len()
        }

        fn current(&self) -> Self::Item {
            match self.items.get(self.pos) {
                Some(item) => item,
                None => panic!("ProbeCursor::current called on a done cursor"),
            }
        }
    }

    fn collect<C: Cursor<Item = &'static u32> + ?Sized>(cursor: &mut C) -> Vec<u32> {
        let mut out = Vec::new();
        crate::for_each(cursor, |value| out.push(*value));
        out
    }

    #[test]
    fn for_each_visits_every_element_in_order() {
        let numbers: SequenceContainer<u32> = (1..=8).collect();
        let mut seen = Vec::new();

        let visited = crate::for_each(&mut numbers.cursor(), |value| seen.push(*value));

        assert_eq!(visited, 8);
        assert_eq!(seen, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn for_each_on_empty_container_never_calls_op() {
        let empty = SequenceContainer::<u32>::new();
        let mut calls = 0;

        let visited = empty.cursor().for_each(|_| calls += 1);

        assert_eq!(visited, 0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn fresh_cursor_is_unpositioned() {
        let numbers: SequenceContainer<u32> = (1..=3).collect();
        let mut cursor = numbers.cursor();

        assert!(cursor.is_done());
        assert_eq!(cursor.get(), None);
        assert_eq!(cursor.try_current(), Err(Error::Done));

        cursor.next();
        assert!(cursor.is_done());

        cursor.first();
        assert_eq!(cursor.try_current(), Ok(&1));
    }

    #[test]
    fn boxed_chain_behaves_as_single_cursor() {
        static ITEMS: [u32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
        let steps = Rc::new(Cell::new(0));
        let drops = Rc::new(Cell::new(0));

        let mut chain = ProbeCursor::new(&ITEMS, steps.clone(), drops.clone()).boxed();
        for _ in 0..3 {
            chain = chain.filter(|value| **value != 0).boxed();
        }
        chain = chain.filter(|value| *value % 2 == 0).boxed();

        assert_eq!(collect(&mut chain), [2, 4, 6, 8]);
    }

    #[test]
    fn dropping_outermost_decorator_drops_chain_once() {
        static ITEMS: [u32; 4] = [1, 2, 3, 4];
        let steps = Rc::new(Cell::new(0));
        let drops = Rc::new(Cell::new(0));

        let chain = ProbeCursor::new(&ITEMS, steps, drops.clone())
            .filter(|value| *value % 2 == 1)
            .decorate()
            .filter(|value| **value > 1);
        assert_eq!(drops.get(), 0);

        drop(chain);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn nesting_order_changes_steps_but_not_result() {
        static ITEMS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let even = |value: &&u32| **value % 2 == 0;
        let triple = |value: &&u32| **value % 3 == 0;

        let even_first_steps = Rc::new(Cell::new(0));
        let mut a = ProbeCursor::new(&ITEMS, even_first_steps.clone(), Rc::default())
            .filter(even)
            .filter(triple);
        let triple_first_steps = Rc::new(Cell::new(0));
        let mut b = ProbeCursor::new(&ITEMS, triple_first_steps.clone(), Rc::default())
            .filter(triple)
            .filter(even);

        assert_eq!(collect(&mut a), [6, 12]);
        assert_eq!(collect(&mut b), [6, 12]);
        // Each base step is taken exactly once regardless of nesting.
        assert_eq!(even_first_steps.get(), ITEMS.len());
        assert_eq!(triple_first_steps.get(), ITEMS.len());
    }

    #[test]
    fn cursor_ext_for_each_counts_filtered_elements() {
        let numbers: SequenceContainer<u32> = (0..20).collect();
        let mut sum = 0;

        let visited = numbers
            .cursor()
            .filter(|value| **value >= 10)
            .for_each(|value| sum += value);

        assert_eq!(visited, 10);
        assert_eq!(sum, (10..20).sum::<u32>());
    }
}
