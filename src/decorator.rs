//! Cursor decorators.
//!
//! [`Decorator`] is the identity wrapper: it owns one inner cursor and
//! forwards every operation to it. [`Filter`] is built on top of it and only
//! changes how the cursor moves, so that it always rests either on an element
//! accepted by its predicate or in the done state.
//!
//! Decorators compose by nesting. Wrapping a `Filter` in another `Filter`
//! yields the elements accepted by both predicates, in their original order.
//!
//! ```rust
//! use decorated_cursor::{Container, CursorExt, SequenceContainer};
//!
//! let numbers: SequenceContainer<u32> = (1..=12).collect();
//! let mut seen = Vec::new();
//! numbers
//!     .cursor()
//!     .filter(|n| *n % 2 == 0)
//!     .filter(|n| *n % 3 == 0)
//!     .for_each(|n| seen.push(*n));
//!
//! assert_eq!(seen, [6, 12]);
//! ```

use crate::Cursor;

#[derive(Debug, Clone)]
#[must_use]
pub struct Decorator<I> {
    inner: I,
}

impl<I> Decorator<I> {
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    #[inline]
    #[must_use]
    pub fn get_ref(&self) -> &I {
        &self.inner
    }

    #[inline]
    #[must_use]
    pub fn get_mut(&mut self) -> &mut I {
        &mut self.inner
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I> Cursor for Decorator<I>
where
    I: Cursor,
{
    type Item = I::Item;

    #[inline]
    fn first(&mut self) {
        self.inner.first()
    }

    #[inline]
    fn next(&mut self) {
        self.inner.next()
    }

    #[inline]
    fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    #[inline]
    fn current(&self) -> Self::Item {
        self.inner.current()
    }
}

/// Skips every element of the inner cursor rejected by `predicate`.
#[derive(Debug, Clone)]
#[must_use]
pub struct Filter<I, P> {
    base: Decorator<I>,
    predicate: P,
}

impl<I, P> Filter<I, P>
where
    I: Cursor,
    P: Fn(&I::Item) -> bool,
{
    pub fn new(inner: I, predicate: P) -> Self {
        Self {
            base: Decorator::new(inner),
            predicate,
        }
    }

    fn skip_rejected(&mut self) {
        while !self.base.is_done() && !(self.predicate)(&self.base.current()) {
            self.base.next();
        }
    }
}

impl<I, P> Filter<I, P> {
    #[inline]
    #[must_use]
    pub fn get_ref(&self) -> &I {
        self.base.get_ref()
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> I {
        self.base.into_inner()
    }
}

impl<I, P> Cursor for Filter<I, P>
where
    I: Cursor,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn first(&mut self) {
        self.base.first();
        self.skip_rejected();
    }

    fn next(&mut self) {
        self.base.next();
        self.skip_rejected();
    }

    #[inline]
    fn is_done(&self) -> bool {
        self.base.is_done()
    }

    #[inline]
    fn current(&self) -> Self::Item {
        self.base.current()
    }
}
