//! CPU iterator implementations handed out by [`Cpu`](crate::Cpu).
//!
//! All iterators here are restartable (`Clone`), exact-size, and double
//! ended, so every expression built from them can be walked repeatedly and
//! from either end without side effects.

use vexpr_traits::{BinaryFunctor, UnaryFunctor};

// ============================================================================
// ConstantIter
// ============================================================================

/// Yields one value a fixed number of times.
#[derive(Debug, Clone, Copy)]
pub struct ConstantIter<T> {
    value: T,
    front: usize,
    back: usize,
}

impl<T> ConstantIter<T> {
    pub fn new(value: T, len: usize) -> Self {
        Self {
            value,
            front: 0,
            back: len,
        }
    }
}

impl<T: Copy> Iterator for ConstantIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            self.front += 1;
            Some(self.value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<T: Copy> DoubleEndedIterator for ConstantIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.value)
        } else {
            None
        }
    }
}

impl<T: Copy> ExactSizeIterator for ConstantIter<T> {}

// ============================================================================
// TransformIter
// ============================================================================

/// Applies a unary functor to every element of an inner sequence.
#[derive(Debug, Clone)]
pub struct TransformIter<I, F> {
    inner: I,
    f: F,
}

impl<I, F> TransformIter<I, F> {
    pub fn new(inner: I, f: F) -> Self {
        Self { inner, f }
    }
}

impl<I, F> Iterator for TransformIter<I, F>
where
    I: Iterator,
    F: UnaryFunctor<I::Item>,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let x = self.inner.next()?;
        Some(self.f.apply(x))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, F> DoubleEndedIterator for TransformIter<I, F>
where
    I: DoubleEndedIterator,
    F: UnaryFunctor<I::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let x = self.inner.next_back()?;
        Some(self.f.apply(x))
    }
}

impl<I, F> ExactSizeIterator for TransformIter<I, F>
where
    I: ExactSizeIterator,
    F: UnaryFunctor<I::Item>,
{
}

// ============================================================================
// BinaryTransformIter
// ============================================================================

/// Combines two equal-length sequences with a binary functor.
///
/// Nodes only build this after checking that both operands have the same
/// size, so front and back stay aligned on both sides.
#[derive(Debug, Clone)]
pub struct BinaryTransformIter<L, R, F> {
    f: F,
    lhs: L,
    rhs: R,
}

impl<L, R, F> BinaryTransformIter<L, R, F> {
    pub fn new(f: F, lhs: L, rhs: R) -> Self {
        Self { f, lhs, rhs }
    }
}

impl<L, R, F> Iterator for BinaryTransformIter<L, R, F>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
    F: BinaryFunctor<L::Item>,
{
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<L::Item> {
        let a = self.lhs.next()?;
        let b = self.rhs.next()?;
        Some(self.f.apply(a, b))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (l_lo, l_hi) = self.lhs.size_hint();
        let (r_lo, r_hi) = self.rhs.size_hint();
        let hi = match (l_hi, r_hi) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        (l_lo.min(r_lo), hi)
    }
}

impl<L, R, F> DoubleEndedIterator for BinaryTransformIter<L, R, F>
where
    L: DoubleEndedIterator,
    R: DoubleEndedIterator<Item = L::Item>,
    F: BinaryFunctor<L::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<L::Item> {
        let a = self.lhs.next_back()?;
        let b = self.rhs.next_back()?;
        Some(self.f.apply(a, b))
    }
}

impl<L, R, F> ExactSizeIterator for BinaryTransformIter<L, R, F>
where
    L: ExactSizeIterator,
    R: ExactSizeIterator<Item = L::Item>,
    F: BinaryFunctor<L::Item>,
{
}

// ============================================================================
// BlockIter
// ============================================================================

/// Iterator over a [`Block`](crate::Block): either the borrowed operand's
/// own sequence or a walk over materialized storage.
#[derive(Debug, Clone)]
pub enum BlockIter<A, B> {
    Borrowed(A),
    Materialized(B),
}

impl<A, B> Iterator for BlockIter<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        match self {
            BlockIter::Borrowed(it) => it.next(),
            BlockIter::Materialized(it) => it.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            BlockIter::Borrowed(it) => it.size_hint(),
            BlockIter::Materialized(it) => it.size_hint(),
        }
    }
}

impl<A, B> DoubleEndedIterator for BlockIter<A, B>
where
    A: DoubleEndedIterator,
    B: DoubleEndedIterator<Item = A::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<A::Item> {
        match self {
            BlockIter::Borrowed(it) => it.next_back(),
            BlockIter::Materialized(it) => it.next_back(),
        }
    }
}

impl<A, B> ExactSizeIterator for BlockIter<A, B>
where
    A: ExactSizeIterator,
    B: ExactSizeIterator<Item = A::Item>,
{
}
