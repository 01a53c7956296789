//! `scalar * e` without materializing `e`.

use std::fmt;

use crate::closure::IntoClosure;
use crate::dense::VectorSink;
use crate::device::Device;
use crate::{Result, VectorExpression};

/// Lazy `scalar * e`.
///
/// Assigning this node never visits it: the scalar is folded into `alpha`
/// and the inner expression is assigned directly, so
/// `assign(sink, &scaled(e, s), alpha)` is the same single pass over `e` as
/// `assign(sink, &e, alpha * s)`.
pub struct VectorScalarMultiply<E: VectorExpression> {
    expression: E,
    scalar: E::Value,
}

impl<E: VectorExpression> VectorScalarMultiply<E> {
    /// Scale any operand, capturing it by its closure.
    pub fn new<C>(expression: C, scalar: E::Value) -> Self
    where
        C: IntoClosure<Closure = E>,
    {
        Self::from_closure(expression.into_closure(), scalar)
    }

    pub fn from_closure(expression: E, scalar: E::Value) -> Self {
        Self { expression, scalar }
    }

    #[inline]
    pub fn expression(&self) -> &E {
        &self.expression
    }

    #[inline]
    pub fn scalar(&self) -> E::Value {
        self.scalar
    }

    /// The device's scaling functor for this node's scalar.
    #[inline]
    pub fn functor(&self) -> <E::Device as Device>::MultiplyScalar<E::Value> {
        <E::Device as Device>::multiply_scalar(self.scalar)
    }
}

impl<E: VectorExpression> Clone for VectorScalarMultiply<E> {
    fn clone(&self) -> Self {
        Self {
            expression: self.expression.clone(),
            scalar: self.scalar,
        }
    }
}

impl<E> fmt::Debug for VectorScalarMultiply<E>
where
    E: VectorExpression + fmt::Debug,
    E::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorScalarMultiply")
            .field("expression", &self.expression)
            .field("scalar", &self.scalar)
            .finish()
    }
}

impl<E: VectorExpression> VectorExpression for VectorScalarMultiply<E> {
    type Value = E::Value;
    type Device = E::Device;
    type Category = E::Category;
    type Iter<'a> = <E::Device as Device>::TransformIter<
        E::Value,
        E::Iter<'a>,
        <E::Device as Device>::MultiplyScalar<E::Value>,
    >
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.expression.size()
    }

    #[inline]
    fn at(&self, i: usize) -> E::Value {
        self.scalar * self.expression.at(i)
    }

    fn iter(&self) -> Self::Iter<'_> {
        <E::Device as Device>::transform(self.expression.iter(), self.functor())
    }

    fn assign_to<S>(&self, sink: &mut S, alpha: E::Value) -> Result<()>
    where
        S: VectorSink<Value = E::Value, Device = E::Device>,
    {
        self.expression.assign_to(sink, alpha * self.scalar)
    }

    fn plus_assign_to<S>(&self, sink: &mut S, alpha: E::Value) -> Result<()>
    where
        S: VectorSink<Value = E::Value, Device = E::Device>,
    {
        self.expression.plus_assign_to(sink, alpha * self.scalar)
    }
}
