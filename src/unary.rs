//! `f(e)` for an elementwise functor.

use num_traits::One;
use vexpr_traits::UnaryFunctor;

use crate::assign::plus_assign_elementwise;
use crate::block::eval_block;
use crate::closure::IntoClosure;
use crate::dense::VectorSink;
use crate::device::Device;
use crate::{Result, VectorExpression, VectorScalarMultiply};

/// Lazy `f(e)`, applied position by position.
///
/// On assignment the operand is first brought into elementwise form with
/// [`eval_block`], so `f` runs exactly once per element even when `e` is
/// blockwise.
///
/// # Example
///
/// ```rust
/// use vexpr_rs::functor::Negate;
/// use vexpr_rs::{assign, DenseVector, ScalarVector, VectorUnary};
///
/// let e = VectorUnary::new(ScalarVector::new(4, 3.0), Negate);
/// let mut out = DenseVector::zeros(4);
/// assign(&mut out, &e, 1.0).unwrap();
/// assert_eq!(out.as_slice(), &[-3.0; 4]);
/// ```
#[derive(Debug, Clone)]
pub struct VectorUnary<E, F> {
    expression: E,
    functor: F,
}

impl<E, F> VectorUnary<E, F>
where
    E: VectorExpression,
    F: UnaryFunctor<E::Value>,
{
    pub fn new<C>(expression: C, functor: F) -> Self
    where
        C: IntoClosure<Closure = E>,
    {
        Self::from_closure(expression.into_closure(), functor)
    }

    pub fn from_closure(expression: E, functor: F) -> Self {
        Self {
            expression,
            functor,
        }
    }

    #[inline]
    pub fn expression(&self) -> &E {
        &self.expression
    }

    #[inline]
    pub fn functor(&self) -> &F {
        &self.functor
    }
}

impl<E, F> VectorExpression for VectorUnary<E, F>
where
    E: VectorExpression,
    F: UnaryFunctor<E::Value>,
{
    type Value = E::Value;
    type Device = E::Device;
    type Category = E::Category;
    type Iter<'a> = <E::Device as Device>::TransformIter<E::Value, E::Iter<'a>, F> where Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.expression.size()
    }

    #[inline]
    fn at(&self, i: usize) -> E::Value {
        self.functor.apply(self.expression.at(i))
    }

    fn iter(&self) -> Self::Iter<'_> {
        <E::Device as Device>::transform(self.expression.iter(), self.functor.clone())
    }

    fn assign_to<S>(&self, sink: &mut S, alpha: E::Value) -> Result<()>
    where
        S: VectorSink<Value = E::Value, Device = E::Device>,
    {
        sink.clear();
        self.plus_assign_to(sink, alpha)
    }

    fn plus_assign_to<S>(&self, sink: &mut S, alpha: E::Value) -> Result<()>
    where
        S: VectorSink<Value = E::Value, Device = E::Device>,
    {
        let block = eval_block(&self.expression)?;
        let composed = VectorScalarMultiply::from_closure(
            VectorUnary::from_closure(block, self.functor.clone()),
            alpha,
        );
        plus_assign_elementwise(sink, &composed, E::Value::one())
    }
}
