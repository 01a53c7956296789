//! `f(lhs, rhs)` for an arbitrary binary functor.

use num_traits::One;
use vexpr_traits::BinaryFunctor;

use crate::assign::{ensure_same_size, plus_assign_elementwise};
use crate::block::eval_block;
use crate::category::EvaluationCategory;
use crate::closure::IntoClosure;
use crate::dense::VectorSink;
use crate::device::Device;
use crate::{Result, VectorExpression, VectorScalarMultiply};

/// Lazy `f(lhs, rhs)`, applied position by position.
///
/// An opaque functor does not distribute over scaling, so assignment cannot
/// split into per-operand passes the way [`VectorAddition`](crate::VectorAddition)
/// does. Both operands are brought into elementwise form with
/// [`eval_block`], combined, and scaled by `alpha` in a single sweep.
///
/// # Example
///
/// ```rust
/// use vexpr_rs::functor::Max;
/// use vexpr_rs::{DenseVector, VectorBinary, VectorExpression};
///
/// let a = DenseVector::from_vec(vec![1.0, 5.0]);
/// let b = DenseVector::from_vec(vec![3.0, 2.0]);
/// let m = VectorBinary::new(&a, &b, Max).unwrap();
/// assert_eq!(m.to_vec(), vec![3.0, 5.0]);
/// ```
#[derive(Debug, Clone)]
pub struct VectorBinary<L, R, F> {
    lhs: L,
    rhs: R,
    functor: F,
}

impl<L, R, F> VectorBinary<L, R, F>
where
    L: VectorExpression,
    R: VectorExpression<Value = L::Value, Device = L::Device>,
    F: BinaryFunctor<L::Value>,
{
    /// Fails with [`SizeMismatch`](crate::VectorError::SizeMismatch) if the
    /// operand sizes differ.
    pub fn new<A, B>(lhs: A, rhs: B, functor: F) -> Result<Self>
    where
        A: IntoClosure<Closure = L>,
        B: IntoClosure<Closure = R>,
    {
        Self::from_closures(lhs.into_closure(), rhs.into_closure(), functor)
    }

    pub fn from_closures(lhs: L, rhs: R, functor: F) -> Result<Self> {
        ensure_same_size(lhs.size(), rhs.size())?;
        Ok(Self { lhs, rhs, functor })
    }

    #[inline]
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    #[inline]
    pub fn rhs(&self) -> &R {
        &self.rhs
    }

    #[inline]
    pub fn functor(&self) -> &F {
        &self.functor
    }
}

impl<L, R, F> VectorExpression for VectorBinary<L, R, F>
where
    L: VectorExpression,
    R: VectorExpression<Value = L::Value, Device = L::Device>,
    F: BinaryFunctor<L::Value>,
{
    type Value = L::Value;
    type Device = L::Device;
    type Category = <L::Category as EvaluationCategory>::Restrict<R::Category>;
    type Iter<'a> =
        <L::Device as Device>::BinaryTransformIter<L::Value, L::Iter<'a>, R::Iter<'a>, F>
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.lhs.size()
    }

    #[inline]
    fn at(&self, i: usize) -> L::Value {
        self.functor.apply(self.lhs.at(i), self.rhs.at(i))
    }

    fn iter(&self) -> Self::Iter<'_> {
        <L::Device as Device>::binary_transform(
            self.functor.clone(),
            self.lhs.iter(),
            self.rhs.iter(),
        )
    }

    fn assign_to<S>(&self, sink: &mut S, alpha: L::Value) -> Result<()>
    where
        S: VectorSink<Value = L::Value, Device = L::Device>,
    {
        sink.clear();
        self.plus_assign_to(sink, alpha)
    }

    fn plus_assign_to<S>(&self, sink: &mut S, alpha: L::Value) -> Result<()>
    where
        S: VectorSink<Value = L::Value, Device = L::Device>,
    {
        let lhs = eval_block(&self.lhs)?;
        let rhs = eval_block(&self.rhs)?;
        let combined = VectorBinary {
            lhs,
            rhs,
            functor: self.functor.clone(),
        };
        let scaled = VectorScalarMultiply::from_closure(combined, alpha);
        plus_assign_elementwise(sink, &scaled, L::Value::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::tests::CumSum;
    use crate::{assign, plus_assign, DenseVector, ScalarVector, VectorError};
    use vexpr_traits::{Less, Multiply, Subtract};

    #[test]
    fn test_elementwise_access() {
        let a = DenseVector::from_vec(vec![1.0f64, 2.0, 3.0]);
        let b = DenseVector::from_vec(vec![4.0f64, 5.0, 6.0]);
        let e = VectorBinary::new(&a, &b, Multiply).unwrap();
        assert_eq!(e.at(0), 4.0);
        assert_eq!(e.to_vec(), vec![4.0, 10.0, 18.0]);
        assert_eq!(e.functor(), &Multiply);
    }

    #[test]
    fn test_size_mismatch() {
        let a = DenseVector::from_vec(vec![1.0f64, 2.0]);
        let err = VectorBinary::new(&a, ScalarVector::new(3, 1.0), Subtract).unwrap_err();
        assert_eq!(err, VectorError::SizeMismatch(2, 3));
    }

    #[test]
    fn test_assign_replaces_sink() {
        let a = DenseVector::from_vec(vec![1.0f64, 5.0]);
        let e = VectorBinary::new(&a, ScalarVector::new(2, 3.0), Less).unwrap();
        let mut out = DenseVector::from_vec(vec![9.0; 2]);
        assign(&mut out, &e, 2.0).unwrap();
        assert_eq!(out.as_slice(), &[2.0, 0.0]);
    }

    #[test]
    fn test_plus_assign_applies_alpha() {
        let a = DenseVector::from_vec(vec![1.0f64, 2.0]);
        let b = DenseVector::from_vec(vec![3.0f64, 3.0]);
        let e = VectorBinary::new(&a, &b, Multiply).unwrap();
        let mut out = DenseVector::from_vec(vec![1.0; 2]);
        plus_assign(&mut out, &e, 0.5).unwrap();
        assert_eq!(out.as_slice(), &[2.5, 4.0]);
    }

    #[test]
    fn test_blockwise_operands_evaluated_once() {
        let c = CumSum::new(vec![1.0, 1.0, 1.0]);
        let d = CumSum::new(vec![2.0, 0.0, 0.0]);
        let e = VectorBinary::new(c.clone(), d.clone(), |x: f64, y: f64| x - y).unwrap();
        let mut out = DenseVector::zeros(3);
        assign(&mut out, &e, 1.0).unwrap();
        assert_eq!(out.as_slice(), &[-1.0, 0.0, 1.0]);
        assert_eq!(c.evals.get(), 1);
        assert_eq!(d.evals.get(), 1);
    }
}
