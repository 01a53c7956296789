//! `lhs + rhs`, assigned term by term.

use vexpr_traits::BinaryFunctor;

use crate::assign::ensure_same_size;
use crate::category::EvaluationCategory;
use crate::closure::IntoClosure;
use crate::dense::VectorSink;
use crate::device::Device;
use crate::{Result, VectorExpression};

/// Lazy `lhs + rhs`.
///
/// Addition distributes over scaling, so assigning `alpha * (lhs + rhs)`
/// writes `alpha * lhs` and then accumulates `alpha * rhs`. Sums nested to
/// any depth are therefore assigned with one sweep per leaf and no
/// intermediate vector.
///
/// # Example
///
/// ```rust
/// use vexpr_rs::{assign, DenseVector, ScalarVector, VectorAddition, VectorExpression};
///
/// let e = VectorAddition::new(ScalarVector::new(3, 2.0), ScalarVector::new(3, 5.0)).unwrap();
/// assert_eq!(e.at(1), 7.0);
///
/// let mut out = DenseVector::zeros(3);
/// assign(&mut out, &e, 2.0).unwrap();
/// assert_eq!(out.as_slice(), &[14.0, 14.0, 14.0]);
/// ```
#[derive(Debug, Clone)]
pub struct VectorAddition<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> VectorAddition<L, R>
where
    L: VectorExpression,
    R: VectorExpression<Value = L::Value, Device = L::Device>,
{
    /// Fails with [`SizeMismatch`](crate::VectorError::SizeMismatch) if the
    /// operand sizes differ.
    pub fn new<A, B>(lhs: A, rhs: B) -> Result<Self>
    where
        A: IntoClosure<Closure = L>,
        B: IntoClosure<Closure = R>,
    {
        Self::from_closures(lhs.into_closure(), rhs.into_closure())
    }

    pub fn from_closures(lhs: L, rhs: R) -> Result<Self> {
        ensure_same_size(lhs.size(), rhs.size())?;
        Ok(Self { lhs, rhs })
    }

    #[inline]
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    #[inline]
    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}

impl<L, R> VectorExpression for VectorAddition<L, R>
where
    L: VectorExpression,
    R: VectorExpression<Value = L::Value, Device = L::Device>,
{
    type Value = L::Value;
    type Device = L::Device;
    type Category = <L::Category as EvaluationCategory>::Restrict<R::Category>;
    type Iter<'a> = <L::Device as Device>::BinaryTransformIter<
        L::Value,
        L::Iter<'a>,
        R::Iter<'a>,
        <L::Device as Device>::Add<L::Value>,
    >
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.lhs.size()
    }

    #[inline]
    fn at(&self, i: usize) -> L::Value {
        <L::Device as Device>::add::<L::Value>().apply(self.lhs.at(i), self.rhs.at(i))
    }

    fn iter(&self) -> Self::Iter<'_> {
        <L::Device as Device>::binary_transform(
            <L::Device as Device>::add::<L::Value>(),
            self.lhs.iter(),
            self.rhs.iter(),
        )
    }

    fn assign_to<S>(&self, sink: &mut S, alpha: L::Value) -> Result<()>
    where
        S: VectorSink<Value = L::Value, Device = L::Device>,
    {
        self.lhs.assign_to(sink, alpha)?;
        self.rhs.plus_assign_to(sink, alpha)
    }

    fn plus_assign_to<S>(&self, sink: &mut S, alpha: L::Value) -> Result<()>
    where
        S: VectorSink<Value = L::Value, Device = L::Device>,
    {
        self.lhs.plus_assign_to(sink, alpha)?;
        self.rhs.plus_assign_to(sink, alpha)
    }
}
