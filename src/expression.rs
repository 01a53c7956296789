//! The vector expression contract.

use std::ops::Neg;

use num_traits::Zero;
use vexpr_traits::{BinaryFunctor, Negate, ScalarBase, UnaryFunctor};

use crate::category::EvaluationCategory;
use crate::closure::IntoClosure;
use crate::dense::VectorSink;
use crate::device::{Device, ExprIter};
use crate::{
    Result, VectorAddition, VectorBinary, VectorError, VectorScalarMultiply, VectorUnary,
};

/// A lazy descriptor of a vector computation over positions `0..size()`.
///
/// Implementors are value types: cloning an expression clones its captured
/// closures (cheap for nodes and views) and never its referenced data.
/// Element access and iteration must be pure, so an expression can be read
/// any number of times, in any order, with identical results.
///
/// # Assignment
///
/// [`assign_to`](Self::assign_to) writes `alpha * self` into a sink,
/// replacing its contents; [`plus_assign_to`](Self::plus_assign_to) adds
/// `alpha * self` to what the sink already holds. Callers normally go
/// through [`assign`](crate::assign) / [`plus_assign`](crate::plus_assign),
/// which check sizes first. Nodes call the `*_to` methods of their operands
/// directly to distribute `alpha` through the tree.
pub trait VectorExpression: Clone {
    /// Element type.
    type Value: ScalarBase;

    /// Device supplying iterators and functors.
    type Device: Device;

    /// Evaluation strategy tag.
    type Category: EvaluationCategory;

    /// Lazy element sequence borrowed from the expression.
    type Iter<'a>: ExprIter<Self::Value>
    where
        Self: 'a;

    /// Number of elements. Never evaluates an element.
    fn size(&self) -> usize;

    /// Element `i`. The caller guarantees `i < size()`.
    fn at(&self, i: usize) -> Self::Value;

    /// Element `i`, or [`VectorError::IndexOutOfRange`].
    fn get(&self, i: usize) -> Result<Self::Value> {
        let size = self.size();
        if i < size {
            Ok(self.at(i))
        } else {
            Err(VectorError::IndexOutOfRange { index: i, size })
        }
    }

    /// Fresh iterator over all elements. Calling this has no side effects;
    /// every call restarts from the first element.
    fn iter(&self) -> Self::Iter<'_>;

    /// `sink = alpha * self`.
    fn assign_to<S>(&self, sink: &mut S, alpha: Self::Value) -> Result<()>
    where
        S: VectorSink<Value = Self::Value, Device = Self::Device>;

    /// `sink += alpha * self`.
    fn plus_assign_to<S>(&self, sink: &mut S, alpha: Self::Value) -> Result<()>
    where
        S: VectorSink<Value = Self::Value, Device = Self::Device>;

    // ------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------

    /// `scalar * self`.
    fn scaled(self, scalar: Self::Value) -> VectorScalarMultiply<Self> {
        VectorScalarMultiply::from_closure(self, scalar)
    }

    /// `f(self)` elementwise.
    fn map<F>(self, f: F) -> VectorUnary<Self, F>
    where
        F: UnaryFunctor<Self::Value>,
    {
        VectorUnary::from_closure(self, f)
    }

    /// `-self` elementwise.
    fn negated(self) -> VectorUnary<Self, Negate>
    where
        Self::Value: Neg<Output = Self::Value>,
    {
        VectorUnary::from_closure(self, Negate)
    }

    /// `self + rhs`, failing if the sizes differ.
    fn try_add<R>(self, rhs: R) -> Result<VectorAddition<Self, R::Closure>>
    where
        R: IntoClosure,
        R::Closure: VectorExpression<Value = Self::Value, Device = Self::Device>,
    {
        VectorAddition::from_closures(self, rhs.into_closure())
    }

    /// `f(self, rhs)` elementwise, failing if the sizes differ.
    fn zip_with<R, F>(self, rhs: R, f: F) -> Result<VectorBinary<Self, R::Closure, F>>
    where
        R: IntoClosure,
        R::Closure: VectorExpression<Value = Self::Value, Device = Self::Device>,
        F: BinaryFunctor<Self::Value>,
    {
        VectorBinary::from_closures(self, rhs.into_closure(), f)
    }

    /// Collect every element into a `Vec`.
    fn to_vec(&self) -> Vec<Self::Value> {
        self.iter().collect()
    }

    /// Sum of all elements.
    fn sum(&self) -> Self::Value {
        self.iter().fold(<Self::Value as Zero>::zero(), |acc, x| acc + x)
    }
}
