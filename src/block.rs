//! Operand materialization for elementwise combinators.
//!
//! Unary and binary nodes read their operands position by position. That is
//! only valid for elementwise operands; a blockwise operand has to be
//! written out once into temporary storage first. [`eval_block`] makes that
//! choice from the operand's category and returns a [`Block`], which is
//! always elementwise.

use std::fmt;
use std::iter::Copied;
use std::slice;

use num_traits::One;

use crate::assign::{assign_elementwise, plus_assign_elementwise};
use crate::category::{Elementwise, EvaluationCategory};
use crate::dense::{DenseVector, VectorSink};
use crate::iter::BlockIter;
use crate::{Result, VectorExpression};

/// An operand in repeatedly traversable form.
///
/// The materialized variant owns its temporary; it is released when the
/// block goes out of scope, including on early error returns.
pub enum Block<'a, E: VectorExpression> {
    /// Elementwise operand, read in place.
    Borrowed(&'a E),
    /// Blockwise operand, evaluated once.
    Materialized(DenseVector<E::Value, E::Device>),
}

impl<'a, E: VectorExpression> Block<'a, E> {
    #[inline]
    pub fn is_materialized(&self) -> bool {
        matches!(self, Block::Materialized(_))
    }
}

impl<'a, E: VectorExpression> Clone for Block<'a, E> {
    fn clone(&self) -> Self {
        match self {
            Block::Borrowed(e) => Block::Borrowed(*e),
            Block::Materialized(v) => Block::Materialized(v.clone()),
        }
    }
}

impl<'a, E> fmt::Debug for Block<'a, E>
where
    E: VectorExpression + fmt::Debug,
    E::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Borrowed(e) => f.debug_tuple("Borrowed").field(e).finish(),
            Block::Materialized(v) => f.debug_tuple("Materialized").field(&v.as_slice()).finish(),
        }
    }
}

/// Force `expr` into a form that can be traversed elementwise.
///
/// Elementwise operands are borrowed unchanged. Blockwise operands are
/// assigned (with `alpha = 1`) into a fresh dense temporary.
pub fn eval_block<E: VectorExpression>(expr: &E) -> Result<Block<'_, E>> {
    if <E::Category as EvaluationCategory>::IS_ELEMENTWISE {
        return Ok(Block::Borrowed(expr));
    }

    log::trace!("eval_block: materializing {} elements", expr.size());
    let mut tmp = DenseVector::zeros_on(expr.size(), E::Device::default());
    expr.assign_to(&mut tmp, E::Value::one())?;
    Ok(Block::Materialized(tmp))
}

impl<'a, E: VectorExpression> VectorExpression for Block<'a, E> {
    type Value = E::Value;
    type Device = E::Device;
    type Category = Elementwise;
    type Iter<'b> = BlockIter<E::Iter<'b>, Copied<slice::Iter<'b, E::Value>>> where Self: 'b;

    #[inline]
    fn size(&self) -> usize {
        match self {
            Block::Borrowed(e) => e.size(),
            Block::Materialized(v) => v.len(),
        }
    }

    #[inline]
    fn at(&self, i: usize) -> E::Value {
        match self {
            Block::Borrowed(e) => e.at(i),
            Block::Materialized(v) => v[i],
        }
    }

    fn iter(&self) -> Self::Iter<'_> {
        match self {
            Block::Borrowed(e) => BlockIter::Borrowed(E::iter(e)),
            Block::Materialized(v) => BlockIter::Materialized(v.as_slice().iter().copied()),
        }
    }

    fn assign_to<S>(&self, sink: &mut S, alpha: E::Value) -> Result<()>
    where
        S: VectorSink<Value = E::Value, Device = E::Device>,
    {
        match self {
            Block::Borrowed(e) => assign_elementwise(sink, *e, alpha),
            Block::Materialized(v) => v.assign_to(sink, alpha),
        }
    }

    fn plus_assign_to<S>(&self, sink: &mut S, alpha: E::Value) -> Result<()>
    where
        S: VectorSink<Value = E::Value, Device = E::Device>,
    {
        match self {
            Block::Borrowed(e) => plus_assign_elementwise(sink, *e, alpha),
            Block::Materialized(v) => v.plus_assign_to(sink, alpha),
        }
    }
}
