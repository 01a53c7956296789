//! Evaluation categories.
//!
//! Every expression is tagged with how it can be evaluated:
//!
//! - [`Elementwise`]: element `i` can be produced on its own, so the
//!   expression may be traversed directly (and repeatedly) by a sweep.
//! - [`Blockwise`]: the expression only knows how to write itself into a
//!   sink as a whole (e.g. a product that needs every input element for
//!   each output). Such operands are materialized once by
//!   [`eval_block`](crate::eval_block) before an elementwise combinator
//!   reads them.
//!
//! Combining two operands yields a blockwise result if either side is
//! blockwise:
//! ```text
//!   restrict   | Elementwise | Blockwise
//! -------------|-------------|----------
//!  Elementwise | Elementwise | Blockwise
//!  Blockwise   | Blockwise   | Blockwise
//! ```
//!
//! The category also picks how an expression is written into a sink: an
//! elementwise one is swept directly through its iterator, a blockwise one
//! is asked to write itself.

use std::fmt::Debug;

use crate::dense::VectorSink;
use crate::{kernel, Result, VectorExpression};

/// Structural tag selecting an assignment strategy.
pub trait EvaluationCategory: Copy + Default + Debug + Send + Sync + 'static {
    /// Whether direct elementwise traversal is valid.
    const IS_ELEMENTWISE: bool;

    const NAME: &'static str;

    /// Category of a node combining `Self` with `Other`.
    type Restrict<Other: EvaluationCategory>: EvaluationCategory;

    /// `sink = alpha * expr` using this category's strategy.
    fn assign<S, E>(sink: &mut S, expr: &E, alpha: E::Value) -> Result<()>
    where
        E: VectorExpression,
        S: VectorSink<Value = E::Value, Device = E::Device>;

    /// `sink += alpha * expr` using this category's strategy.
    fn plus_assign<S, E>(sink: &mut S, expr: &E, alpha: E::Value) -> Result<()>
    where
        E: VectorExpression,
        S: VectorSink<Value = E::Value, Device = E::Device>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Elementwise;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Blockwise;

impl EvaluationCategory for Elementwise {
    const IS_ELEMENTWISE: bool = true;
    const NAME: &'static str = "elementwise";
    type Restrict<Other: EvaluationCategory> = Other;

    #[inline]
    fn assign<S, E>(sink: &mut S, expr: &E, alpha: E::Value) -> Result<()>
    where
        E: VectorExpression,
        S: VectorSink<Value = E::Value, Device = E::Device>,
    {
        kernel::assign_scaled(sink, expr.iter(), alpha);
        Ok(())
    }

    #[inline]
    fn plus_assign<S, E>(sink: &mut S, expr: &E, alpha: E::Value) -> Result<()>
    where
        E: VectorExpression,
        S: VectorSink<Value = E::Value, Device = E::Device>,
    {
        kernel::plus_assign_scaled(sink, expr.iter(), alpha);
        Ok(())
    }
}

impl EvaluationCategory for Blockwise {
    const IS_ELEMENTWISE: bool = false;
    const NAME: &'static str = "blockwise";
    type Restrict<Other: EvaluationCategory> = Blockwise;

    fn assign<S, E>(sink: &mut S, expr: &E, alpha: E::Value) -> Result<()>
    where
        E: VectorExpression,
        S: VectorSink<Value = E::Value, Device = E::Device>,
    {
        expr.assign_to(sink, alpha)
    }

    fn plus_assign<S, E>(sink: &mut S, expr: &E, alpha: E::Value) -> Result<()>
    where
        E: VectorExpression,
        S: VectorSink<Value = E::Value, Device = E::Device>,
    {
        expr.plus_assign_to(sink, alpha)
    }
}
