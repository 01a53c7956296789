//! Assignment entry points.
//!
//! [`assign`] and [`plus_assign`] are what callers use: they validate sizes
//! and then hand control to the expression's own `assign_to` /
//! `plus_assign_to`, which distributes `alpha` through the tree.
//!
//! The `*_elementwise` helpers are what nodes use once they have composed
//! an expression over materialized operands: they dispatch on the
//! expression's category without revisiting node-level logic.

use crate::category::EvaluationCategory;
use crate::dense::VectorSink;
use crate::{Result, VectorError, VectorExpression};

#[inline]
pub(crate) fn ensure_same_size(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        log::debug!("size mismatch: expected {expected}, found {found}");
        return Err(VectorError::SizeMismatch(expected, found));
    }
    Ok(())
}

/// `sink = alpha * expr`.
///
/// Fails with [`VectorError::SizeMismatch`] before touching the sink if the
/// sizes differ.
///
/// # Example
///
/// ```rust
/// use vexpr_rs::{assign, DenseVector, ScalarVector};
///
/// let mut out = DenseVector::zeros(2);
/// assign(&mut out, &ScalarVector::new(2, 4.0), 0.5).unwrap();
/// assert_eq!(out.as_slice(), &[2.0, 2.0]);
/// ```
pub fn assign<S, E>(sink: &mut S, expr: &E, alpha: E::Value) -> Result<()>
where
    E: VectorExpression,
    S: VectorSink<Value = E::Value, Device = E::Device>,
{
    ensure_same_size(sink.len(), expr.size())?;
    log::trace!(
        "assign: size={} category={} device={}",
        expr.size(),
        <E::Category as EvaluationCategory>::NAME,
        <E::Device as crate::Device>::NAME
    );
    expr.assign_to(sink, alpha)
}

/// `sink += alpha * expr`.
///
/// Fails with [`VectorError::SizeMismatch`] before touching the sink if the
/// sizes differ.
pub fn plus_assign<S, E>(sink: &mut S, expr: &E, alpha: E::Value) -> Result<()>
where
    E: VectorExpression,
    S: VectorSink<Value = E::Value, Device = E::Device>,
{
    ensure_same_size(sink.len(), expr.size())?;
    log::trace!(
        "plus_assign: size={} category={} device={}",
        expr.size(),
        <E::Category as EvaluationCategory>::NAME,
        <E::Device as crate::Device>::NAME
    );
    expr.plus_assign_to(sink, alpha)
}

/// `sink = alpha * expr`, picked by `expr`'s category. Sizes are the
/// caller's responsibility.
#[inline]
pub(crate) fn assign_elementwise<S, E>(sink: &mut S, expr: &E, alpha: E::Value) -> Result<()>
where
    E: VectorExpression,
    S: VectorSink<Value = E::Value, Device = E::Device>,
{
    <E::Category as EvaluationCategory>::assign(sink, expr, alpha)
}

/// `sink += alpha * expr`, picked by `expr`'s category. Sizes are the
/// caller's responsibility.
#[inline]
pub(crate) fn plus_assign_elementwise<S, E>(sink: &mut S, expr: &E, alpha: E::Value) -> Result<()>
where
    E: VectorExpression,
    S: VectorSink<Value = E::Value, Device = E::Device>,
{
    <E::Category as EvaluationCategory>::plus_assign(sink, expr, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DenseVector, ScalarVector};

    #[test]
    fn test_assign_scales() {
        let mut out = DenseVector::from_vec(vec![9.0f64; 3]);
        assign(&mut out, &ScalarVector::new(3, 2.0), 3.0).unwrap();
        assert_eq!(out.as_slice(), &[6.0, 6.0, 6.0]);
    }

    #[test]
    fn test_plus_assign_accumulates() {
        let mut out = DenseVector::from_vec(vec![1.0f64, 2.0]);
        plus_assign(&mut out, &ScalarVector::new(2, 1.0), -2.0).unwrap();
        assert_eq!(out.as_slice(), &[-1.0, 0.0]);
    }

    #[test]
    fn test_size_mismatch_leaves_sink_untouched() {
        let mut out = DenseVector::from_vec(vec![5.0f64; 2]);
        let err = assign(&mut out, &ScalarVector::new(3, 1.0), 1.0).unwrap_err();
        assert_eq!(err, VectorError::SizeMismatch(2, 3));
        let err = plus_assign(&mut out, &ScalarVector::new(1, 1.0), 1.0).unwrap_err();
        assert_eq!(err, VectorError::SizeMismatch(2, 1));
        assert_eq!(out.as_slice(), &[5.0, 5.0]);
    }

    #[test]
    fn test_empty_assign() {
        let mut out = DenseVector::<f64>::zeros(0);
        assign(&mut out, &ScalarVector::<f64>::default(), 2.0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_elementwise_dispatch_sweeps() {
        let v = DenseVector::from_vec(vec![1.0f64, 2.0]);
        let mut out = DenseVector::from_vec(vec![1.0f64, 1.0]);
        assign_elementwise(&mut out, &v, 2.0).unwrap();
        assert_eq!(out.as_slice(), &[2.0, 4.0]);
        plus_assign_elementwise(&mut out, &v, 1.0).unwrap();
        assert_eq!(out.as_slice(), &[3.0, 6.0]);
    }
}
