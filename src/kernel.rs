//! Elementwise sweeps into a sink.
//!
//! These are the only routines that write into sink storage. Each one walks
//! the sink's mutable iterator in lockstep with a value sequence. Callers
//! have already checked that both sides have the same length.

use num_traits::One;

use crate::dense::VectorSink;

/// `dst[i] = alpha * values[i]`
#[inline]
pub(crate) fn assign_scaled<S, I>(sink: &mut S, values: I, alpha: S::Value)
where
    S: VectorSink,
    I: Iterator<Item = S::Value>,
{
    if alpha.is_one() {
        for (dst, x) in sink.iter_mut().zip(values) {
            *dst = x;
        }
    } else {
        for (dst, x) in sink.iter_mut().zip(values) {
            *dst = alpha * x;
        }
    }
}

/// `dst[i] = dst[i] + alpha * values[i]`
#[inline]
pub(crate) fn plus_assign_scaled<S, I>(sink: &mut S, values: I, alpha: S::Value)
where
    S: VectorSink,
    I: Iterator<Item = S::Value>,
{
    if alpha.is_one() {
        for (dst, x) in sink.iter_mut().zip(values) {
            *dst = *dst + x;
        }
    } else {
        for (dst, x) in sink.iter_mut().zip(values) {
            *dst = *dst + alpha * x;
        }
    }
}

/// `dst[i] = value`
#[inline]
pub(crate) fn fill<S: VectorSink>(sink: &mut S, value: S::Value) {
    for dst in sink.iter_mut() {
        *dst = value;
    }
}

/// `dst[i] = dst[i] + value`
#[inline]
pub(crate) fn plus_fill<S: VectorSink>(sink: &mut S, value: S::Value) {
    for dst in sink.iter_mut() {
        *dst = *dst + value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DenseVector;

    #[test]
    fn test_assign_scaled() {
        let mut out = DenseVector::from_vec(vec![9.0f64; 3]);
        assign_scaled(&mut out, [1.0, 2.0, 3.0].into_iter(), 2.0);
        assert_eq!(out.as_slice(), &[2.0, 4.0, 6.0]);
        assign_scaled(&mut out, [1.0, 2.0, 3.0].into_iter(), 1.0);
        assert_eq!(out.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_plus_assign_scaled() {
        let mut out = DenseVector::from_vec(vec![1.0f64; 3]);
        plus_assign_scaled(&mut out, [1.0, 2.0, 3.0].into_iter(), -1.0);
        assert_eq!(out.as_slice(), &[0.0, -1.0, -2.0]);
        plus_assign_scaled(&mut out, [5.0, 5.0, 5.0].into_iter(), 1.0);
        assert_eq!(out.as_slice(), &[5.0, 4.0, 3.0]);
    }

    #[test]
    fn test_fill() {
        let mut out = DenseVector::<i32>::zeros(4);
        fill(&mut out, 3);
        plus_fill(&mut out, 2);
        assert_eq!(out.as_slice(), &[5, 5, 5, 5]);
    }
}
