//! Constant vector without storage.

use vexpr_traits::ScalarBase;

use crate::category::Elementwise;
use crate::dense::VectorSink;
use crate::device::{Cpu, Device};
use crate::{kernel, Result, VectorExpression};

/// A vector of `size` copies of one value.
///
/// Occupies constant space regardless of length. Assigning it writes the
/// value straight into the sink without an iterator.
///
/// # Example
///
/// ```rust
/// use vexpr_rs::{ScalarVector, VectorExpression};
///
/// let s = ScalarVector::new(3, 2.0);
/// assert_eq!(s.size(), 3);
/// assert_eq!(s.to_vec(), vec![2.0, 2.0, 2.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarVector<T, D = Cpu> {
    size: usize,
    value: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    device: D,
}

impl<T: ScalarBase> ScalarVector<T, Cpu> {
    pub fn new(size: usize, value: T) -> Self {
        Self::new_on(size, value, Cpu)
    }
}

impl<T: ScalarBase, D: Device> ScalarVector<T, D> {
    pub fn new_on(size: usize, value: T, device: D) -> Self {
        Self {
            size,
            value,
            device,
        }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    #[inline]
    pub fn device(&self) -> D {
        self.device
    }
}

/// Length zero.
impl<T: ScalarBase, D: Device> Default for ScalarVector<T, D> {
    fn default() -> Self {
        Self::new_on(0, T::zero(), D::default())
    }
}

impl<T: ScalarBase, D: Device> VectorExpression for ScalarVector<T, D> {
    type Value = T;
    type Device = D;
    type Category = Elementwise;
    type Iter<'a> = D::ConstantIter<T> where Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        debug_assert!(i < self.size, "index {i} out of range for size {}", self.size);
        self.value
    }

    fn iter(&self) -> Self::Iter<'_> {
        D::constant(self.value, self.size)
    }

    fn assign_to<S>(&self, sink: &mut S, alpha: T) -> Result<()>
    where
        S: VectorSink<Value = T, Device = D>,
    {
        kernel::fill(sink, alpha * self.value);
        Ok(())
    }

    fn plus_assign_to<S>(&self, sink: &mut S, alpha: T) -> Result<()>
    where
        S: VectorSink<Value = T, Device = D>,
    {
        kernel::plus_fill(sink, alpha * self.value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assign, plus_assign, DenseVector, VectorError};

    #[test]
    fn test_new_and_access() {
        let s = ScalarVector::new(4, 1.25f64);
        assert_eq!(s.size(), 4);
        assert_eq!(s.value(), 1.25);
        for i in 0..4 {
            assert_eq!(s.at(i), 1.25);
        }
        assert_eq!(
            s.get(4),
            Err(VectorError::IndexOutOfRange { index: 4, size: 4 })
        );
    }

    #[test]
    fn test_default_is_empty() {
        let s = ScalarVector::<f64>::default();
        assert_eq!(s.size(), 0);
        assert_eq!(s.iter().count(), 0);

        let s = ScalarVector::<i16>::default();
        assert_eq!(s.value(), 0);
        assert_eq!(s.size(), 0);
    }

    #[test]
    fn test_iter_both_ends() {
        let s = ScalarVector::new(3, 7i64);
        let mut it = s.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back(), Some(7));
        assert_eq!(it.next(), Some(7));
        assert_eq!(it.len(), 1);
    }

    #[test]
    fn test_assign_fills() {
        let mut out = DenseVector::from_vec(vec![1.0f64; 3]);
        assign(&mut out, &ScalarVector::new(3, 2.0), -1.5).unwrap();
        assert_eq!(out.as_slice(), &[-3.0, -3.0, -3.0]);
    }

    #[test]
    fn test_plus_assign_adds() {
        let mut out = DenseVector::from_vec(vec![1i32, 2, 3]);
        plus_assign(&mut out, &ScalarVector::new(3, 2), 3).unwrap();
        assert_eq!(out.as_slice(), &[7, 8, 9]);
    }
}
