//! Dense storage: the concrete leaves and sinks of expression trees.
//!
//! - [`DenseVector`]: owned contiguous vector
//! - [`DenseView`]: borrowed read-only view, the reference closure nodes
//!   capture when handed `&DenseVector` or `&[T]`
//! - [`DenseViewMut`]: borrowed mutable view usable as a sink
//!
//! All three are elementwise expressions (the views and the owned vector)
//! or sinks (the owned vector and the mutable view).

use std::iter::Copied;
use std::ops::{Index, IndexMut};
use std::slice;

use num_traits::Zero;
use vexpr_traits::ScalarBase;

use crate::assign::assign;
use crate::category::Elementwise;
use crate::closure::IntoClosure;
use crate::device::{Cpu, Device};
use crate::{kernel, Result, VectorExpression};

// ============================================================================
// VectorSink
// ============================================================================

/// Mutable destination of an assignment.
///
/// Sinks are the only objects the expression layer ever writes to. The
/// caller creates and owns them; expressions never allocate sink storage.
pub trait VectorSink {
    type Value: ScalarBase;
    type Device: Device;

    type IterMut<'a>: Iterator<Item = &'a mut Self::Value>
    where
        Self: 'a;

    /// Number of writable elements.
    fn len(&self) -> usize;

    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    /// Set every element to zero.
    fn clear(&mut self) {
        for x in self.iter_mut() {
            *x = Self::Value::zero();
        }
    }
}

// ============================================================================
// DenseVector
// ============================================================================

/// Owned dense vector.
///
/// As an operand it is captured by value when moved into a node and viewed
/// (see [`DenseView`]) when passed by reference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseVector<T, D = Cpu> {
    data: Vec<T>,
    #[cfg_attr(feature = "serde", serde(skip))]
    device: D,
}

impl<T: ScalarBase> DenseVector<T, Cpu> {
    /// Vector of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self::zeros_on(len, Cpu)
    }

    pub fn from_elem(len: usize, value: T) -> Self {
        Self::from_vec_on(vec![value; len], Cpu)
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_vec_on(data, Cpu)
    }

    /// Vector whose element `i` is `f(i)`.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Self::from_vec_on((0..len).map(f).collect(), Cpu)
    }
}

impl<T: ScalarBase, D: Device> DenseVector<T, D> {
    pub fn zeros_on(len: usize, device: D) -> Self {
        Self {
            data: vec![T::zero(); len],
            device,
        }
    }

    pub fn from_vec_on(data: Vec<T>, device: D) -> Self {
        Self { data, device }
    }

    /// Materialize an expression into a new vector.
    pub fn from_expression<E>(expr: &E) -> Result<Self>
    where
        E: VectorExpression<Value = T, Device = D>,
    {
        let mut out = Self::zeros_on(expr.size(), D::default());
        assign(&mut out, expr, T::one())?;
        Ok(out)
    }
}

impl<T, D: Device> DenseVector<T, D> {
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn device(&self) -> D {
        self.device
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Borrowed read-only view.
    pub fn view(&self) -> DenseView<'_, T, D> {
        DenseView {
            data: &self.data,
            device: self.device,
        }
    }

    /// Borrowed mutable view.
    pub fn view_mut(&mut self) -> DenseViewMut<'_, T, D> {
        DenseViewMut {
            data: &mut self.data,
            device: self.device,
        }
    }
}

impl<T: ScalarBase> From<Vec<T>> for DenseVector<T, Cpu> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T, D> Index<usize> for DenseVector<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, D> IndexMut<usize> for DenseVector<T, D> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: ScalarBase, D: Device> VectorExpression for DenseVector<T, D> {
    type Value = T;
    type Device = D;
    type Category = Elementwise;
    type Iter<'a> = Copied<slice::Iter<'a, T>> where Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        self.data[i]
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.data.iter().copied()
    }

    fn assign_to<S>(&self, sink: &mut S, alpha: T) -> Result<()>
    where
        S: VectorSink<Value = T, Device = D>,
    {
        self.view().assign_to(sink, alpha)
    }

    fn plus_assign_to<S>(&self, sink: &mut S, alpha: T) -> Result<()>
    where
        S: VectorSink<Value = T, Device = D>,
    {
        self.view().plus_assign_to(sink, alpha)
    }
}

impl<T: ScalarBase, D: Device> VectorSink for DenseVector<T, D> {
    type Value = T;
    type Device = D;
    type IterMut<'a> = slice::IterMut<'a, T> where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.data.iter_mut()
    }
}

impl<T: ScalarBase, D: Device> IntoClosure for DenseVector<T, D> {
    type Closure = Self;

    #[inline]
    fn into_closure(self) -> Self {
        self
    }
}

impl<'a, T: ScalarBase, D: Device> IntoClosure for &'a DenseVector<T, D> {
    type Closure = DenseView<'a, T, D>;

    #[inline]
    fn into_closure(self) -> DenseView<'a, T, D> {
        self.view()
    }
}

// ============================================================================
// DenseView
// ============================================================================

/// Borrowed read-only dense view.
///
/// This is the reference closure: it holds no data of its own, and its
/// lifetime ties every node that captures it to the viewed storage.
#[derive(Debug, Clone, Copy)]
pub struct DenseView<'a, T, D = Cpu> {
    data: &'a [T],
    device: D,
}

impl<'a, T> DenseView<'a, T, Cpu> {
    pub fn new(data: &'a [T]) -> Self {
        Self::new_on(data, Cpu)
    }
}

impl<'a, T, D: Device> DenseView<'a, T, D> {
    pub fn new_on(data: &'a [T], device: D) -> Self {
        Self { data, device }
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    #[inline]
    pub fn device(&self) -> D {
        self.device
    }
}

impl<'a, T: ScalarBase, D: Device> VectorExpression for DenseView<'a, T, D> {
    type Value = T;
    type Device = D;
    type Category = Elementwise;
    type Iter<'b> = Copied<slice::Iter<'b, T>> where Self: 'b;

    #[inline]
    fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        self.data[i]
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.data.iter().copied()
    }

    fn assign_to<S>(&self, sink: &mut S, alpha: T) -> Result<()>
    where
        S: VectorSink<Value = T, Device = D>,
    {
        kernel::assign_scaled(sink, self.iter(), alpha);
        Ok(())
    }

    fn plus_assign_to<S>(&self, sink: &mut S, alpha: T) -> Result<()>
    where
        S: VectorSink<Value = T, Device = D>,
    {
        kernel::plus_assign_scaled(sink, self.iter(), alpha);
        Ok(())
    }
}

impl<'a, T: ScalarBase, D: Device> IntoClosure for DenseView<'a, T, D> {
    type Closure = Self;

    #[inline]
    fn into_closure(self) -> Self {
        self
    }
}

impl<'a, T: ScalarBase> IntoClosure for &'a [T] {
    type Closure = DenseView<'a, T, Cpu>;

    #[inline]
    fn into_closure(self) -> DenseView<'a, T, Cpu> {
        DenseView::new(self)
    }
}

// ============================================================================
// DenseViewMut
// ============================================================================

/// Borrowed mutable dense view, usable as a sink.
#[derive(Debug)]
pub struct DenseViewMut<'a, T, D = Cpu> {
    data: &'a mut [T],
    device: D,
}

impl<'a, T> DenseViewMut<'a, T, Cpu> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self::new_on(data, Cpu)
    }
}

impl<'a, T, D: Device> DenseViewMut<'a, T, D> {
    pub fn new_on(data: &'a mut [T], device: D) -> Self {
        Self { data, device }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data
    }

    #[inline]
    pub fn device(&self) -> D {
        self.device
    }
}

impl<'a, T: ScalarBase, D: Device> VectorSink for DenseViewMut<'a, T, D> {
    type Value = T;
    type Device = D;
    type IterMut<'b> = slice::IterMut<'b, T> where Self: 'b;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.data.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{plus_assign, ScalarVector, VectorError};

    #[test]
    fn test_constructors() {
        let z = DenseVector::<f64>::zeros(3);
        assert_eq!(z.as_slice(), &[0.0, 0.0, 0.0]);
        let e = DenseVector::from_elem(2, 7i32);
        assert_eq!(e.as_slice(), &[7, 7]);
        let f = DenseVector::from_fn(4, |i| i as f64 * 0.5);
        assert_eq!(f.as_slice(), &[0.0, 0.5, 1.0, 1.5]);
        let v: DenseVector<f64> = vec![1.0, 2.0].into();
        assert_eq!(v.len(), 2);
        assert!(!v.is_empty());
        assert_eq!(v.into_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_index() {
        let mut v = DenseVector::from_vec(vec![1.0f64, 2.0, 3.0]);
        v[1] = 20.0;
        assert_eq!(v[1], 20.0);
        assert_eq!(v.at(2), 3.0);
    }

    #[test]
    fn test_get_out_of_range() {
        let v = DenseVector::from_vec(vec![1.0f64, 2.0]);
        assert_eq!(v.get(1), Ok(2.0));
        assert_eq!(
            v.get(2),
            Err(VectorError::IndexOutOfRange { index: 2, size: 2 })
        );
        assert_eq!(
            v.view().get(5),
            Err(VectorError::IndexOutOfRange { index: 5, size: 2 })
        );
    }

    #[test]
    fn test_view_iterates_repeatedly() {
        let v = DenseVector::from_vec(vec![1.0f64, 2.0, 3.0]);
        let view = v.view();
        let first: Vec<f64> = view.iter().collect();
        let second: Vec<f64> = view.iter().collect();
        assert_eq!(first, second);
        assert_eq!(view.iter().rev().collect::<Vec<_>>(), vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_sink_clear() {
        let mut v = DenseVector::from_vec(vec![1.0f64, 2.0]);
        v.clear();
        assert_eq!(v.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn test_view_mut_as_sink() {
        let mut data = vec![1.0f64; 4];
        let src = ScalarVector::new(4, 2.0);
        {
            let mut sink = DenseViewMut::new(&mut data);
            plus_assign(&mut sink, &src, 0.5).unwrap();
            assert_eq!(sink.as_slice(), &[2.0, 2.0, 2.0, 2.0]);
        }
        assert_eq!(data, vec![2.0; 4]);
    }

    #[test]
    fn test_from_expression() {
        let v = DenseVector::from_vec(vec![1.0f64, 2.0, 3.0]);
        let doubled = DenseVector::from_expression(&v.view().scaled(2.0)).unwrap();
        assert_eq!(doubled.as_slice(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_from_expression_integer() {
        let filled = DenseVector::from_expression(&ScalarVector::new(3, 4u32)).unwrap();
        assert_eq!(filled.as_slice(), &[4, 4, 4]);
        assert_eq!(DenseVector::<u32>::zeros(2).as_slice(), &[0, 0]);
    }

    #[test]
    fn test_owned_vector_as_expression() {
        let v = DenseVector::from_vec(vec![1.0f64, -1.0]);
        let mut out = DenseVector::zeros(2);
        assign(&mut out, &v, 3.0).unwrap();
        assert_eq!(out.as_slice(), &[3.0, -3.0]);
        assert_eq!(v.sum(), 0.0);
    }
}
