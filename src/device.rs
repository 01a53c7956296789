//! Device abstraction for expression iteration.
//!
//! A [`Device`] maps a logical compute domain to the concrete iterator and
//! functor types expression nodes are assembled from. Nodes never name an
//! iterator type directly; they ask their operand's device for one, so a
//! new backend only has to implement this trait.
//!
//! Resolution is purely type-level: there is no registry to initialize and
//! no runtime lookup. An operand pair whose devices disagree fails to
//! type-check at the point the node is built.

use std::fmt::Debug;

use vexpr_traits::{BinaryFunctor, ScalarBase, UnaryFunctor};

use crate::iter::{BinaryTransformIter, ConstantIter, TransformIter};

/// Lazy element sequence produced by an expression.
///
/// Restartable (`Clone`), sized up front, and addressable from both ends.
pub trait ExprIter<T>: Iterator<Item = T> + DoubleEndedIterator + ExactSizeIterator + Clone {}

impl<T, I> ExprIter<T> for I where
    I: Iterator<Item = T> + DoubleEndedIterator + ExactSizeIterator + Clone
{
}

/// Capability set a compute device supplies to expression nodes.
///
/// Operands and sinks carry their device as a type parameter. A tree built
/// entirely on one device assigns into a sink on that device:
///
/// ```
/// # use vexpr_rs::functor::{Add, MultiplyScalar};
/// # use vexpr_rs::iter::{BinaryTransformIter, ConstantIter, TransformIter};
/// # use vexpr_rs::{BinaryFunctor, Device, ExprIter, ScalarBase, UnaryFunctor};
/// # #[derive(Debug, Clone, Copy, Default)]
/// # struct Remote;
/// # impl Device for Remote {
/// #     const NAME: &'static str = "remote";
/// #     type ConstantIter<T: ScalarBase> = ConstantIter<T>;
/// #     type TransformIter<T: ScalarBase, I: ExprIter<T>, F: UnaryFunctor<T>> = TransformIter<I, F>;
/// #     type BinaryTransformIter<T: ScalarBase, L: ExprIter<T>, R: ExprIter<T>, F: BinaryFunctor<T>> =
/// #         BinaryTransformIter<L, R, F>;
/// #     type MultiplyScalar<T: ScalarBase> = MultiplyScalar<T>;
/// #     type Add<T: ScalarBase> = Add;
/// #     fn constant<T: ScalarBase>(value: T, len: usize) -> ConstantIter<T> {
/// #         ConstantIter::new(value, len)
/// #     }
/// #     fn transform<T: ScalarBase, I: ExprIter<T>, F: UnaryFunctor<T>>(inner: I, f: F) -> TransformIter<I, F> {
/// #         TransformIter::new(inner, f)
/// #     }
/// #     fn binary_transform<T: ScalarBase, L: ExprIter<T>, R: ExprIter<T>, F: BinaryFunctor<T>>(
/// #         f: F,
/// #         lhs: L,
/// #         rhs: R,
/// #     ) -> BinaryTransformIter<L, R, F> {
/// #         BinaryTransformIter::new(f, lhs, rhs)
/// #     }
/// #     fn multiply_scalar<T: ScalarBase>(scalar: T) -> MultiplyScalar<T> {
/// #         MultiplyScalar(scalar)
/// #     }
/// #     fn add<T: ScalarBase>() -> Add {
/// #         Add
/// #     }
/// # }
/// use vexpr_rs::{assign, DenseVector, ScalarVector, VectorAddition};
///
/// let a = DenseVector::from_vec_on(vec![1.0, 2.0], Remote);
/// let sum = VectorAddition::new(&a, ScalarVector::new_on(2, 0.5, Remote)).unwrap();
/// let mut out = DenseVector::zeros_on(2, Remote);
/// assign(&mut out, &sum, 2.0).unwrap();
/// assert_eq!(out.as_slice(), &[3.0, 5.0]);
/// ```
///
/// Mixing devices in one node does not compile:
///
/// ```compile_fail
/// # use vexpr_rs::functor::{Add, MultiplyScalar};
/// # use vexpr_rs::iter::{BinaryTransformIter, ConstantIter, TransformIter};
/// # use vexpr_rs::{BinaryFunctor, Device, ExprIter, ScalarBase, UnaryFunctor};
/// # #[derive(Debug, Clone, Copy, Default)]
/// # struct Remote;
/// # impl Device for Remote {
/// #     const NAME: &'static str = "remote";
/// #     type ConstantIter<T: ScalarBase> = ConstantIter<T>;
/// #     type TransformIter<T: ScalarBase, I: ExprIter<T>, F: UnaryFunctor<T>> = TransformIter<I, F>;
/// #     type BinaryTransformIter<T: ScalarBase, L: ExprIter<T>, R: ExprIter<T>, F: BinaryFunctor<T>> =
/// #         BinaryTransformIter<L, R, F>;
/// #     type MultiplyScalar<T: ScalarBase> = MultiplyScalar<T>;
/// #     type Add<T: ScalarBase> = Add;
/// #     fn constant<T: ScalarBase>(value: T, len: usize) -> ConstantIter<T> {
/// #         ConstantIter::new(value, len)
/// #     }
/// #     fn transform<T: ScalarBase, I: ExprIter<T>, F: UnaryFunctor<T>>(inner: I, f: F) -> TransformIter<I, F> {
/// #         TransformIter::new(inner, f)
/// #     }
/// #     fn binary_transform<T: ScalarBase, L: ExprIter<T>, R: ExprIter<T>, F: BinaryFunctor<T>>(
/// #         f: F,
/// #         lhs: L,
/// #         rhs: R,
/// #     ) -> BinaryTransformIter<L, R, F> {
/// #         BinaryTransformIter::new(f, lhs, rhs)
/// #     }
/// #     fn multiply_scalar<T: ScalarBase>(scalar: T) -> MultiplyScalar<T> {
/// #         MultiplyScalar(scalar)
/// #     }
/// #     fn add<T: ScalarBase>() -> Add {
/// #         Add
/// #     }
/// # }
/// use vexpr_rs::{DenseVector, ScalarVector, VectorAddition};
///
/// let host = DenseVector::from_vec(vec![1.0, 2.0]);
/// let remote = ScalarVector::new_on(2, 0.5, Remote);
/// let _ = VectorAddition::new(&host, remote);
/// ```
pub trait Device: Copy + Default + Debug + Send + Sync + 'static {
    /// Short human-readable device name.
    const NAME: &'static str;

    /// Yields one value `len` times.
    type ConstantIter<T: ScalarBase>: ExprIter<T>;

    /// Yields `f(x)` for every `x` of an inner sequence.
    type TransformIter<T: ScalarBase, I: ExprIter<T>, F: UnaryFunctor<T>>: ExprIter<T>;

    /// Yields `f(l, r)` over two sequences of equal length.
    type BinaryTransformIter<
        T: ScalarBase,
        L: ExprIter<T>,
        R: ExprIter<T>,
        F: BinaryFunctor<T>,
    >: ExprIter<T>;

    /// Functor used by scalar-multiply nodes.
    type MultiplyScalar<T: ScalarBase>: UnaryFunctor<T>;

    /// Functor used by addition nodes.
    type Add<T: ScalarBase>: BinaryFunctor<T>;

    fn constant<T: ScalarBase>(value: T, len: usize) -> Self::ConstantIter<T>;

    fn transform<T: ScalarBase, I: ExprIter<T>, F: UnaryFunctor<T>>(
        inner: I,
        f: F,
    ) -> Self::TransformIter<T, I, F>;

    fn binary_transform<T: ScalarBase, L: ExprIter<T>, R: ExprIter<T>, F: BinaryFunctor<T>>(
        f: F,
        lhs: L,
        rhs: R,
    ) -> Self::BinaryTransformIter<T, L, R, F>;

    fn multiply_scalar<T: ScalarBase>(scalar: T) -> Self::MultiplyScalar<T>;

    fn add<T: ScalarBase>() -> Self::Add<T>;
}

/// Host CPU, single-threaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cpu;

impl Device for Cpu {
    const NAME: &'static str = "cpu";

    type ConstantIter<T: ScalarBase> = ConstantIter<T>;
    type TransformIter<T: ScalarBase, I: ExprIter<T>, F: UnaryFunctor<T>> = TransformIter<I, F>;
    type BinaryTransformIter<
        T: ScalarBase,
        L: ExprIter<T>,
        R: ExprIter<T>,
        F: BinaryFunctor<T>,
    > = BinaryTransformIter<L, R, F>;
    type MultiplyScalar<T: ScalarBase> = vexpr_traits::MultiplyScalar<T>;
    type Add<T: ScalarBase> = vexpr_traits::Add;

    #[inline]
    fn constant<T: ScalarBase>(value: T, len: usize) -> ConstantIter<T> {
        ConstantIter::new(value, len)
    }

    #[inline]
    fn transform<T: ScalarBase, I: ExprIter<T>, F: UnaryFunctor<T>>(
        inner: I,
        f: F,
    ) -> TransformIter<I, F> {
        TransformIter::new(inner, f)
    }

    #[inline]
    fn binary_transform<T: ScalarBase, L: ExprIter<T>, R: ExprIter<T>, F: BinaryFunctor<T>>(
        f: F,
        lhs: L,
        rhs: R,
    ) -> BinaryTransformIter<L, R, F> {
        BinaryTransformIter::new(f, lhs, rhs)
    }

    #[inline]
    fn multiply_scalar<T: ScalarBase>(scalar: T) -> vexpr_traits::MultiplyScalar<T> {
        vexpr_traits::MultiplyScalar(scalar)
    }

    #[inline]
    fn add<T: ScalarBase>() -> vexpr_traits::Add {
        vexpr_traits::Add
    }
}
