//! Lazy vector expression templates with fused scaled assignment.
//!
//! Expressions are composed as ordinary values (no arithmetic happens while
//! building them) and evaluated only when written into a sink with
//! [`assign`] or [`plus_assign`]. Each node knows how to push itself into a
//! sink scaled by a coefficient `alpha`, which lets scalar factors
//! distribute through the whole tree instead of allocating intermediates.
//!
//! # Core Types
//!
//! - [`VectorExpression`]: the node contract (size, element access, lazy
//!   iteration, `assign_to` / `plus_assign_to`)
//! - [`ScalarVector`]: constant vector without storage
//! - [`VectorScalarMultiply`]: `scalar * e`
//! - [`VectorUnary`]: `f(e)` for an elementwise functor
//! - [`VectorAddition`]: `e1 + e2`, assigned term by term
//! - [`VectorBinary`]: `f(e1, e2)` for an arbitrary binary functor
//! - [`DenseVector`] / [`DenseView`] / [`DenseViewMut`]: concrete storage
//!   used as leaves and as sinks
//!
//! # Evaluation
//!
//! - [`assign`]: `sink = alpha * e`
//! - [`plus_assign`]: `sink += alpha * e`
//! - [`eval_block`]: force an operand into repeatedly traversable form
//!
//! # Example
//!
//! ```rust
//! use vexpr_rs::{assign, DenseVector, ScalarVector, VectorAddition, VectorExpression};
//!
//! let a = DenseVector::from_vec(vec![1.0, 2.0, 3.0]);
//! let ones = ScalarVector::new(3, 1.0);
//!
//! // 0.5 * (2 * a + ones), evaluated in one sweep per leaf
//! let expr = VectorAddition::new(a.view().scaled(2.0), ones).unwrap();
//! let mut out = DenseVector::zeros(3);
//! assign(&mut out, &expr, 0.5).unwrap();
//! assert_eq!(out.as_slice(), &[1.5, 2.5, 3.5]);
//! ```
//!
//! # Devices
//!
//! Every expression carries a [`Device`] tag that supplies the iterator and
//! functor implementations its nodes are built from. Operands and sinks
//! must agree on the device; a mismatch is a type error. [`Cpu`] is the
//! only device shipped here.

mod addition;
mod assign;
mod binary;
pub mod block;
pub mod category;
mod closure;
pub mod dense;
pub mod device;
mod expression;
pub mod iter;
mod kernel;
mod scalar_multiply;
mod scalar_vector;
mod unary;

// ============================================================================
// Expression nodes
// ============================================================================
pub use addition::VectorAddition;
pub use binary::VectorBinary;
pub use scalar_multiply::VectorScalarMultiply;
pub use scalar_vector::ScalarVector;
pub use unary::VectorUnary;

// ============================================================================
// Expression contract and closures
// ============================================================================
pub use closure::IntoClosure;
pub use expression::VectorExpression;

// ============================================================================
// Evaluation
// ============================================================================
pub use assign::{assign, plus_assign};
pub use block::{eval_block, Block};
pub use category::{Blockwise, Elementwise, EvaluationCategory};

// ============================================================================
// Storage and devices
// ============================================================================
pub use dense::{DenseVector, DenseView, DenseViewMut, VectorSink};
pub use device::{Cpu, Device, ExprIter};

pub use vexpr_traits::{functor, BinaryFunctor, ElementOpApply, ScalarBase, UnaryFunctor};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while building or evaluating vector expressions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// Operand or sink sizes disagree.
    #[error("size mismatch: {0} vs {1}")]
    SizeMismatch(usize, usize),

    /// Element access past the end of an expression.
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Result type for vector expression operations.
pub type Result<T> = std::result::Result<T, VectorError>;
