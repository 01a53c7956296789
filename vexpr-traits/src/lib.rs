//! Shared traits for the vexpr-rs ecosystem.
//!
//! This crate provides the scalar bound and the elementwise functor
//! vocabulary used by `vexpr-rs` expression nodes. External crates can
//! depend on `vexpr-traits` to implement functors for their own scalar
//! types without orphan rule violations.

pub mod functor;
pub mod scalar;

pub use functor::{
    Abs, Add, AddScalar, BinaryFunctor, Conj, Divide, ElementOpApply, Exp, Identity, Less, Log,
    Max, Min, Multiply, MultiplyScalar, Negate, Sigmoid, Sqrt, Square, Subtract, Tanh,
    UnaryFunctor,
};
pub use scalar::ScalarBase;
