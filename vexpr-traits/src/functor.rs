//! Elementwise functors applied lazily by expression nodes.
//!
//! A functor is a pure operation on one or two scalars. Expression nodes
//! store a functor instance next to their operand closures and apply it on
//! element access, during iteration, or inside an assignment sweep. Because
//! the order in which positions are visited is unspecified, a functor must
//! not depend on call order or keep mutable state.
//!
//! Most builtins are unit structs. [`MultiplyScalar`] and [`AddScalar`]
//! carry a single scalar. Plain closures are functors too:
//!
//! ```
//! use vexpr_traits::{UnaryFunctor, BinaryFunctor};
//!
//! let halve = |x: f64| x * 0.5;
//! assert_eq!(UnaryFunctor::apply(&halve, 3.0), 1.5);
//!
//! let hypot = |a: f64, b: f64| (a * a + b * b).sqrt();
//! assert_eq!(BinaryFunctor::apply(&hypot, 3.0, 4.0), 5.0);
//! ```

use num_complex::Complex;
use num_traits::{Float, Num, One, Signed, Zero};

// ---------------------------------------------------------------------------
// Functor traits
// ---------------------------------------------------------------------------

/// A pure elementwise map `T -> T`.
pub trait UnaryFunctor<T>: Clone {
    fn apply(&self, x: T) -> T;
}

/// A pure elementwise combination `(T, T) -> T`.
pub trait BinaryFunctor<T>: Clone {
    fn apply(&self, lhs: T, rhs: T) -> T;
}

impl<T, F> UnaryFunctor<T> for F
where
    F: Fn(T) -> T + Clone,
{
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        self(x)
    }
}

impl<T, F> BinaryFunctor<T> for F
where
    F: Fn(T, T) -> T + Clone,
{
    #[inline(always)]
    fn apply(&self, lhs: T, rhs: T) -> T {
        self(lhs, rhs)
    }
}

// ---------------------------------------------------------------------------
// ElementOpApply: conjugation support
// ---------------------------------------------------------------------------

/// Types that know how to conjugate themselves.
///
/// The default is the identity, so real-valued and custom types opt in with
/// an empty impl:
/// ```ignore
/// impl ElementOpApply for MyType {}
/// ```
pub trait ElementOpApply: Copy {
    #[inline(always)]
    fn conj(self) -> Self {
        self
    }
}

macro_rules! impl_element_op_apply_real {
    ($($t:ty),*) => {
        $(impl ElementOpApply for $t {})*
    };
}

impl_element_op_apply_real!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<T: Num + Copy + std::ops::Neg<Output = T>> ElementOpApply for Complex<T> {
    #[inline(always)]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}

// ---------------------------------------------------------------------------
// Unary builtins
// ---------------------------------------------------------------------------

/// f(x) = x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

/// f(x) = -x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Negate;

/// f(x) = |x|
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Abs;

/// f(x) = x * x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sqrt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exp;

/// Natural logarithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Log;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tanh;

/// Logistic function 1 / (1 + exp(-x)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sigmoid;

/// Complex conjugate; the identity for real types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conj;

/// f(x) = scalar * x
///
/// This is the functor scalar-multiply nodes iterate with. The scalar is
/// applied on the left so non-commutative scalar types keep their order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MultiplyScalar<T>(pub T);

/// f(x) = x + scalar
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AddScalar<T>(pub T);

impl<T: Copy> UnaryFunctor<T> for Identity {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x
    }
}

impl<T: std::ops::Neg<Output = T>> UnaryFunctor<T> for Negate {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        -x
    }
}

impl<T: Signed> UnaryFunctor<T> for Abs {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x.abs()
    }
}

impl<T: Copy + std::ops::Mul<Output = T>> UnaryFunctor<T> for Square {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x * x
    }
}

impl<T: Float> UnaryFunctor<T> for Sqrt {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x.sqrt()
    }
}

impl<T: Float> UnaryFunctor<T> for Exp {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x.exp()
    }
}

impl<T: Float> UnaryFunctor<T> for Log {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x.ln()
    }
}

impl<T: Float> UnaryFunctor<T> for Tanh {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x.tanh()
    }
}

impl<T: Float> UnaryFunctor<T> for Sigmoid {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        T::one() / (T::one() + (-x).exp())
    }
}

impl<T: ElementOpApply> UnaryFunctor<T> for Conj {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x.conj()
    }
}

impl<T: Copy + std::ops::Mul<Output = T>> UnaryFunctor<T> for MultiplyScalar<T> {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        self.0 * x
    }
}

impl<T: Copy + std::ops::Add<Output = T>> UnaryFunctor<T> for AddScalar<T> {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x + self.0
    }
}

// ---------------------------------------------------------------------------
// Binary builtins
// ---------------------------------------------------------------------------

/// f(a, b) = a + b
///
/// Addition nodes are specialised on this functor: because it distributes
/// over scalar multiplication, `alpha * (a + b)` can be assigned as
/// `alpha * a` followed by `+= alpha * b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Add;

/// f(a, b) = a - b
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Subtract;

/// f(a, b) = a * b (elementwise product)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Multiply;

/// f(a, b) = a / b
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Divide;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

/// f(a, b) = 1 if a < b else 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

impl<T: std::ops::Add<Output = T>> BinaryFunctor<T> for Add {
    #[inline(always)]
    fn apply(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}

impl<T: std::ops::Sub<Output = T>> BinaryFunctor<T> for Subtract {
    #[inline(always)]
    fn apply(&self, lhs: T, rhs: T) -> T {
        lhs - rhs
    }
}

impl<T: std::ops::Mul<Output = T>> BinaryFunctor<T> for Multiply {
    #[inline(always)]
    fn apply(&self, lhs: T, rhs: T) -> T {
        lhs * rhs
    }
}

impl<T: std::ops::Div<Output = T>> BinaryFunctor<T> for Divide {
    #[inline(always)]
    fn apply(&self, lhs: T, rhs: T) -> T {
        lhs / rhs
    }
}

impl<T: PartialOrd> BinaryFunctor<T> for Min {
    #[inline(always)]
    fn apply(&self, lhs: T, rhs: T) -> T {
        if rhs < lhs {
            rhs
        } else {
            lhs
        }
    }
}

impl<T: PartialOrd> BinaryFunctor<T> for Max {
    #[inline(always)]
    fn apply(&self, lhs: T, rhs: T) -> T {
        if rhs > lhs {
            rhs
        } else {
            lhs
        }
    }
}

impl<T: PartialOrd + Zero + One> BinaryFunctor<T> for Less {
    #[inline(always)]
    fn apply(&self, lhs: T, rhs: T) -> T {
        if lhs < rhs {
            T::one()
        } else {
            T::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_identity_custom_type() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        struct MyCustom(f64);

        let x = MyCustom(42.0);
        assert_eq!(UnaryFunctor::apply(&Identity, x), x);
    }

    #[test]
    fn test_conj() {
        let x = Complex64::new(3.0, 4.0);
        assert_eq!(UnaryFunctor::apply(&Conj, x), Complex64::new(3.0, -4.0));
        let twice = UnaryFunctor::apply(&Conj, UnaryFunctor::apply(&Conj, x));
        assert_eq!(twice, x);
        assert_eq!(UnaryFunctor::<f64>::apply(&Conj, 3.0), 3.0);
    }

    #[test]
    fn test_element_op_apply_default() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        struct Real(f64);
        impl ElementOpApply for Real {}

        let x = Real(3.0);
        assert_eq!(x.conj(), x);
        assert_eq!(UnaryFunctor::apply(&Conj, x), x);
    }

    #[test]
    fn test_unary_builtins() {
        assert_eq!(UnaryFunctor::<f64>::apply(&Negate, 3.0), -3.0);
        assert_eq!(UnaryFunctor::<i32>::apply(&Abs, -7), 7);
        assert_eq!(UnaryFunctor::<f64>::apply(&Square, -3.0), 9.0);
        assert_eq!(UnaryFunctor::<f64>::apply(&Sqrt, 16.0), 4.0);
        assert_eq!(UnaryFunctor::<f64>::apply(&Exp, 0.0), 1.0);
        assert_eq!(UnaryFunctor::<f64>::apply(&Log, 1.0), 0.0);
        assert_eq!(UnaryFunctor::<f64>::apply(&Tanh, 0.0), 0.0);
        assert_eq!(UnaryFunctor::<f64>::apply(&Sigmoid, 0.0), 0.5);
        assert_eq!(UnaryFunctor::apply(&MultiplyScalar(2.5), 4.0), 10.0);
        assert_eq!(UnaryFunctor::apply(&AddScalar(1.0), 4.0), 5.0);
    }

    #[test]
    fn test_binary_builtins() {
        assert_eq!(BinaryFunctor::<f64>::apply(&Add, 2.0, 5.0), 7.0);
        assert_eq!(BinaryFunctor::<f64>::apply(&Subtract, 2.0, 5.0), -3.0);
        assert_eq!(BinaryFunctor::<f64>::apply(&Multiply, 2.0, 5.0), 10.0);
        assert_eq!(BinaryFunctor::<f64>::apply(&Divide, 5.0, 2.0), 2.5);
        assert_eq!(BinaryFunctor::<f64>::apply(&Min, 2.0, 5.0), 2.0);
        assert_eq!(BinaryFunctor::<f64>::apply(&Max, 2.0, 5.0), 5.0);
        assert_eq!(BinaryFunctor::<f64>::apply(&Less, 2.0, 5.0), 1.0);
        assert_eq!(BinaryFunctor::<f64>::apply(&Less, 5.0, 2.0), 0.0);
    }

    #[test]
    fn test_closures_are_functors() {
        let offset = 10.0;
        let shift = move |x: f64| x + offset;
        assert_eq!(UnaryFunctor::apply(&shift, 1.0), 11.0);

        let weighted = |a: f64, b: f64| 0.25 * a + 0.75 * b;
        assert_eq!(BinaryFunctor::apply(&weighted, 4.0, 8.0), 7.0);
    }
}
