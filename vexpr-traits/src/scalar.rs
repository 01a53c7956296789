//! Element type bound.
//!
//! Expression nodes only ever scale, accumulate and fill, so the bound is
//! the semiring vocabulary those three writes need and nothing more. No
//! ordering, division or float operations are assumed; those belong to the
//! functors that need them.

use std::ops::{Add, Mul};

use num_traits::{One, Zero};

/// Element type of vectors, sinks and scalars.
///
/// `zero` is what a cleared sink holds and the identity of accumulation.
/// `one` is the neutral `alpha`. Equality lets kernels recognise `alpha ==
/// one` and skip the multiply.
pub trait ScalarBase:
    Copy + Send + Sync + Add<Output = Self> + Mul<Output = Self> + Zero + One + PartialEq
{
}

impl<T> ScalarBase for T where
    T: Copy + Send + Sync + Add<Output = T> + Mul<Output = T> + Zero + One + PartialEq
{
}
