//! Closure resolution: how a composed node holds its operands.
//!
//! A node never stores what the caller handed it verbatim; it stores the
//! operand's *closure*, chosen per operand type:
//!
//! | argument                          | closure                  | ownership             |
//! |-----------------------------------|--------------------------|-----------------------|
//! | expression node, `ScalarVector`   | the node itself          | moved into the parent |
//! | `&node`                           | a clone of the node      | parent owns the copy  |
//! | `DenseView<'a, T, D>`             | the view                 | borrows caller data   |
//! | `&'a DenseVector<T, D>`, `&'a [T]`| `DenseView<'a, T, D>`    | borrows caller data   |
//! | `DenseVector<T, D>` (by value)    | the vector               | moved into the parent |
//!
//! Reference closures carry the lifetime of the data they view, so the
//! borrow checker enforces that the data outlives every node holding it.

use crate::VectorExpression;

/// Conversion into the form a node captures an operand in.
pub trait IntoClosure {
    type Closure: VectorExpression;

    fn into_closure(self) -> Self::Closure;
}

/// Value closures for node types: by value moves, by reference clones.
macro_rules! impl_node_closure {
    ($name:ident < $($p:ident $(: $bound:path)?),* >) => {
        impl<$($p $(: $bound)?),*> IntoClosure for crate::$name<$($p),*>
        where
            crate::$name<$($p),*>: VectorExpression,
        {
            type Closure = Self;

            #[inline]
            fn into_closure(self) -> Self {
                self
            }
        }

        impl<'a, $($p $(: $bound)?),*> IntoClosure for &'a crate::$name<$($p),*>
        where
            crate::$name<$($p),*>: VectorExpression,
        {
            type Closure = crate::$name<$($p),*>;

            #[inline]
            fn into_closure(self) -> Self::Closure {
                self.clone()
            }
        }
    };
}

impl_node_closure!(ScalarVector<T, D>);
impl_node_closure!(VectorScalarMultiply<E: VectorExpression>);
impl_node_closure!(VectorUnary<E, F>);
impl_node_closure!(VectorAddition<L, R>);
impl_node_closure!(VectorBinary<L, R, F>);
