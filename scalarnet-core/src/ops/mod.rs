//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation on [`Value`] lives here, grouped by kind.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a function (`add_op`, `exp_op`, ...)
//!   that computes the forward value and, when an operand is tracked, attaches
//!   the backward rule. `Value` methods and operator overloads call these.
//! - **`Backward` Structs:** Each primitive has a struct (`AddBackward`,
//!   `ExpBackward`, ...) implementing [`BackwardOp`]. It holds weak
//!   references to the operands and whatever forward context its derivative
//!   needs.
//! - **Composed operations:** `div`, `neg` and `softmax` are built from the
//!   primitives and record no rule of their own.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp, ln, clamp.
//! - [`activation`]: relu, tanh, softmax.

pub mod traits;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

use crate::autograd::{BackwardOp, WeakNodeRef};
use crate::ops::traits::Scalar;
use crate::value::Value;
use crate::value_data::{Operation, ValueNode};
use std::rc::Rc;

/// Applies a unary operation to a value.
///
/// The result is tracked iff `a` is. An untracked result is a plain leaf
/// constant; otherwise `backward_builder` receives a weak link to `a` and
/// the result records `a` as its parent.
pub(crate) fn apply_unary_op<T, F, B>(
    a: &Value<T>,
    forward: F,
    operation: Operation,
    backward_builder: B,
) -> Value<T>
where
    T: Scalar,
    F: Fn(T) -> T,
    B: FnOnce(WeakNodeRef<T>) -> Box<dyn BackwardOp<T>>,
{
    let (a_data, a_tracked) = {
        let guard = a.node.borrow();
        (guard.data, guard.track_grad)
    };
    let out_data = forward(a_data);

    if !a_tracked {
        return Value::constant(out_data);
    }

    let backward_op = backward_builder(Rc::downgrade(&a.node));
    Value::from_node(ValueNode::from_op(
        out_data,
        operation,
        &[Rc::clone(&a.node)],
        backward_op,
    ))
}

/// Applies a binary operation to two values.
///
/// The result is tracked iff either operand is. Both operands are recorded
/// as parents (once, if they are the same node); the backward rule skips
/// accumulation into whichever of them is untracked.
pub(crate) fn apply_binary_op<T, F, B>(
    a: &Value<T>,
    b: &Value<T>,
    forward: F,
    operation: Operation,
    backward_builder: B,
) -> Value<T>
where
    T: Scalar,
    F: Fn(T, T) -> T,
    B: FnOnce(WeakNodeRef<T>, WeakNodeRef<T>) -> Box<dyn BackwardOp<T>>,
{
    let (a_data, a_tracked) = {
        let guard = a.node.borrow();
        (guard.data, guard.track_grad)
    };
    let (b_data, b_tracked) = {
        let guard = b.node.borrow();
        (guard.data, guard.track_grad)
    };
    let out_data = forward(a_data, b_data);

    if !(a_tracked || b_tracked) {
        return Value::constant(out_data);
    }

    let backward_op = backward_builder(Rc::downgrade(&a.node), Rc::downgrade(&b.node));
    Value::from_node(ValueNode::from_op(
        out_data,
        operation,
        &[Rc::clone(&a.node), Rc::clone(&b.node)],
        backward_op,
    ))
}
