//! Reverse-mode differentiation over the scalar graph.
//!
//! Nodes record a [`BackwardOp`] when they are produced by an operation on at
//! least one tracked operand. [`graph::topological_order`] orders the
//! reachable nodes so that every consumer runs before its producers, and
//! `Value::backward` walks that order once, letting each rule add its
//! contributions into the gradients of its operands.

pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod options;

pub use backward_op::BackwardOp;
pub use options::BackwardOptions;

use crate::error::ScalarNetError;
use crate::ops::traits::Scalar;
use crate::value_data::ValueNode;
use std::cell::RefCell;
use std::rc::Weak;

/// Non-owning link from a backward rule to one of its operands.
pub(crate) type WeakNodeRef<T> = Weak<RefCell<ValueNode<T>>>;

/// Reads the cached forward value of an operand.
pub(crate) fn operand_data<T: Scalar>(
    operand: &WeakNodeRef<T>,
    op_name: &str,
) -> Result<T, ScalarNetError> {
    let node = operand.upgrade().ok_or_else(|| {
        ScalarNetError::BackwardError(format!("{}: operand was dropped before backward", op_name))
    })?;
    let data = node.borrow().data;
    Ok(data)
}

/// Adds `delta` to the gradient of an operand, unless the operand is an
/// untracked constant.
pub(crate) fn accumulate_grad<T: Scalar>(
    operand: &WeakNodeRef<T>,
    delta: T,
    op_name: &str,
) -> Result<(), ScalarNetError> {
    let node = operand.upgrade().ok_or_else(|| {
        ScalarNetError::BackwardError(format!("{}: operand was dropped before backward", op_name))
    })?;
    let mut guard = node.borrow_mut();
    if guard.track_grad {
        guard.grad += delta;
    }
    Ok(())
}
