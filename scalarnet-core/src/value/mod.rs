// src/value/mod.rs
//! The [`Value`] handle: a scalar node of the computation graph.

use crate::ops::traits::Scalar;
use crate::value_data::{NodeRef, ValueNode};
use std::cell::RefCell;
use std::rc::Rc;

// Declare submodules
pub mod accessors;
pub mod autograd_methods;
pub mod debug;
pub mod op_methods;
pub mod traits;

/// A scalar participating in reverse-mode differentiation.
///
/// `Value` is a cheap, clonable handle to shared node storage: cloning it
/// (or passing it to several operations) shares the node, so gradients
/// from every use accumulate in one place. Two handles are the same node
/// iff [`Value::ptr_eq`] holds.
///
/// Values created with [`Value::new`] are tracked leaves (trainable
/// parameters, inputs of interest). [`Value::constant`] creates an
/// untracked leaf; operations whose operands are all untracked produce
/// untracked results that record neither parents nor a backward rule.
pub struct Value<T: Scalar = f64> {
    pub(crate) node: NodeRef<T>,
}

impl<T: Scalar> Value<T> {
    /// Creates a tracked leaf with a zero gradient.
    pub fn new(data: T) -> Self {
        Value::with_track_grad(data, true)
    }

    /// Creates an untracked leaf. Backward never accumulates into it.
    pub fn constant(data: T) -> Self {
        Value::with_track_grad(data, false)
    }

    /// Creates a leaf with explicit tracking, e.g. to freeze an input that
    /// is sometimes trained.
    pub fn with_track_grad(data: T, track_grad: bool) -> Self {
        Value::from_node(ValueNode::leaf(data, track_grad))
    }

    pub(crate) fn from_node(node: ValueNode<T>) -> Self {
        Value {
            node: Rc::new(RefCell::new(node)),
        }
    }

    pub(crate) fn from_node_ref(node: NodeRef<T>) -> Self {
        Value { node }
    }
}

impl<T: Scalar> Clone for Value<T> {
    /// Clones the handle, not the node.
    fn clone(&self) -> Self {
        Value {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T: Scalar> From<T> for Value<T> {
    /// Scalars lifted into the graph are constants.
    fn from(data: T) -> Self {
        Value::constant(data)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
