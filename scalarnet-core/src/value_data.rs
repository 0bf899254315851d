use crate::autograd::BackwardOp;
use crate::ops::traits::Scalar;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared, mutable storage of one graph node.
pub(crate) type NodeRef<T> = Rc<RefCell<ValueNode<T>>>;

/// Identifies the operation that produced a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// A leaf created by the user (parameters, constants, inputs).
    Leaf,
    Add,
    Subtract,
    Multiply,
    Power,
    Exp,
    Ln,
    Clamp,
    Relu,
    Tanh,
}

/// A single scalar node of the computation graph.
///
/// `parents` are owning links (a node keeps its ancestors alive), while the
/// backward rule only holds weak references to the same nodes, so dropping
/// the last handle on a root reclaims the whole intermediate graph.
pub struct ValueNode<T: Scalar> {
    pub(crate) data: T,
    pub(crate) grad: T,
    pub(crate) track_grad: bool,
    pub(crate) operation: Operation,
    /// Deduplicated by pointer: an operand used twice appears once.
    pub(crate) parents: Vec<NodeRef<T>>,
    /// `None` for leaves, whose backward step is a no-op.
    pub(crate) backward_op: Option<Box<dyn BackwardOp<T>>>,
}

impl<T: Scalar> ValueNode<T> {
    pub(crate) fn leaf(data: T, track_grad: bool) -> Self {
        ValueNode {
            data,
            grad: T::zero(),
            track_grad,
            operation: Operation::Leaf,
            parents: Vec::new(),
            backward_op: None,
        }
    }

    pub(crate) fn from_op(
        data: T,
        operation: Operation,
        operands: &[NodeRef<T>],
        backward_op: Box<dyn BackwardOp<T>>,
    ) -> Self {
        let mut parents: Vec<NodeRef<T>> = Vec::with_capacity(operands.len());
        for operand in operands {
            if !parents.iter().any(|p| Rc::ptr_eq(p, operand)) {
                parents.push(Rc::clone(operand));
            }
        }
        ValueNode {
            data,
            grad: T::zero(),
            track_grad: true,
            operation,
            parents,
            backward_op: Some(backward_op),
        }
    }
}

impl<T: Scalar> Drop for ValueNode<T> {
    /// Unlinks exclusively owned ancestors one by one, so dropping the root of
    /// a very deep graph does not recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.parents);
        while let Some(parent) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(parent) {
                let mut node = cell.into_inner();
                pending.append(&mut node.parents);
            }
        }
    }
}

impl<T: Scalar> fmt::Debug for ValueNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueNode")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("track_grad", &self.track_grad)
            .field("operation", &self.operation)
            .field("parents", &self.parents.len())
            .finish()
    }
}
