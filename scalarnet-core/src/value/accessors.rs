use super::Value;
use crate::ops::traits::Scalar;
use crate::value_data::Operation;
use std::rc::Rc;

impl<T: Scalar> Value<T> {
    /// The forward value.
    pub fn data(&self) -> T {
        self.node.borrow().data
    }

    /// The gradient accumulated by backward passes since the last reset.
    pub fn grad(&self) -> T {
        self.node.borrow().grad
    }

    /// Overwrites the forward value. Nodes computed from this one are not
    /// recomputed.
    pub fn set_data(&self, data: T) {
        self.node.borrow_mut().data = data;
    }

    pub fn set_grad(&self, grad: T) {
        self.node.borrow_mut().grad = grad;
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.node.borrow_mut().grad = T::zero();
    }

    /// Whether backward accumulates into this node.
    pub fn track_grad(&self) -> bool {
        self.node.borrow().track_grad
    }

    /// The operation that produced this node (`Leaf` for leaves and for
    /// untracked results).
    pub fn operation(&self) -> Operation {
        self.node.borrow().operation
    }

    /// Handles on the distinct nodes this one was computed from.
    pub fn parents(&self) -> Vec<Value<T>> {
        self.node
            .borrow()
            .parents
            .iter()
            .map(|p| Value::from_node_ref(Rc::clone(p)))
            .collect()
    }

    pub fn is_leaf(&self) -> bool {
        self.node.borrow().parents.is_empty()
    }

    /// True iff both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Value<T>) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Stable identity of the node while any handle on it is alive.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.node) as *const () as usize
    }
}
