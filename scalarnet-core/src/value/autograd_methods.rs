use crate::autograd::graph::topological_order;
use crate::autograd::BackwardOptions;
use crate::error::ScalarNetError;
use crate::ops::traits::Scalar;
use crate::value::Value;
use log::{debug, trace, warn};

impl<T: Scalar> Value<T> {
    /// Runs a backward pass from this node with the default options.
    ///
    /// Sets this node's gradient to one, then visits every tracked node
    /// reachable from it in reverse topological order. Each node's gradient
    /// is clamped into `[-1, 1]` before its contribution is added into the
    /// gradients of its operands; use [`Value::backward_with`] and
    /// [`BackwardOptions::unclipped`] for exact gradients. Gradients are
    /// accumulated, never overwritten: call [`Value::zero_grad_all`] (or an
    /// optimizer's `zero_grad`) between passes over the same graph.
    ///
    /// Calling this on an untracked value does nothing.
    pub fn backward(&self) -> Result<(), ScalarNetError> {
        self.backward_with(&BackwardOptions::default())
    }

    /// Runs a backward pass with the given options.
    pub fn backward_with(&self, options: &BackwardOptions<T>) -> Result<(), ScalarNetError> {
        options.validate()?;
        if !self.track_grad() {
            warn!("backward() called on an untracked value; nothing to do");
            return Ok(());
        }

        let order = topological_order(&self.node);
        debug!("Backward pass over {} tracked nodes", order.len());

        self.node.borrow_mut().grad = T::one();

        for node in &order {
            let (grad, data) = {
                let mut guard = node.borrow_mut();
                guard.grad = options.apply(guard.grad);
                (guard.grad, guard.data)
            };
            let guard = node.borrow();
            if let Some(op) = guard.backward_op.as_ref() {
                trace!("  {:?}: grad={} data={}", guard.operation, grad, data);
                op.backward(grad, data)?;
            }
        }
        Ok(())
    }

    /// Handles on the tracked nodes reachable from this one, root first.
    pub fn topological_order(&self) -> Vec<Value<T>> {
        topological_order(&self.node)
            .into_iter()
            .map(Value::from_node_ref)
            .collect()
    }

    /// Resets the gradient of every tracked node reachable from this one.
    pub fn zero_grad_all(&self) {
        for node in topological_order(&self.node) {
            node.borrow_mut().grad = T::zero();
        }
    }

    /// Plain gradient step on this node: `data -= lr * grad`.
    pub fn step(&self, lr: T) {
        let mut guard = self.node.borrow_mut();
        let grad = guard.grad;
        guard.data -= lr * grad;
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
