use crate::ops::traits::Scalar;
use crate::value::Value;
use std::fmt;

impl<T: Scalar> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node.borrow();
        let parent_data: Vec<T> = node.parents.iter().map(|p| p.borrow().data).collect();
        write!(
            f,
            "Value(data={:?}, grad={:?}, op={:?}, track_grad={}, parents={:?})",
            node.data, node.grad, node.operation, node.track_grad, parent_data
        )
    }
}

impl<T: Scalar> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node.borrow();
        write!(f, "Value(data={}, grad={})", node.data, node.grad)
    }
}
