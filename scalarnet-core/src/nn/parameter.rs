use crate::ops::traits::Scalar;
use crate::value::Value;
use std::fmt;
use std::ops::Index;

/// Ordered handles on the trainable nodes of a module.
///
/// The handles share the nodes owned by the neurons: updating `data` through
/// them updates the network. Order is layer, then neuron, then weight index,
/// then bias, and is stable across calls, so optimizer state can be aligned
/// with it by position.
#[derive(Clone, Default)]
pub struct ParameterVector<T: Scalar = f64>(Vec<Value<T>>);

impl<T: Scalar> ParameterVector<T> {
    pub fn new(values: Vec<Value<T>>) -> Self {
        ParameterVector(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value<T>> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Value<T>> {
        self.0.get(index)
    }

    pub fn as_slice(&self) -> &[Value<T>] {
        &self.0
    }

    pub(crate) fn extend(&mut self, other: ParameterVector<T>) {
        self.0.extend(other.0);
    }

    /// Resets the gradient of every parameter.
    pub fn zero_grad(&self) {
        for p in &self.0 {
            p.zero_grad();
        }
    }

    /// Snapshot of the current gradients.
    pub fn grads(&self) -> Vec<T> {
        self.0.iter().map(|p| p.grad()).collect()
    }

    /// Snapshot of the current values.
    pub fn data(&self) -> Vec<T> {
        self.0.iter().map(|p| p.data()).collect()
    }
}

impl<T: Scalar> Index<usize> for ParameterVector<T> {
    type Output = Value<T>;

    fn index(&self, index: usize) -> &Value<T> {
        &self.0[index]
    }
}

impl<'a, T: Scalar> IntoIterator for &'a ParameterVector<T> {
    type Item = &'a Value<T>;
    type IntoIter = std::slice::Iter<'a, Value<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Scalar> FromIterator<Value<T>> for ParameterVector<T> {
    fn from_iter<I: IntoIterator<Item = Value<T>>>(iter: I) -> Self {
        ParameterVector(iter.into_iter().collect())
    }
}

impl<T: Scalar> fmt::Debug for ParameterVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParameterVector(len={})", self.0.len())
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
