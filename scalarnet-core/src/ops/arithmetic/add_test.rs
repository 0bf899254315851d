use super::add_op;
use crate::autograd::BackwardOptions;
use crate::error::ScalarNetError;
use crate::value::Value;
use crate::value_data::Operation;

#[test]
fn test_add_forward() {
    let a = Value::new(2.0f64);
    let b = Value::new(-3.5f64);
    let c = add_op(&a, &b);
    assert_eq!(c.data(), -1.5);
    assert_eq!(c.operation(), Operation::Add);
    assert!(c.track_grad());
    assert_eq!(c.parents().len(), 2);
}

#[test]
fn test_add_backward() -> Result<(), ScalarNetError> {
    let a = Value::new(2.0f64);
    let b = Value::new(-3.5f64);
    let c = add_op(&a, &b);
    c.backward_with(&BackwardOptions::unclipped())?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), ScalarNetError> {
    let a = Value::new(3.0f64);
    let c = add_op(&a, &a);
    assert_eq!(c.data(), 6.0);
    assert_eq!(c.parents().len(), 1, "shared operand recorded once");
    c.backward_with(&BackwardOptions::unclipped())?;
    assert_eq!(a.grad(), 2.0);
    Ok(())
}

#[test]
fn test_add_with_constant_operand() -> Result<(), ScalarNetError> {
    let a = Value::new(1.0f64);
    let k = Value::constant(5.0f64);
    let c = add_op(&a, &k);
    c.backward_with(&BackwardOptions::unclipped())?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(k.grad(), 0.0, "constants never accumulate");
    Ok(())
}

#[test]
fn test_add_constants_is_untracked() {
    let c = add_op(&Value::constant(1.0f32), &Value::constant(2.0f32));
    assert_eq!(c.data(), 3.0);
    assert!(!c.track_grad());
    assert!(c.parents().is_empty());
    assert_eq!(c.operation(), Operation::Leaf);
}
