mod common;

use approx::assert_relative_eq;
use scalarnet_core::autograd::grad_check::check_grad;
use scalarnet_core::{softmax, BackwardOptions, Operation, ScalarNetError, Value};

#[test]
fn add_sets_unit_gradients() -> Result<(), ScalarNetError> {
    common::init_logger();
    let a = Value::new(-4.0);
    let b = Value::new(2.5);
    let c = &a + &b;
    c.backward()?;
    assert_eq!(c.grad(), 1.0);
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    Ok(())
}

#[test]
fn multiply_gradients_swap_operands() -> Result<(), ScalarNetError> {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = &a * &b;
    c.backward_with(&BackwardOptions::unclipped())?;
    assert_eq!(c.data(), 6.0);
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 2.0);

    // The default traversal bounds both leaves to the unit range.
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    (&a * &b).backward()?;
    assert_eq!(a.grad(), -1.0);
    assert_eq!(b.grad(), 1.0);
    Ok(())
}

#[test]
fn divide_is_composed_from_pow_and_multiply() -> Result<(), ScalarNetError> {
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    let d = &a / &b;
    assert_eq!(d.data(), 0.5);
    assert_eq!(d.operation(), Operation::Multiply);
    assert!(d.parents().iter().any(|p| p.operation() == Operation::Power));
    d.backward()?;
    assert_eq!(a.grad(), 0.5);
    assert_eq!(b.grad(), -0.25);
    Ok(())
}

#[test]
fn exp_and_log_gradients() -> Result<(), ScalarNetError> {
    let x = Value::new(-0.5);
    let e = x.exp();
    e.backward()?;
    assert_relative_eq!(x.grad(), (-0.5f64).exp());

    let x = Value::new(0.5);
    x.exp().backward_with(&BackwardOptions::unclipped())?;
    assert_relative_eq!(x.grad(), 0.5f64.exp());

    let y = Value::new(4.0);
    let l = y.log();
    l.backward()?;
    assert_relative_eq!(y.grad(), 0.25);
    Ok(())
}

#[test]
fn exp_gradient_is_clipped_by_default() -> Result<(), ScalarNetError> {
    let x = Value::new(2.0);
    x.exp().backward()?;
    assert_eq!(x.grad(), 1.0);

    let y = Value::new(2.0);
    y.exp().backward_with(&BackwardOptions::clipped(10.0))?;
    assert_relative_eq!(y.grad(), 2.0f64.exp());

    let z = Value::new(2.0);
    z.exp().backward_with(&BackwardOptions::clipped(3.0))?;
    assert_eq!(z.grad(), 3.0);
    Ok(())
}

#[test]
fn shared_parameter_accumulates_until_zeroed() -> Result<(), ScalarNetError> {
    let w = Value::new(1.5);
    let exact = BackwardOptions::unclipped();
    let first = &w * 2.0;
    first.backward_with(&exact)?;
    let second = (&w * 3.0).tanh();
    second.backward_with(&exact)?;
    let expected = 2.0 + 3.0 * (1.0 - second.data() * second.data());
    assert_relative_eq!(w.grad(), expected, epsilon = 1e-12);

    w.zero_grad();
    assert_eq!(w.grad(), 0.0);
    let third = &w * 2.0;
    third.backward_with(&exact)?;
    assert_eq!(w.grad(), 2.0);
    Ok(())
}

#[test]
fn diamond_graph_accumulates_both_paths() -> Result<(), ScalarNetError> {
    // f = (x*y) * (x+y)
    let x = Value::new(2.0);
    let y = Value::new(-1.0);
    let p = &x * &y;
    let s = &x + &y;
    let f = &p * &s;
    f.backward_with(&BackwardOptions::unclipped())?;
    // df/dx = y(x+y) + xy, df/dy = x(x+y) + xy
    assert_eq!(x.grad(), -1.0 * 1.0 + -2.0);
    assert_eq!(y.grad(), 2.0 * 1.0 + -2.0);
    Ok(())
}

#[test]
fn constants_are_pruned_from_traversal() -> Result<(), ScalarNetError> {
    let x = Value::new(3.0);
    let k = Value::constant(4.0);
    let f = (&x * &k).relu() + Value::constant(1.0).exp();
    let order = f.topological_order();
    assert!(order.iter().all(|v| v.track_grad()));
    f.backward_with(&BackwardOptions::unclipped())?;
    assert_eq!(x.grad(), 4.0);
    assert_eq!(k.grad(), 0.0);
    Ok(())
}

#[test]
fn composed_expression_passes_gradient_check() {
    let result = check_grad(
        |v: &[Value<f64>]| {
            let probs = softmax(&[&v[0] * &v[1], v[1].tanh(), v[2].exp()]);
            Ok(-(probs[0].clamp(1e-7, 1.0 - 1e-7).log()) + (&v[2] - &v[0]).pow(2.0))
        },
        &[0.3, -0.8, 0.1],
        1e-6,
        1e-5,
    );
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn f32_graphs_work() -> Result<(), ScalarNetError> {
    let a = Value::new(1.5f32);
    let b = (&a * &a + 1.0f32).log();
    b.backward()?;
    assert_relative_eq!(a.grad(), 2.0 * 1.5 / (1.5 * 1.5 + 1.0), epsilon = 1e-6);
    Ok(())
}
