use crate::autograd::BackwardOptions;
use crate::error::ScalarNetError;
use crate::nn::losses::{
    MeanSquaredErrorLoss, SparseCategoricalCrossEntropy, SparseCategoricalCrossEntropyLoss,
};
use crate::nn::{Activation, Module};
use crate::utils::testing::single_layer_network;
use approx::assert_relative_eq;

fn uniform_softmax_network() -> Result<crate::model::Network<f64>, ScalarNetError> {
    single_layer_network(&[vec![0.0, 0.0], vec![0.0, 0.0]], &[0.0, 0.0], Activation::Softmax)
}

#[test]
fn test_new_loss_is_zero() -> Result<(), ScalarNetError> {
    let net = uniform_softmax_network()?;
    let loss = SparseCategoricalCrossEntropyLoss::new(&net, SparseCategoricalCrossEntropy)?;
    assert_eq!(loss.get(), 0.0);
    assert!(!loss.accumulator().track_grad());
    assert_eq!(loss.epsilon(), 1e-7);
    // Backward on an empty accumulator is a no-op.
    loss.backward()?;
    Ok(())
}

#[test]
fn test_single_examples_accumulate() -> Result<(), ScalarNetError> {
    let net = uniform_softmax_network()?;
    let mut loss = SparseCategoricalCrossEntropyLoss::from_network(&net)?;
    loss.compute_loss(&[1.0, 2.0], &0)?;
    assert_relative_eq!(loss.get(), std::f64::consts::LN_2, epsilon = 1e-12);
    loss.compute_loss(&[3.0, -1.0], &1)?;
    assert_relative_eq!(loss.get(), 2.0 * std::f64::consts::LN_2, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_batch_loss_is_mean() -> Result<(), ScalarNetError> {
    let net = uniform_softmax_network()?;
    let mut loss = SparseCategoricalCrossEntropyLoss::from_network(&net)?;
    let inputs = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.5, 0.5]];
    let value = loss.compute_batch_loss(&inputs, &[0, 1, 1])?;
    assert_relative_eq!(value.data(), std::f64::consts::LN_2, epsilon = 1e-12);
    assert_relative_eq!(loss.get(), std::f64::consts::LN_2, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_batch_loss_without_zero_keeps_accumulating() -> Result<(), ScalarNetError> {
    let net = uniform_softmax_network()?;
    let mut loss = SparseCategoricalCrossEntropyLoss::from_network(&net)?;
    let inputs = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    loss.compute_batch_loss(&inputs, &[0, 1])?;
    // (ln2 + 2 ln2) / 2
    loss.compute_batch_loss(&inputs, &[0, 1])?;
    assert_relative_eq!(loss.get(), 1.5 * std::f64::consts::LN_2, epsilon = 1e-12);

    loss.zero();
    assert_eq!(loss.get(), 0.0);
    loss.compute_batch_loss(&inputs, &[0, 1])?;
    assert_relative_eq!(loss.get(), std::f64::consts::LN_2, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_batch_errors() -> Result<(), ScalarNetError> {
    let net = uniform_softmax_network()?;
    let mut loss = SparseCategoricalCrossEntropyLoss::from_network(&net)?;
    assert_eq!(
        loss.compute_batch_loss(&[vec![1.0, 0.0]], &[0, 1]).unwrap_err(),
        ScalarNetError::BatchSizeMismatch {
            inputs: 1,
            targets: 2
        }
    );
    assert_eq!(
        loss.compute_batch_loss(&[], &[]).unwrap_err(),
        ScalarNetError::EmptyBatch
    );
    assert!(matches!(
        loss.compute_loss(&[1.0], &0),
        Err(ScalarNetError::DimensionMismatch { expected: 2, actual: 1 })
    ));
    Ok(())
}

#[test]
fn test_failed_batch_leaves_accumulator_unchanged() -> Result<(), ScalarNetError> {
    let net = uniform_softmax_network()?;
    let mut loss = SparseCategoricalCrossEntropyLoss::from_network(&net)?;
    let inputs = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.5, 0.5]];

    // The third target is out of range after two examples were added.
    assert!(matches!(
        loss.compute_batch_loss(&inputs, &[0, 1, 5]),
        Err(ScalarNetError::InvalidTarget { .. })
    ));
    assert_eq!(loss.get(), 0.0);

    loss.compute_loss(&[1.0, 0.0], &0)?;
    let before = loss.accumulator().clone();
    assert!(matches!(
        loss.compute_batch_loss(&[vec![1.0, 0.0], vec![1.0]], &[1, 0]),
        Err(ScalarNetError::DimensionMismatch { expected: 2, actual: 1 })
    ));
    assert!(loss.accumulator().ptr_eq(&before));
    assert_relative_eq!(loss.get(), std::f64::consts::LN_2, epsilon = 1e-12);

    loss.zero();
    loss.compute_batch_loss(&inputs, &[0, 1, 1])?;
    assert_relative_eq!(loss.get(), std::f64::consts::LN_2, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_backward_clips_unless_configured() -> Result<(), ScalarNetError> {
    let net = uniform_softmax_network()?;
    let mut clipped = SparseCategoricalCrossEntropyLoss::from_network(&net)?;
    clipped.compute_loss(&[1.0, 3.0], &0)?;
    clipped.backward()?;
    assert!(net.get_parameters().grads().iter().all(|g| g.abs() <= 1.0));

    net.zero_grad();
    let mut exact = SparseCategoricalCrossEntropyLoss::from_network(&net)?
        .with_backward_options(BackwardOptions::unclipped())?;
    exact.compute_loss(&[1.0, 3.0], &0)?;
    exact.backward()?;
    // dL/dz0 = 0.5 - 1, so dL/dw01 = -0.5 * 3
    assert_relative_eq!(net.get_parameters().grads()[1], -1.5, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_zero_detaches_previous_graph() -> Result<(), ScalarNetError> {
    let net = single_layer_network(
        &[vec![0.3, -0.2], vec![-0.1, 0.4]],
        &[0.05, -0.05],
        Activation::Softmax,
    )?;
    let mut loss = SparseCategoricalCrossEntropyLoss::from_network(&net)?;

    loss.compute_loss(&[1.0, 2.0], &0)?;
    loss.backward()?;
    let first_pass = net.get_parameters().grads();
    assert!(first_pass.iter().any(|&g| g != 0.0));

    loss.zero();
    net.zero_grad();
    loss.compute_loss(&[-1.0, 0.5], &1)?;
    loss.backward()?;
    let second_pass = net.get_parameters().grads();

    // Same example on a fresh loss gives the same gradients.
    net.zero_grad();
    let mut fresh = SparseCategoricalCrossEntropyLoss::from_network(&net)?;
    fresh.compute_loss(&[-1.0, 0.5], &1)?;
    fresh.backward()?;
    let expected = net.get_parameters().grads();

    for (a, e) in second_pass.iter().zip(expected.iter()) {
        assert_relative_eq!(a, e, epsilon = 1e-15);
    }
    Ok(())
}

#[test]
fn test_loss_options() -> Result<(), ScalarNetError> {
    let net = uniform_softmax_network()?;
    let loss = MeanSquaredErrorLoss::from_network(&net)?
        .with_epsilon(1e-4)?
        .with_backward_options(BackwardOptions::clipped(5.0))?;
    assert_eq!(loss.epsilon(), 1e-4);
    assert!(std::ptr::eq(loss.network(), &net));

    assert!(MeanSquaredErrorLoss::from_network(&net)?.with_epsilon(0.0).is_err());
    assert!(MeanSquaredErrorLoss::from_network(&net)?.with_epsilon(0.7).is_err());
    assert!(MeanSquaredErrorLoss::from_network(&net)?
        .with_backward_options(BackwardOptions::clipped(-1.0))
        .is_err());
    Ok(())
}
