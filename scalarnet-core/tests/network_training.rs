mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalarnet_core::losses::{
    MeanSquaredErrorLoss, SparseCategoricalCrossEntropy, SparseCategoricalCrossEntropyLoss,
};
use scalarnet_core::{Adam, AdamConfig, Module, Optimizer, ScalarNetError, Sgd};

const CENTERS: [[f64; 2]; 3] = [[-2.0, -2.0], [2.0, -2.0], [0.0, 2.0]];

#[test]
fn predict_agrees_with_graph_forward() -> Result<(), ScalarNetError> {
    common::init_logger();
    let net = common::seeded_classifier(&[5, 7, 7, 4], 17)?;
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..100 {
        let x: Vec<f64> = (0..5).map(|_| rng.gen_range(-4.0..4.0)).collect();
        let outputs = net.forward_graph(&x)?;
        let mut best = 0;
        for (i, o) in outputs.iter().enumerate() {
            if o.data() > outputs[best].data() {
                best = i;
            }
        }
        assert_eq!(net.predict(&x)?, best);
    }
    Ok(())
}

#[test]
fn adam_training_reduces_sparse_cce() -> Result<(), ScalarNetError> {
    common::init_logger();
    let (inputs, labels) = common::blobs(&CENTERS, 20, 0.5, 7);
    let net = common::seeded_classifier(&[2, 8, 3], 3)?;
    let mut loss = SparseCategoricalCrossEntropyLoss::new(&net, SparseCategoricalCrossEntropy)?;
    let mut optimizer = Adam::new(net.get_parameters(), AdamConfig::default().step_size(0.05))?;

    let mut history = Vec::new();
    for _ in 0..60 {
        loss.zero();
        optimizer.zero_grad();
        loss.compute_batch_loss(&inputs, &labels)?;
        history.push(loss.get());
        loss.backward()?;
        optimizer.step()?;
    }

    let first = history[0];
    let last = history[history.len() - 1];
    assert!(last < first * 0.5, "loss went from {} to {}", first, last);
    assert_eq!(optimizer.step_count(), 60);
    assert!(common::accuracy(&net, &inputs, &labels)? >= 0.9);
    Ok(())
}

#[test]
fn sgd_training_reduces_mse() -> Result<(), ScalarNetError> {
    let (inputs, labels) = common::blobs(&CENTERS[..2], 20, 0.5, 11);
    let net = common::seeded_classifier(&[2, 6, 2], 5)?;
    let mut loss = MeanSquaredErrorLoss::from_network(&net)?;
    let mut optimizer = Sgd::new(net.get_parameters(), 0.5)?;

    loss.compute_batch_loss(&inputs, &labels)?;
    let initial = loss.get();
    for _ in 0..40 {
        loss.zero();
        net.zero_grad();
        loss.compute_batch_loss(&inputs, &labels)?;
        loss.backward()?;
        optimizer.step()?;
    }
    loss.zero();
    loss.compute_batch_loss(&inputs, &labels)?;
    assert!(loss.get() < initial, "mse went from {} to {}", initial, loss.get());
    Ok(())
}

#[test]
fn optimizer_updates_reach_the_network() -> Result<(), ScalarNetError> {
    let net = common::seeded_classifier(&[2, 3, 2], 9)?;
    let before = net.get_parameters().data();
    let mut loss = SparseCategoricalCrossEntropyLoss::from_network(&net)?;
    let mut optimizer = Adam::with_defaults(net.get_parameters())?;

    loss.compute_loss(&[0.5, -0.5], &1)?;
    loss.backward()?;
    optimizer.step()?;

    let after = net.get_parameters().data();
    assert_eq!(before.len(), after.len());
    assert!(before.iter().zip(after.iter()).any(|(b, a)| b != a));
    Ok(())
}
