use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use scalarnet_core::{Activation, Network, ScalarNetError};

// Each integration test file compiles this module separately, so helpers
// unused by one of them are expected.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Gaussian blobs around `centers`, `per_class` points each, labelled by the
/// index of their center.
#[allow(dead_code)]
pub fn blobs(
    centers: &[[f64; 2]],
    per_class: usize,
    spread: f64,
    seed: u64,
) -> (Vec<Vec<f64>>, Vec<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, spread).expect("valid spread");
    let mut inputs = Vec::new();
    let mut labels = Vec::new();
    for _ in 0..per_class {
        for (label, center) in centers.iter().enumerate() {
            inputs.push(vec![
                center[0] + noise.sample(&mut rng),
                center[1] + noise.sample(&mut rng),
            ]);
            labels.push(label);
        }
    }
    (inputs, labels)
}

#[allow(dead_code)]
pub fn seeded_classifier(sizes: &[usize], seed: u64) -> Result<Network<f64>, ScalarNetError> {
    Network::from_sizes_with_rng(
        sizes,
        Activation::Relu,
        Activation::Softmax,
        &mut StdRng::seed_from_u64(seed),
    )
}

#[allow(dead_code)]
pub fn accuracy(net: &Network<f64>, inputs: &[Vec<f64>], labels: &[usize]) -> Result<f64, ScalarNetError> {
    let mut correct = 0usize;
    for (x, &y) in inputs.iter().zip(labels.iter()) {
        if net.predict(x)? == y {
            correct += 1;
        }
    }
    Ok(correct as f64 / inputs.len() as f64)
}
