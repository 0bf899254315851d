use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_std(samples: &[f64]) -> f64 {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    (samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt()
}

#[test]
fn test_he_normal_spread() -> Result<(), ScalarNetError> {
    let mut rng = StdRng::seed_from_u64(7);
    let samples: Vec<f64> = he_normal(8, 20_000, &mut rng)?;
    assert_eq!(samples.len(), 20_000);
    let expected = (2.0f64 / 8.0).sqrt();
    assert!((sample_std(&samples) - expected).abs() < 0.02);
    Ok(())
}

#[test]
fn test_xavier_normal_spread() -> Result<(), ScalarNetError> {
    let mut rng = StdRng::seed_from_u64(11);
    let samples: Vec<f64> = xavier_normal(6, 2, 20_000, &mut rng)?;
    let expected = (2.0f64 / 8.0).sqrt();
    assert!((sample_std(&samples) - expected).abs() < 0.02);
    Ok(())
}

#[test]
fn test_init_weights_count_and_determinism() -> Result<(), ScalarNetError> {
    let a: Vec<f32> = init_weights(Activation::Relu, 5, 3, &mut StdRng::seed_from_u64(1))?;
    let b: Vec<f32> = init_weights(Activation::Relu, 5, 3, &mut StdRng::seed_from_u64(1))?;
    assert_eq!(a.len(), 5);
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_he_normal_rejects_zero_fan_in() {
    let mut rng = StdRng::seed_from_u64(0);
    let result: Result<Vec<f64>, _> = he_normal(0, 1, &mut rng);
    assert!(matches!(result, Err(ScalarNetError::ConfigurationError(_))));
}
