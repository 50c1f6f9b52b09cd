//! Weighted combination of several noise providers.

use log::warn;

use super::noise_provider::NoiseProvider;

/// Combines several [`NoiseProvider`]s into their weighted average.
///
/// `sample` returns `sum(provider_i * weight_i) / sum(weight_i)`. A total weight
/// of zero or less is replaced by 1 so the combinator never divides by zero.
pub struct LayeredNoiseProvider {
    layers: Vec<(Box<dyn NoiseProvider>, f64)>,
    total_weight: f64,
}

impl LayeredNoiseProvider {
    /// Builds the combinator from `(provider, weight)` pairs.
    pub fn new(layers: impl IntoIterator<Item = (Box<dyn NoiseProvider>, f64)>) -> Self {
        let layers: Vec<_> = layers.into_iter().collect();
        let sum: f64 = layers.iter().map(|(_, weight)| weight).sum();
        let total_weight = if sum > 0.0 {
            sum
        } else {
            warn!("Layered noise total weight is {sum}, using 1 instead");
            1.0
        };

        Self {
            layers,
            total_weight,
        }
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if there are no layers; such a provider always samples 0.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl NoiseProvider for LayeredNoiseProvider {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let accum: f64 = self
            .layers
            .iter()
            .map(|(provider, weight)| provider.sample(x, y, z) * weight)
            .sum();
        accum / self.total_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl NoiseProvider for Constant {
        fn sample(&self, _x: f64, _y: f64, _z: f64) -> f64 {
            self.0
        }
    }

    fn layer(value: f64, weight: f64) -> (Box<dyn NoiseProvider>, f64) {
        (Box::new(Constant(value)), weight)
    }

    #[test]
    fn test_weighted_average() {
        let layered = LayeredNoiseProvider::new([layer(1.0, 3.0), layer(0.0, 1.0)]);
        assert_eq!(layered.len(), 2);
        assert!((layered.sample(0.0, 0.0, 0.0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_single_layer_is_identity() {
        let layered = LayeredNoiseProvider::new([layer(0.3, 5.0)]);
        assert!((layered.sample(1.0, 2.0, 3.0) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_weight_falls_back_to_one() {
        let layered = LayeredNoiseProvider::new([layer(0.8, 0.0), layer(0.4, 0.0)]);
        assert_eq!(layered.sample(0.0, 0.0, 0.0), 0.0);

        let negative = LayeredNoiseProvider::new([layer(0.5, 1.0), layer(0.5, -2.0)]);
        assert!((negative.sample(0.0, 0.0, 0.0) - (-0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_empty_samples_zero() {
        let layered = LayeredNoiseProvider::new(Vec::new());
        assert!(layered.is_empty());
        assert_eq!(layered.sample(1.0, 1.0, 1.0), 0.0);
    }
}
