//! Scalar noise fields sampled by the terrain generator.

use noise::NoiseFn;

/// A deterministic scalar field over 3D space with values in `[0, 1]`.
///
/// Implementations hold only state fixed at construction, so identical inputs
/// always produce identical outputs.
pub trait NoiseProvider {
    /// Samples the field at (x, y, z).
    fn sample(&self, x: f64, y: f64, z: f64) -> f64;
}

impl<T: NoiseProvider + ?Sized> NoiseProvider for Box<T> {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).sample(x, y, z)
    }
}

/// Samples an inner provider at coordinates multiplied by a fixed frequency.
///
/// Used to stack octaves of the same base noise at increasing detail.
pub struct ScaledNoiseProvider<N> {
    inner: N,
    frequency: f64,
}

impl<N: NoiseProvider> ScaledNoiseProvider<N> {
    /// Wraps `inner`, sampling it at `frequency` times the requested coordinates.
    pub fn new(inner: N, frequency: f64) -> Self {
        Self { inner, frequency }
    }
}

impl<N: NoiseProvider> NoiseProvider for ScaledNoiseProvider<N> {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.inner
            .sample(x * self.frequency, y * self.frequency, z * self.frequency)
    }
}

/// Adapts any 3D function from the `noise` crate to a [`NoiseProvider`].
///
/// `noise` functions produce values in roughly `[-1, 1]`; they are remapped with
/// `(v + 1) / 2` and clamped to `[0, 1]`.
///
/// ```
/// use voxel_world::voxels::generation::{NoiseFnProvider, NoiseProvider};
///
/// let provider = NoiseFnProvider::new(noise::Perlin::new(7));
/// let value = provider.sample(0.3, 1.7, -4.2);
/// assert!((0.0..=1.0).contains(&value));
/// ```
pub struct NoiseFnProvider<F> {
    function: F,
}

impl<F: NoiseFn<f64, 3>> NoiseFnProvider<F> {
    /// Wraps a `noise` crate function.
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F: NoiseFn<f64, 3>> NoiseProvider for NoiseFnProvider<F> {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        ((self.function.get([x, y, z]) + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp;

    impl NoiseProvider for Ramp {
        fn sample(&self, x: f64, _y: f64, _z: f64) -> f64 {
            x
        }
    }

    #[test]
    fn test_scaled_multiplies_coordinates() {
        let scaled = ScaledNoiseProvider::new(Ramp, 4.0);
        assert_eq!(scaled.sample(0.125, 0.0, 0.0), 0.5);
    }

    #[test]
    fn test_noise_fn_provider_range() {
        let provider = NoiseFnProvider::new(noise::Perlin::new(3));
        for i in 0..200 {
            let t = i as f64 * 0.173;
            let value = provider.sample(t, t * 0.5, -t);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_noise_fn_provider_remaps_constant() {
        let provider = NoiseFnProvider::new(noise::Constant::new(0.0));
        assert_eq!(provider.sample(1.0, 2.0, 3.0), 0.5);

        let saturated = NoiseFnProvider::new(noise::Constant::new(3.0));
        assert_eq!(saturated.sample(1.0, 2.0, 3.0), 1.0);
    }
}
