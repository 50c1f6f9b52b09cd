//! Classic 3D Perlin gradient noise with a seeded permutation table.

use super::noise_provider::NoiseProvider;

/// Size of the base permutation table.
const PERMUTATION_SIZE: usize = 256;

/// Classic Perlin noise in 3D, remapped to `[0, 1]`.
///
/// The permutation table is a seeded shuffle of `0..256`, doubled to 512
/// entries so corner hashing never needs to wrap. Two providers built from the
/// same seed are identical.
#[derive(Clone)]
pub struct PerlinNoiseProvider {
    permutation: [u8; PERMUTATION_SIZE * 2],
}

impl PerlinNoiseProvider {
    /// Builds the permutation table for `seed`.
    pub fn new(seed: u32) -> Self {
        let mut rng = fastrand::Rng::with_seed(u64::from(seed));
        let mut base: Vec<u8> = (0..=u8::MAX).collect();
        rng.shuffle(&mut base);

        let mut permutation = [0u8; PERMUTATION_SIZE * 2];
        for (i, entry) in permutation.iter_mut().enumerate() {
            *entry = base[i & (PERMUTATION_SIZE - 1)];
        }

        Self { permutation }
    }

    #[inline]
    fn perm(&self, index: usize) -> usize {
        self.permutation[index] as usize
    }

    /// Raw noise value in `[-1, 1]`.
    fn signed_sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let (x_floor, y_floor, z_floor) = (x.floor(), y.floor(), z.floor());
        let xi = (x_floor as i64 & 255) as usize;
        let yi = (y_floor as i64 & 255) as usize;
        let zi = (z_floor as i64 & 255) as usize;
        let xf = x - x_floor;
        let yf = y - y_floor;
        let zf = z - z_floor;
        let u = fade(xf);
        let v = fade(yf);
        let w = fade(zf);

        let a = self.perm(xi);
        let b = self.perm(xi + 1);
        let aa = self.perm(a + yi);
        let ab = self.perm(a + yi + 1);
        let ba = self.perm(b + yi);
        let bb = self.perm(b + yi + 1);

        let aaa = self.perm(aa + zi);
        let aba = self.perm(ab + zi);
        let aab = self.perm(aa + zi + 1);
        let abb = self.perm(ab + zi + 1);
        let baa = self.perm(ba + zi);
        let bba = self.perm(bb + zi);
        let bab = self.perm(ba + zi + 1);
        let bbb = self.perm(bb + zi + 1);

        let x1 = lerp(grad(aaa, xf, yf, zf), grad(baa, xf - 1.0, yf, zf), u);
        let x2 = lerp(grad(aba, xf, yf - 1.0, zf), grad(bba, xf - 1.0, yf - 1.0, zf), u);
        let y1 = lerp(x1, x2, v);

        let x3 = lerp(grad(aab, xf, yf, zf - 1.0), grad(bab, xf - 1.0, yf, zf - 1.0), u);
        let x4 = lerp(
            grad(abb, xf, yf - 1.0, zf - 1.0),
            grad(bbb, xf - 1.0, yf - 1.0, zf - 1.0),
            u,
        );
        let y2 = lerp(x3, x4, v);

        lerp(y1, y2, w)
    }
}

impl NoiseProvider for PerlinNoiseProvider {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        ((self.signed_sample(x, y, z) + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}

/// Quintic smoothing `6t^5 - 15t^4 + 10t^3`.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of (x, y, z) with one of the 12 cube-edge gradients, selected by
/// the low 4 bits of `hash` (16 cases, four of them repeated).
#[inline]
fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}
