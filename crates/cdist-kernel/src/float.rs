use std::ops::{Add, AddAssign, Mul, Sub};

use cdist_tensor::Element;
use wide::{f32x8, f64x4};

/// Floating-point element types the distance routines operate on.
///
/// Each type supplies its own wide-register reduction; the plain loop is
/// shared through [`sq_euclidean_scalar`].
pub trait Float:
    Element + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + AddAssign
{
    const ZERO: Self;

    /// Squared Euclidean distance using SIMD lanes, with a scalar tail for
    /// the elements that do not fill a whole register.
    fn sq_euclidean_wide(a: &[Self], b: &[Self]) -> Self;
}

/// Squared Euclidean distance with a single running accumulator.
///
/// Lower fixed overhead than [`Float::sq_euclidean_wide`], which makes it the
/// better choice for short vectors.
#[inline]
pub fn sq_euclidean_scalar<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "vector lengths must match");
    let mut sum = T::ZERO;
    for (&x, &y) in a.iter().zip(b) {
        let d = x - y;
        sum += d * d;
    }
    sum
}

const F32_LANES: usize = 8;
const F64_LANES: usize = 4;

#[inline(always)]
fn load_f32x8(chunk: &[f32]) -> f32x8 {
    let mut lanes = [0.0f32; F32_LANES];
    lanes.copy_from_slice(chunk);
    f32x8::from(lanes)
}

#[inline(always)]
fn load_f64x4(chunk: &[f64]) -> f64x4 {
    let mut lanes = [0.0f64; F64_LANES];
    lanes.copy_from_slice(chunk);
    f64x4::from(lanes)
}

impl Float for f32 {
    const ZERO: f32 = 0.0;

    #[inline]
    fn sq_euclidean_wide(a: &[f32], b: &[f32]) -> f32 {
        debug_assert_eq!(a.len(), b.len(), "vector lengths must match");
        let a_chunks = a.chunks_exact(F32_LANES);
        let b_chunks = b.chunks_exact(F32_LANES);
        let tail = sq_euclidean_scalar(a_chunks.remainder(), b_chunks.remainder());

        let mut acc = f32x8::splat(0.0);
        for (ca, cb) in a_chunks.zip(b_chunks) {
            let d = load_f32x8(ca) - load_f32x8(cb);
            acc = d.mul_add(d, acc);
        }
        acc.reduce_add() + tail
    }
}

impl Float for f64 {
    const ZERO: f64 = 0.0;

    #[inline]
    fn sq_euclidean_wide(a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "vector lengths must match");
        let a_chunks = a.chunks_exact(F64_LANES);
        let b_chunks = b.chunks_exact(F64_LANES);
        let tail = sq_euclidean_scalar(a_chunks.remainder(), b_chunks.remainder());

        let mut acc = f64x4::splat(0.0);
        for (ca, cb) in a_chunks.zip(b_chunks) {
            let d = load_f64x4(ca) - load_f64x4(cb);
            acc = d.mul_add(d, acc);
        }
        acc.reduce_add() + tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_vec(rng: &mut StdRng, n: usize) -> Vec<f32> {
        (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect()
    }

    #[test]
    fn test_scalar_known_value() {
        // 1 + 4 + 4
        assert_eq!(sq_euclidean_scalar(&[0.0f32, 0.0, 0.0], &[1.0, 2.0, 2.0]), 9.0);
        assert_eq!(sq_euclidean_scalar(&[0.0f64, 0.0], &[3.0, 4.0]), 25.0);
    }

    #[test]
    fn test_empty_vectors() {
        assert_eq!(sq_euclidean_scalar::<f32>(&[], &[]), 0.0);
        assert_eq!(f32::sq_euclidean_wide(&[], &[]), 0.0);
        assert_eq!(f64::sq_euclidean_wide(&[], &[]), 0.0);
    }

    #[test]
    fn test_wide_known_value() {
        let a: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let b = vec![0.0f32; 16];
        // sum of i^2 for i in 0..16
        assert_relative_eq!(f32::sq_euclidean_wide(&a, &b), 1240.0f32);
    }

    #[test]
    fn test_wide_uses_tail() {
        // 8 full lanes plus a remainder of 3
        let a = vec![1.0f32; 11];
        let b = vec![0.0f32; 11];
        assert_relative_eq!(f32::sq_euclidean_wide(&a, &b), 11.0f32);

        let a = vec![2.0f64; 7];
        let b = vec![0.0f64; 7];
        assert_relative_eq!(f64::sq_euclidean_wide(&a, &b), 28.0f64);
    }

    #[test]
    fn test_self_distance_is_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [1, 7, 8, 9, 33, 128] {
            let v = random_vec(&mut rng, n);
            assert_eq!(sq_euclidean_scalar(&v, &v), 0.0);
            assert_eq!(f32::sq_euclidean_wide(&v, &v), 0.0);
        }
    }

    #[test]
    fn test_scalar_and_wide_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 1..70 {
            let a = random_vec(&mut rng, n);
            let b = random_vec(&mut rng, n);
            let s = sq_euclidean_scalar(&a, &b);
            let w = f32::sq_euclidean_wide(&a, &b);
            assert!(s >= 0.0 && w >= 0.0);
            assert_relative_eq!(s, w, max_relative = 1e-5);
        }
    }

    #[test]
    fn test_f64_scalar_and_wide_agree() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in [3, 4, 5, 17, 64] {
            let a: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
            let b: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
            assert_relative_eq!(
                sq_euclidean_scalar(&a, &b),
                f64::sq_euclidean_wide(&a, &b),
                max_relative = 1e-12
            );
        }
    }
}
