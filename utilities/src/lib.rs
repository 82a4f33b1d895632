pub extern crate rustfft;

// export rustfft to dft6 tests and benches
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

/// Closed-form DFT of length `reals.len()`, evaluated term by term in `f64`.
///
/// `sign` is `-1.0` for the forward transform and `1.0` for the inverse.
/// No scaling is applied.
pub fn naive_dft(reals: &[f64], imags: &[f64], sign: f64) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(reals.len(), imags.len());
    let n = reals.len();

    let mut out_re = vec![0.0; n];
    let mut out_im = vec![0.0; n];

    for k in 0..n {
        let (mut acc_re, mut acc_im) = (0.0, 0.0);
        for (j, (x_re, x_im)) in reals.iter().zip(imags.iter()).enumerate() {
            // reduce k*j mod n first so the angle stays exact for small n
            let phase = ((k * j) % n) as f64;
            let angle = sign * 2.0 * std::f64::consts::PI * phase / n as f64;
            let (w_im, w_re) = angle.sin_cos();
            acc_re += x_re * w_re - x_im * w_im;
            acc_im += x_re * w_im + x_im * w_re;
        }
        out_re[k] = acc_re;
        out_im[k] = acc_im;
    }

    (out_re, out_im)
}

/// Inverse of [`naive_dft`] with the forward sign, including the `1/n` scaling.
pub fn naive_idft(reals: &[f64], imags: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let scale = 1.0 / reals.len() as f64;
    let (mut out_re, mut out_im) = naive_dft(reals, imags, 1.0);
    out_re.iter_mut().for_each(|z| *z *= scale);
    out_im.iter_mut().for_each(|z| *z *= scale);
    (out_re, out_im)
}
