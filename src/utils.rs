//! Utility functions for interleaved [`Complex`] buffers

use bytemuck::cast_slice;
use num_complex::Complex;
use num_traits::Float;

use crate::codelet::Codelet;
use crate::error::Dft6Error;
use crate::layout::Strides;
use crate::LENGTH;

/// Utility function to combine separate vectors of real and imaginary components
/// into a slice of Complex Number Structs.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()` or `out` is shorter than them.
pub(crate) fn combine_re_im<T: Float>(reals: &[T], imags: &[T], out: &mut [Complex<T>]) {
    assert_eq!(reals.len(), imags.len());

    out[..reals.len()]
        .iter_mut()
        .zip(reals.iter().zip(imags.iter()))
        .for_each(|(z, (z_re, z_im))| *z = Complex::new(*z_re, *z_im));
}

/// The input is read in place through two strided views of the interleaved values. Only the
/// output goes through split scratch buffers, since it can't be borrowed mutably twice.
fn fft6_interleaved<T: Codelet>(
    flat: &[T],
    output: &mut [Complex<T>],
    sequences: usize,
) -> Result<(), Dft6Error> {
    if sequences == 0 {
        return Ok(());
    }

    let mut scratch_re = vec![T::zero(); sequences * LENGTH];
    let mut scratch_im = vec![T::zero(); sequences * LENGTH];
    let strides = Strides::new(2, 1, 2 * LENGTH, LENGTH);

    let kernel = T::selected().kernel;
    kernel(
        flat,
        &flat[1..],
        &mut scratch_re,
        &mut scratch_im,
        strides,
        sequences,
    );

    combine_re_im(&scratch_re, &scratch_im, output);
    Ok(())
}

macro_rules! impl_fft6_interleaved_for {
    ($func_name:ident, $precision:ty) => {
        /// Forward length-6 DFT of every consecutive group of six values in `input`
        ///
        /// # Errors
        ///
        /// Returns an error if `input.len()` is not a multiple of 6, or if `output` is shorter
        /// than `input`.
        pub fn $func_name(
            input: &[Complex<$precision>],
            output: &mut [Complex<$precision>],
        ) -> Result<(), Dft6Error> {
            if input.len() % LENGTH != 0 {
                return Err(Dft6Error::InputBufferSize);
            }
            if output.len() < input.len() {
                return Err(Dft6Error::OutputBufferSize);
            }

            let flat: &[$precision] = cast_slice(input);
            fft6_interleaved(flat, output, input.len() / LENGTH)
        }
    };
}

impl_fft6_interleaved_for!(fft6_interleaved_64, f64);
impl_fft6_interleaved_for!(fft6_interleaved_32, f32);

#[cfg(test)]
mod tests {
    use utilities::{assert_float_closeness, naive_dft};

    use super::*;

    #[test]
    fn test_combine_re_im() {
        let reals = [1.0, 3.0];
        let imags = [2.0, 4.0];
        let mut out = vec![Complex::new(0.0, 0.0); 3];

        combine_re_im(&reals, &imags, &mut out);

        assert_eq!(
            out,
            vec![
                Complex::new(1.0, 2.0),
                Complex::new(3.0, 4.0),
                Complex::new(0.0, 0.0)
            ]
        );
    }

    #[test]
    fn interleaved_batch() {
        let input: Vec<Complex<f64>> = (0..2 * LENGTH)
            .map(|i| Complex::new(i as f64, (i * i) as f64 * 0.25))
            .collect();
        let mut output = vec![Complex::default(); input.len()];

        fft6_interleaved_64(&input, &mut output).unwrap();

        for (seq_in, seq_out) in input.chunks_exact(LENGTH).zip(output.chunks_exact(LENGTH)) {
            let reals: Vec<f64> = seq_in.iter().map(|z| z.re).collect();
            let imags: Vec<f64> = seq_in.iter().map(|z| z.im).collect();
            let (expected_re, expected_im) = naive_dft(&reals, &imags, -1.0);
            for k in 0..LENGTH {
                assert_float_closeness(seq_out[k].re, expected_re[k], 1e-12);
                assert_float_closeness(seq_out[k].im, expected_im[k], 1e-12);
            }
        }
    }

    #[test]
    fn interleaved_single_precision() {
        let input: Vec<Complex<f32>> = (1..=LENGTH).map(|i| Complex::new(i as f32, 0.0)).collect();
        let mut output = vec![Complex::default(); LENGTH];

        fft6_interleaved_32(&input, &mut output).unwrap();

        assert_float_closeness(output[0].re, 21.0, 1e-5);
        assert_float_closeness(output[3].re, -3.0, 1e-5);
        assert_float_closeness(output[3].im, 0.0, 1e-5);
    }

    #[test]
    fn interleaved_errors() {
        let input = vec![Complex::new(1.0, 0.0); LENGTH + 1];
        let mut output = vec![Complex::default(); LENGTH + 1];
        assert_eq!(
            fft6_interleaved_64(&input, &mut output),
            Err(Dft6Error::InputBufferSize)
        );

        let input = vec![Complex::new(1.0, 0.0); LENGTH];
        let mut output = vec![Complex::default(); LENGTH - 1];
        assert_eq!(
            fft6_interleaved_64(&input, &mut output),
            Err(Dft6Error::OutputBufferSize)
        );

        let mut output: Vec<Complex<f64>> = vec![];
        assert_eq!(fft6_interleaved_64(&[], &mut output), Ok(()));
    }
}
