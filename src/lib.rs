//! A fixed-size complex DFT codelet of length 6.
//!
//! The codelet computes `X[k] = Σ x[n] * exp(-2πi * k * n / 6)` for a batch of sequences held in
//! split-complex form: real and imaginary parts live in separate slices, addressed with
//! arbitrary element and batch strides (see [`Strides`]). It is meant to be registered with, and
//! called by, a planner that composes fixed-size kernels into transforms of arbitrary length
//! (see [`codelet`]).
//!
//! Two instruction sequences compute the transform, one built on fused multiply-add and one on
//! plain multiplications. The one to use is picked once per process, see [`Options`].
//!
//! ```
//! use dft6::{fft6_64, Strides};
//!
//! let reals = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let imags = [0.0; 6];
//! let (mut out_re, mut out_im) = ([0.0; 6], [0.0; 6]);
//!
//! fft6_64(&reals, &imags, &mut out_re, &mut out_im, Strides::contiguous(), 1).unwrap();
//! assert!((out_re[0] - 21.0).abs() < 1e-12);
//! ```
use crate::codelet::{kernel_for, Codelet};

mod bencher;
pub mod codelet;
mod error;
pub mod kernels;
mod layout;
pub mod options;
#[cfg(feature = "complex-nums")]
mod utils;

pub use crate::error::Dft6Error;
pub use crate::layout::Strides;
pub use crate::options::{Options, Strategy};
#[cfg(feature = "complex-nums")]
pub use crate::utils::{fft6_interleaved_32, fft6_interleaved_64};

/// Transform length of the codelet
pub const LENGTH: usize = 6;

macro_rules! impl_fft6_for {
    ($func_name:ident, $opts_func_name:ident, $precision:ty) => {
        /// Forward length-6 DFT of `v` strided, split-complex sequences
        ///
        /// Uses the strategy cached for this precision, see [`Codelet::selected`].
        ///
        /// # Errors
        ///
        /// Returns an error if any slice is too short for `v` sequences at the given strides.
        /// Nothing is written in that case.
        pub fn $func_name(
            reals_in: &[$precision],
            imags_in: &[$precision],
            reals_out: &mut [$precision],
            imags_out: &mut [$precision],
            strides: Strides,
            v: usize,
        ) -> Result<(), Dft6Error> {
            strides.check(
                v,
                reals_in.len().min(imags_in.len()),
                reals_out.len().min(imags_out.len()),
            )?;
            let kernel = <$precision as Codelet>::selected().kernel;
            kernel(reals_in, imags_in, reals_out, imags_out, strides, v);
            Ok(())
        }

        /// Forward length-6 DFT of `v` strided, split-complex sequences with an explicit
        /// strategy
        ///
        /// # Errors
        ///
        /// Returns an error if any slice is too short for `v` sequences at the given strides.
        /// Nothing is written in that case.
        pub fn $opts_func_name(
            reals_in: &[$precision],
            imags_in: &[$precision],
            reals_out: &mut [$precision],
            imags_out: &mut [$precision],
            strides: Strides,
            v: usize,
            opts: &Options,
        ) -> Result<(), Dft6Error> {
            strides.check(
                v,
                reals_in.len().min(imags_in.len()),
                reals_out.len().min(imags_out.len()),
            )?;
            let kernel = kernel_for::<$precision>(opts.strategy);
            kernel(reals_in, imags_in, reals_out, imags_out, strides, v);
            Ok(())
        }
    };
}

impl_fft6_for!(fft6_64, fft6_64_with_opts, f64);
impl_fft6_for!(fft6_32, fft6_32_with_opts, f32);
