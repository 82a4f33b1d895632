//! No-twiddle DFT of length 6
//!
//! Computes `X[k] = Σ x[n] * exp(-2πi * k * n / 6)` for every sequence of a strided,
//! split-complex batch.
//!
//! The transform is factored as `6 = 2 * 3`. A radix-2 stage pairs the inputs three apart,
//! `(0, 3)`, `(2, 5)` and `(4, 1)`. The three sums and the three differences each go through a
//! radix-3 butterfly. The sums yield the even outputs `(X0, X4, X2)`, the differences yield the
//! odd outputs `(X3, X1, X5)`.
//!
//! Operation counts per sequence:
//!
//! | strategy | additions | multiplications | fused |
//! |----------|-----------|-----------------|-------|
//! | fused    | 24        | 0               | 12    |
//! | plain    | 32        | 4               | 4     |
//!
use num_traits::Float;

use crate::kernels::common::{kp500000000, kp866025403, Arithmetic, Fused, Plain};
use crate::layout::Strides;

#[derive(Copy, Clone)]
struct Sample<T> {
    re: T,
    im: T,
}

/// Sum and difference of two inputs three apart
#[inline(always)]
fn radix2<T: Float>(a: Sample<T>, b: Sample<T>) -> (Sample<T>, Sample<T>) {
    let sum = Sample {
        re: a.re + b.re,
        im: a.im + b.im,
    };
    let diff = Sample {
        re: a.re - b.re,
        im: a.im - b.im,
    };
    (sum, diff)
}

/// Radix-3 butterfly, returns `[y0, y1, y2]` with `y1 = a + ω b + ω² c` and
/// `y2 = a + ω² b + ω c` for `ω = exp(-2πi / 3)`, up to the ordering of `b` and `c` that the
/// radix-2 pairing produces.
#[inline(always)]
fn butterfly3<A: Arithmetic, T: Float>(
    a: Sample<T>,
    b: Sample<T>,
    c: Sample<T>,
) -> [Sample<T>; 3] {
    let half = kp500000000::<T>();
    let k = kp866025403::<T>();

    let sum_re = b.re + c.re;
    let sum_im = b.im + c.im;

    let y0 = Sample {
        re: a.re + sum_re,
        im: a.im + sum_im,
    };

    // a - sum / 2, the projection shared by both rotated outputs
    let mid_re = A::fnms(half, sum_re, a.re);
    let mid_im = A::fnms(half, sum_im, a.im);

    // -i * (b - c)
    let d_re = b.im - c.im;
    let d_im = c.re - b.re;

    let (plus_re, minus_re) = A::rotate(k, d_re, mid_re);
    let (plus_im, minus_im) = A::rotate(k, d_im, mid_im);

    [
        y0,
        Sample {
            re: plus_re,
            im: plus_im,
        },
        Sample {
            re: minus_re,
            im: minus_im,
        },
    ]
}

/// One length-6 transform, inputs and outputs in natural order
#[inline(always)]
fn dft6<A: Arithmetic, T: Float>(x: [Sample<T>; 6]) -> [Sample<T>; 6] {
    let (s0, d0) = radix2(x[0], x[3]);
    let (s1, d1) = radix2(x[2], x[5]);
    let (s2, d2) = radix2(x[4], x[1]);

    let [y0, y4, y2] = butterfly3::<A, T>(s0, s1, s2);
    let [y3, y1, y5] = butterfly3::<A, T>(d0, d1, d2);

    [y0, y1, y2, y3, y4, y5]
}

/// Batch loop shared by both strategies
///
/// # Panics
///
/// Panics if the strides address an element past the end of any of the slices.
#[inline(always)]
fn n1_6<A: Arithmetic, T: Float>(
    ri: &[T],
    ii: &[T],
    ro: &mut [T],
    io: &mut [T],
    strides: Strides,
    v: usize,
) {
    let Strides { is, os, ivs, ovs } = strides;

    for j in 0..v {
        let (ib, ob) = (j * ivs, j * ovs);

        let x: [Sample<T>; 6] = std::array::from_fn(|n| Sample {
            re: ri[ib + n * is],
            im: ii[ib + n * is],
        });

        for (n, y) in dft6::<A, T>(x).into_iter().enumerate() {
            ro[ob + n * os] = y.re;
            io[ob + n * os] = y.im;
        }
    }
}

/// Length-6 DFT, fused multiply-add variant
///
/// # Panics
///
/// Panics if the strides address an element past the end of any of the slices.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn n1_6_fused<T: Float>(
    ri: &[T],
    ii: &[T],
    ro: &mut [T],
    io: &mut [T],
    strides: Strides,
    v: usize,
) {
    n1_6::<Fused, T>(ri, ii, ro, io, strides, v);
}

/// Length-6 DFT, plain multiplication variant
///
/// # Panics
///
/// Panics if the strides address an element past the end of any of the slices.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn n1_6_plain<T: Float>(
    ri: &[T],
    ii: &[T],
    ro: &mut [T],
    io: &mut [T],
    strides: Strides,
    v: usize,
) {
    n1_6::<Plain, T>(ri, ii, ro, io, strides, v);
}
