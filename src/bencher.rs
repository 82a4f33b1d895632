//! Benchmarks both numeric strategies and returns the fastest one on the current hardware

use std::hint::black_box;
use std::time::Instant;

use crate::codelet::{kernel_for, Codelet};
use crate::layout::Strides;
use crate::options::Strategy;
use crate::LENGTH;

/// Sequences per timed invocation
const BATCH: usize = 256;

/// Benchmarks the given strategies and returns the fastest
fn find_fastest_strategy<T: Codelet>(candidates: &[Strategy], iterations: usize) -> Strategy {
    let len = BATCH * LENGTH;
    let reals: Vec<T> = (0..len)
        .map(|i| T::from(i % 17).unwrap_or_else(T::zero))
        .collect();
    let imags: Vec<T> = (0..len)
        .map(|i| T::from(i % 13).unwrap_or_else(T::zero))
        .collect();
    let mut out_re = vec![T::zero(); len];
    let mut out_im = vec![T::zero(); len];

    let mut results = Vec::with_capacity(candidates.len());

    for strategy in candidates.iter() {
        let kernel = kernel_for::<T>(*strategy);

        // Warm-up run
        kernel(
            &reals,
            &imags,
            &mut out_re,
            &mut out_im,
            Strides::contiguous(),
            BATCH,
        );

        // Actual benchmark
        let start = Instant::now();
        for _ in 0..iterations {
            kernel(
                black_box(&reals),
                black_box(&imags),
                &mut out_re,
                &mut out_im,
                Strides::contiguous(),
                BATCH,
            );
            black_box((&out_re, &out_im));
        }
        let elapsed = start.elapsed().as_nanos();

        results.push((*strategy, elapsed));
    }

    results
        .iter()
        .min_by_key(|(_, time)| *time)
        .map(|(strategy, _)| *strategy)
        .unwrap_or_default()
}

pub fn measure_fastest_strategy<T: Codelet>() -> Strategy {
    let candidates = &[Strategy::Fused, Strategy::Plain];
    let iterations = 64;

    find_fastest_strategy::<T>(candidates, iterations)
}
