//! Strided addressing of split-complex batches
//!
//! Element `n` of batch element `j` lives at index `j * ivs + n * is` of the input slices and at
//! `j * ovs + n * os` of the output slices. Real and imaginary parts share the same addressing
//! but live in separate slices, so interleaved storage is expressed by handing in two views of
//! one buffer offset by one element with doubled strides.
use crate::error::Dft6Error;
use crate::LENGTH;

/// Element and batch strides of one codelet invocation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Strides {
    /// Distance between consecutive input elements of one sequence
    pub is: usize,
    /// Distance between consecutive output elements of one sequence
    pub os: usize,
    /// Distance between the first input elements of consecutive sequences
    pub ivs: usize,
    /// Distance between the first output elements of consecutive sequences
    pub ovs: usize,
}

impl Strides {
    pub const fn new(is: usize, os: usize, ivs: usize, ovs: usize) -> Self {
        Self { is, os, ivs, ovs }
    }

    /// Sequences packed back to back, in and out
    pub const fn contiguous() -> Self {
        Self::new(1, 1, LENGTH, LENGTH)
    }

    /// Minimal input slice length covering `v` sequences, or `None` on overflow
    pub fn input_extent(&self, v: usize) -> Option<usize> {
        extent(self.is, self.ivs, v)
    }

    /// Minimal output slice length covering `v` sequences, or `None` on overflow
    pub fn output_extent(&self, v: usize) -> Option<usize> {
        extent(self.os, self.ovs, v)
    }

    /// Checks that every slice is long enough for `v` sequences.
    pub(crate) fn check(
        &self,
        v: usize,
        input_len: usize,
        output_len: usize,
    ) -> Result<(), Dft6Error> {
        match self.input_extent(v) {
            Some(needed) if needed <= input_len => {}
            _ => return Err(Dft6Error::InputBufferSize),
        }
        match self.output_extent(v) {
            Some(needed) if needed <= output_len => {}
            _ => return Err(Dft6Error::OutputBufferSize),
        }
        Ok(())
    }
}

impl Default for Strides {
    fn default() -> Self {
        Self::contiguous()
    }
}

fn extent(stride: usize, batch_stride: usize, v: usize) -> Option<usize> {
    if v == 0 {
        return Some(0);
    }
    let last_batch = (v - 1).checked_mul(batch_stride)?;
    let last_element = (LENGTH - 1).checked_mul(stride)?;
    last_batch.checked_add(last_element)?.checked_add(1)
}
