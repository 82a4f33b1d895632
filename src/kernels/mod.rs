//! DFT Codelet Kernels
//!
//! This module contains the fixed-size butterfly kernels. Each kernel exists once per numeric
//! strategy (fused multiply-add preferred, or plain), and each of those is compiled for several
//! CPU feature levels with the best one picked at runtime.
//!
//! ## Organization
//!
//! - `common`: Arithmetic primitives and the strategy seam shared by all kernels
//! - `n1_6`: No-twiddle complex DFT of length 6

pub mod common;
pub mod n1_6;
