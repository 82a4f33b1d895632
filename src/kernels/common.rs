//! Common Arithmetic
//!
//! Scalar primitives shared by both numeric strategies of the codelets.
//!
//! Addition, subtraction, multiplication and negation are the plain [`Float`] operators.
//! The only operations whose instruction selection differs between strategies are the
//! scale-and-accumulate ones, which go through the [`Arithmetic`] trait:
//!
//! - [`Fused`] lowers them to `mul_add`, a single rounding step
//! - [`Plain`] computes the product first and then adds or subtracts it
//!
use num_traits::Float;

use crate::options::Strategy;

/// `1/2`, the magnitude of the real part of the non-trivial cube roots of unity
#[inline(always)]
pub(crate) fn kp500000000<T: Float>() -> T {
    T::from(0.5).unwrap()
}

/// `√3/2`, the magnitude of the imaginary part of the non-trivial cube roots of unity
#[inline(always)]
pub(crate) fn kp866025403<T: Float>() -> T {
    T::from(0.866_025_403_784_438_646_763_723_170_752_936_183_471_402_627_f64).unwrap()
}

/// Scale-and-accumulate primitives, realized either fused or as separate operations.
pub trait Arithmetic {
    /// The variant tag reported to the planner for kernels built on this arithmetic
    const STRATEGY: Strategy;

    /// `a * b + c`
    fn fma<T: Float>(a: T, b: T, c: T) -> T;

    /// `c - a * b`
    fn fnms<T: Float>(a: T, b: T, c: T) -> T;

    /// Applies `±k` to `d` around `mid`, returning `(mid + k * d, mid - k * d)`
    fn rotate<T: Float>(k: T, d: T, mid: T) -> (T, T);
}

/// Arithmetic for targets where fused multiply-add is the preferred instruction
#[derive(Debug, Copy, Clone)]
pub struct Fused;

/// Arithmetic for targets without (fast) fused multiply-add
#[derive(Debug, Copy, Clone)]
pub struct Plain;

impl Arithmetic for Fused {
    const STRATEGY: Strategy = Strategy::Fused;

    #[inline(always)]
    fn fma<T: Float>(a: T, b: T, c: T) -> T {
        a.mul_add(b, c)
    }

    #[inline(always)]
    fn fnms<T: Float>(a: T, b: T, c: T) -> T {
        (-a).mul_add(b, c)
    }

    #[inline(always)]
    fn rotate<T: Float>(k: T, d: T, mid: T) -> (T, T) {
        (Self::fma(k, d, mid), Self::fnms(k, d, mid))
    }
}

impl Arithmetic for Plain {
    const STRATEGY: Strategy = Strategy::Plain;

    #[inline(always)]
    fn fma<T: Float>(a: T, b: T, c: T) -> T {
        a * b + c
    }

    #[inline(always)]
    fn fnms<T: Float>(a: T, b: T, c: T) -> T {
        c - a * b
    }

    #[inline(always)]
    fn rotate<T: Float>(k: T, d: T, mid: T) -> (T, T) {
        // the scaled term is shared by both outputs
        let scaled = k * d;
        (mid + scaled, mid - scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_cube_root_parts() {
        let root_re = (2.0 * std::f64::consts::PI / 3.0).cos();
        let root_im = (2.0 * std::f64::consts::PI / 3.0).sin();

        assert_eq!(kp500000000::<f64>(), 0.5);
        assert!((kp500000000::<f64>() + root_re).abs() < 1e-15);
        assert!((kp866025403::<f64>() - root_im).abs() < 1e-15);
        assert_eq!(kp866025403::<f64>(), 3.0_f64.sqrt() / 2.0);
        assert!((kp866025403::<f32>() - 3.0_f32.sqrt() / 2.0).abs() <= f32::EPSILON);
    }

    #[test]
    fn fused_and_plain_agree_on_exact_values() {
        // all operands and results below are exactly representable
        assert_eq!(Fused::fma(2.0, 3.0, 1.0), 7.0);
        assert_eq!(Plain::fma(2.0, 3.0, 1.0), 7.0);
        assert_eq!(Fused::fnms(0.5, 4.0, 1.0), -1.0);
        assert_eq!(Plain::fnms(0.5, 4.0, 1.0), -1.0);
        assert_eq!(Fused::rotate(0.25, 8.0, 1.0), (3.0, -1.0));
        assert_eq!(Plain::rotate(0.25, 8.0, 1.0), (3.0, -1.0));
    }

    #[test]
    fn fused_rounds_once() {
        // (1 + eps) * (1 - eps) = 1 - eps^2, which is lost when the product is rounded first
        let eps = f64::EPSILON;
        let fused = Fused::fma(1.0 + eps, 1.0 - eps, -1.0);
        let plain = Plain::fma(1.0 + eps, 1.0 - eps, -1.0);
        assert_eq!(fused, -eps * eps);
        assert_eq!(plain, 0.0);
    }

    #[test]
    fn strategy_tags() {
        assert_eq!(Fused::STRATEGY, Strategy::Fused);
        assert_eq!(Plain::STRATEGY, Strategy::Plain);
    }
}
