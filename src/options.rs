use crate::codelet::Codelet;

/// Options to pick the numeric strategy of the codelets.
///
/// Calling the codelets without specifying options uses a strategy chosen once per process
/// by probing the CPU, see [`Options::guess_options`].
///
/// You only need to set these if you are benchmarking a known hardware platform, or want the
/// output of one specific instruction sequence.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub strategy: Strategy,
}

impl Options {
    /// Options with an explicit strategy
    pub fn with_strategy(strategy: Strategy) -> Options {
        Options { strategy }
    }

    /// Picks the strategy from the capabilities of the running CPU.
    pub fn guess_options() -> Options {
        let mut options = Options::default();
        if fma_preferred() {
            options.strategy = Strategy::Fused;
        } else {
            options.strategy = Strategy::Plain;
        }
        options
    }

    /// Times both strategies in precision `T` and picks the faster one.
    ///
    /// This takes a few milliseconds. Use [`Self::guess_options`] if you don't need it.
    pub fn measure_options<T: Codelet>() -> Options {
        Options::with_strategy(crate::bencher::measure_fastest_strategy::<T>())
    }
}

/// The instruction sequence used for the constant rotations of a codelet.
/// Both produce the same transform up to floating-point rounding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    #[default]
    /// Scale with a separate multiplication, then add or subtract
    Plain,
    /// Scale and accumulate with fused multiply-add
    ///
    /// Only beneficial when the CPU executes `mul_add` as one instruction,
    /// otherwise it falls back to a slow software routine.
    Fused,
}

/// Whether the running CPU executes fused multiply-add natively
pub fn fma_preferred() -> bool {
    if cfg!(target_feature = "fma") {
        return true;
    }

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        std::arch::is_x86_feature_detected!("fma")
    }

    // FMA is part of the base instruction set
    #[cfg(target_arch = "aarch64")]
    {
        true
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
    {
        false
    }
}
