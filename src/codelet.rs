//! Registration of the length-6 codelet with a planner.
//!
//! A planner that combines fixed-size kernels into transforms of arbitrary length needs two
//! things from each of them: the function to call, and a passive description of what it
//! computes and how much it costs. This module provides both, plus the per-precision cache of
//! which numeric strategy is in use.
use std::sync::OnceLock;

use num_traits::Float;

use crate::kernels::n1_6::{n1_6_fused, n1_6_plain};
use crate::layout::Strides;
use crate::options::{Options, Strategy};
use crate::LENGTH;

/// The invocation contract: `(ri, ii, ro, io, strides, v)`, one forward length-6 DFT per batch
/// element, no return value.
pub type Kernel<T> = fn(&[T], &[T], &mut [T], &mut [T], Strides, usize);

/// Floating-point operation counts of one transform
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OpCount {
    pub add: u32,
    pub mul: u32,
    pub fma: u32,
    pub other: u32,
}

/// Tag shared by all codelets of one kind, used by the planner to group them
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct KernelFamily {
    pub name: &'static str,
    /// Number of transforms computed side by side per invocation lane
    pub vector_length: usize,
}

/// Scalar no-twiddle complex DFT codelets
pub static GENUS: KernelFamily = KernelFamily {
    name: "dft-scalar-notw",
    vector_length: 1,
};

/// Passive description of a codelet, consumed by the planner's selection heuristic.
///
/// The trailing strides are reserved for the planner; `0` means the codelet accepts any stride.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct KernelDesc {
    pub size: usize,
    pub name: &'static str,
    pub ops: OpCount,
    pub family: &'static KernelFamily,
    pub is: usize,
    pub os: usize,
    pub ivs: usize,
    pub ovs: usize,
}

pub static DESC_FUSED: KernelDesc = KernelDesc {
    size: LENGTH,
    name: "n1_6",
    ops: OpCount {
        add: 24,
        mul: 0,
        fma: 12,
        other: 0,
    },
    family: &GENUS,
    is: 0,
    os: 0,
    ivs: 0,
    ovs: 0,
};

pub static DESC_PLAIN: KernelDesc = KernelDesc {
    size: LENGTH,
    name: "n1_6",
    ops: OpCount {
        add: 32,
        mul: 4,
        fma: 4,
        other: 0,
    },
    family: &GENUS,
    is: 0,
    os: 0,
    ivs: 0,
    ovs: 0,
};

/// The descriptor matching the kernel compiled for `strategy`
pub fn descriptor(strategy: Strategy) -> &'static KernelDesc {
    match strategy {
        Strategy::Fused => &DESC_FUSED,
        Strategy::Plain => &DESC_PLAIN,
    }
}

/// The kernel implementing `strategy` in precision `T`
pub fn kernel_for<T: Float>(strategy: Strategy) -> Kernel<T> {
    match strategy {
        Strategy::Fused => n1_6_fused::<T>,
        Strategy::Plain => n1_6_plain::<T>,
    }
}

/// A strategy resolved to its kernel and descriptor
pub struct Selection<T> {
    pub strategy: Strategy,
    pub kernel: Kernel<T>,
    pub desc: &'static KernelDesc,
}

impl<T: Float> Selection<T> {
    pub fn new(options: &Options) -> Self {
        Self {
            strategy: options.strategy,
            kernel: kernel_for::<T>(options.strategy),
            desc: descriptor(options.strategy),
        }
    }
}

/// Precisions the codelet is provided in.
pub trait Codelet: Float + Send + Sync + 'static {
    /// The kernel used when no [`Options`] are given.
    ///
    /// Resolved from [`Options::guess_options`] on first use and cached for the lifetime of
    /// the process.
    fn selected() -> &'static Selection<Self>;
}

macro_rules! impl_codelet_for {
    ($precision:ty) => {
        impl Codelet for $precision {
            fn selected() -> &'static Selection<$precision> {
                static SELECTED: OnceLock<Selection<$precision>> = OnceLock::new();
                SELECTED.get_or_init(|| Selection::new(&Options::guess_options()))
            }
        }
    };
}

impl_codelet_for!(f64);
impl_codelet_for!(f32);

/// Receives codelets at initialization time. Implemented by the planner.
pub trait KernelRegistry<T> {
    fn register(&mut self, kernel: Kernel<T>, desc: &'static KernelDesc);
}

/// Hands the length-6 codelet, with the cached strategy, to `registry`.
pub fn register_n1_6<T: Codelet, R: KernelRegistry<T>>(registry: &mut R) {
    let selected = T::selected();
    registry.register(selected.kernel, selected.desc);
}

/// Hands the length-6 codelet, with the strategy from `options`, to `registry`.
pub fn register_n1_6_with_opts<T: Codelet, R: KernelRegistry<T>>(
    registry: &mut R,
    options: &Options,
) {
    let selection = Selection::<T>::new(options);
    registry.register(selection.kernel, selection.desc);
}

/// A minimal registry for callers without a planner of their own.
pub struct Registry<T> {
    entries: Vec<(Kernel<T>, &'static KernelDesc)>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The first registered codelet of transform length `size`
    pub fn find(&self, size: usize) -> Option<(Kernel<T>, &'static KernelDesc)> {
        self.entries
            .iter()
            .find(|(_, desc)| desc.size == size)
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &'static KernelDesc> + '_ {
        self.entries.iter().map(|(_, desc)| *desc)
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KernelRegistry<T> for Registry<T> {
    fn register(&mut self, kernel: Kernel<T>, desc: &'static KernelDesc) {
        self.entries.push((kernel, desc));
    }
}

#[cfg(test)]
mod tests {
    use utilities::assert_float_closeness;

    use super::*;

    #[test]
    fn descriptor_contents() {
        for strategy in [Strategy::Fused, Strategy::Plain] {
            let desc = descriptor(strategy);
            assert_eq!(desc.size, 6);
            assert_eq!(desc.name, "n1_6");
            assert!(std::ptr::eq(desc.family, &GENUS));
            assert_eq!((desc.is, desc.os, desc.ivs, desc.ovs), (0, 0, 0, 0));
        }

        assert_eq!(
            DESC_FUSED.ops,
            OpCount {
                add: 24,
                mul: 0,
                fma: 12,
                other: 0
            }
        );
        assert_eq!(
            DESC_PLAIN.ops,
            OpCount {
                add: 32,
                mul: 4,
                fma: 4,
                other: 0
            }
        );
    }

    #[test]
    fn additions_match_across_variants() {
        // a fused op is one multiply and one add
        let total = |ops: OpCount| (ops.add + ops.fma, ops.mul + ops.fma);
        assert_eq!(total(DESC_FUSED.ops), (36, 12));
        assert_eq!(total(DESC_PLAIN.ops), (36, 8));
    }

    #[test]
    fn selection_is_cached() {
        let first = f64::selected();
        let second = f64::selected();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.strategy, Options::guess_options().strategy);
        assert!(std::ptr::eq(first.desc, descriptor(first.strategy)));
    }

    #[test]
    fn precisions_are_cached_independently() {
        assert_eq!(f32::selected().strategy, f64::selected().strategy);
        assert!(!std::ptr::eq(
            f32::selected() as *const _ as *const u8,
            f64::selected() as *const _ as *const u8
        ));
    }

    #[test]
    fn register_selected() {
        let mut registry = Registry::<f64>::new();
        assert!(registry.is_empty());
        assert!(registry.find(6).is_none());

        register_n1_6(&mut registry);
        assert_eq!(registry.len(), 1);
        assert!(registry.find(5).is_none());

        let (kernel, desc) = registry.find(6).unwrap();
        assert!(std::ptr::eq(desc, f64::selected().desc));

        let reals = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let imags = [0.0; 6];
        let (mut out_re, mut out_im) = ([0.0; 6], [0.0; 6]);
        kernel(
            &reals,
            &imags,
            &mut out_re,
            &mut out_im,
            Strides::contiguous(),
            1,
        );
        assert_float_closeness(out_re[0], 21.0, 1e-12);
        assert_float_closeness(out_re[3], -3.0, 1e-12);
    }

    #[test]
    fn register_with_options() {
        let mut registry = Registry::<f32>::default();
        register_n1_6_with_opts(&mut registry, &Options::with_strategy(Strategy::Plain));
        register_n1_6_with_opts(&mut registry, &Options::with_strategy(Strategy::Fused));

        let descs: Vec<_> = registry.descriptors().collect();
        assert!(std::ptr::eq(descs[0], &DESC_PLAIN));
        assert!(std::ptr::eq(descs[1], &DESC_FUSED));

        // first match wins
        let (_, desc) = registry.find(6).unwrap();
        assert!(std::ptr::eq(desc, &DESC_PLAIN));
    }

    struct Counting(usize);

    impl KernelRegistry<f64> for Counting {
        fn register(&mut self, _kernel: Kernel<f64>, desc: &'static KernelDesc) {
            assert_eq!(desc.size, 6);
            self.0 += 1;
        }
    }

    #[test]
    fn custom_registry() {
        let mut registry = Counting(0);
        register_n1_6(&mut registry);
        register_n1_6_with_opts(&mut registry, &Options::default());
        assert_eq!(registry.0, 2);
    }
}
