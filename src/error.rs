/// Errors the checked entry points can return.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dft6Error {
    /// An input buffer is too small for the requested strides and batch count.
    InputBufferSize,
    /// An output buffer is too small for the requested strides and batch count.
    OutputBufferSize,
}

impl core::fmt::Display for Dft6Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InputBufferSize => "Input buffer size is too small".fmt(f),
            Self::OutputBufferSize => "Output buffer size is too small".fmt(f),
        }
    }
}

impl core::fmt::Debug for Dft6Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

impl std::error::Error for Dft6Error {}
