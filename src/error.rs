use thiserror::Error;

/// Invalid layer specification reported when building a
/// [`Conv3dSame`](crate::Conv3dSame) module.
///
/// Every component of the kernel size, stride and dilation, as well as both
/// channel counts, must be positive. These are construction-time failures;
/// a successfully built module never fails on them at forward time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSpecError {
    #[error("kernel size components must be positive, got {0:?}")]
    KernelSize([usize; 3]),
    #[error("stride components must be positive, got {0:?}")]
    Stride([usize; 3]),
    #[error("dilation components must be positive, got {0:?}")]
    Dilation([usize; 3]),
    #[error("channel counts must be positive, got in={in_channels}, out={out_channels}")]
    Channels {
        in_channels: usize,
        out_channels: usize,
    },
}
