use burn::{
    config::Config,
    module::Module,
    nn::{
        conv::{Conv3d, Conv3dConfig},
        Initializer, PaddingConfig3d,
    },
    tensor::{backend::Backend, Tensor},
};

use crate::{error::InvalidSpecError, padding::same_padding};

/// Configuration to create a [`Conv3dSame`] layer, using the
/// [`init`](Conv3dSameConfig::init) function.
///
/// The padding is not configurable: it is derived from `kernel_size` and
/// `dilation` by [`same_padding`] when the layer is created.
#[derive(Config, Debug)]
pub struct Conv3dSameConfig {
    /// The number of input and output channels.
    pub channels: [usize; 2],
    /// The size of the kernel on the depth, height and width axes.
    pub kernel_size: [usize; 3],
    /// The stride of the convolution.
    #[config(default = "[1, 1, 1]")]
    pub stride: [usize; 3],
    /// Spacing between kernel elements.
    #[config(default = "[1, 1, 1]")]
    pub dilation: [usize; 3],
    /// If bias should be added to the output.
    #[config(default = true)]
    pub bias: bool,
    /// The type of function used to initialize the weight and bias parameters.
    #[config(
        default = "Initializer::KaimingUniform{gain:1.0/3.0f64.sqrt(),fan_out_only:false}"
    )]
    pub initializer: Initializer,
}

impl Conv3dSameConfig {
    /// Initialize a new [`Conv3dSame`] module.
    ///
    /// Computes the per-axis padding once and allocates the inner [`Conv3d`]
    /// with it. Fails with [`InvalidSpecError`] when a channel count or any
    /// component of `kernel_size`, `stride` or `dilation` is zero.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Result<Conv3dSame<B>, InvalidSpecError> {
        let [in_channels, out_channels] = self.channels;
        if in_channels == 0 || out_channels == 0 {
            return Err(InvalidSpecError::Channels {
                in_channels,
                out_channels,
            });
        }
        if self.kernel_size.contains(&0) {
            return Err(InvalidSpecError::KernelSize(self.kernel_size));
        }
        if self.stride.contains(&0) {
            return Err(InvalidSpecError::Stride(self.stride));
        }
        if self.dilation.contains(&0) {
            return Err(InvalidSpecError::Dilation(self.dilation));
        }

        let [pad_d, pad_h, pad_w] = same_padding(self.kernel_size, self.dilation);
        let conv = Conv3dConfig::new(self.channels, self.kernel_size)
            .with_stride(self.stride)
            .with_dilation(self.dilation)
            .with_padding(PaddingConfig3d::Explicit(pad_d, pad_h, pad_w))
            .with_bias(self.bias)
            .with_initializer(self.initializer.clone())
            .init(device);

        Ok(Conv3dSame { conv })
    }
}

/// A 3D convolution whose symmetric zero padding keeps the output at the
/// input's spatial size for stride-1 convolutions with odd effective kernel
/// extents.
///
/// Unlike an input-dependent same padding, the padding here is a pure
/// function of the kernel size and dilation, fixed when the module is
/// created. An even effective extent makes the stride-1 output one element
/// longer than the input on that axis; this rounding is part of the layer's
/// numerical contract and is kept as is.
///
/// Should be created with [`Conv3dSameConfig`].
#[derive(Module, Debug)]
pub struct Conv3dSame<B: Backend> {
    /// The inner convolution, configured with the derived padding. Owns the
    /// weight `[out_channels, in_channels, k_d, k_h, k_w]` and optional bias
    /// `[out_channels]`.
    pub conv: Conv3d<B>,
}

impl<B: Backend> Conv3dSame<B> {
    /// Applies the convolution to an input of shape
    /// `[batch, channels, depth, height, width]`.
    ///
    /// The output spatial size on each axis is
    /// `(in + 2 * padding - dilation * (kernel - 1) - 1) / stride + 1`.
    /// A channel-count or rank mismatch is reported by the backend's shape
    /// checks; no validation happens here.
    pub fn forward(&self, input: Tensor<B, 5>) -> Tensor<B, 5> {
        let _span = tracing::trace_span!("conv3d_same").entered();
        self.conv.forward(input)
    }
}
