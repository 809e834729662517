//! Same-padded 3D convolution for [burn](https://github.com/tracel-ai/burn).
//!
//! [`Conv3dSame`] wraps [`burn::nn::conv::Conv3d`] and derives its symmetric
//! zero padding from the kernel size and dilation when the module is created:
//!
//! ```text
//! padding = ((kernel - 1) * dilation + 1) / 2    per axis, floored
//! ```
//!
//! At stride 1 and odd effective kernel extent `(kernel - 1) * dilation + 1`,
//! the output spatial shape equals the input spatial shape. The padding is
//! fixed at construction and independent of the input size, which matches the
//! convention used by reference weights trained with input-agnostic same
//! padding.
//!
//! ```ignore
//! use burn::backend::NdArray;
//! use burn_conv3d_same::Conv3dSameConfig;
//!
//! let device = Default::default();
//! let conv = Conv3dSameConfig::new([4, 6], [3, 3, 3]).init::<NdArray>(&device)?;
//! // input [2, 4, 8, 8, 8] -> output [2, 6, 8, 8, 8]
//! let output = conv.forward(input);
//! ```

mod conv;
mod error;
mod padding;

pub use conv::{Conv3dSame, Conv3dSameConfig};
pub use error::InvalidSpecError;
pub use padding::same_padding;
