//! Padding arithmetic for dilated same-style convolutions.

/// Computes the symmetric zero padding that keeps a stride-1 convolution's
/// output at the spatial size of its input.
///
/// Axes are ordered depth, height, width. Each axis is handled
/// independently: the padding is half the effective kernel extent
/// `(kernel - 1) * dilation + 1`, rounded down.
///
/// When the effective extent is odd the output size matches the input size
/// exactly at stride 1. When it is even, the total applied padding exceeds
/// `extent - 1` by one and the output gains one element on that axis. Callers
/// needing exact size preservation must pick odd effective extents.
///
/// All components of `kernel_size` and `dilation` must be positive;
/// [`Conv3dSameConfig::init`](crate::Conv3dSameConfig::init) enforces this
/// before calling in.
pub fn same_padding(kernel_size: [usize; 3], dilation: [usize; 3]) -> [usize; 3] {
    let pad = |axis: usize| ((kernel_size[axis] - 1) * dilation[axis] + 1) / 2;
    [pad(0), pad(1), pad(2)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_kernel_needs_no_padding() {
        assert_eq!(same_padding([1, 1, 1], [1, 1, 1]), [0, 0, 0]);
    }

    #[test]
    fn odd_kernels() {
        assert_eq!(same_padding([3, 3, 3], [1, 1, 1]), [1, 1, 1]);
        assert_eq!(same_padding([3, 5, 7], [1, 1, 1]), [1, 2, 3]);
    }

    #[test]
    fn even_kernels_round_down() {
        assert_eq!(same_padding([2, 2, 2], [1, 1, 1]), [1, 1, 1]);
        assert_eq!(same_padding([4, 4, 4], [1, 1, 1]), [2, 2, 2]);
    }

    #[test]
    fn dilation_widens_the_effective_extent() {
        // extent (3 - 1) * 2 + 1 = 5
        assert_eq!(same_padding([3, 3, 3], [2, 2, 2]), [2, 2, 2]);
        // extent (3 - 1) * 3 + 1 = 7
        assert_eq!(same_padding([3, 3, 3], [3, 3, 3]), [3, 3, 3]);
        // dilation is irrelevant for a unit kernel
        assert_eq!(same_padding([1, 1, 1], [4, 4, 4]), [0, 0, 0]);
    }

    #[test]
    fn axes_are_independent() {
        assert_eq!(same_padding([1, 3, 4], [1, 1, 1]), [0, 1, 2]);
        assert_eq!(same_padding([3, 3, 3], [1, 2, 3]), [1, 2, 3]);
    }
}
