use serde::{Serialize, Deserialize};

use crate::image::Image;
use crate::{Float,GradientDirection,Result};
use self::kernel::Kernel;

pub mod kernel;
pub mod gauss_kernel;
pub mod gaussian_blur;

/// How samples outside of the image are treated during convolution
#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
pub enum BorderMode {
    /// Edge pixels are repeated
    Clamp,
    /// Only weights inside the image contribute, the result is divided by their sum
    Normalized
}

impl Default for BorderMode {
    fn default() -> Self {
        BorderMode::Normalized
    }
}

pub fn filter_1d_convolution(source: &Image, filter_direction: GradientDirection, filter_kernel: &dyn Kernel, border: BorderMode, target: &mut Image) -> Result<()> {
    Image::check_shape(source, target)?;

    let kernel = filter_kernel.kernel();
    let kernel_radius_signed = filter_kernel.radius() as isize;
    let buffer = &source.buffer;
    let width = buffer.ncols();
    let height = buffer.nrows();

    let (len, line_count) = match filter_direction {
        GradientDirection::HORIZONTAL => (width, height),
        GradientDirection::VERTICAL => (height, width)
    };

    for line in 0..line_count {
        for i in 0..len {
            let mut acc = 0.0;
            let mut weight = 0.0;
            for kernel_idx in -kernel_radius_signed..kernel_radius_signed+1 {
                let kernel_value = kernel[(kernel_idx + kernel_radius_signed) as usize];
                let sample_idx = (i as isize) + kernel_idx;
                let sample_idx = match border {
                    BorderMode::Clamp => sample_idx.max(0).min(len as isize - 1) as usize,
                    BorderMode::Normalized => {
                        if sample_idx < 0 || sample_idx >= len as isize {
                            continue;
                        }
                        sample_idx as usize
                    }
                };

                let sample_value = match filter_direction {
                    GradientDirection::HORIZONTAL => buffer[(line,sample_idx)],
                    GradientDirection::VERTICAL => buffer[(sample_idx,line)]
                };

                acc += sample_value*kernel_value;
                weight += kernel_value;
            }

            let value: Float = match border {
                BorderMode::Clamp => acc/filter_kernel.normalizing_constant(),
                BorderMode::Normalized => acc/weight
            };

            match filter_direction {
                GradientDirection::HORIZONTAL => target.buffer[(line,i)] = value,
                GradientDirection::VERTICAL => target.buffer[(i,line)] = value
            };
        }
    }

    Ok(())
}
