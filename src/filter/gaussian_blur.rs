use tracing::trace;

use crate::image::{Image,image_encoding::ImageEncoding};
use crate::{Float,GradientDirection,Result,ScaleSpaceError};
use super::{BorderMode,filter_1d_convolution,gauss_kernel::GaussKernel1D};

/// Blur primitive consumed by the scale space.
pub trait Blur {
    /// Writes `input` blurred by a Gaussian of `sigma` into `output`. Both have to share dimensions.
    fn blur(&mut self, input: &Image, output: &mut Image, sigma: Float) -> Result<()>;
}

/// Separable Gaussian blur. The horizontal pass is written into `storage`, the vertical pass into the output.
#[derive(Debug,Clone)]
pub struct GaussianBlur {
    storage: Image,
    border: BorderMode
}

impl GaussianBlur {
    pub fn new(border: BorderMode) -> GaussianBlur {
        GaussianBlur { storage: Image::zeros(0, 0, ImageEncoding::F64), border }
    }

    pub fn border(&self) -> BorderMode {
        self.border
    }
}

impl Default for GaussianBlur {
    fn default() -> Self {
        GaussianBlur::new(BorderMode::default())
    }
}

impl Blur for GaussianBlur {
    fn blur(&mut self, input: &Image, output: &mut Image, sigma: Float) -> Result<()> {
        Image::check_shape(input, output)?;
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(ScaleSpaceError::Configuration(format!("blur sigma must be > 0 and finite, got: {}", sigma)));
        }

        let kernel = GaussKernel1D::new(sigma);
        trace!(sigma, radius = GaussKernel1D::radius_for_sigma(sigma), width = input.width(), height = input.height(), "gaussian blur");

        self.storage.reshape(input.width(), input.height());
        filter_1d_convolution(input, GradientDirection::HORIZONTAL, &kernel, self.border, &mut self.storage)?;
        filter_1d_convolution(&self.storage, GradientDirection::VERTICAL, &kernel, self.border, output)
    }
}
