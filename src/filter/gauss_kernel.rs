use crate::{Float,float};
use float::consts::PI;
use super::kernel::Kernel;

/// Sampled 1D Gaussian with `radius = ceil(3*sigma)`, at least 1. Coefficients sum to 1.
#[derive(Debug,Clone)]
pub struct GaussKernel1D {
    kernel: Vec<Float>,
    sigma: Float
}

impl GaussKernel1D {
    fn sample(mean: Float, std: Float, x:Float) -> Float {
        let exponent = (-0.5*((x-mean)/std).powi(2)).exp();
        let factor = 1.0/(std*(2.0*PI).sqrt());
        factor*exponent
    }

    pub fn radius_for_sigma(sigma: Float) -> usize {
        ((3.0*sigma).ceil() as usize).max(1)
    }

    pub fn new(sigma: Float) -> GaussKernel1D {
        assert!(sigma.is_finite() && sigma > 0.0, "sigma must be > 0 and finite, got: {}", sigma);

        let radius = GaussKernel1D::radius_for_sigma(sigma) as isize;
        let mut kernel: Vec<Float> = (-radius..radius+1).map(|x| GaussKernel1D::sample(0.0,sigma,x as Float)).collect();
        let sum: Float = kernel.iter().sum();
        for v in kernel.iter_mut() {
            *v /= sum;
        }

        GaussKernel1D { kernel, sigma }
    }

    pub fn sigma(&self) -> Float {
        self.sigma
    }
}

impl Kernel for GaussKernel1D {
    fn kernel(&self) -> &[Float] {
        &self.kernel
    }

    fn normalizing_constant(&self) -> Float{
        1.0
    }
}
