use tracing::{debug,info};

use crate::image::{Image,resample::upsample};
use crate::filter::gaussian_blur::{Blur,GaussianBlur};
use crate::{Float,Result,ScaleSpaceError};
use self::{scale_space_octave::ScaleSpaceOctave, scale_space_runtime_parameters::ScaleSpaceRuntimeParameters};

pub mod parameter_control;
pub mod scale_space_octave;
pub mod scale_space_runtime_parameters;

/// Smallest width and height an octave may have
pub const MIN_OCTAVE_DIMENSION: usize = 3;

#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum PyramidState {
    Uninitialized,
    OctaveReady,
    Exhausted
}

/// Scale space in which SIFT style detectors search for features.
///
/// Only one octave is held at a time. Each call to [`ScaleSpacePyramid::compute_next_octave`] halves the
/// resolution and overwrites all scales and difference of gaussians in place, so outputs have to be consumed
/// or cloned before moving on.
///
/// The sigma returned by [`ScaleSpacePyramid::compute_scale_sigma`] is always relative to the input image.
#[derive(Debug,Clone)]
pub struct ScaleSpacePyramid<B: Blur = GaussianBlur> {
    runtime_parameters: ScaleSpaceRuntimeParameters,
    octave: ScaleSpaceOctave,
    blur: B,
    // x = x'*pixel_scale where x is in the input image and x' is in the current octave
    pixel_scale: Float,
    // total blur of the first scale before any blur of the current octave was applied
    prior_sigma_first_scale: Float,
    octave_index: usize,
    feature_intensity_computed: bool,
    state: PyramidState
}

impl ScaleSpacePyramid<GaussianBlur> {
    pub fn new(runtime_parameters: ScaleSpaceRuntimeParameters) -> Result<ScaleSpacePyramid<GaussianBlur>> {
        let blur = GaussianBlur::new(runtime_parameters.border);
        ScaleSpacePyramid::with_blur(runtime_parameters, blur)
    }
}

impl<B: Blur> ScaleSpacePyramid<B> {

    pub fn with_blur(runtime_parameters: ScaleSpaceRuntimeParameters, blur: B) -> Result<ScaleSpacePyramid<B>> {
        runtime_parameters.validate()?;
        let octave = ScaleSpaceOctave::new(runtime_parameters.num_scales);
        Ok(ScaleSpacePyramid {
            runtime_parameters,
            octave,
            blur,
            pixel_scale: 1.0,
            prior_sigma_first_scale: 0.0,
            octave_index: 0,
            feature_intensity_computed: false,
            state: PyramidState::Uninitialized
        })
    }

    /// Builds the first octave from `input`. Any previous state is discarded.
    pub fn process(&mut self, input: &Image) -> Result<()> {
        let double_input_image = self.runtime_parameters.double_input_image;
        let factor = if double_input_image {2} else {1};
        let (width, height) = (input.width()*factor, input.height()*factor);
        if width < MIN_OCTAVE_DIMENSION || height < MIN_OCTAVE_DIMENSION {
            return Err(ScaleSpaceError::ImageTooSmall{width: input.width(), height: input.height()});
        }

        self.state = PyramidState::Uninitialized;
        self.feature_intensity_computed = false;
        self.prior_sigma_first_scale = 0.0;
        self.octave_index = 0;
        let sigma = self.runtime_parameters.base_sigma;

        self.octave.reshape(width, height);
        if double_input_image {
            self.pixel_scale = 0.5;
            let (first, second) = self.octave.first_two_scales_mut();
            upsample(input, second)?;
            self.blur.blur(second, first, sigma)?;
        } else {
            self.pixel_scale = 1.0;
            self.blur.blur(input, self.octave.first_scale_mut(), sigma)?;
        }

        self.construct_rest_of_octave()?;
        self.state = PyramidState::OctaveReady;
        Ok(())
    }

    /// Builds the next octave by sampling the second scale of the current one at half resolution.
    ///
    /// Returns `false` once the halved image would be smaller than 3x3. The last octave then stays readable
    /// and untouched, further calls keep returning `false`.
    pub fn compute_next_octave(&mut self) -> Result<bool> {
        match self.state {
            PyramidState::Uninitialized => return Err(ScaleSpaceError::NotProcessed),
            PyramidState::Exhausted => return Ok(false),
            PyramidState::OctaveReady => ()
        };

        let width = self.octave.width()/2;
        let height = self.octave.height()/2;
        if width < MIN_OCTAVE_DIMENSION || height < MIN_OCTAVE_DIMENSION {
            info!(octave = self.octave_index, width, height, "scale space exhausted");
            self.state = PyramidState::Exhausted;
            return Ok(false);
        }

        // the second scale seeds the next octave
        let prior_sigma_first_scale = self.compute_scale_sigma(1);

        // any failure past this point leaves the octave half written
        self.state = PyramidState::Uninitialized;
        self.feature_intensity_computed = false;
        self.octave.seed_from_second_scale(width, height)?;
        self.prior_sigma_first_scale = prior_sigma_first_scale;
        self.pixel_scale *= 2.0;
        self.octave_index += 1;

        self.construct_rest_of_octave()?;
        self.state = PyramidState::OctaveReady;
        Ok(true)
    }

    /// Total blur relative to the input image at `level` of the current octave
    pub fn compute_scale_sigma(&self, level: usize) -> Float {
        let b = self.pixel_scale*self.runtime_parameters.base_sigma*((level+1) as Float);
        (self.prior_sigma_first_scale.powi(2) + b.powi(2)).sqrt()
    }

    /// Difference of gaussians across the scales of the current octave, normalized to approximate the
    /// scale normalized laplacian of gaussian.
    pub fn compute_feature_intensity(&mut self) -> Result<()> {
        if self.state == PyramidState::Uninitialized {
            return Err(ScaleSpaceError::NotProcessed);
        }

        let sigma = self.runtime_parameters.base_sigma;
        for i in 1..self.octave.num_scales() {
            let k = ((i+1) as Float)/(i as Float);
            let adjustment = (k-1.0)*sigma*sigma;
            self.octave.compute_difference(i, adjustment)?;
        }
        self.feature_intensity_computed = true;
        Ok(())
    }

    fn construct_rest_of_octave(&mut self) -> Result<()> {
        let sigma = self.runtime_parameters.base_sigma;
        for i in 1..self.octave.num_scales() {
            // already applied
            let sigma_a = sigma*(i as Float);
            // desired at this scale
            let sigma_b = sigma*((i+1) as Float);
            let amount = (sigma_b.powi(2) - sigma_a.powi(2)).sqrt();

            let (previous, current) = self.octave.adjacent_scales_mut(i);
            self.blur.blur(previous, current, amount)?;
        }

        debug!(
            octave = self.octave_index,
            width = self.octave.width(),
            height = self.octave.height(),
            pixel_scale = self.pixel_scale,
            prior_sigma = self.prior_sigma_first_scale,
            "octave constructed"
        );
        Ok(())
    }

    pub fn scale(&self, i: usize) -> Option<&Image> {
        self.octave.scale(i)
    }

    /// Only meaningful after [`ScaleSpacePyramid::compute_feature_intensity`] on the current octave
    pub fn dog(&self, i: usize) -> Option<&Image> {
        self.octave.dog(i)
    }

    pub fn octave(&self) -> &ScaleSpaceOctave {
        &self.octave
    }

    pub fn pixel_scale(&self) -> Float {
        self.pixel_scale
    }

    pub fn prior_sigma_first_scale(&self) -> Float {
        self.prior_sigma_first_scale
    }

    pub fn width(&self) -> usize {
        self.octave.width()
    }

    pub fn height(&self) -> usize {
        self.octave.height()
    }

    pub fn num_scales(&self) -> usize {
        self.octave.num_scales()
    }

    pub fn octave_index(&self) -> usize {
        self.octave_index
    }

    pub fn state(&self) -> PyramidState {
        self.state
    }

    pub fn is_feature_intensity_computed(&self) -> bool {
        self.feature_intensity_computed
    }

    pub fn runtime_parameters(&self) -> &ScaleSpaceRuntimeParameters {
        &self.runtime_parameters
    }

    pub fn blur(&self) -> &B {
        &self.blur
    }

    /// Maps a pixel of the current octave back into the input image
    pub fn to_input_coordinates(&self, x: Float, y: Float) -> (Float, Float) {
        (x*self.pixel_scale, y*self.pixel_scale)
    }
}
