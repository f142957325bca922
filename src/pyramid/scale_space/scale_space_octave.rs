use crate::image::{Image,image_encoding::ImageEncoding,resample::downsample};
use crate::{Float,Result};

/// Buffers of the octave which is currently materialized.
/// All scales and difference of gaussians share the same dimensions.
#[derive(Debug,Clone,PartialEq)]
pub struct ScaleSpaceOctave {
    scales: Vec<Image>,
    difference_of_gaussians: Vec<Image>
}

impl ScaleSpaceOctave {

    pub fn new(num_scales: usize) -> ScaleSpaceOctave {
        let scales = (0..num_scales).map(|_| Image::zeros(0, 0, ImageEncoding::F64)).collect();
        let difference_of_gaussians = (0..num_scales.saturating_sub(1)).map(|_| Image::zeros(0, 0, ImageEncoding::F64)).collect();
        ScaleSpaceOctave {scales, difference_of_gaussians}
    }

    pub fn num_scales(&self) -> usize {
        self.scales.len()
    }

    pub fn width(&self) -> usize {
        self.scales[0].width()
    }

    pub fn height(&self) -> usize {
        self.scales[0].height()
    }

    pub fn scale(&self, i: usize) -> Option<&Image> {
        self.scales.get(i)
    }

    pub fn dog(&self, i: usize) -> Option<&Image> {
        self.difference_of_gaussians.get(i)
    }

    pub fn scales(&self) -> &[Image] {
        &self.scales
    }

    pub fn difference_of_gaussians(&self) -> &[Image] {
        &self.difference_of_gaussians
    }

    /// Resizes every buffer of the octave. Contents are unspecified afterwards.
    pub fn reshape(&mut self, width: usize, height: usize) {
        for image in self.scales.iter_mut().chain(self.difference_of_gaussians.iter_mut()) {
            image.reshape(width, height);
        }
    }

    pub(crate) fn first_scale_mut(&mut self) -> &mut Image {
        &mut self.scales[0]
    }

    /// `(scales[0], scales[1])` with the second one writable
    pub(crate) fn first_two_scales_mut(&mut self) -> (&mut Image, &mut Image) {
        let (first, rest) = self.scales.split_at_mut(1);
        (&mut first[0], &mut rest[0])
    }

    /// `(scales[i-1], scales[i])` with the latter writable
    pub(crate) fn adjacent_scales_mut(&mut self, i: usize) -> (&Image, &mut Image) {
        let (lower, upper) = self.scales.split_at_mut(i);
        (&lower[i-1], &mut upper[0])
    }

    /// Replaces the first scale with the second one sampled at half resolution and resizes the rest to match
    pub(crate) fn seed_from_second_scale(&mut self, width: usize, height: usize) -> Result<()> {
        let (first, second) = self.first_two_scales_mut();
        first.reshape(width, height);
        downsample(second, first)?;
        self.reshape(width, height);
        Ok(())
    }

    /// `dog[i-1] = (scales[i] - scales[i-1]) / adjustment`
    pub(crate) fn compute_difference(&mut self, i: usize, adjustment: Float) -> Result<()> {
        let dog = &mut self.difference_of_gaussians[i-1];
        Image::subtract(&self.scales[i], &self.scales[i-1], dog)?;
        dog.divide_by_scalar_mut(adjustment);
        Ok(())
    }
}
