extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::{GrayImage, DynamicImage, Pixel, Luma};
use na::DMatrix;

use crate::{Float,Result,ScaleSpaceError};
use self::image_encoding::ImageEncoding;

pub mod image_encoding;
pub mod resample;

/// Dense single channel image. Rows of `buffer` are indexed by `y`, columns by `x`.
#[derive(Debug,Clone,PartialEq)]
pub struct Image {
    pub buffer: DMatrix<Float>,
    pub original_encoding: ImageEncoding
}

impl Image {

    pub fn zeros(width: usize, height: usize, image_encoding: ImageEncoding) -> Image {
        Image{ buffer: DMatrix::<Float>::zeros(height,width), original_encoding: image_encoding}
    }

    /// Builds an image from row major data.
    pub fn from_vec(width: usize, height: usize, data: Vec<Float>) -> Result<Image> {
        if data.len() != width*height {
            return Err(ScaleSpaceError::SizeMismatch{expected: (width,height), actual: (data.len(),1)});
        }
        Ok(Image{ buffer: DMatrix::<Float>::from_row_slice(height,width,&data), original_encoding: ImageEncoding::F64})
    }

    pub fn from_gray_image(image: &GrayImage , normalize: bool) -> Image {
        let mut buffer = Image::image8_to_matrix(image);

        if normalize {
            let max = buffer.amax();
            if max > 0.0 {
                buffer /= max;
            }
        }

        Image{ buffer,original_encoding:  ImageEncoding::U8}
    }

    pub fn to_image(&self) -> GrayImage {
        Image::matrix_to_image(&self.buffer,  self.original_encoding)
    }

    pub fn width(&self) -> usize {
        self.buffer.ncols()
    }

    pub fn height(&self) -> usize {
        self.buffer.nrows()
    }

    pub fn dimensions(&self) -> (usize,usize) {
        (self.width(),self.height())
    }

    pub fn size(&self) -> usize {
        self.buffer.ncols()*self.buffer.nrows()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Float> {
        self.buffer.get((y,x)).copied()
    }

    pub fn set(&mut self, x: usize, y: usize, value: Float) -> Result<()> {
        match self.buffer.get_mut((y,x)) {
            Some(v) => {
                *v = value;
                Ok(())
            },
            None => Err(ScaleSpaceError::OutOfBounds{x,y})
        }
    }

    /// Panics if `(x,y)` lies outside of the image
    pub fn value(&self, x: usize, y: usize) -> Float {
        self.buffer[(y,x)]
    }

    /// Panics if `(x,y)` lies outside of the image
    pub fn value_mut(&mut self, x: usize, y: usize) -> &mut Float {
        &mut self.buffer[(y,x)]
    }

    pub fn fill(&mut self, value: Float) {
        self.buffer.fill(value);
    }

    /// Resizes the image in place. Contents are kept when the size is unchanged, otherwise they are unspecified.
    pub fn reshape(&mut self, width: usize, height: usize) {
        if self.width() != width || self.height() != height {
            self.buffer.resize_mut(height, width, 0.0);
        }
    }

    pub fn same_shape(&self, other: &Image) -> bool {
        self.buffer.shape() == other.buffer.shape()
    }

    /// `out = a - b`
    pub fn subtract(a: &Image, b: &Image, out: &mut Image) -> Result<()> {
        Image::check_shape(a, b)?;
        Image::check_shape(a, out)?;
        out.buffer.copy_from(&a.buffer);
        out.buffer -= &b.buffer;
        Ok(())
    }

    /// `out = input / scalar`
    pub fn divide_by_scalar(input: &Image, scalar: Float, out: &mut Image) -> Result<()> {
        Image::check_shape(input, out)?;
        out.buffer.copy_from(&input.buffer);
        out.buffer /= scalar;
        Ok(())
    }

    pub fn divide_by_scalar_mut(&mut self, scalar: Float) {
        self.buffer /= scalar;
    }

    pub fn check_shape(expected: &Image, actual: &Image) -> Result<()> {
        match expected.same_shape(actual) {
            true => Ok(()),
            false => Err(ScaleSpaceError::SizeMismatch{expected: expected.dimensions(), actual: actual.dimensions()})
        }
    }

    fn image8_to_matrix(gray_image: &GrayImage) -> DMatrix<Float> {
        let (width, height) = gray_image.dimensions();
        DMatrix::<Float>::from_fn(height as usize, width as usize, |r,c| {
            gray_image.get_pixel(c as u32, r as u32).channels()[0] as Float
        })
    }

    fn matrix_to_image(matrix: &DMatrix<Float>,  encoding: ImageEncoding) -> GrayImage {
        let (rows, cols) = matrix.shape();

        let mut gray_image = DynamicImage::new_luma8(cols as u32, rows as u32).to_luma8();
        if matrix.is_empty() {
            return gray_image;
        }
        let max = matrix.max();
        let min = matrix.min();
        for c in 0..cols {
            for r in 0..rows {
                let val = matrix[(r, c)];
                let pixel_value =  encoding.normalize_to_gray(max,min,val);
                gray_image.put_pixel(c as u32, r as u32, Luma([pixel_value]));
            }
        }
        gray_image
    }
}
