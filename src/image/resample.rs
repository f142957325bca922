use crate::image::Image;
use crate::{Result,ScaleSpaceError};

/// Down samples by copying every other pixel starting at index 1 in both directions.
/// `to` has to be exactly `(from.width/2, from.height/2)`.
pub fn downsample(from: &Image, to: &mut Image) -> Result<()> {
    let expected = (from.width()/2, from.height()/2);
    if to.dimensions() != expected {
        return Err(ScaleSpaceError::SizeMismatch{expected, actual: to.dimensions()});
    }
    copy_odd_pixels(from, to);
    Ok(())
}

/// Up samples by replicating every pixel into a 2x2 block.
/// `to` has to be exactly `(2*from.width, 2*from.height)`.
pub fn upsample(from: &Image, to: &mut Image) -> Result<()> {
    let expected = (2*from.width(), 2*from.height());
    if to.dimensions() != expected {
        return Err(ScaleSpaceError::SizeMismatch{expected, actual: to.dimensions()});
    }
    replicate_pixels(from, to);
    Ok(())
}

pub fn downsample_half(from: &Image) -> Image {
    let mut to = Image::zeros(from.width()/2, from.height()/2, from.original_encoding);
    copy_odd_pixels(from, &mut to);
    to
}

pub fn upsample_double(from: &Image) -> Image {
    let mut to = Image::zeros(from.width()*2, from.height()*2, from.original_encoding);
    replicate_pixels(from, &mut to);
    to
}

fn copy_odd_pixels(from: &Image, to: &mut Image) {
    for y in 0..to.height() {
        for x in 0..to.width() {
            to.buffer[(y,x)] = from.buffer[(2*y+1,2*x+1)];
        }
    }
}

fn replicate_pixels(from: &Image, to: &mut Image) {
    for y in 0..from.height() {
        let yy = 2*y;
        for x in 0..from.width() {
            let xx = 2*x;
            let v = from.buffer[(y,x)];
            to.buffer[(yy,xx)] = v;
            to.buffer[(yy+1,xx)] = v;
            to.buffer[(yy,xx+1)] = v;
            to.buffer[(yy+1,xx+1)] = v;
        }
    }
}
