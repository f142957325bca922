//! Gaussian scale-space pyramid and Difference-of-Gaussian response for SIFT style detectors.
//!
//! Only a single octave is materialized at a time. See [`pyramid::scale_space::ScaleSpacePyramid`].

pub mod error;
pub mod image;
pub mod filter;
pub mod pyramid;

pub use self::error::{ScaleSpaceError,Result};

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum GradientDirection {
    HORIZONTAL,
    VERTICAL
}
