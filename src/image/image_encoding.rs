use serde::{Serialize, Deserialize};
use crate::Float;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
pub enum ImageEncoding {
    U8,
    F64
}

impl ImageEncoding {
    // https://en.wikipedia.org/wiki/Normalization_(image_processing)
    pub fn normalize_to_gray(&self, max: Float, min : Float, value: Float) -> u8 {
        let range = max - min;
        if range <= 0.0 {
            return match self {
                ImageEncoding::U8 => value.max(0.0).min(255.0) as u8,
                _ => 0
            };
        }
        ((value - min) * (255.0 / range)).round() as u8
    }
}
