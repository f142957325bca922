use std::{fs,path::Path};
use serde::{Serialize, Deserialize};

use crate::filter::BorderMode;
use crate::{Float,Result,ScaleSpaceError};

pub const MIN_NUM_SCALES: usize = 3;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ScaleSpaceRuntimeParameters {
    /// Blurred images per octave
    pub num_scales: usize,
    /// Blur added with every scale step
    pub base_sigma: Float,
    /// Up sample the input by two before building the first octave
    pub double_input_image: bool,
    /// Border handling of the default gaussian blur
    pub border: BorderMode
}

impl Default for ScaleSpaceRuntimeParameters {
    fn default() -> Self {
        ScaleSpaceRuntimeParameters {
            num_scales: 5,
            base_sigma: 1.6,
            double_input_image: false,
            border: BorderMode::Normalized
        }
    }
}

impl ScaleSpaceRuntimeParameters {

    pub fn new(num_scales: usize, base_sigma: Float, double_input_image: bool) -> Result<ScaleSpaceRuntimeParameters> {
        let parameters = ScaleSpaceRuntimeParameters {num_scales, base_sigma, double_input_image, ..Default::default()};
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_scales < MIN_NUM_SCALES {
            return Err(ScaleSpaceError::Configuration(format!("a minimum of {} scales are required, got: {}", MIN_NUM_SCALES, self.num_scales)));
        }
        if !(self.base_sigma.is_finite() && self.base_sigma > 0.0) {
            return Err(ScaleSpaceError::Configuration(format!("base sigma must be > 0 and finite, got: {}", self.base_sigma)));
        }
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<ScaleSpaceRuntimeParameters> {
        let parameters: ScaleSpaceRuntimeParameters = serde_yaml::from_str(yaml)?;
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<ScaleSpaceRuntimeParameters> {
        let yaml = fs::read_to_string(path)?;
        ScaleSpaceRuntimeParameters::from_yaml_str(&yaml)
    }
}
