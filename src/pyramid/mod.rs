pub mod scale_space;

pub use self::scale_space::{ScaleSpacePyramid,PyramidState,MIN_OCTAVE_DIMENSION};
pub use self::scale_space::scale_space_octave::ScaleSpaceOctave;
pub use self::scale_space::scale_space_runtime_parameters::ScaleSpaceRuntimeParameters;
pub use self::scale_space::parameter_control::{ParameterListener,ScaleSpaceParameterControl};
