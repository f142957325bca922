use std::{fmt,io};

pub type Result<T> = std::result::Result<T, ScaleSpaceError>;

#[derive(Debug)]
pub enum ScaleSpaceError {
    Configuration(String),
    SizeMismatch { expected: (usize,usize), actual: (usize,usize) },
    ImageTooSmall { width: usize, height: usize },
    OutOfBounds { x: usize, y: usize },
    NotProcessed,
    Io(io::Error),
    Yaml(serde_yaml::Error)
}

impl fmt::Display for ScaleSpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleSpaceError::Configuration(msg) => write!(f, "invalid configuration: {}", msg),
            ScaleSpaceError::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected (width,height): {:?}, got {:?}", expected, actual)
            },
            ScaleSpaceError::ImageTooSmall { width, height } => {
                write!(f, "image of (width,height): ({},{}) is too small, at least 3x3 is required", width, height)
            },
            ScaleSpaceError::OutOfBounds { x, y } => write!(f, "pixel ({},{}) is out of bounds", x, y),
            ScaleSpaceError::NotProcessed => write!(f, "no image has been processed yet"),
            ScaleSpaceError::Io(err) => write!(f, "io error: {}", err),
            ScaleSpaceError::Yaml(err) => write!(f, "yaml error: {}", err)
        }
    }
}

impl std::error::Error for ScaleSpaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaleSpaceError::Io(err) => Some(err),
            ScaleSpaceError::Yaml(err) => Some(err),
            _ => None
        }
    }
}

impl From<io::Error> for ScaleSpaceError {
    fn from(err: io::Error) -> Self {
        ScaleSpaceError::Io(err)
    }
}

impl From<serde_yaml::Error> for ScaleSpaceError {
    fn from(err: serde_yaml::Error) -> Self {
        ScaleSpaceError::Yaml(err)
    }
}
