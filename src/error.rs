use thiserror::Error;

/// Errors returned by identification and embedding routines in this crate.
#[derive(Debug, Error)]
pub enum CvmError {
    /// A text resource (cluster list, symmetry file, frame matrix) is malformed.
    #[error("malformed resource: {message}")]
    InputFormat {
        /// Human-readable explanation with the offending token or count.
        message: String,
    },

    /// Input geometry is inconsistent with the symmetry group or with itself.
    #[error("geometric inconsistency: {message}")]
    Geometry {
        /// Human-readable explanation.
        message: String,
    },

    /// A request parameter is out of range or incompatible with the inputs.
    #[error("invalid configuration: {message}")]
    Configuration {
        /// Human-readable explanation.
        message: String,
    },
}

impl CvmError {
    pub fn input_format(message: impl Into<String>) -> Self {
        CvmError::InputFormat {
            message: message.into(),
        }
    }

    pub fn geometry(message: impl Into<String>) -> Self {
        CvmError::Geometry {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        CvmError::Configuration {
            message: message.into(),
        }
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, CvmError>;
