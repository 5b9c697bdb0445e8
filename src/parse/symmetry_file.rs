use nalgebra::{Matrix3, Vector3};

use crate::error::{CvmError, Result};
use crate::symmetry::{FrameTransform, SymmetryOperation};

/// Parse a symmetry-operation resource.
///
/// The resource is a flat list of whitespace-separated floats, twelve per
/// operation: the row-major 3x3 rotation part followed by the translation.
/// Line layout carries no meaning.
pub fn parse_symmetry_file(input: &str) -> Result<Vec<SymmetryOperation>> {
    let values = parse_floats(input)?;
    if values.is_empty() {
        return Err(CvmError::input_format("symmetry resource contains no operations"));
    }
    if values.len() % 12 != 0 {
        return Err(CvmError::input_format(format!(
            "symmetry resource holds {} values, not a multiple of 12",
            values.len()
        )));
    }

    Ok(values
        .chunks_exact(12)
        .map(|chunk| SymmetryOperation::new(rotation_from(chunk), translation_from(chunk)))
        .collect())
}

/// Parse a frame-matrix resource: exactly twelve floats, the row-major 3x3
/// matrix followed by the translation between frame origins.
pub fn parse_frame_file(input: &str) -> Result<FrameTransform> {
    let values = parse_floats(input)?;
    if values.len() != 12 {
        return Err(CvmError::input_format(format!(
            "frame resource must hold exactly 12 values, found {}",
            values.len()
        )));
    }
    Ok(FrameTransform::new(rotation_from(&values), translation_from(&values)))
}

fn rotation_from(chunk: &[f64]) -> Matrix3<f64> {
    Matrix3::new(
        chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7], chunk[8],
    )
}

fn translation_from(chunk: &[f64]) -> Vector3<f64> {
    Vector3::new(chunk[9], chunk[10], chunk[11])
}

fn parse_floats(input: &str) -> Result<Vec<f64>> {
    input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| CvmError::input_format(format!("invalid number '{token}'")))
        })
        .collect()
}
