use serde::{Deserialize, Serialize};

use super::operations::{FrameTransform, SymmetryOperation};

/// An ordered list of symmetry operations for one phase of a structure.
///
/// The frame transform maps this group's coordinate frame into the disordered
/// reference frame; it stays identity for the disordered phase itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceGroup {
    name: String,
    operations: Vec<SymmetryOperation>,
    frame: FrameTransform,
}

impl SpaceGroup {
    pub fn new(name: impl Into<String>, operations: Vec<SymmetryOperation>) -> Self {
        Self {
            name: name.into(),
            operations,
            frame: FrameTransform::identity(),
        }
    }

    /// Attach a frame transform into the disordered reference frame.
    pub fn with_frame(mut self, frame: FrameTransform) -> Self {
        self.frame = frame;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operations(&self) -> &[SymmetryOperation] {
        &self.operations
    }

    pub fn frame(&self) -> &FrameTransform {
        &self.frame
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
