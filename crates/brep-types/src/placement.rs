use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

/// Affine placement transform in homogeneous 4x4 form.
///
/// Composable by matrix multiplication. A shape enters combination with its
/// own embedded location composed with the operand's placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement(pub Matrix4<f64>);

impl Placement {
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self(Matrix4::new_translation(&Vector3::new(x, y, z)))
    }

    /// Compose: apply `self` first, then `other`.
    pub fn compose(&self, other: &Placement) -> Placement {
        Placement(self.0 * other.0)
    }

    pub fn is_identity(&self) -> bool {
        self.0 == Matrix4::identity()
    }

    /// Translation component of the transform.
    pub fn origin(&self) -> [f64; 3] {
        [self.0[(0, 3)], self.0[(1, 3)], self.0[(2, 3)]]
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::identity()
    }
}
