use brep_types::{Placement, Shape, Style};
use serde::{Deserialize, Serialize};

/// A shape produced by converting one geometry node, together with the
/// placement and style it carried in the scene description.
#[derive(Debug, Clone)]
pub struct ConvertedItem {
    pub shape: Shape,
    pub placement: Placement,
    pub style: Option<Style>,
}

impl ConvertedItem {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            placement: Placement::identity(),
            style: None,
        }
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

/// The primary operand handed to the boolean kernel.
///
/// `SelectFromOperands` makes the kernel-chooses-a-primary contract explicit
/// instead of relying on an empty-shape sentinel.
#[derive(Debug, Clone)]
pub enum PrimaryOperand {
    Explicit(Shape),
    SelectFromOperands,
}

/// Kernel operator vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelOp {
    Fuse,
    Common,
    Cut,
}

/// Per-invocation kernel tuning, built fresh from the resolve configuration.
/// Never shared or mutated concurrently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanSettings {
    /// Try a cheaper planar combination path when applicable.
    pub attempt_2d: bool,
    pub debug: bool,
    pub precision: f64,
}

/// Result of a kernel combination: a best-effort shape plus a success flag.
///
/// `success = false` signals a geometrically inconsistent or kernel-rejected
/// combination, not a fatal error; the shape may be the unmodified primary,
/// an empty shape, or a partial result.
#[derive(Debug, Clone)]
pub struct CombineResult {
    pub shape: Shape,
    pub success: bool,
}

/// Result of clipping an unbounded half-space against a neighborhood of the
/// primary operand.
#[derive(Debug, Clone)]
pub struct HalfspaceFit {
    /// Finite proxy for the half-space.
    pub shape: Shape,
    /// Scalar measure of how much finite geometry the clip produced.
    pub extent: f64,
}

/// Errors from collaborator implementations.
///
/// The resolver itself never surfaces these; anomalies degrade to sink
/// warnings plus a validity flag. Kernel implementations use them internally.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("half-space fitting failed: {reason}")]
    FitFailed { reason: String },

    #[error("operation not supported: {operation}")]
    NotSupported { operation: String },
}
