use brep_types::{GeometryNode, Shape};

use crate::types::{
    BooleanSettings, CombineResult, ConvertedItem, HalfspaceFit, KernelOp, PrimaryOperand,
};

/// Converts upstream geometry nodes into placed shapes.
///
/// A child may itself be a collection, so one node can yield zero, one or
/// many items. Conversion must be deterministic and order-preserving; the
/// resolver assumes operand order follows child order.
pub trait GeometryConverter {
    fn convert(&mut self, node: &GeometryNode) -> Vec<ConvertedItem>;
}

/// Read-only shape utilities consumed by the resolver.
pub trait ShapeUtils {
    /// Merge placed shapes into one composite shape, baking in placements.
    fn flatten(&self, items: Vec<ConvertedItem>, tolerance: f64) -> Shape;

    /// Approximate enclosed volume, >= 0. Used only for a diagnostic
    /// threshold check.
    fn volume(&self, shape: &Shape) -> f64;

    /// Clip an unbounded half-space against a neighborhood of `primary`,
    /// producing a finite proxy and the extent of geometry that resulted.
    /// Must be deterministic for fixed inputs.
    fn fit_halfspace(
        &self,
        primary: Option<&Shape>,
        halfspace: &Shape,
        tolerance_scale: f64,
    ) -> HalfspaceFit;
}

/// The numerical boolean kernel.
///
/// Fuzzy-tolerance matching, retries and adaptive tolerance widening are
/// internal to implementations; the call is externally synchronous. With
/// `PrimaryOperand::SelectFromOperands` the kernel picks a primary from the
/// operand list; if that list is empty it reports `success = false` with an
/// empty compound.
pub trait BooleanKernel {
    fn combine(
        &mut self,
        primary: PrimaryOperand,
        operands: &[Shape],
        op: KernelOp,
        settings: &BooleanSettings,
    ) -> CombineResult;
}

/// Combined trait for the resolver, which needs mutable converter/kernel
/// access and shared utility access on the same object.
///
/// `as_utils` avoids the borrow-checker issue of needing `&mut` and `&` on
/// the same value.
pub trait GeometryBundle: GeometryConverter + ShapeUtils + BooleanKernel {
    fn as_utils(&self) -> &dyn ShapeUtils;

    fn as_kernel(&mut self) -> &mut dyn BooleanKernel;
}

// Blanket implementation for any type that implements all three traits
impl<T: GeometryConverter + ShapeUtils + BooleanKernel> GeometryBundle for T {
    fn as_utils(&self) -> &dyn ShapeUtils {
        self
    }

    fn as_kernel(&mut self) -> &mut dyn BooleanKernel {
        self
    }
}
