use brep_types::{BooleanOperation, Shape};
use kernel_api::{BooleanKernel, BooleanSettings, KernelOp, PrimaryOperand};

/// Map the instruction vocabulary onto the kernel's operator vocabulary.
/// Total and exhaustive; there is no fallback operator.
fn kernel_op(op: BooleanOperation) -> KernelOp {
    match op {
        BooleanOperation::Union => KernelOp::Fuse,
        BooleanOperation::Intersection => KernelOp::Common,
        BooleanOperation::Subtraction => KernelOp::Cut,
    }
}

/// Invoke the kernel, decomposing a multi-solid compound primary into
/// independently combined members so disjoint bodies are not accidentally
/// fused by the combination itself.
///
/// Returns the result shape and whether every kernel call succeeded. A
/// failed compound member is absent from the emitted compound; the rest is
/// still produced (best-effort emission).
pub fn dispatch(
    primary: Option<Shape>,
    operands: &[Shape],
    op: BooleanOperation,
    settings: &BooleanSettings,
    kernel: &mut dyn BooleanKernel,
) -> (Shape, bool) {
    let op = kernel_op(op);

    match primary {
        Some(a) if a.is_nested_compound_of_solids() => {
            tracing::debug!(members = a.children().len(), "decomposing compound primary");
            let mut parts = Vec::new();
            let mut valid = true;
            for member in a.children() {
                // Each member keeps the compound's own location.
                let member = member.located_under(&a.location);
                let result = kernel.combine(PrimaryOperand::Explicit(member), operands, op, settings);
                if result.success {
                    parts.push(result.shape);
                } else {
                    valid = false;
                }
            }
            (Shape::compound(parts), valid)
        }
        Some(a) => {
            let result = kernel.combine(PrimaryOperand::Explicit(a), operands, op, settings);
            (result.shape, result.success)
        }
        None => {
            let result =
                kernel.combine(PrimaryOperand::SelectFromOperands, operands, op, settings);
            (result.shape, result.success)
        }
    }
}
