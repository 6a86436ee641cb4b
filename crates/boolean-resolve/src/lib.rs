//! Boolean-result resolution: turns a declarative "combine these solids
//! with this operator" instruction into a single boundary-representation
//! shape by dispatching to an external boolean kernel.
//!
//! The pipeline runs strictly downward: operand classification, half-space
//! rescue, combination dispatch, output assembly. Diagnostics are side
//! effects; nothing here aborts. Every invocation produces an output record,
//! with `valid = false` marking a kernel-rejected combination.

pub mod classify;
pub mod combine;
pub mod halfspace;
pub mod types;

pub use classify::{classify_children, Classification, ClassifiedOperands};
pub use halfspace::Rescue;
pub use types::{ConversionOutputRecord, ResolveConfig, ResolveOutcome};

use brep_types::BooleanResultNode;
use kernel_api::{DiagnosticSink, GeometryBundle};

/// Resolve a boolean-result node into an output record plus validity flag.
///
/// Synchronous and single-threaded per invocation; concurrent invocations
/// share only the diagnostic sink. Never fails: anomalies degrade to sink
/// warnings and best-effort geometry.
pub fn resolve_boolean_result(
    node: &BooleanResultNode,
    geom: &mut dyn GeometryBundle,
    config: &ResolveConfig,
    diag: &dyn DiagnosticSink,
) -> ResolveOutcome {
    tracing::debug!(instance = %node.id, operation = ?node.operation, "resolving boolean result");

    let classified = match classify_children(node, geom, config, diag) {
        Classification::ShortCircuit(record) => {
            // Combination disabled by configuration; the flattened first
            // operand is the result.
            return ResolveOutcome {
                record,
                valid: true,
            };
        }
        Classification::Operands(classified) => classified,
    };

    let settings = config.boolean_settings();
    let (shape, valid) = combine::dispatch(
        classified.primary,
        &classified.operands,
        node.operation,
        &settings,
        geom.as_kernel(),
    );

    let style = node.style.clone().or(classified.fallback_style);
    ResolveOutcome {
        record: ConversionOutputRecord {
            id: node.id,
            placement: node.placement,
            shape,
            style,
        },
        valid,
    }
}
