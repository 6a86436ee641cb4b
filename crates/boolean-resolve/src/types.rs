use brep_types::{Placement, Shape, Style};
use kernel_api::BooleanSettings;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only configuration for one resolve invocation.
///
/// Passed explicitly into the entry point, never read from ambient state,
/// so the resolver stays testable and reentrant under concurrent
/// invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Nominal modeling precision. Must be > 0.
    pub precision: f64,
    /// Skip combination entirely: a subtraction emits its flattened first
    /// operand as-is.
    pub disable_boolean_result: bool,
    /// Try the cheaper planar combination path when applicable.
    pub attempt_2d: bool,
    /// Verbose kernel debugging.
    pub debug_booleans: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            precision: 1e-5,
            disable_boolean_result: false,
            attempt_2d: false,
            debug_booleans: false,
        }
    }
}

impl ResolveConfig {
    /// Kernel settings for this invocation.
    pub fn boolean_settings(&self) -> BooleanSettings {
        BooleanSettings {
            attempt_2d: self.attempt_2d,
            debug: self.debug_booleans,
            precision: self.precision,
        }
    }
}

/// Output of one resolved instruction.
///
/// Emitted even when the combination was rejected; the shape is then
/// best-effort and callers decide how to react to `valid = false` on the
/// surrounding outcome.
#[derive(Debug, Clone)]
pub struct ConversionOutputRecord {
    /// Identity of the originating instruction.
    pub id: Uuid,
    pub placement: Placement,
    pub shape: Shape,
    pub style: Option<Style>,
}

/// The record plus the validity signal.
#[derive(Debug, Clone)]
pub struct ResolveOutcome {
    pub record: ConversionOutputRecord,
    pub valid: bool,
}
