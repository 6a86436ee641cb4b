//! MockGeometry — deterministic test double implementing the resolver's
//! collaborator traits.
//!
//! Conversion results are scripted per node id; volume, half-space fitting
//! and combination outcomes are configurable; every kernel and fit call is
//! recorded for assertions.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use brep_types::{GeometryNode, Shape};
use uuid::Uuid;

use crate::sink::DiagnosticSink;
use crate::traits::{BooleanKernel, GeometryConverter, ShapeUtils};
use crate::types::{
    BooleanSettings, CombineResult, ConvertedItem, HalfspaceFit, KernelOp, PrimaryOperand,
};

/// Record of one `combine` invocation.
#[derive(Debug, Clone)]
pub struct CombineCall {
    /// The explicit primary, if one was passed.
    pub primary: Option<Shape>,
    pub operands: Vec<Shape>,
    pub op: KernelOp,
    pub settings: BooleanSettings,
}

/// Record of one `fit_halfspace` invocation.
#[derive(Debug, Clone)]
pub struct FitCall {
    pub primary_id: Option<Uuid>,
    pub halfspace_id: Uuid,
    pub tolerance_scale: f64,
}

/// Deterministic test double for the conversion environment.
/// Implements GeometryConverter, ShapeUtils and BooleanKernel.
pub struct MockGeometry {
    conversions: HashMap<Uuid, Vec<ConvertedItem>>,
    /// Volume reported for every shape.
    pub volume_result: f64,
    /// Extent reported by `fit_halfspace`.
    pub fit_extent: f64,
    /// Proxy returned by `fit_halfspace`; a fresh bounded solid when unset.
    pub fit_proxy: Option<Shape>,
    /// Success reported by `combine` when the per-call script is exhausted.
    pub default_success: bool,
    combine_script: VecDeque<bool>,
    pub combine_calls: Vec<CombineCall>,
    fit_calls: Mutex<Vec<FitCall>>,
}

impl MockGeometry {
    pub fn new() -> Self {
        Self {
            conversions: HashMap::new(),
            volume_result: 1.0,
            fit_extent: 1.0,
            fit_proxy: None,
            default_success: true,
            combine_script: VecDeque::new(),
            combine_calls: Vec::new(),
            fit_calls: Mutex::new(Vec::new()),
        }
    }

    /// Script the conversion output for a node id.
    pub fn script_conversion(&mut self, node_id: Uuid, items: Vec<ConvertedItem>) {
        self.conversions.insert(node_id, items);
    }

    /// Script success flags for upcoming `combine` calls, consumed front to
    /// back. Once exhausted, `default_success` applies.
    pub fn script_combine(&mut self, successes: &[bool]) {
        self.combine_script.extend(successes.iter().copied());
    }

    pub fn fit_calls(&self) -> Vec<FitCall> {
        self.fit_calls.lock().unwrap().clone()
    }

    fn bounded_proxy() -> Shape {
        Shape::solid(vec![Shape::shell(vec![Shape::face(vec![Shape::wire()])])])
    }
}

impl Default for MockGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryConverter for MockGeometry {
    fn convert(&mut self, node: &GeometryNode) -> Vec<ConvertedItem> {
        self.conversions.get(&node.id).cloned().unwrap_or_default()
    }
}

impl ShapeUtils for MockGeometry {
    fn flatten(&self, items: Vec<ConvertedItem>, _tolerance: f64) -> Shape {
        let mut placed: Vec<Shape> = items
            .into_iter()
            .map(|item| {
                let mut shape = item.shape;
                shape.compose_location(&item.placement);
                shape
            })
            .collect();
        if placed.len() == 1 {
            placed.pop().unwrap()
        } else {
            Shape::compound(placed)
        }
    }

    fn volume(&self, _shape: &Shape) -> f64 {
        self.volume_result
    }

    fn fit_halfspace(
        &self,
        primary: Option<&Shape>,
        halfspace: &Shape,
        tolerance_scale: f64,
    ) -> HalfspaceFit {
        self.fit_calls.lock().unwrap().push(FitCall {
            primary_id: primary.map(|p| p.id),
            halfspace_id: halfspace.id,
            tolerance_scale,
        });
        HalfspaceFit {
            shape: self.fit_proxy.clone().unwrap_or_else(Self::bounded_proxy),
            extent: self.fit_extent,
        }
    }
}

impl BooleanKernel for MockGeometry {
    fn combine(
        &mut self,
        primary: PrimaryOperand,
        operands: &[Shape],
        op: KernelOp,
        settings: &BooleanSettings,
    ) -> CombineResult {
        let mut success = self.combine_script.pop_front().unwrap_or(self.default_success);

        let (primary_record, shape) = match primary {
            PrimaryOperand::Explicit(a) => (Some(a.clone()), a),
            PrimaryOperand::SelectFromOperands => match operands.first() {
                Some(first) => (None, first.clone()),
                None => {
                    // Nothing to select a primary from.
                    success = false;
                    (None, Shape::compound(Vec::new()))
                }
            },
        };

        self.combine_calls.push(CombineCall {
            primary: primary_record,
            operands: operands.to_vec(),
            op,
            settings: settings.clone(),
        });

        CombineResult { shape, success }
    }
}

/// DiagnosticSink that retains warnings for assertions.
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<(String, Uuid)>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<(String, Uuid)> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.warnings
            .lock()
            .unwrap()
            .iter()
            .any(|(message, _)| message.contains(needle))
    }
}

impl DiagnosticSink for CollectingSink {
    fn warn(&self, message: &str, instance: Uuid) {
        self.warnings
            .lock()
            .unwrap()
            .push((message.to_string(), instance));
    }
}
