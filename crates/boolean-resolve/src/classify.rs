use brep_types::{BooleanOperation, BooleanResultNode, GeometryNode, NodeKind, Shape, Style};
use kernel_api::{DiagnosticSink, GeometryBundle};

use crate::halfspace::{self, Rescue};
use crate::types::{ConversionOutputRecord, ResolveConfig};

/// A primary solid at or below this volume is reported as empty.
/// Diagnostic only, does not abort.
const EMPTY_SOLID_VOLUME: f64 = 1e-9;

/// Operands extracted from a node's children, ready for combination.
#[derive(Debug, Clone)]
pub struct ClassifiedOperands {
    /// The shape being subtracted from. Present only for Subtraction with
    /// at least one child.
    pub primary: Option<Shape>,
    /// Combination operands, in child order.
    pub operands: Vec<Shape>,
    /// Style of the first child of a subtraction, used when the node itself
    /// carries none.
    pub fallback_style: Option<Style>,
}

/// Outcome of walking the child list.
pub enum Classification {
    Operands(ClassifiedOperands),
    /// Combination disabled by configuration: the record is already final.
    ShortCircuit(ConversionOutputRecord),
}

/// Walk the children once, in declared order, splitting them into the
/// primary operand (first child of a subtraction only) and the combination
/// operand list.
///
/// Never fails: anomalies degrade to sink warnings and best-effort output.
pub fn classify_children(
    node: &BooleanResultNode,
    geom: &mut dyn GeometryBundle,
    config: &ResolveConfig,
    diag: &dyn DiagnosticSink,
) -> Classification {
    let mut primary: Option<Shape> = None;
    let mut operands: Vec<Shape> = Vec::new();
    let mut fallback_style: Option<Style> = None;

    let mut first = true;
    for child in &node.children {
        let items = geom.convert(child);

        if first && node.operation == BooleanOperation::Subtraction {
            let a = geom.flatten(items, config.precision);
            fallback_style = first_item_style(child);

            if config.disable_boolean_result {
                let style = node.style.clone().or(fallback_style);
                return Classification::ShortCircuit(ConversionOutputRecord {
                    id: node.id,
                    placement: node.placement,
                    shape: a,
                    style,
                });
            }

            if geom.volume(&a) <= EMPTY_SOLID_VOLUME {
                diag.warn("empty solid for first operand of subtraction", child.id);
            }
            primary = Some(a);
        } else {
            for item in items {
                let mut shape = item.shape;
                shape.compose_location(&item.placement);

                match halfspace::rescue(primary.as_ref(), shape, config.precision, geom.as_utils())
                {
                    Rescue::Use(shape) => operands.push(shape),
                    Rescue::Skip => {
                        diag.warn("half-space subtraction yields unchanged volume", child.id);
                    }
                }
            }
        }
        first = false;
    }

    Classification::Operands(ClassifiedOperands {
        primary,
        operands,
        fallback_style,
    })
}

/// Style of a subtraction's first child: the child's own style, or, for a
/// style-less collection, the style of its first member.
///
/// Only one level of unwrapping; deeper nesting is not searched. An empty
/// collection yields no style.
fn first_item_style(child: &GeometryNode) -> Option<Style> {
    if child.style.is_some() {
        return child.style.clone();
    }
    match &child.kind {
        NodeKind::Collection { children } => children.first().and_then(|c| c.style.clone()),
        NodeKind::Item => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_comes_from_child_itself() {
        let child = GeometryNode::item().with_style(Style::named("steel"));
        assert_eq!(first_item_style(&child), Some(Style::named("steel")));
    }

    #[test]
    fn styleless_collection_unwraps_first_member() {
        let member = GeometryNode::item().with_style(Style::named("glass"));
        let child = GeometryNode::collection(vec![member, GeometryNode::item()]);
        assert_eq!(first_item_style(&child), Some(Style::named("glass")));
    }

    #[test]
    fn empty_collection_yields_no_style() {
        let child = GeometryNode::collection(Vec::new());
        assert_eq!(first_item_style(&child), None);
    }

    #[test]
    fn nested_collection_is_not_searched_deeper() {
        let leaf = GeometryNode::item().with_style(Style::named("brick"));
        let inner = GeometryNode::collection(vec![leaf]);
        let child = GeometryNode::collection(vec![inner]);
        assert_eq!(first_item_style(&child), None);
    }
}
