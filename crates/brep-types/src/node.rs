use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::placement::Placement;
use crate::style::Style;

/// A geometry-producing node in the upstream scene description.
///
/// Owned by the scene, read-only to the resolver. Conversion into shapes is
/// an external collaborator concern; the resolver only needs the identity
/// (for diagnostics), the style, and whether the node is a collection (for
/// the one-level style fallback).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryNode {
    pub id: Uuid,
    pub style: Option<Style>,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    /// A leaf geometry item.
    Item,
    /// A collection of further geometry nodes.
    Collection { children: Vec<GeometryNode> },
}

impl GeometryNode {
    pub fn item() -> Self {
        Self {
            id: Uuid::new_v4(),
            style: None,
            kind: NodeKind::Item,
        }
    }

    pub fn collection(children: Vec<GeometryNode>) -> Self {
        Self {
            id: Uuid::new_v4(),
            style: None,
            kind: NodeKind::Collection { children },
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

/// Declarative combination instruction produced by the geometry-mapping
/// stage: combine these children with this boolean operator.
///
/// Child order is semantically significant only for Subtraction, where the
/// first child is the shape being subtracted from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooleanResultNode {
    pub id: Uuid,
    pub operation: BooleanOperation,
    pub children: Vec<GeometryNode>,
    /// Placement of the combined result.
    pub placement: Placement,
    pub style: Option<Style>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BooleanOperation {
    Union,
    Intersection,
    Subtraction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    #[test]
    fn instruction_round_trips_through_json() {
        let node = BooleanResultNode {
            id: Uuid::new_v4(),
            operation: BooleanOperation::Subtraction,
            children: vec![
                GeometryNode::item().with_style(Style::named("concrete")),
                GeometryNode::collection(vec![GeometryNode::item()]),
            ],
            placement: Placement::translation(1.0, 2.0, 3.0),
            style: None,
        };

        let json = serde_json::to_string(&node).unwrap();
        let back: BooleanResultNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, node.id);
        assert_eq!(back.operation, node.operation);
        assert_eq!(back.children.len(), 2);
        assert_eq!(back.placement, node.placement);
    }
}
