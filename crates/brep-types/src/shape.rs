use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::placement::Placement;

/// A boundary-representation shape: a tagged structural kind plus an
/// embedded location.
///
/// Shapes are value-like: operations that "modify" a shape produce a new
/// shape, except for re-rooting the location. The `id` is a provenance
/// identity assigned at construction and preserved by clone, so collaborator
/// implementations and tests can track a shape across the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    pub id: Uuid,
    pub location: Placement,
    pub kind: ShapeKind,
}

/// Structural kind of a shape. Child sequences are ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeKind {
    Solid { shells: Vec<Shape> },
    Shell { faces: Vec<Shape> },
    /// A face bounded by wire loops. A face with no wires is the boundary
    /// of an unbounded half-space, not a bounded surface patch.
    Face { wires: Vec<Shape> },
    Wire,
    /// A container of other shapes of any kind.
    Compound { children: Vec<Shape> },
}

impl Shape {
    fn new(kind: ShapeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            location: Placement::identity(),
            kind,
        }
    }

    pub fn solid(shells: Vec<Shape>) -> Self {
        Self::new(ShapeKind::Solid { shells })
    }

    pub fn shell(faces: Vec<Shape>) -> Self {
        Self::new(ShapeKind::Shell { faces })
    }

    pub fn face(wires: Vec<Shape>) -> Self {
        Self::new(ShapeKind::Face { wires })
    }

    pub fn wire() -> Self {
        Self::new(ShapeKind::Wire)
    }

    pub fn compound(children: Vec<Shape>) -> Self {
        Self::new(ShapeKind::Compound { children })
    }

    pub fn with_location(mut self, location: Placement) -> Self {
        self.location = location;
        self
    }

    /// Immediate structural children, in order.
    pub fn children(&self) -> &[Shape] {
        match &self.kind {
            ShapeKind::Solid { shells } => shells,
            ShapeKind::Shell { faces } => faces,
            ShapeKind::Face { wires } => wires,
            ShapeKind::Wire => &[],
            ShapeKind::Compound { children } => children,
        }
    }

    /// The single immediate child, if exactly one exists.
    pub fn single_child(&self) -> Option<&Shape> {
        match self.children() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self.kind, ShapeKind::Solid { .. })
    }

    pub fn is_compound(&self) -> bool {
        matches!(self.kind, ShapeKind::Compound { .. })
    }

    /// Compose an operand placement onto this shape's embedded location.
    pub fn compose_location(&mut self, placement: &Placement) {
        self.location = self.location.compose(placement);
    }

    /// Copy of this shape re-rooted under a parent location, as when a
    /// compound member is extracted for independent combination.
    pub fn located_under(&self, parent: &Placement) -> Shape {
        let mut part = self.clone();
        part.location = parent.compose(&part.location);
        part
    }

    /// An unbounded half-space: a solid holding exactly one shell, which
    /// holds exactly one face, which has no boundary wires.
    ///
    /// Any structural deviation means "not a half-space".
    pub fn is_unbounded_halfspace(&self) -> bool {
        if !self.is_solid() {
            return false;
        }
        let Some(shell) = self.single_child() else {
            return false;
        };
        if !matches!(shell.kind, ShapeKind::Shell { .. }) {
            return false;
        }
        let Some(face) = shell.single_child() else {
            return false;
        };
        matches!(&face.kind, ShapeKind::Face { wires } if wires.is_empty())
    }

    /// A non-empty compound whose members are all solids, possibly through
    /// further nested compounds. Distinct from a single solid and from a
    /// compound mixing other shape kinds.
    pub fn is_nested_compound_of_solids(&self) -> bool {
        match &self.kind {
            ShapeKind::Compound { children } => {
                !children.is_empty()
                    && children
                        .iter()
                        .all(|c| c.is_solid() || c.is_nested_compound_of_solids())
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded_solid() -> Shape {
        Shape::solid(vec![Shape::shell(vec![Shape::face(vec![Shape::wire()])])])
    }

    fn halfspace() -> Shape {
        Shape::solid(vec![Shape::shell(vec![Shape::face(vec![])])])
    }

    #[test]
    fn detects_unbounded_halfspace() {
        assert!(halfspace().is_unbounded_halfspace());
    }

    #[test]
    fn bounded_solid_is_not_a_halfspace() {
        assert!(!bounded_solid().is_unbounded_halfspace());
    }

    #[test]
    fn two_faces_in_shell_is_not_a_halfspace() {
        let s = Shape::solid(vec![Shape::shell(vec![
            Shape::face(vec![]),
            Shape::face(vec![]),
        ])]);
        assert!(!s.is_unbounded_halfspace());
    }

    #[test]
    fn empty_solid_is_not_a_halfspace() {
        assert!(!Shape::solid(vec![]).is_unbounded_halfspace());
    }

    #[test]
    fn compound_is_not_a_halfspace() {
        let c = Shape::compound(vec![halfspace()]);
        assert!(!c.is_unbounded_halfspace());
    }

    #[test]
    fn compound_of_solids_is_nested() {
        let c = Shape::compound(vec![bounded_solid(), bounded_solid()]);
        assert!(c.is_nested_compound_of_solids());
    }

    #[test]
    fn deeply_nested_compound_of_solids() {
        let inner = Shape::compound(vec![bounded_solid()]);
        let c = Shape::compound(vec![bounded_solid(), inner]);
        assert!(c.is_nested_compound_of_solids());
    }

    #[test]
    fn empty_compound_is_not_nested_solids() {
        assert!(!Shape::compound(vec![]).is_nested_compound_of_solids());
    }

    #[test]
    fn mixed_compound_is_not_nested_solids() {
        let c = Shape::compound(vec![bounded_solid(), Shape::face(vec![])]);
        assert!(!c.is_nested_compound_of_solids());
    }

    #[test]
    fn single_solid_is_not_nested_compound() {
        assert!(!bounded_solid().is_nested_compound_of_solids());
    }

    #[test]
    fn clone_preserves_identity() {
        let s = bounded_solid();
        assert_eq!(s.id, s.clone().id);
    }

    #[test]
    fn located_under_composes_parent_location() {
        let member = bounded_solid().with_location(Placement::translation(1.0, 0.0, 0.0));
        let part = member.located_under(&Placement::translation(0.0, 2.0, 0.0));
        assert_eq!(part.location.origin(), [1.0, 2.0, 0.0]);
        assert_eq!(part.id, member.id);
    }
}
