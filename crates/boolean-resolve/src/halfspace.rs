use brep_types::Shape;
use kernel_api::ShapeUtils;

/// Relative threshold: a fitted extent below `tolerance * MIN_EXTENT_FACTOR`
/// means the half-space changes nothing within modeling precision.
const MIN_EXTENT_FACTOR: f64 = 20.0;

/// Absolute floor on the fitted extent. Half-space fitting can run at a
/// different working tolerance than the nominal one, so a relative-only
/// check is insufficient.
const MIN_EXTENT_ABSOLUTE: f64 = 0.00002;

/// Scale from the nominal tolerance to the fitting neighborhood size.
const FIT_TOLERANCE_SCALE: f64 = 1e3;

/// Outcome of vetting one combination operand.
#[derive(Debug, Clone)]
pub enum Rescue {
    /// Forward this shape to the kernel: unchanged, or a finite proxy
    /// replacing an unbounded half-space.
    Use(Shape),
    /// Drop the operand: fitting produced no meaningful volume.
    Skip,
}

/// Replace an unbounded half-space operand with a finite proxy fit against
/// the primary operand, or skip it when the fit is numerically meaningless.
///
/// Shapes that are not unbounded half-spaces pass through unchanged. A
/// half-space must never reach the kernel in its unbounded form: the kernel
/// expects bounded solids, and an infinite operand either fails outright or
/// silently no-ops.
pub fn rescue(
    primary: Option<&Shape>,
    candidate: Shape,
    tolerance: f64,
    utils: &dyn ShapeUtils,
) -> Rescue {
    if !candidate.is_unbounded_halfspace() {
        return Rescue::Use(candidate);
    }

    let fit = utils.fit_halfspace(primary, &candidate, tolerance * FIT_TOLERANCE_SCALE);
    if fit.extent < tolerance * MIN_EXTENT_FACTOR || fit.extent < MIN_EXTENT_ABSOLUTE {
        Rescue::Skip
    } else {
        Rescue::Use(fit.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel_api::MockGeometry;

    fn halfspace() -> Shape {
        Shape::solid(vec![Shape::shell(vec![Shape::face(vec![])])])
    }

    fn bounded_solid() -> Shape {
        Shape::solid(vec![Shape::shell(vec![Shape::face(vec![Shape::wire()])])])
    }

    #[test]
    fn bounded_shape_passes_through_without_fitting() {
        let mock = MockGeometry::new();
        let solid = bounded_solid();
        let id = solid.id;
        match rescue(None, solid, 1e-5, &mock) {
            Rescue::Use(shape) => assert_eq!(shape.id, id),
            Rescue::Skip => panic!("bounded solid must not be skipped"),
        }
        assert!(mock.fit_calls().is_empty());
    }

    #[test]
    fn small_relative_extent_is_skipped() {
        let mut mock = MockGeometry::new();
        // 20 * 1e-5 = 2e-4; an extent just below is a no-op subtraction.
        mock.fit_extent = 1.9e-4;
        assert!(matches!(rescue(None, halfspace(), 1e-5, &mock), Rescue::Skip));
    }

    #[test]
    fn extent_below_absolute_floor_is_skipped() {
        let mut mock = MockGeometry::new();
        // Passes the relative check at this precision but not the floor.
        mock.fit_extent = 1e-5;
        assert!(matches!(rescue(None, halfspace(), 1e-7, &mock), Rescue::Skip));
    }

    #[test]
    fn large_extent_forwards_the_proxy() {
        let mut mock = MockGeometry::new();
        let proxy = bounded_solid();
        let proxy_id = proxy.id;
        mock.fit_proxy = Some(proxy);
        mock.fit_extent = 0.5;
        match rescue(None, halfspace(), 1e-5, &mock) {
            Rescue::Use(shape) => assert_eq!(shape.id, proxy_id),
            Rescue::Skip => panic!("meaningful fit must be forwarded"),
        }
    }

    #[test]
    fn fit_neighborhood_scales_with_tolerance() {
        let mock = MockGeometry::new();
        rescue(None, halfspace(), 1e-5, &mock);
        let calls = mock.fit_calls();
        assert_eq!(calls.len(), 1);
        assert!((calls[0].tolerance_scale - 1e-2).abs() < 1e-12);
    }
}
