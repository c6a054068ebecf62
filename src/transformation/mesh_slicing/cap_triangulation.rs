use crate::math::{Point, Real, UnitVector};
use crate::shape::MeshBuffer;

/// Triangulates a planar polygon and appends it, as a cap, to both sides of a cut.
///
/// The polygon is fanned from both of its ends toward its middle, alternating
/// between a step forward from the first corner and a step backward from the last
/// one. This yields better shaped triangles than a fan around a single corner on
/// convex and nearly-convex cross-sections.
///
/// The `corners` must be ordered counter-clockwise around `normal`, the normal of
/// the cutting plane. Every triangle is pushed to `negative` with that orientation
/// (facing `+normal`, toward the positive side) and to `positive` with two corners
/// swapped (facing `-normal`).
///
/// Returns the number of triangles pushed to each side. Nothing is pushed if there
/// are less than three corners.
pub fn triangulate_cap(
    corners: &[Point<Real>],
    normal: &UnitVector<Real>,
    positive: &mut MeshBuffer,
    negative: &mut MeshBuffer,
) -> usize {
    if corners.len() < 3 {
        return 0;
    }

    let up = **normal;
    let down = -up;
    let mut forward = 0;
    let mut backward = corners.len() - 1;
    let mut step_forward = true;
    let mut num_triangles = 0;

    loop {
        let candidate = if step_forward {
            forward + 1
        } else {
            backward - 1
        };

        if candidate == forward || candidate == backward {
            break;
        }

        let (b, f, c) = (corners[backward], corners[forward], corners[candidate]);
        negative.push_triangle([b, f, c], [up; 3]);
        positive.push_triangle([f, b, c], [down; 3]);
        num_triangles += 1;

        if step_forward {
            forward = candidate;
        } else {
            backward = candidate;
        }

        step_forward = !step_forward;
    }

    num_triangles
}
