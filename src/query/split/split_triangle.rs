use crate::math::{Point, Real, Vector};
use crate::shape::{MeshBuffer, Plane, PlaneSide, Segment};
use arrayvec::ArrayVec;

#[derive(Copy, Clone, Debug, PartialEq)]
struct ClipVertex {
    point: Point<Real>,
    normal: Vector<Real>,
}

// A triangle clipped by a plane has at most four corners on each side.
type ClippedPiece = ArrayVec<ClipVertex, 4>;

/// Splits one triangle of a mesh by a plane.
///
/// The triangle `triangle` indexes `vertices` and `normals`. Its corners are
/// classified with [`Plane::side`], so corners lying exactly on the plane count
/// as positive:
/// - if all the corners lie on the same side, the triangle is appended unchanged to
///   the buffer of that side and `None` is returned;
/// - otherwise the triangle is clipped. The pieces lying on each side are
///   fan-triangulated (keeping the triangle winding) and appended to `positive` and
///   `negative`, with positions and normals interpolated at the crossing points.
///
/// # Result
/// The segment joining the two crossing points, if the triangle was clipped. Its
/// first point is the crossing of the edge going from the positive side to the
/// negative side (in winding order), its second point the crossing of the edge
/// going back to the positive side. On a consistently wound closed mesh, the
/// segments of adjacent triangles thus chain head-to-tail and run
/// counter-clockwise around the plane normal.
///
/// The segment may have a zero length if the plane only grazes a corner of the
/// triangle.
pub fn split_triangle(
    vertices: &[Point<Real>],
    normals: &[Vector<Real>],
    triangle: [u32; 3],
    plane: &Plane,
    positive: &mut MeshBuffer,
    negative: &mut MeshBuffer,
) -> Option<Segment> {
    let corners = triangle.map(|i| ClipVertex {
        point: vertices[i as usize],
        normal: normals[i as usize],
    });
    let dists = corners.map(|c| plane.signed_distance(&c.point));
    let sides = dists.map(Plane::side_of_distance);

    if sides.iter().all(|side| *side == PlaneSide::Positive) {
        push_piece(&corners, positive);
        return None;
    }

    if sides.iter().all(|side| *side == PlaneSide::Negative) {
        push_piece(&corners, negative);
        return None;
    }

    let mut positive_piece = ClippedPiece::new();
    let mut negative_piece = ClippedPiece::new();
    let mut exit = None;
    let mut entry = None;

    for i in 0..3 {
        let j = (i + 1) % 3;

        match sides[i] {
            PlaneSide::Positive => positive_piece.push(corners[i]),
            PlaneSide::Negative => negative_piece.push(corners[i]),
        }

        if sides[i] != sides[j] {
            // Always interpolate from the positive endpoint so that the two
            // triangles sharing this edge compute exactly the same point.
            let crossing = if sides[i] == PlaneSide::Positive {
                exit = Some(interpolate(&corners[i], &corners[j], dists[i], dists[j]));
                exit
            } else {
                entry = Some(interpolate(&corners[j], &corners[i], dists[j], dists[i]));
                entry
            };

            if let Some(crossing) = crossing {
                positive_piece.push(crossing);
                negative_piece.push(crossing);
            }
        }
    }

    push_piece(&positive_piece, positive);
    push_piece(&negative_piece, negative);

    match (exit, entry) {
        (Some(exit), Some(entry)) => Some(Segment::new(exit.point, entry.point)),
        _ => None,
    }
}

/// The point where the edge `pos neg` crosses the plane.
///
/// `dist_pos >= 0 > dist_neg` so the denominator never vanishes.
fn interpolate(
    pos: &ClipVertex,
    neg: &ClipVertex,
    dist_pos: Real,
    dist_neg: Real,
) -> ClipVertex {
    let t = dist_pos / (dist_pos - dist_neg);
    let point = pos.point + (neg.point - pos.point) * t;
    let normal = pos.normal.lerp(&neg.normal, t);
    let normal = normal.try_normalize(crate::math::DEFAULT_EPSILON).unwrap_or(normal);

    ClipVertex { point, normal }
}

/// Fan-triangulates a convex piece of triangle after removing its repeated corners.
fn push_piece(piece: &[ClipVertex], out: &mut MeshBuffer) {
    let mut corners = ClippedPiece::new();

    for vtx in piece {
        if corners.last().map(|last| last.point) != Some(vtx.point) {
            corners.push(*vtx);
        }
    }

    while corners.len() > 1 && corners.first().map(|c| c.point) == corners.last().map(|c| c.point)
    {
        let _ = corners.pop();
    }

    for k in 1..corners.len().saturating_sub(1) {
        let (a, b, c) = (corners[0], corners[k], corners[k + 1]);
        out.push_triangle([a.point, b.point, c.point], [a.normal, b.normal, c.normal]);
    }
}
