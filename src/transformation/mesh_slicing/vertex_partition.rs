use crate::math::{Point, Real, Vector};
use crate::shape::{MeshBuffer, Plane, PlaneSide};

/// The number of vertices routed to each side of a plane by [`partition_vertices`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PartitionCounts {
    /// Vertices with a signed distance greater or equal to zero.
    pub positive: usize,
    /// Vertices with a signed distance strictly greater than zero.
    ///
    /// These are the vertices counted in `positive` that do not lie on the plane.
    pub above: usize,
    /// Vertices with a negative signed distance.
    pub negative: usize,
}

/// Copies every vertex, with its normal, into the buffer of the side of `plane` it lies on.
///
/// Vertices exactly on the plane go to the positive side.
pub fn partition_vertices(
    vertices: &[Point<Real>],
    normals: &[Vector<Real>],
    plane: &Plane,
    positive: &mut MeshBuffer,
    negative: &mut MeshBuffer,
) -> PartitionCounts {
    let mut counts = PartitionCounts::default();

    for (pt, normal) in vertices.iter().zip(normals.iter()) {
        let dist = plane.signed_distance(pt);

        match Plane::side_of_distance(dist) {
            PlaneSide::Positive => {
                let _ = positive.push_vertex(*pt, *normal);
                counts.positive += 1;

                if dist > 0.0 {
                    counts.above += 1;
                }
            }
            PlaneSide::Negative => {
                let _ = negative.push_vertex(*pt, *normal);
                counts.negative += 1;
            }
        }
    }

    counts
}
