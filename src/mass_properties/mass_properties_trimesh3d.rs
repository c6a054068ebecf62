use crate::bounding_volume::Aabb;
use crate::math::{Matrix, Point, Real, Vector};

/// The signed volume of the tetrahedron `p1 p2 p3 p4`.
///
/// Positive if `p1` sees the triangle `p2 p3 p4` clockwise, i.e., if
/// `p2 p3 p4` is counter-clockwise when seen from the side opposite to `p1`.
#[inline]
pub fn tetrahedron_signed_volume(
    p1: &Point<Real>,
    p2: &Point<Real>,
    p3: &Point<Real>,
    p4: &Point<Real>,
) -> Real {
    let p1p2 = p2 - p1;
    let p1p3 = p3 - p1;
    let p1p4 = p4 - p1;

    let mat = Matrix::new(
        p1p2[0], p1p3[0], p1p4[0], p1p2[1], p1p3[1], p1p4[1], p1p2[2], p1p3[2], p1p4[2],
    );

    mat.determinant() / 6.0
}

/// Computes the signed volume enclosed by a closed triangle mesh.
///
/// Each triangle contributes the signed volume of the tetrahedron it forms with
/// a common reference point. The result does not depend on that point as long
/// as the mesh is closed; picking the center of the mesh bounding box keeps the
/// tetrahedra small and the sum accurate.
pub fn trimesh_signed_volume(vertices: &[Point<Real>], indices: &[[u32; 3]]) -> Real {
    let aabb = Aabb::from_points_ref(indices.iter().flatten().map(|i| &vertices[*i as usize]));
    if !aabb.is_valid() {
        return 0.0;
    }

    let reference = aabb.center();
    indices
        .iter()
        .map(|t| {
            tetrahedron_signed_volume(
                &reference,
                &vertices[t[0] as usize],
                &vertices[t[1] as usize],
                &vertices[t[2] as usize],
            )
        })
        .sum()
}

/// The sum of the area-weighted normals of every triangle of a mesh.
///
/// This is zero (up to rounding errors) for any closed surface, including
/// surfaces with T-junctions, which makes it a convenient closedness check.
pub fn trimesh_signed_area_vector(vertices: &[Point<Real>], indices: &[[u32; 3]]) -> Vector<Real> {
    indices
        .iter()
        .map(|t| {
            let a = vertices[t[0] as usize];
            let b = vertices[t[1] as usize];
            let c = vertices[t[2] as usize];
            (b - a).cross(&(c - a)) * 0.5
        })
        .sum()
}
