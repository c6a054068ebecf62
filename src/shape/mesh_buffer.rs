use crate::bounding_volume::Aabb;
use crate::mass_properties::trimesh_signed_volume;
use crate::math::{Point, Real, Vector};
use crate::shape::{TriMesh, TriMeshBuilderError};

/// A growable triangle soup accumulating one side of a slicing operation.
///
/// Vertices are never deduplicated: [`MeshBuffer::push_triangle`] always
/// appends three new vertices. Vertices pushed individually through
/// [`MeshBuffer::push_vertex`] are not referenced by any triangle.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshBuffer {
    vertices: Vec<Point<Real>>,
    normals: Vec<Vector<Real>>,
    indices: Vec<[u32; 3]>,
}

impl MeshBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every vertex, normal and triangle, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.indices.clear();
    }

    /// `true` if this buffer contains neither vertices nor triangles.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Appends one vertex with its normal and returns its index.
    pub fn push_vertex(&mut self, position: Point<Real>, normal: Vector<Real>) -> u32 {
        self.vertices.push(position);
        self.normals.push(normal);
        self.vertices.len() as u32 - 1
    }

    /// Appends a triangle made of three new vertices.
    pub fn push_triangle(&mut self, points: [Point<Real>; 3], normals: [Vector<Real>; 3]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&points);
        self.normals.extend_from_slice(&normals);
        self.indices.push([base, base + 1, base + 2]);
    }

    /// The vertex buffer.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The normal buffer, index-aligned with [`Self::vertices`].
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The index buffer.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The three corners of the `i`-th triangle.
    pub fn triangle(&self, i: u32) -> [Point<Real>; 3] {
        self.indices[i as usize].map(|id| self.vertices[id as usize])
    }

    /// Iterates through the corners of every triangle.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [Point<Real>; 3]> + '_ {
        self.indices
            .iter()
            .map(|idx| idx.map(|id| self.vertices[id as usize]))
    }

    /// The bounding box of every vertex of this buffer.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points_ref(&self.vertices)
    }

    /// The signed volume enclosed by the triangles of this buffer.
    pub fn signed_volume(&self) -> Real {
        trimesh_signed_volume(&self.vertices, &self.indices)
    }

    /// Converts this buffer into a [`TriMesh`] that can be sliced again.
    pub fn to_trimesh(&self) -> Result<TriMesh, TriMeshBuilderError> {
        TriMesh::new(
            self.vertices.clone(),
            self.normals.clone(),
            self.indices.clone(),
        )
    }
}
